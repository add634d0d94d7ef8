/// Colour scheme and visual theme for FaceSleuth.
///
/// Provides both dark and light themes with a professional appearance.
/// All colour constants are defined here so the rest of the UI code
/// references semantically-named values rather than raw hex codes — in
/// particular the chart series palettes, which must stay legible against
/// both backgrounds.

use egui::{Color32, Stroke, Visuals};
use facesleuth_core::model::{Ethnicity, Gender};

/// Semantic colour palette for FaceSleuth.
pub struct FaceSleuthTheme {
    pub background: Color32,
    pub surface: Color32,
    pub surface_hover: Color32,
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub accent: Color32,
    pub separator: Color32,
    pub selection: Color32,
    /// Series colours keyed by [`Gender::index`].
    pub gender_series: [Color32; Gender::COUNT],
    /// Series colours keyed by [`Ethnicity::index`].
    pub ethnicity_series: [Color32; Ethnicity::COUNT],
}

impl FaceSleuthTheme {
    /// Dark theme — the default.
    pub fn dark() -> Self {
        Self {
            background: Color32::from_rgb(0x1e, 0x1e, 0x2e),
            surface: Color32::from_rgb(0x2a, 0x2a, 0x3c),
            surface_hover: Color32::from_rgb(0x35, 0x35, 0x4a),
            text_primary: Color32::from_rgb(0xe4, 0xe4, 0xe8),
            text_secondary: Color32::from_rgb(0xb8, 0xb8, 0xc4),
            accent: Color32::from_rgb(0x89, 0xb4, 0xfa),
            separator: Color32::from_rgb(0x3a, 0x3a, 0x50),
            selection: Color32::from_rgb(0x28, 0x3a, 0x5c),
            gender_series: [
                Color32::from_rgb(0x89, 0xb4, 0xfa), // Male — blue
                Color32::from_rgb(0xf3, 0x8b, 0xa8), // Female — pink
            ],
            ethnicity_series: [
                Color32::from_rgb(0x89, 0xb4, 0xfa), // Caucasoid — blue
                Color32::from_rgb(0xa6, 0xe3, 0xa1), // Negroid — green
                Color32::from_rgb(0xf9, 0xe2, 0xaf), // Mongoloid — amber
                Color32::from_rgb(0xcb, 0xa6, 0xf7), // Australoid — mauve
                Color32::from_rgb(0x94, 0xe2, 0xd5), // Others — teal
            ],
        }
    }

    /// Light theme — optional toggle.
    pub fn light() -> Self {
        Self {
            background: Color32::from_rgb(0xf5, 0xf5, 0xf5),
            surface: Color32::from_rgb(0xff, 0xff, 0xff),
            surface_hover: Color32::from_rgb(0xe8, 0xe8, 0xef),
            text_primary: Color32::from_rgb(0x1e, 0x1e, 0x2e),
            text_secondary: Color32::from_rgb(0x4a, 0x4a, 0x5a),
            accent: Color32::from_rgb(0x3a, 0x6f, 0xd8),
            separator: Color32::from_rgb(0xd0, 0xd0, 0xd8),
            selection: Color32::from_rgba_premultiplied(0x3a, 0x6f, 0xd8, 0x30),
            gender_series: [
                Color32::from_rgb(0x3a, 0x6f, 0xd8), // Male — blue
                Color32::from_rgb(0xd0, 0x50, 0x78), // Female — pink
            ],
            ethnicity_series: [
                Color32::from_rgb(0x3a, 0x6f, 0xd8), // Caucasoid — blue
                Color32::from_rgb(0x30, 0x98, 0x30), // Negroid — green
                Color32::from_rgb(0xc0, 0x98, 0x20), // Mongoloid — amber
                Color32::from_rgb(0x8a, 0x50, 0xc8), // Australoid — mauve
                Color32::from_rgb(0x20, 0x96, 0x88), // Others — teal
            ],
        }
    }

    /// Get the theme for the given mode.
    pub fn for_dark_mode(dark_mode: bool) -> Self {
        if dark_mode {
            Self::dark()
        } else {
            Self::light()
        }
    }

    /// Apply this theme to an egui context.
    pub fn apply(&self, ctx: &egui::Context) {
        let mut style = (*ctx.style()).clone();

        let mut visuals = if self.background.r() < 128 {
            Visuals::dark()
        } else {
            Visuals::light()
        };

        visuals.panel_fill = self.background;
        visuals.window_fill = self.surface;
        visuals.extreme_bg_color = self.background;
        visuals.faint_bg_color = self.surface;
        visuals.selection.bg_fill = self.selection;
        visuals.selection.stroke = Stroke::new(1.0, self.accent);

        visuals.widgets.noninteractive.bg_fill = self.surface;
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, self.text_primary);

        visuals.widgets.inactive.bg_fill = self.surface;
        visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, self.text_secondary);

        visuals.widgets.hovered.bg_fill = self.surface_hover;
        visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, self.accent);

        visuals.widgets.active.bg_fill = self.accent;
        visuals.widgets.active.fg_stroke = Stroke::new(1.0, self.background);

        visuals.window_stroke = Stroke::new(1.0, self.separator);

        style.visuals = visuals;
        style.spacing.item_spacing = egui::vec2(8.0, 4.0);
        style.spacing.button_padding = egui::vec2(8.0, 4.0);

        ctx.set_style(style);
    }

    /// Series colour for one gender.
    pub fn gender_color(&self, gender: Gender) -> Color32 {
        self.gender_series[gender.index()]
    }

    /// Series colour for one ethnicity.
    pub fn ethnicity_color(&self, ethnicity: Ethnicity) -> Color32 {
        self.ethnicity_series[ethnicity.index()]
    }
}
