/// Main `eframe::App` implementation for FaceSleuth.
///
/// This is the top-level UI layout that composes the toolbar, the four
/// distribution charts, and the status bar.
use std::path::Path;
use std::time::Duration;

use facesleuth_core::analysis::DatasetTally;

use crate::charts::{self, BarChart};
use crate::state::AppState;
use crate::theme::FaceSleuthTheme;
use crate::widgets;

/// Pre-built application state.
///
/// Construct this **before** calling `eframe::run_native` so that the
/// expensive work (directory scan, decoding, aggregation) completes before
/// the OS window is created and the first rendered frame already shows the
/// finished charts.  This is the same startup pattern as DiskSleuth.
pub struct FaceSleuthState {
    pub(crate) inner: AppState,
}

impl FaceSleuthState {
    /// Wrap a finished tally for the window. Call this before
    /// `eframe::run_native`.
    pub fn build(input_path: &Path, tally: DatasetTally, analysis_duration: Duration) -> Self {
        Self {
            inner: AppState::new(input_path, tally, analysis_duration),
        }
    }
}

/// Cache key for the composed charts: the inputs that change their shape.
#[derive(Clone, Copy, PartialEq, Eq)]
struct ChartKey {
    age_from: u32,
    age_to: u32,
    dark_mode: bool,
}

/// The FaceSleuth application.
pub struct FaceSleuthApp {
    state: AppState,
    /// Charts composed for the current `ChartKey`. The tally never changes
    /// after startup, so charts only need re-composing when the age range
    /// or theme does — not on every frame.
    chart_cache: Option<(ChartKey, [BarChart; 4])>,
}

impl FaceSleuthApp {
    /// Create a new application instance from pre-built state.
    pub fn with_state(cc: &eframe::CreationContext<'_>, state: FaceSleuthState) -> Self {
        // Apply initial dark visuals.
        cc.egui_ctx.set_visuals(egui::Visuals::dark());

        Self {
            state: state.inner,
            chart_cache: None,
        }
    }

    /// Re-compose the four charts when the age range or theme changed
    /// since the last frame.
    fn refresh_charts(&mut self) {
        let key = ChartKey {
            age_from: self.state.age_from,
            age_to: self.state.age_to,
            dark_mode: self.state.dark_mode,
        };
        if matches!(&self.chart_cache, Some((cached, _)) if *cached == key) {
            return;
        }

        tracing::debug!(
            "Recomposing charts for ages {}..={}",
            self.state.age_from,
            self.state.age_to
        );
        let theme = FaceSleuthTheme::for_dark_mode(self.state.dark_mode);
        let ages = self.state.age_range();
        let tally = &self.state.tally;
        self.chart_cache = Some((
            key,
            [
                charts::ethnicity_by_age(tally, ages.clone(), &theme),
                charts::gender_by_age(tally, ages, &theme),
                charts::genders_by_ethnicity(tally, &theme),
                charts::ethnicity_by_gender(tally, &theme),
            ],
        ));
    }
}

impl eframe::App for FaceSleuthApp {
    /// Override the GPU clear colour to match the active theme background,
    /// preventing a colour mismatch flash between frames.
    fn clear_color(&self, visuals: &egui::Visuals) -> [f32; 4] {
        let [r, g, b, a] = visuals.panel_fill.to_array();
        [
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        ]
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ── Apply theme ───────────────────────────────────────────────────
        // Called every frame so that toggling dark_mode takes effect
        // immediately on the next rendered frame.
        FaceSleuthTheme::for_dark_mode(self.state.dark_mode).apply(ctx);

        // ── Top toolbar ───────────────────────────────────────────────────
        egui::TopBottomPanel::top("toolbar")
            .min_height(36.0)
            .show(ctx, |ui| {
                ui.add_space(4.0);
                widgets::toolbar::toolbar(ui, &mut self.state);
                ui.add_space(4.0);
            });

        // ── About dialog ──────────────────────────────────────────────────
        let mut show_about = self.state.show_about;
        egui::Window::new("About FaceSleuth")
            .open(&mut show_about)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .fixed_size([340.0, 0.0])
            .show(ctx, |ui| {
                let accent = ui.visuals().hyperlink_color;
                let muted = ui.visuals().weak_text_color();
                let normal = ui.visuals().text_color();

                ui.vertical_centered(|ui| {
                    ui.add_space(8.0);
                    ui.label(
                        egui::RichText::new("🔍 FaceSleuth")
                            .size(24.0)
                            .strong()
                            .color(accent),
                    );
                    ui.add_space(4.0);
                    ui.label(
                        egui::RichText::new(format!("v{}", env!("CARGO_PKG_VERSION")))
                            .size(13.0)
                            .color(muted),
                    );
                    ui.add_space(12.0);
                    ui.label(
                        egui::RichText::new(
                            "A face-image dataset analyser.\n\
                             Tallies the age, gender, and ethnicity labels\n\
                             encoded in filenames and charts the distributions.",
                        )
                        .size(12.0)
                        .color(normal),
                    );
                    ui.add_space(12.0);
                    ui.separator();
                    ui.add_space(8.0);
                    ui.hyperlink_to(
                        "github.com/Swatto86/FaceSleuth",
                        "https://github.com/Swatto86/FaceSleuth",
                    );
                    ui.add_space(4.0);
                    ui.label(
                        egui::RichText::new("Built with Rust & egui")
                            .size(11.0)
                            .color(muted),
                    );
                    ui.add_space(8.0);
                });
            });
        self.state.show_about = show_about;

        // ── Bottom status bar ─────────────────────────────────────────────
        egui::TopBottomPanel::bottom("status_bar")
            .min_height(24.0)
            .show(ctx, |ui| {
                ui.add_space(2.0);
                widgets::status_bar::status_bar(ui, &self.state);
                ui.add_space(2.0);
            });

        // ── Central panel: the four charts in a 2×2 grid ──────────────────
        self.refresh_charts();
        let chart_cache = &self.chart_cache;
        egui::CentralPanel::default().show(ctx, |ui| {
            let spacing = ui.spacing().item_spacing;
            let cell = egui::Vec2::new(
                (ui.available_width() - spacing.x) / 2.0,
                (ui.available_height() - spacing.y) / 2.0,
            );

            if let Some((_, [by_age_ethnicity, by_age_gender, by_ethnicity, by_gender])) =
                chart_cache
            {
                ui.horizontal(|ui| {
                    widgets::bar_chart::bar_chart(ui, by_age_ethnicity, cell);
                    widgets::bar_chart::bar_chart(ui, by_age_gender, cell);
                });
                ui.horizontal(|ui| {
                    widgets::bar_chart::bar_chart(ui, by_ethnicity, cell);
                    widgets::bar_chart::bar_chart(ui, by_gender, cell);
                });
            }
        });
    }
}
