/// Top action bar -- age-range controls, theme toggle, and branding.
use egui::Ui;
use facesleuth_core::model::{AGE_SEED_MAX, AGE_SEED_MIN};

use crate::state::AppState;

/// Draw the toolbar.
pub fn toolbar(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        // App title -- uses the egui accent/hyperlink colour so it adapts to
        // dark and light mode automatically.
        ui.label(
            egui::RichText::new("🔍 FaceSleuth")
                .size(18.0)
                .strong()
                .color(ui.visuals().hyperlink_color),
        );

        ui.separator();

        // Age domain for the two per-age charts. The tally always covers
        // the full seeded range, so changing these only re-composes charts.
        ui.label("Ages");
        ui.add(
            egui::DragValue::new(&mut state.age_from)
                .range(AGE_SEED_MIN..=AGE_SEED_MAX)
                .speed(1),
        )
        .on_hover_text("First age shown in the per-age charts");
        ui.label("to");
        ui.add(
            egui::DragValue::new(&mut state.age_to)
                .range(AGE_SEED_MIN..=AGE_SEED_MAX)
                .speed(1),
        )
        .on_hover_text("Last age shown in the per-age charts");

        // Right-aligned controls.
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            // About button.
            if ui.button("ℹ").on_hover_text("About FaceSleuth").clicked() {
                state.show_about = true;
            }

            // ── Theme toggle (☀ light / 🌙 dark) ──────────────────
            let theme_label = if state.dark_mode { "☀" } else { "🌙" };
            let theme_tip = if state.dark_mode {
                "Switch to light mode"
            } else {
                "Switch to dark mode"
            };
            if ui.button(theme_label).on_hover_text(theme_tip).clicked() {
                state.dark_mode = !state.dark_mode;
            }
        });
    });
}
