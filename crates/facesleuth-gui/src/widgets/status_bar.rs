/// Bottom status bar — dataset summary.
use egui::Ui;
use facesleuth_core::model::count::format_count;

use crate::state::AppState;

/// Draw the status bar at the bottom of the window.
pub fn status_bar(ui: &mut Ui, state: &AppState) {
    // Extract theme-adaptive colours once for this frame.
    let color_accent = ui.visuals().hyperlink_color;
    let color_weak = ui.visuals().weak_text_color();
    let color_normal = ui.visuals().text_color();

    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new("\u{2713} Analysis complete")
                .size(12.0)
                .color(color_accent),
        );

        ui.separator();

        ui.label(
            egui::RichText::new(format!(
                "{} pictures",
                format_count(state.tally.record_count)
            ))
            .size(12.0)
            .color(color_normal),
        );

        ui.separator();

        // Truncate long dataset paths for display.
        let display_path = truncate_path(&state.input_path, 60);
        ui.label(
            egui::RichText::new(display_path)
                .size(12.0)
                .color(color_normal),
        )
        .on_hover_text(&state.input_path);

        ui.separator();

        ui.label(
            egui::RichText::new(format!(
                "{:.1} ms",
                state.analysis_duration.as_secs_f64() * 1_000.0
            ))
            .size(12.0)
            .color(color_weak),
        );

        ui.separator();

        ui.label(
            egui::RichText::new(format!(
                "analysed at {}",
                state.analysed_at.format("%H:%M:%S")
            ))
            .size(12.0)
            .color(color_weak),
        );
    });
}

/// Truncate a path string to fit within `max_len` characters,
/// replacing the middle with "..." if needed.
fn truncate_path(path: &str, max_len: usize) -> String {
    if path.len() <= max_len {
        return path.to_string();
    }
    let half = (max_len - 3) / 2;
    format!("{}...{}", &path[..half], &path[path.len() - half..])
}
