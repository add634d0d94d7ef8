/// Bar chart painter — draws a composed [`BarChart`] with the egui painter.
///
/// Handles both layouts: grouped (series side by side within a category)
/// and stacked (each segment's base is the running sum of the segments
/// below it). Axis ticks, gridlines, a legend, and optional per-bar value
/// labels are drawn here; the data shaping happens in
/// [`charts`](crate::charts).
use egui::{Align2, Color32, FontId, Pos2, Rect, Sense, Stroke, Ui, Vec2};

use facesleuth_core::model::count::format_count;

use crate::charts::{BarChart, BarLayout};

/// Vertical space reserved for the title row.
const TITLE_HEIGHT: f32 = 22.0;
/// Vertical space reserved for the legend row.
const LEGEND_HEIGHT: f32 = 18.0;
/// Left margin holding the y-axis tick labels and the rotated axis label.
const MARGIN_LEFT: f32 = 56.0;
const MARGIN_RIGHT: f32 = 12.0;
/// Bottom margin holding the category tick labels.
const MARGIN_BOTTOM: f32 = 20.0;
/// Extra bottom margin when an x-axis label is present.
const X_LABEL_HEIGHT: f32 = 16.0;
/// Fraction of a category column occupied by bars (the rest is gutter).
const COLUMN_FILL: f32 = 0.8;

/// Draw a bar chart into an allocated region of exactly `size`.
pub fn bar_chart(ui: &mut Ui, chart: &BarChart, size: Vec2) {
    let (rect, _response) = ui.allocate_exact_size(size, Sense::hover());
    let painter = ui.painter_at(rect);

    // Theme-adaptive colours so the chart reads in both dark and light mode.
    let color_text = ui.visuals().text_color();
    let color_muted = ui.visuals().weak_text_color();
    let color_grid = ui.visuals().faint_bg_color;
    let color_axis = ui.visuals().widgets.noninteractive.fg_stroke.color;

    // ── Title ─────────────────────────────────────────────────────────
    painter.text(
        Pos2::new(rect.center().x, rect.top() + 4.0),
        Align2::CENTER_TOP,
        &chart.title,
        FontId::proportional(13.0),
        color_text,
    );

    // ── Legend ────────────────────────────────────────────────────────
    draw_legend(&painter, chart, rect, color_muted);

    // ── Plot area ─────────────────────────────────────────────────────
    let bottom_margin = if chart.x_label.is_some() {
        MARGIN_BOTTOM + X_LABEL_HEIGHT
    } else {
        MARGIN_BOTTOM
    };
    let plot = Rect::from_min_max(
        Pos2::new(
            rect.left() + MARGIN_LEFT,
            rect.top() + TITLE_HEIGHT + LEGEND_HEIGHT,
        ),
        Pos2::new(rect.right() - MARGIN_RIGHT, rect.bottom() - bottom_margin),
    );
    if plot.width() < 10.0 || plot.height() < 10.0 || chart.categories.is_empty() {
        return;
    }

    // ── Y axis scale ──────────────────────────────────────────────────
    let max_value = chart.max_value();
    let step = nice_step(max_value);
    let y_top = (max_value.div_ceil(step).max(1)) * step;
    let value_to_y =
        |value: u64| -> f32 { plot.bottom() - (value as f32 / y_top as f32) * plot.height() };

    // Gridlines and tick labels at every step up to the top.
    let mut tick = 0u64;
    while tick <= y_top {
        let y = value_to_y(tick);
        if tick > 0 {
            painter.line_segment(
                [Pos2::new(plot.left(), y), Pos2::new(plot.right(), y)],
                Stroke::new(1.0, color_grid),
            );
        }
        painter.text(
            Pos2::new(plot.left() - 6.0, y),
            Align2::RIGHT_CENTER,
            format_count(tick),
            FontId::proportional(10.0),
            color_muted,
        );
        tick += step;
    }

    // Axis lines.
    painter.line_segment(
        [plot.left_top(), plot.left_bottom()],
        Stroke::new(1.0, color_axis),
    );
    painter.line_segment(
        [plot.left_bottom(), plot.right_bottom()],
        Stroke::new(1.0, color_axis),
    );

    // Rotated y-axis label along the left edge.
    let galley = painter.layout_no_wrap(
        chart.y_label.to_owned(),
        FontId::proportional(10.0),
        color_muted,
    );
    let label_pos = Pos2::new(
        rect.left() + 4.0,
        plot.center().y + galley.size().x / 2.0,
    );
    painter.add(
        egui::epaint::TextShape::new(label_pos, galley, color_muted)
            .with_angle(-std::f32::consts::FRAC_PI_2),
    );

    // ── Bars ──────────────────────────────────────────────────────────
    let n = chart.categories.len();
    let column_w = plot.width() / n as f32;

    match chart.layout {
        BarLayout::Grouped => {
            let bar_w = column_w * COLUMN_FILL / chart.series.len().max(1) as f32;
            for (ci, _) in chart.categories.iter().enumerate() {
                let column_left = plot.left() + ci as f32 * column_w + column_w * (1.0 - COLUMN_FILL) / 2.0;
                for (si, series) in chart.series.iter().enumerate() {
                    let value = series.values[ci];
                    let x0 = column_left + si as f32 * bar_w;
                    let top = value_to_y(value);
                    if value > 0 {
                        painter.rect_filled(
                            Rect::from_min_max(Pos2::new(x0, top), Pos2::new(x0 + bar_w, plot.bottom())),
                            0.0,
                            series.color,
                        );
                    }
                    if chart.value_labels {
                        painter.text(
                            Pos2::new(x0 + bar_w / 2.0, top - 2.0),
                            Align2::CENTER_BOTTOM,
                            format_count(value),
                            FontId::proportional(10.0),
                            color_text,
                        );
                    }
                }
            }
        }
        BarLayout::Stacked => {
            let bar_w = column_w * COLUMN_FILL;
            for (ci, _) in chart.categories.iter().enumerate() {
                let x0 = plot.left() + ci as f32 * column_w + (column_w - bar_w) / 2.0;
                // Bottom-to-top accumulation: each segment starts at the
                // running sum of the segments already drawn.
                let mut running = 0u64;
                for series in &chart.series {
                    let value = series.values[ci];
                    if value > 0 {
                        let bottom = value_to_y(running);
                        let top = value_to_y(running + value);
                        painter.rect_filled(
                            Rect::from_min_max(Pos2::new(x0, top), Pos2::new(x0 + bar_w, bottom)),
                            0.0,
                            series.color,
                        );
                        running += value;
                    }
                }
            }
        }
    }

    // ── Category tick labels (thinned when the range is wide) ─────────
    let stride = label_stride(n, plot.width());
    for (ci, label) in chart.categories.iter().enumerate() {
        if ci % stride != 0 {
            continue;
        }
        let x = plot.left() + (ci as f32 + 0.5) * column_w;
        painter.text(
            Pos2::new(x, plot.bottom() + 4.0),
            Align2::CENTER_TOP,
            label,
            FontId::proportional(10.0),
            color_muted,
        );
    }

    // ── X axis label ──────────────────────────────────────────────────
    if let Some(x_label) = chart.x_label {
        painter.text(
            Pos2::new(plot.center().x, rect.bottom() - 2.0),
            Align2::CENTER_BOTTOM,
            x_label,
            FontId::proportional(10.0),
            color_muted,
        );
    }
}

/// Draw the legend row under the title, centred, keyed by series.
fn draw_legend(painter: &egui::Painter, chart: &BarChart, rect: Rect, text_color: Color32) {
    let font = FontId::proportional(10.0);
    let swatch = 9.0;
    let gap = 4.0;
    let spacing = 14.0;

    let galleys: Vec<_> = chart
        .series
        .iter()
        .map(|s| painter.layout_no_wrap(s.name.to_owned(), font.clone(), text_color))
        .collect();
    let total_w: f32 = galleys
        .iter()
        .map(|g| swatch + gap + g.size().x + spacing)
        .sum::<f32>()
        - spacing;

    let y = rect.top() + TITLE_HEIGHT + 3.0;
    let mut x = rect.center().x - total_w / 2.0;
    for (series, galley) in chart.series.iter().zip(galleys) {
        painter.rect_filled(
            Rect::from_min_size(Pos2::new(x, y), Vec2::splat(swatch)),
            2.0,
            series.color,
        );
        painter.galley(Pos2::new(x + swatch + gap, y - 1.0), galley.clone(), text_color);
        x += swatch + gap + galley.size().x + spacing;
    }
}

/// A "nice" y-axis tick step (1/2/5 × power of ten) that covers `max`
/// in at most five gridlines.
fn nice_step(max: u64) -> u64 {
    if max == 0 {
        return 1;
    }
    let raw = (max / 4).max(1);
    let magnitude = 10u64.pow(raw.ilog10());
    for multiple in [1, 2, 5, 10] {
        let step = magnitude * multiple;
        if step * 4 >= max {
            return step;
        }
    }
    magnitude * 10
}

/// Label every `stride`-th category so tick labels never overlap.
fn label_stride(categories: usize, plot_width: f32) -> usize {
    let max_labels = (plot_width / 28.0).max(1.0) as usize;
    categories.div_ceil(max_labels).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Steps are 1/2/5 × power of ten and cover the maximum in ≤ 5 ticks.
    #[test]
    fn nice_step_covers_max_in_few_ticks() {
        for max in [0u64, 1, 2, 3, 4, 7, 10, 23, 99, 100, 999, 23_708, 1_000_000] {
            let step = nice_step(max);
            assert!(step >= 1);
            assert!(step * 5 >= max, "step {step} too small for {max}");
            let mantissa = step / 10u64.pow(step.ilog10());
            assert!(
                matches!(mantissa, 1 | 2 | 5),
                "step {step} is not a 1/2/5 multiple"
            );
        }
    }

    /// Narrow plots thin the labels; wide plots keep them all.
    #[test]
    fn label_stride_thins_wide_ranges() {
        assert_eq!(label_stride(5, 600.0), 1);
        assert!(label_stride(80, 300.0) > 1);
        assert_eq!(label_stride(80, 3000.0), 1);
    }
}
