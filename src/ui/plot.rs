use eframe::egui::Ui;
use egui_plot::{Legend, Line, MarkerShape, Plot, PlotPoints, Points};

use crate::data::model::{AxisScale, Figure, Marker};

const MARKER_RADIUS: f32 = 3.5;

// ---------------------------------------------------------------------------
// Figure plot (inside each figure window)
// ---------------------------------------------------------------------------

/// Render one figure. Log axes plot `log10(y)` and label ticks as powers of ten.
pub fn figure_plot(ui: &mut Ui, index: usize, figure: &Figure) {
    let log_y = figure.y_scale == AxisScale::Log;

    let mut plot = Plot::new(("figure_plot", index))
        .x_axis_label(figure.x_label.as_str())
        .y_axis_label(figure.y_label.as_str())
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true);
    if figure.has_legend() {
        plot = plot.legend(Legend::default());
    }
    if log_y {
        plot = plot.y_axis_formatter(|mark, _range| log_tick_label(mark.value));
    }

    plot.show(ui, |plot_ui| {
        for trace in &figure.traces {
            let points = plotted_points(&trace.points, log_y);
            let name = trace.label.clone().unwrap_or_default();

            let line = Line::new(PlotPoints::from(points.clone()))
                .name(&name)
                .color(trace.style.color)
                .width(trace.style.width);
            plot_ui.line(line);

            if let Some(marker) = trace.style.marker {
                let markers = Points::new(PlotPoints::from(points))
                    .name(&name)
                    .shape(marker_shape(marker))
                    .radius(MARKER_RADIUS)
                    .filled(true)
                    .color(trace.style.color);
                plot_ui.points(markers);
            }
        }
    });
}

fn marker_shape(marker: Marker) -> MarkerShape {
    match marker {
        Marker::Circle => MarkerShape::Circle,
        Marker::Square => MarkerShape::Square,
        Marker::Triangle => MarkerShape::Up,
    }
}

/// Points as drawn: on a log axis `y` becomes `log10(y)` and non-positive
/// samples are dropped.
fn plotted_points(points: &[[f64; 2]], log_y: bool) -> Vec<[f64; 2]> {
    if !log_y {
        return points.to_vec();
    }
    points
        .iter()
        .filter(|p| p[1] > 0.0)
        .map(|&[x, y]| [x, y.log10()])
        .collect()
}

/// Tick text for a `log10` grid value: `1e-3` on decades, plain scientific
/// notation in between.
fn log_tick_label(value: f64) -> String {
    let rounded = value.round();
    if (value - rounded).abs() < 1e-9 {
        format!("1e{}", rounded as i64)
    } else {
        format!("{:.1e}", 10f64.powf(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_points_drop_non_positive() {
        let pts = [[0.0, 0.1], [1.0, 0.0], [2.0, 0.001]];
        let out = plotted_points(&pts, true);
        assert_eq!(out.len(), 2);
        assert!((out[0][1] + 1.0).abs() < 1e-12);
        assert!((out[1][1] + 3.0).abs() < 1e-12);
        assert_eq!(plotted_points(&pts, false), pts.to_vec());
    }

    #[test]
    fn decade_ticks() {
        assert_eq!(log_tick_label(-3.0), "1e-3");
        assert_eq!(log_tick_label(0.0), "1e0");
        assert_eq!(log_tick_label(2f64.log10()), "2.0e0");
    }
}
