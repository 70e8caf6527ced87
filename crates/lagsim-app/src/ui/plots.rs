//! Chart rendering for a [`PlotSpec`].

use egui::{Color32, Ui};
use egui_plot::{Legend, Line, MarkerShape, Plot, PlotBounds, PlotPoints, Points};
use lagsim_types::{LineStyle, MarkerStyle, PlotSettings, PlotSpec, Series};

use crate::plotting::{decimate_minmax, initial_bounds, log_tick_label, log_transform};

/// Render one chart. `reset_view` discards any pan/zoom and restores the initial view.
pub fn render_plot(
    ui: &mut Ui,
    id: &str,
    spec: &PlotSpec,
    settings: &PlotSettings,
    reset_view: bool,
    height: f32,
) {
    ui.heading(&spec.title);

    let mut plot = Plot::new(id)
        .height(height)
        .show_axes(true)
        .show_grid(settings.show_grid)
        .x_axis_label(spec.x_label.clone())
        .y_axis_label(spec.y_label.clone());

    if spec.x_log {
        plot = plot.x_axis_formatter(|mark, _range| log_tick_label(mark.value));
    }
    if spec.y_log {
        plot = plot.y_axis_formatter(|mark, _range| log_tick_label(mark.value));
    }
    if settings.show_legend {
        plot = plot.legend(Legend::default());
    }
    if reset_view {
        plot = plot.reset();
    }

    let bounds = if reset_view { initial_bounds(spec) } else { None };

    plot.show(ui, |plot_ui| {
        if let Some((min, max)) = bounds {
            plot_ui.set_plot_bounds(PlotBounds::from_min_max(min, max));
        }

        for series in &spec.series {
            let points = plot_points(series, spec, settings.max_points);
            let color = {
                let [r, g, b] = series.style.color;
                Color32::from_rgb(r, g, b)
            };

            if let Some(line_style) = line_style(series.style.line_style) {
                let line = Line::new(PlotPoints::from(points.clone()))
                    .name(&series.label)
                    .color(color)
                    .width(series.style.width)
                    .style(line_style);
                plot_ui.line(line);
            }

            if let Some(shape) = marker_shape(series.style.marker_style) {
                let markers = Points::new(PlotPoints::from(points))
                    .name(&series.label)
                    .color(color)
                    .radius(2.0)
                    .shape(shape);
                plot_ui.points(markers);
            }
        }
    });
}

/// Series points in plot space, decimated to `max_points`
fn plot_points(series: &Series, spec: &PlotSpec, max_points: usize) -> Vec<[f64; 2]> {
    let points = log_transform(&series.points, spec.x_log, spec.y_log);
    if points.len() > max_points {
        decimate_minmax(&points, max_points / 2)
    } else {
        points
    }
}

fn line_style(style: LineStyle) -> Option<egui_plot::LineStyle> {
    match style {
        LineStyle::Solid => Some(egui_plot::LineStyle::Solid),
        LineStyle::Dash => Some(egui_plot::LineStyle::dashed_loose()),
        LineStyle::Dot => Some(egui_plot::LineStyle::dotted_dense()),
        LineStyle::None => None,
    }
}

fn marker_shape(style: MarkerStyle) -> Option<MarkerShape> {
    match style {
        MarkerStyle::Circle => Some(MarkerShape::Circle),
        MarkerStyle::Square => Some(MarkerShape::Square),
        MarkerStyle::Triangle => Some(MarkerShape::Up),
        MarkerStyle::None => None,
    }
}
