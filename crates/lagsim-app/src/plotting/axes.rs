//! Axis transforms for the renderer.
//!
//! egui_plot only draws linear axes, so log axes are emulated by plotting
//! `log10` of the data and labelling grid marks as powers of ten.

use lagsim_types::PlotSpec;

/// Map points into plot space, taking `log10` of each log axis.
///
/// Points with a non-positive coordinate on a log axis have no image and are dropped.
pub fn log_transform(points: &[[f64; 2]], x_log: bool, y_log: bool) -> Vec<[f64; 2]> {
    points
        .iter()
        .filter(|[x, y]| (!x_log || *x > 0.0) && (!y_log || *y > 0.0))
        .map(|&[x, y]| {
            [
                if x_log { x.log10() } else { x },
                if y_log { y.log10() } else { y },
            ]
        })
        .collect()
}

/// Label for a grid mark on a log axis: `1e-3`, `1e0`, `1e2`, ...
///
/// Marks between decades get no label.
pub fn log_tick_label(value: f64) -> String {
    let decade = value.round();
    if (value - decade).abs() < 1e-9 {
        format!("1e{}", decade as i32)
    } else {
        String::new()
    }
}

/// Initial view for `spec` in plot space, or None to let the plot auto-fit.
///
/// Only linear specs with an X range hint get one; the Y extent covers the points
/// of every series that fall inside that range, with a 5% margin.
pub fn initial_bounds(spec: &PlotSpec) -> Option<([f64; 2], [f64; 2])> {
    if spec.x_log || spec.y_log {
        return None;
    }
    let (x_min, x_max) = spec.x_range?;

    let (y_min, y_max) = spec
        .series
        .iter()
        .flat_map(|s| s.points.iter())
        .filter(|[x, _]| *x >= x_min && *x <= x_max)
        .map(|&[_, y]| y)
        .filter(|y| y.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), y| {
            (lo.min(y), hi.max(y))
        });

    if y_min > y_max {
        return None;
    }

    let margin = ((y_max - y_min) * 0.05).max(1e-9);
    Some(([x_min, y_min - margin], [x_max, y_max + margin]))
}
