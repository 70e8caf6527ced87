//! Plot specs produced for the renderer

use approx::assert_abs_diff_eq;
use lagsim::Comparison;
use lagsim_app::plotting::{initial_bounds, log_transform};
use lagsim_types::{colors, DemoSettings, LineStyle, MarkerStyle};

const RESOLUTION: usize = 1_000;

fn comparison() -> Comparison {
    Comparison::compute(&DemoSettings::default(), RESOLUTION).unwrap()
}

#[test]
fn test_bode_plot_series() {
    let bode = comparison().bode_plot();

    assert_eq!(bode.title, "Bode Plot");
    assert_eq!(bode.x_label, "Frequency [rad/s]");
    assert!(bode.x_log && bode.y_log);

    let labels: Vec<_> = bode.series.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(labels, ["Continuous", "Discrete 1", "Discrete 2"]);

    let continuous = bode.series("Continuous").unwrap();
    assert_eq!(continuous.len(), RESOLUTION);
    assert_eq!(continuous.style.color, colors::LIME);
    assert_eq!(continuous.style.width, 4.0);

    let discrete = bode.series("Discrete 2").unwrap();
    assert_eq!(discrete.style.color, colors::BLUE);
    assert_eq!(discrete.style.line_style, LineStyle::Dot);
}

#[test]
fn test_bode_discrete_series_skip_dc() {
    let bode = comparison().bode_plot();

    let d1 = bode.series("Discrete 1").unwrap();
    assert_eq!(d1.len(), 99);
    assert!(d1.points.iter().all(|[w, _]| *w > 0.0));
    // First plotted point is the first harmonic, Δω ≈ 2 rad/s
    assert_abs_diff_eq!(d1.points[0][0], 2.0, epsilon = 1e-9);

    // Every point survives the log-log transform
    assert_eq!(log_transform(&d1.points, true, true).len(), 99);
}

#[test]
fn test_impulse_plot_series() {
    let comparison = comparison();
    let impulse = comparison.impulse_plot();

    assert_eq!(impulse.title, "Impulse Response");
    assert!(!impulse.x_log && !impulse.y_log);
    assert_eq!(impulse.x_range, Some((0.0, 1.0)));

    let continuous = impulse.series("Continuous").unwrap();
    assert_eq!(continuous.len(), RESOLUTION);
    assert_abs_diff_eq!(continuous.points[0][1], -1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(
        continuous.points.last().unwrap()[0],
        comparison.t_max(),
        epsilon = 1e-12
    );

    let d1 = impulse.series("Discrete 1").unwrap();
    assert_eq!(d1.len(), 100);
    assert_eq!(d1.style.marker_style, MarkerStyle::Circle);
    assert_eq!(d1.style.width, 1.0);

    let t1 = comparison.discrete(0).unwrap().system.t();
    assert_abs_diff_eq!(d1.points[1][0], t1, epsilon = 1e-15);
}

#[test]
fn test_impulse_initial_view() {
    let impulse = comparison().impulse_plot();
    let (min, max) = initial_bounds(&impulse).unwrap();

    assert_eq!(min[0], 0.0);
    assert_eq!(max[0], 1.0);
    // The continuous trace starts at -1/tau, inside the view
    assert!(min[1] < -1.0);
    assert!(max[1] > min[1]);
}

#[test]
fn test_bode_auto_fits() {
    assert!(initial_bounds(&comparison().bode_plot()).is_none());
}
