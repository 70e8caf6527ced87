//! CSV export for plot data.

use std::path::Path;

use lagsim_types::PlotSpec;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Exports every series of `spec` in long format: one `series,x,y` row per point.
///
/// The header names the axes after the spec's axis labels.
///
/// # Example
///
/// ```
/// use lagsim_app::plotting::export_csv;
/// use lagsim_types::{PlotSpec, Series, TraceStyle};
///
/// let mut spec = PlotSpec::new("Impulse Response", "Time [s]", "h");
/// spec.push(Series::new("Continuous", vec![[0.0, -1.0]], TraceStyle::default()));
///
/// let csv = export_csv(&spec);
/// assert!(csv.starts_with("series,Time [s],h\n"));
/// assert!(csv.contains("Continuous,0,-1"));
/// ```
pub fn export_csv(spec: &PlotSpec) -> String {
    let mut csv = String::new();

    csv.push_str("series,");
    csv.push_str(&escape_csv_field(&spec.x_label));
    csv.push(',');
    csv.push_str(&escape_csv_field(&spec.y_label));
    csv.push('\n');

    for series in &spec.series {
        let label = escape_csv_field(&series.label);
        for &[x, y] in &series.points {
            csv.push_str(&label);
            csv.push(',');
            csv.push_str(&format_number(x));
            csv.push(',');
            csv.push_str(&format_number(y));
            csv.push('\n');
        }
    }

    csv
}

/// Write [`export_csv`] output for `spec` to `path`
pub fn save_csv(spec: &PlotSpec, path: &Path) -> Result<(), ExportError> {
    std::fs::write(path, export_csv(spec)).map_err(|source| ExportError::Write {
        path: path.display().to_string(),
        source,
    })
}

/// Quote a field containing separators, quotes or newlines
fn escape_csv_field(field: &str) -> String {
    if field.contains([',', '"', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Scientific notation outside [1e-10, 1e10]
fn format_number(num: f64) -> String {
    if num != 0.0 && (num.abs() < 1e-10 || num.abs() > 1e10) {
        format!("{:e}", num)
    } else {
        num.to_string()
    }
}
