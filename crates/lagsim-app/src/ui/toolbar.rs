//! Toolbar UI component.

use std::path::Path;

use egui::Ui;
use lagsim_types::PlotSpec;

use crate::plotting::save_csv;
use crate::state::AppState;

/// Render the toolbar
pub fn render_toolbar(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        ui.checkbox(&mut state.plot_settings.show_legend, "Legend");
        ui.checkbox(&mut state.plot_settings.show_grid, "Grid");

        ui.separator();

        if let Some(plots) = state.plots() {
            let mut status = None;
            if ui.button("Export Bode CSV").clicked() {
                status = Some(export(&plots.bode, "bode.csv"));
            }
            if ui.button("Export impulse CSV").clicked() {
                status = Some(export(&plots.impulse, "impulse.csv"));
            }
            if status.is_some() {
                state.status = status;
            }
        }

        if let Some(status) = &state.status {
            ui.separator();
            ui.label(status);
        }
    });
}

fn export(spec: &PlotSpec, file_name: &str) -> String {
    match save_csv(spec, Path::new(file_name)) {
        Ok(()) => {
            log::info!("exported {} to {}", spec.title, file_name);
            format!("Saved {}", file_name)
        }
        Err(err) => {
            log::warn!("{}", err);
            err.to_string()
        }
    }
}
