//! LagSim - discretization demonstrator

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use lagsim_app::LagSimApp;
use lagsim_types::DemoSettings;

/// Settings from the file named by the first argument, or defaults
fn initial_settings() -> DemoSettings {
    let Some(path) = std::env::args().nth(1) else {
        return DemoSettings::default();
    };

    match DemoSettings::load(&path) {
        Ok(settings) => {
            log::info!("loaded settings from {}", path);
            settings.clamped()
        }
        Err(err) => {
            log::warn!("{}: {}; using defaults", path, err);
            DemoSettings::default()
        }
    }
}

fn main() -> eframe::Result<()> {
    env_logger::init();

    let settings = initial_settings();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 900.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Implication of parameters on discretization"),
        ..Default::default()
    };

    eframe::run_native(
        "LagSim",
        native_options,
        Box::new(move |cc| Ok(Box::new(LagSimApp::new(cc, settings)))),
    )
}
