//! Main application structure.

use eframe::egui;
use lagsim_types::DemoSettings;

use crate::state::AppState;
use crate::ui::{render_parameter_form, render_plot, render_toolbar};

/// Main application
pub struct LagSimApp {
    /// Application state
    state: AppState,

    /// Sidebar width (for resizing)
    sidebar_width: f32,
}

impl LagSimApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: DemoSettings) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());
        log::info!("starting with {:?}", settings);

        Self {
            state: AppState::new(settings),
            sidebar_width: 260.0,
        }
    }

    fn handle_keyboard(&mut self, ctx: &egui::Context) {
        // Enter submits the form, Escape drops pending edits
        let (enter, escape) =
            ctx.input(|i| (i.key_pressed(egui::Key::Enter), i.key_pressed(egui::Key::Escape)));

        if enter && self.state.has_pending_changes() {
            if let Err(err) = self.state.submit() {
                log::warn!("rejected parameters: {}", err);
            }
        }
        if escape {
            self.state.revert();
        }
    }
}

impl eframe::App for LagSimApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_keyboard(ctx);

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            render_toolbar(ui, &mut self.state);
        });

        egui::SidePanel::left("parameters")
            .resizable(true)
            .default_width(self.sidebar_width)
            .show(ctx, |ui| {
                render_parameter_form(ui, &mut self.state);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            let reset_view = self.state.reset_view;

            match self.state.plots() {
                Some(plots) => {
                    // Two charts stacked, each with a heading
                    let height = ((ui.available_height() - 80.0) / 2.0).max(120.0);
                    let settings = &self.state.plot_settings;

                    render_plot(ui, "bode_plot", &plots.bode, settings, reset_view, height);
                    ui.separator();
                    render_plot(ui, "impulse_plot", &plots.impulse, settings, reset_view, height);
                }
                None => {
                    ui.centered_and_justified(|ui| {
                        ui.label("Submit valid parameters to see results");
                    });
                }
            }

            self.state.reset_view = false;
        });
    }
}
