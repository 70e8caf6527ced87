//! Parameter form sidebar.

use egui::{Color32, Slider, Ui};
use lagsim_types::ranges::{OMEGA_FACTOR, SAMPLE_COUNTS, TAU, T_FACTOR};

use crate::state::AppState;

/// Render the parameter form. Edits stay pending until "Submit changes".
pub fn render_parameter_form(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Parameters");
    ui.separator();

    let settings = state.pending_mut();

    ui.add(
        Slider::new(&mut settings.tau, TAU.min..=TAU.max)
            .step_by(TAU.step)
            .text("tau"),
    );

    for (i, factors) in settings.systems.iter_mut().enumerate() {
        ui.separator();
        ui.label(format!("System {}", i + 1));

        ui.add(
            Slider::new(&mut factors.omega_factor, OMEGA_FACTOR.min..=OMEGA_FACTOR.max)
                .text("omega"),
        )
        .on_hover_text("omega=factor/tau");

        ui.add(
            Slider::new(&mut factors.t_factor, T_FACTOR.min..=T_FACTOR.max)
                .step_by(T_FACTOR.step)
                .text("T"),
        )
        .on_hover_text("T=factor*pi/omega");

        ui.horizontal_wrapped(|ui| {
            ui.label("N");
            for n in SAMPLE_COUNTS {
                ui.selectable_value(&mut factors.n, n, n.to_string());
            }
        });
    }

    ui.separator();

    ui.horizontal(|ui| {
        let pending = state.has_pending_changes();
        if ui
            .add_enabled(pending, egui::Button::new("Submit changes"))
            .clicked()
        {
            submit(state);
        }
        if ui.add_enabled(pending, egui::Button::new("Revert")).clicked() {
            state.revert();
        }
    });

    if let Some(err) = state.last_error() {
        ui.colored_label(Color32::RED, err);
    }
}

fn submit(state: &mut AppState) {
    if let Err(err) = state.submit() {
        log::warn!("rejected parameters: {}", err);
    }
}
