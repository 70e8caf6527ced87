//! UI components.

mod form;
mod plots;
mod toolbar;

pub use form::render_parameter_form;
pub use plots::render_plot;
pub use toolbar::render_toolbar;
