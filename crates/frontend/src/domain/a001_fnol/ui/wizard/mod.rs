//! Claim wizard page
//!
//! - view_model.rs: signal-wrapped `WizardState` and the commands the view calls
//! - view.rs: page component, stepper and navigation buttons

mod view;
mod view_model;

pub use view::FnolWizard;
pub use view_model::WizardViewModel;
