//! First Notice of Loss: claim wizard, confirmation and status tracking
//!
//! - state.rs / tracking_state.rs: browser-free state machines
//! - status_display.rs: colour and label tables for backend values
//! - api.rs: HTTP clients
//! - ui/: pages and step views

pub mod api;
pub mod labels;
pub mod state;
pub mod status_display;
pub mod tracking_state;
pub mod ui;
