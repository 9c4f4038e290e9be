// src/events/handlers/mod.rs
//
// Event Handlers - INTERNAL MODULE
//
// Handlers use closure-based subscription via EventBus::subscribe.

pub mod ui_projection;

// Only export the registration function
pub use ui_projection::register_ui_projection;
