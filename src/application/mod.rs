// src/application/mod.rs
//
// Application Layer
//
// ARCHITECTURE:
// - Boundary between the host UI and the services
// - Reads settings and passes them into service calls
// - Translates domain entities into DTOs and errors into ErrorResponse

pub mod commands;
pub mod dto;
pub mod error_handling;
pub mod state;

pub use commands::*;
pub use dto::*;
pub use error_handling::{CommandResult, ErrorResponse, ErrorType};
pub use state::AppState;
