// Shared Kernel - Domain Driven Design

pub mod config;
pub mod domain; // Identifier pattern, clinic-wide value objects
pub mod errors; // Shared error taxonomy
pub mod utils; // Validation rules, clock, logging

pub use config::AppConfig;
pub use errors::{AppError, AppResult};
