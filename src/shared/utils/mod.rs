pub mod clock;
pub mod logger;
pub mod validation;

pub use logger::{init_logger, LogContext};
pub use validation::Validator;
