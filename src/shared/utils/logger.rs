use log::{debug, LevelFilter};
use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize the logging system
/// Safe to call more than once; only the first call configures the backend
pub fn init_logger(level: LevelFilter) {
    INIT.call_once(|| {
        let result = env_logger::Builder::from_default_env()
            .filter_level(LevelFilter::Warn)
            .filter_module("petclinic_lib", level)
            .format_timestamp_secs()
            .format_target(false)
            .format_module_path(false)
            .try_init();

        // A logger installed by the host process (or a test harness) takes precedence
        if result.is_ok() {
            log::info!("Logging system initialized at level {}", level);
        }
    });
}

/// Macro for structured logging with context
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        log::info!($($arg)*)
    };
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        log::debug!($($arg)*)
    };
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        log::warn!($($arg)*)
    };
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        log::error!($($arg)*)
    };
}

/// Structured logging helpers for common patterns
pub struct LogContext;

impl LogContext {
    /// Log storage operations
    pub fn repository_operation(operation: &str, store: &str, key: &str) {
        debug!("Store: {} on {} ({})", operation, store, key);
    }
}
