use log::LevelFilter;
use std::str::FromStr;

use crate::shared::errors::{AppError, AppResult};

pub const LOG_LEVEL_VAR: &str = "PETCLINIC_LOG_LEVEL";
pub const ENFORCE_UNIQUE_EMAIL_VAR: &str = "PETCLINIC_ENFORCE_UNIQUE_EMAIL";

/// Process-level settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub log_level: LevelFilter,
    /// Reject saving an owner whose email already belongs to another owner
    pub enforce_unique_email: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: LevelFilter::Info,
            enforce_unique_email: true,
        }
    }
}

impl AppConfig {
    /// Load `.env` (if any) and read settings from the environment
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unset keys fall back to defaults
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let log_level = match lookup(LOG_LEVEL_VAR) {
            Some(raw) => LevelFilter::from_str(raw.trim()).map_err(|_| {
                AppError::ConfigurationError(format!(
                    "{} must be one of off, error, warn, info, debug, trace (got '{}')",
                    LOG_LEVEL_VAR, raw
                ))
            })?,
            None => defaults.log_level,
        };

        let enforce_unique_email = match lookup(ENFORCE_UNIQUE_EMAIL_VAR) {
            Some(raw) => parse_bool(ENFORCE_UNIQUE_EMAIL_VAR, &raw)?,
            None => defaults.enforce_unique_email,
        };

        Ok(Self {
            log_level,
            enforce_unique_email,
        })
    }
}

fn parse_bool(key: &str, raw: &str) -> AppResult<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(AppError::ConfigurationError(format!(
            "{} must be a boolean (got '{}')",
            key, raw
        ))),
    }
}
