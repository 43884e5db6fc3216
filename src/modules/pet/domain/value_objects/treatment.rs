use chrono::{DateTime, Utc};

use crate::shared::errors::AppResult;
use crate::shared::utils::{clock, Validator};

/// Something administered to a pet during a visit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Treatment {
    description: String,
    administered_at: DateTime<Utc>,
}

impl Treatment {
    pub fn new(description: &str, administered_at: DateTime<Utc>) -> AppResult<Self> {
        Self::new_as_of(description, administered_at, clock::now())
    }

    /// Same as `new`, with "now" supplied by the caller
    pub fn new_as_of(
        description: &str,
        administered_at: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> AppResult<Self> {
        let description =
            Validator::require_text("description", "Treatment description", Some(description))?;
        Validator::validate_not_future_instant(
            "administered_at",
            "Treatment administration date",
            administered_at,
            now,
        )?;
        Ok(Self {
            description,
            administered_at,
        })
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn administered_at(&self) -> DateTime<Utc> {
        self.administered_at
    }
}
