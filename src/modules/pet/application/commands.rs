use chrono::NaiveDate;
use serde::Deserialize;

use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::{clock, Validator};

/// Input for registering a pet to an existing owner
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterPetCommand {
    pub name: Option<String>,
    pub species: Option<String>,
    /// `YYYY-MM-DD`
    pub birth_date: Option<NaiveDate>,
    pub owner_id: Option<String>,
}

impl RegisterPetCommand {
    pub fn validate(&self) -> AppResult<()> {
        self.validate_as_of(clock::today())
    }

    pub fn validate_as_of(&self, today: NaiveDate) -> AppResult<()> {
        Validator::require_text("name", "Pet name", self.name.as_deref())?;
        Validator::require_text("species", "Species", self.species.as_deref())?;
        Validator::validate_not_future_date("birth_date", "Birth date", self.birth_date()?, today)?;
        Validator::require_text("owner_id", "Owner ID", self.owner_id.as_deref())?;
        Ok(())
    }

    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    pub fn species(&self) -> &str {
        self.species.as_deref().unwrap_or_default()
    }

    pub fn birth_date(&self) -> AppResult<NaiveDate> {
        self.birth_date
            .ok_or_else(|| AppError::missing_field("birth_date", "Birth date cannot be null"))
    }

    pub fn owner_id(&self) -> &str {
        self.owner_id.as_deref().unwrap_or_default().trim()
    }
}

/// Input for replacing an existing pet's details
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePetCommand {
    pub id: Option<String>,
    #[serde(flatten)]
    pub details: RegisterPetCommand,
}

impl UpdatePetCommand {
    pub fn validate(&self) -> AppResult<()> {
        self.validate_as_of(clock::today())
    }

    pub fn validate_as_of(&self, today: NaiveDate) -> AppResult<()> {
        Validator::require_text("pet_id", "Pet ID", self.id.as_deref())?;
        self.details.validate_as_of(today)
    }

    pub fn id(&self) -> &str {
        self.id.as_deref().unwrap_or_default().trim()
    }
}
