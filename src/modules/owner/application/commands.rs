use serde::Deserialize;

use crate::shared::errors::AppResult;
use crate::shared::utils::Validator;

/// Input for registering a new owner.
///
/// Every field is optional on the wire so that an absent field is reported by
/// `validate` instead of failing deserialization.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterOwnerCommand {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
}

impl RegisterOwnerCommand {
    /// Checks fields in declaration order and reports the first failure
    pub fn validate(&self) -> AppResult<()> {
        Validator::require_text("first_name", "First name", self.first_name.as_deref())?;
        Validator::require_text("last_name", "Last name", self.last_name.as_deref())?;

        let email = Validator::require_text("email", "Email", self.email.as_deref())?;
        Validator::validate_email("email", &email)?;

        let phone = Validator::require_text("phone", "Phone", self.phone.as_deref())?;
        Validator::validate_phone("phone", &phone)?;

        Validator::require_text("street", "Street", self.street.as_deref())?;
        Validator::require_text("city", "City", self.city.as_deref())?;
        Validator::require_text("state", "State", self.state.as_deref())?;
        Validator::require_text("postal_code", "Postal code", self.postal_code.as_deref())?;
        Ok(())
    }

    pub fn first_name(&self) -> &str {
        self.first_name.as_deref().unwrap_or_default()
    }

    pub fn last_name(&self) -> &str {
        self.last_name.as_deref().unwrap_or_default()
    }

    pub fn email(&self) -> &str {
        self.email.as_deref().unwrap_or_default()
    }

    pub fn phone(&self) -> &str {
        self.phone.as_deref().unwrap_or_default()
    }

    pub fn street(&self) -> &str {
        self.street.as_deref().unwrap_or_default()
    }

    pub fn city(&self) -> &str {
        self.city.as_deref().unwrap_or_default()
    }

    pub fn state(&self) -> &str {
        self.state.as_deref().unwrap_or_default()
    }

    pub fn postal_code(&self) -> &str {
        self.postal_code.as_deref().unwrap_or_default()
    }
}

/// Input for replacing an existing owner's details; the pet list is kept
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOwnerCommand {
    pub id: Option<String>,
    #[serde(flatten)]
    pub details: RegisterOwnerCommand,
}

impl UpdateOwnerCommand {
    pub fn validate(&self) -> AppResult<()> {
        Validator::require_text("owner_id", "Owner ID", self.id.as_deref())?;
        self.details.validate()
    }

    pub fn id(&self) -> &str {
        self.id.as_deref().unwrap_or_default().trim()
    }
}
