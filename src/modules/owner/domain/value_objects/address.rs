//! Postal address

use crate::shared::errors::AppResult;
use crate::shared::utils::Validator;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address {
    street: String,
    city: String,
    state: String,
    postal_code: String,
}

impl Address {
    pub fn new(street: &str, city: &str, state: &str, postal_code: &str) -> AppResult<Self> {
        Ok(Self {
            street: Validator::require_text("street", "Street", Some(street))?,
            city: Validator::require_text("city", "City", Some(city))?,
            state: Validator::require_text("state", "State", Some(state))?,
            postal_code: Validator::require_text("postal_code", "Postal code", Some(postal_code))?,
        })
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn postal_code(&self) -> &str {
        &self.postal_code
    }

    /// "street, city, state postalCode"
    pub fn formatted(&self) -> String {
        format!(
            "{}, {}, {} {}",
            self.street, self.city, self.state, self.postal_code
        )
    }
}
