//! Email, phone and postal address, always held together

use super::address::Address;
use crate::shared::errors::AppResult;
use crate::shared::utils::Validator;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContactInformation {
    email: String,
    phone: String,
    address: Address,
}

impl ContactInformation {
    /// Email is stored trimmed and lower-cased, phone trimmed
    pub fn new(email: &str, phone: &str, address: Address) -> AppResult<Self> {
        let email = Validator::require_text("email", "Email", Some(email))?.to_lowercase();
        let phone = Validator::require_text("phone", "Phone", Some(phone))?;

        Validator::validate_email("email", &email)?;
        Validator::validate_phone("phone", &phone)?;

        Ok(Self {
            email,
            phone,
            address,
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn address(&self) -> &Address {
        &self.address
    }
}
