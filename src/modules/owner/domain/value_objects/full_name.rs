//! A person's name

use crate::shared::errors::AppResult;
use crate::shared::utils::Validator;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FullName {
    first_name: String,
    last_name: String,
}

impl FullName {
    pub fn new(first_name: &str, last_name: &str) -> AppResult<Self> {
        let first_name = Validator::require_text("first_name", "First name", Some(first_name))?;
        let last_name = Validator::require_text("last_name", "Last name", Some(last_name))?;
        Ok(Self {
            first_name,
            last_name,
        })
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// "First Last"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl std::fmt::Display for FullName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}
