use crate::shared::errors::AppResult;
use crate::shared::utils::Validator;

/// Trimmed, non-empty, at most `MAX_LENGTH` characters
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PetName(String);

impl PetName {
    pub const MAX_LENGTH: usize = 50;

    pub fn new(value: &str) -> AppResult<Self> {
        let value = Validator::require_text("name", "Pet name", Some(value))?;
        Validator::validate_max_chars("name", "Pet name", &value, Self::MAX_LENGTH)?;
        Ok(Self(value))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PetName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
