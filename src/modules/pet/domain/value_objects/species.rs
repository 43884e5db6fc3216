use crate::shared::errors::AppResult;
use crate::shared::utils::Validator;

/// Free-text species label ("Dog", "Bearded dragon", ...)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Species(String);

impl Species {
    pub fn new(name: &str) -> AppResult<Self> {
        Ok(Self(Validator::require_text("species", "Species", Some(name))?))
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Species {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
