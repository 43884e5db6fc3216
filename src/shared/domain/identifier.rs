//! Identifier pattern shared by every aggregate and entity id.
//!
//! An identifier wraps the canonical hyphenated UUID string it was created
//! from. Generation draws a random (v4) UUID; parsing accepts only the
//! 36-character hyphenated form and keeps the input verbatim, so equality is
//! plain string equality.

use uuid::Uuid;

use crate::shared::errors::{AppError, AppResult};

const CANONICAL_LEN: usize = 36;

/// Check `raw` against canonical UUID grammar
pub fn validate_identifier(field: &str, label: &str, raw: &str) -> AppResult<()> {
    if raw.is_empty() {
        return Err(AppError::missing_field(
            field,
            format!("{} cannot be empty", label),
        ));
    }
    // Uuid::try_parse also takes simple, braced and urn forms; only the
    // hyphenated form is 36 characters long
    if raw.len() != CANONICAL_LEN || Uuid::try_parse(raw).is_err() {
        return Err(AppError::format_mismatch(
            field,
            format!("{} must be a valid UUID", label),
        ));
    }
    Ok(())
}

pub fn generate_identifier() -> String {
    Uuid::new_v4().to_string()
}

/// Declares an identifier newtype: `entity_id!(OwnerId, "owner_id", "Owner ID");`
#[macro_export]
macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident, $field:literal, $label:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(String);

        impl $name {
            /// Fresh random identifier
            pub fn generate() -> Self {
                Self($crate::shared::domain::identifier::generate_identifier())
            }

            /// Identifier from an external string; fails unless it is a canonical UUID
            pub fn parse(raw: &str) -> $crate::shared::errors::AppResult<Self> {
                $crate::shared::domain::identifier::validate_identifier($field, $label, raw)?;
                Ok(Self(raw.to_string()))
            }

            pub fn value(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::shared::errors::AppError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}
