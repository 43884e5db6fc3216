use serde::Serialize;
use thiserror::Error;

/// Why a field was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InvalidArgumentKind {
    MissingField,
    FormatMismatch,
    LengthExceeded,
}

impl std::fmt::Display for InvalidArgumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidArgumentKind::MissingField => write!(f, "missing field"),
            InvalidArgumentKind::FormatMismatch => write!(f, "format mismatch"),
            InvalidArgumentKind::LengthExceeded => write!(f, "length exceeded"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum AppError {
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        field: String,
        kind: InvalidArgumentKind,
        message: String,
    },

    #[error("Invalid temporal value: {message}")]
    InvalidTemporalValue { field: String, message: String },

    #[error("Duplicate relationship: {0}")]
    DuplicateRelationship(String),

    #[error("Relationship not found: {0}")]
    RelationshipNotFound(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

impl AppError {
    pub fn missing_field(field: &str, message: impl Into<String>) -> Self {
        AppError::InvalidArgument {
            field: field.to_string(),
            kind: InvalidArgumentKind::MissingField,
            message: message.into(),
        }
    }

    pub fn format_mismatch(field: &str, message: impl Into<String>) -> Self {
        AppError::InvalidArgument {
            field: field.to_string(),
            kind: InvalidArgumentKind::FormatMismatch,
            message: message.into(),
        }
    }

    pub fn length_exceeded(field: &str, message: impl Into<String>) -> Self {
        AppError::InvalidArgument {
            field: field.to_string(),
            kind: InvalidArgumentKind::LengthExceeded,
            message: message.into(),
        }
    }

    pub fn temporal(field: &str, message: impl Into<String>) -> Self {
        AppError::InvalidTemporalValue {
            field: field.to_string(),
            message: message.into(),
        }
    }

    /// `"<Entity> with ID <id> not found"`
    pub fn not_found_with_id(entity: &str, id: &str) -> Self {
        AppError::NotFound(format!("{} with ID {} not found", entity, id))
    }

    /// `"<Entity> with <criteria> '<value>' not found"`
    pub fn not_found_with_criteria(entity: &str, criteria: &str, value: &str) -> Self {
        AppError::NotFound(format!("{} with {} '{}' not found", entity, criteria, value))
    }

    /// Stable machine-readable code for the error kind
    pub fn code(&self) -> &'static str {
        match self {
            AppError::InvalidArgument { .. } => "INVALID_INPUT",
            AppError::InvalidTemporalValue { .. } => "INVALID_TEMPORAL_VALUE",
            AppError::DuplicateRelationship(_) => "DUPLICATE_RELATIONSHIP",
            AppError::RelationshipNotFound(_) => "RELATIONSHIP_NOT_FOUND",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::DatabaseError(_)
            | AppError::SerializationError(_)
            | AppError::ConfigurationError(_) => "INTERNAL_ERROR",
        }
    }

    /// Field the error refers to, when it refers to one
    pub fn field(&self) -> Option<&str> {
        match self {
            AppError::InvalidArgument { field, .. } | AppError::InvalidTemporalValue { field, .. } => {
                Some(field)
            }
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, AppError::NotFound(_))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::SerializationError(err.to_string())
    }
}

impl From<uuid::Error> for AppError {
    fn from(err: uuid::Error) -> Self {
        AppError::format_mismatch("id", format!("Invalid UUID: {}", err))
    }
}

impl From<chrono::ParseError> for AppError {
    fn from(err: chrono::ParseError) -> Self {
        AppError::format_mismatch("date", format!("Invalid date/time: {}", err))
    }
}

// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
