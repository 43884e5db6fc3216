use chrono::{DateTime, Utc};
use serde::Serialize;

use super::app_error::AppError;

/// Error body handed to whatever presentation layer sits on top of the services
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub message: String,
    pub code: String,
    pub timestamp: DateTime<Utc>,
    pub details: Vec<String>,
}

impl ErrorResponse {
    pub fn of(message: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: code.into(),
            timestamp: Utc::now(),
            details: Vec::new(),
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.details.push(detail.into());
        self
    }
}

impl From<&AppError> for ErrorResponse {
    fn from(err: &AppError) -> Self {
        match err {
            AppError::InvalidArgument {
                field,
                kind,
                message,
            } => ErrorResponse::of(message.clone(), err.code())
                .with_detail(format!("{}: {}", field, kind)),
            AppError::InvalidTemporalValue { field, message } => {
                ErrorResponse::of(message.clone(), err.code()).with_detail(field.clone())
            }
            AppError::DuplicateRelationship(message)
            | AppError::RelationshipNotFound(message)
            | AppError::NotFound(message) => ErrorResponse::of(message.clone(), err.code()),
            // Infrastructure failures never leak their internals
            AppError::DatabaseError(_)
            | AppError::SerializationError(_)
            | AppError::ConfigurationError(_) => {
                ErrorResponse::of("An unexpected error occurred", err.code())
            }
        }
    }
}
