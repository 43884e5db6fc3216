use chrono::{DateTime, NaiveDate, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::shared::errors::{AppError, AppResult};

/// `local@domain`, local part and domain drawn from a conservative ASCII set
pub const EMAIL_PATTERN: &str = r"^[A-Za-z0-9+_.-]+@[A-Za-z0-9.-]+$";

/// E.164: optional `+`, leading digit 1-9, 2-15 digits in total
pub const PHONE_PATTERN: &str = r"^\+?[1-9][0-9]{1,14}$";

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(EMAIL_PATTERN).expect("valid email regex"));
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(PHONE_PATTERN).expect("valid phone regex"));

/// Field rules shared by commands (boundary) and value objects (domain)
pub struct Validator;

impl Validator {
    /// Present and non-blank; returns the trimmed value
    pub fn require_text(field: &str, label: &str, value: Option<&str>) -> AppResult<String> {
        match value.map(str::trim) {
            Some(trimmed) if !trimmed.is_empty() => Ok(trimmed.to_string()),
            _ => Err(AppError::missing_field(
                field,
                format!("{} cannot be null or empty", label),
            )),
        }
    }

    pub fn is_valid_email(email: &str) -> bool {
        EMAIL_RE.is_match(email)
    }

    pub fn is_valid_phone(phone: &str) -> bool {
        PHONE_RE.is_match(phone)
    }

    pub fn validate_email(field: &str, email: &str) -> AppResult<()> {
        if !Self::is_valid_email(email) {
            return Err(AppError::format_mismatch(field, "Invalid email format"));
        }
        Ok(())
    }

    pub fn validate_phone(field: &str, phone: &str) -> AppResult<()> {
        if !Self::is_valid_phone(phone) {
            return Err(AppError::format_mismatch(
                field,
                "Invalid phone format. Use E.164 format (e.g., +1234567890)",
            ));
        }
        Ok(())
    }

    /// Length is counted in characters, not bytes
    pub fn validate_max_chars(field: &str, label: &str, value: &str, max: usize) -> AppResult<()> {
        if value.chars().count() > max {
            return Err(AppError::length_exceeded(
                field,
                format!("{} cannot exceed {} characters", label, max),
            ));
        }
        Ok(())
    }

    pub fn validate_not_future_date(
        field: &str,
        label: &str,
        date: NaiveDate,
        today: NaiveDate,
    ) -> AppResult<()> {
        if date > today {
            return Err(AppError::temporal(
                field,
                format!("{} cannot be in the future", label),
            ));
        }
        Ok(())
    }

    pub fn validate_not_future_instant(
        field: &str,
        label: &str,
        instant: DateTime<Utc>,
        now: DateTime<Utc>,
    ) -> AppResult<()> {
        if instant > now {
            return Err(AppError::temporal(
                field,
                format!("{} cannot be in the future", label),
            ));
        }
        Ok(())
    }
}
