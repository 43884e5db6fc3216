//! Wall-clock access for temporal invariants.

use chrono::{DateTime, Local, NaiveDate, Utc};

/// Current calendar date in the host's local zone
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Current instant
pub fn now() -> DateTime<Utc> {
    Utc::now()
}
