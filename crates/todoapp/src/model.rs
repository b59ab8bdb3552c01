use crate::error::{Result, TodoError};
use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier carried by todos that were never assigned one.
pub const NO_ID: i64 = -1;

/// Years a due date may fall in. RFC 3339 has no room for anything else.
pub const DUE_YEARS: std::ops::RangeInclusive<i32> = 0..=9999;

/// Human-readable rendering of a due date, as shown in list rows.
pub const DISPLAY_DATE_FORMAT: &str = "%a %b %d %H:%M:%S UTC %Y";

/// A single to-do entry.
///
/// Equality is by value over all fields: two entries with the same id, text
/// and due date are interchangeable, and deleting one removes the first match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: i64,
    pub item: String,
    pub due_date: DateTime<Utc>,
}

impl Todo {
    /// A todo due now, without an id.
    pub fn new(item: impl Into<String>) -> Self {
        Self::with_due(item, Utc::now())
    }

    pub fn with_due(item: impl Into<String>, due_date: DateTime<Utc>) -> Self {
        Self {
            id: NO_ID,
            item: item.into(),
            due_date,
        }
    }

}

impl fmt::Display for Todo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} (Due {})",
            self.id,
            self.item,
            self.due_date.format(DISPLAY_DATE_FORMAT)
        )
    }
}

/// Parse a user-supplied due date: RFC 3339, or a bare `YYYY-MM-DD` meaning midnight UTC.
///
/// The year must lie in [`DUE_YEARS`].
pub fn parse_due(input: &str) -> Result<DateTime<Utc>> {
    let trimmed = input.trim();
    let parsed = match DateTime::parse_from_rfc3339(trimmed) {
        Ok(dt) => Some(dt.with_timezone(&Utc)),
        Err(_) => NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|naive| naive.and_utc()),
    };
    let due = parsed.ok_or_else(|| {
        TodoError::Api(format!(
            "Invalid due date '{}': expected YYYY-MM-DD or RFC 3339",
            input
        ))
    })?;
    if !DUE_YEARS.contains(&due.year()) {
        return Err(TodoError::Api(format!(
            "Invalid due date '{}': year must be between 0 and 9999",
            input
        )));
    }
    Ok(due)
}
