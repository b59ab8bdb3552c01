//! # Record Format
//!
//! One todo per line, three fields separated by `|`:
//!
//! ```text
//! -1|Eat lunch|2024-03-15T12:00:00Z
//! ```
//!
//! - **id**: signed integer. An empty field reads as [`NO_ID`].
//! - **text**: the item text, escaped so it can hold anything:
//!   `\` → `\\`, `|` → `\|`, newline → `\n`, carriage return → `\r`.
//! - **dueDate**: RFC 3339 in UTC with as many fractional digits as needed, so
//!   whatever is written parses back to the identical instant.
//!
//! Due dates outside years 0 to 9999 have no RFC 3339 form and are refused
//! by [`check_storable`] before they reach a file.
//!
//! Older files wrote the date as `Tue Oct 31 18:30:00 PDT 2023`. That shape is
//! still read when the zone is `UTC` or `GMT`. Other zone abbreviations do not
//! name a unique offset and are rejected as [`RecordError::BadDate`].

use crate::error::RecordError;
use crate::model::{Todo, DUE_YEARS, NO_ID};
use chrono::{DateTime, Datelike, NaiveDateTime, SecondsFormat, Utc};

pub const DELIMITER: char = '|';
const ESCAPE: char = '\\';

const LEGACY_DATE_FORMATS: [&str; 2] = ["%a %b %d %H:%M:%S UTC %Y", "%a %b %d %H:%M:%S GMT %Y"];

/// Whether `todo` would decode back from [`encode_line`] unchanged.
pub fn check_storable(todo: &Todo) -> Result<(), RecordError> {
    let year = todo.due_date.year();
    if DUE_YEARS.contains(&year) {
        Ok(())
    } else {
        Err(RecordError::YearOutOfRange(year))
    }
}

pub fn encode_line(todo: &Todo) -> String {
    format!(
        "{}{d}{}{d}{}",
        todo.id,
        escape(&todo.item),
        todo.due_date.to_rfc3339_opts(SecondsFormat::AutoSi, true),
        d = DELIMITER
    )
}

pub fn decode_line(line: &str) -> Result<Todo, RecordError> {
    let fields = split_fields(line)?;
    let [id, item, due] =
        <[String; 3]>::try_from(fields).map_err(|f| RecordError::FieldCount(f.len()))?;

    Ok(Todo {
        id: parse_id(&id)?,
        item,
        due_date: parse_date(&due)?,
    })
}

pub fn parse_date(field: &str) -> Result<DateTime<Utc>, RecordError> {
    let trimmed = field.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&Utc));
    }
    LEGACY_DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .map(|naive| naive.and_utc())
        .ok_or_else(|| RecordError::BadDate(field.to_string()))
}

fn parse_id(field: &str) -> Result<i64, RecordError> {
    let trimmed = field.trim();
    if trimmed.is_empty() {
        return Ok(NO_ID);
    }
    trimmed
        .parse()
        .map_err(|_| RecordError::BadId(field.to_string()))
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            ESCAPE => out.push_str("\\\\"),
            DELIMITER => out.push_str("\\|"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            other => out.push(other),
        }
    }
    out
}

/// Split on unescaped delimiters, unescaping as we go.
///
/// A backslash before any other character is kept literally, so hand-written
/// lines with stray backslashes still read back as typed.
fn split_fields(line: &str) -> Result<Vec<String>, RecordError> {
    let mut fields = Vec::with_capacity(3);
    let mut current = String::new();
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match c {
            ESCAPE => match chars.next() {
                Some(ESCAPE) => current.push(ESCAPE),
                Some(DELIMITER) => current.push(DELIMITER),
                Some('n') => current.push('\n'),
                Some('r') => current.push('\r'),
                Some(other) => {
                    current.push(ESCAPE);
                    current.push(other);
                }
                None => return Err(RecordError::DanglingEscape),
            },
            DELIMITER => fields.push(std::mem::take(&mut current)),
            other => current.push(other),
        }
    }
    fields.push(current);
    Ok(fields)
}
