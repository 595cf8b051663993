use chrono::{DateTime, Local, NaiveDate};
use rusqlite::types::Type;
use rusqlite::Row;

use crate::models::event::{DocumentationFile, Event};

/// Stored date format for the `events.date` column.
pub(super) const DATE_FORMAT: &str = "%Y-%m-%d";

pub(super) fn parse_stored_date(value: String) -> Result<NaiveDate, rusqlite::Error> {
    NaiveDate::parse_from_str(&value, DATE_FORMAT)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(4, Type::Text, Box::new(e)))
}

pub(super) fn to_local_datetime(value: String) -> Result<DateTime<Local>, rusqlite::Error> {
    DateTime::parse_from_rfc3339(&value)
        .map(|dt| dt.with_timezone(&Local))
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(9, Type::Text, Box::new(e)))
}

/// Serialize attachments for storage; empty lists persist as NULL.
pub(super) fn serialize_files(files: &[DocumentationFile]) -> Option<String> {
    if files.is_empty() {
        return None;
    }
    serde_json::to_string(files).ok()
}

/// Map a full event row in column order:
/// id, title, description, location, date, time, documentation_url,
/// documentation_files, user_id, created_at, updated_at.
pub(super) fn map_event_row(row: &Row<'_>) -> Result<Event, rusqlite::Error> {
    let stored_files: Option<String> = row.get(7)?;

    Ok(Event {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        location: row.get(3)?,
        date: parse_stored_date(row.get::<_, String>(4)?)?,
        time: row.get(5)?,
        documentation_url: row.get(6)?,
        documentation_files: DocumentationFile::normalize_stored(stored_files.as_deref()),
        user_id: row.get(8)?,
        created_at: Some(to_local_datetime(row.get::<_, String>(9)?)?),
        updated_at: Some(to_local_datetime(row.get::<_, String>(10)?)?),
    })
}
