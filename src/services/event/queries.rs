use super::shared::{map_event_row, DATE_FORMAT};
use super::EventService;
use crate::models::event::Event;
use anyhow::Result;
use chrono::NaiveDate;

impl<'a> EventService<'a> {
    /// Every event, ordered by date ascending. Events sharing a date keep
    /// their insertion order (created_at tiebreak), which is the order the
    /// views receive and render them in.
    pub fn list_all(&self) -> Result<Vec<Event>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, title, description, location, date, time,
                    documentation_url, documentation_files, user_id,
                    created_at, updated_at
             FROM events
             ORDER BY date ASC, created_at ASC",
        )?;

        let events = stmt
            .query_map([], map_event_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(events)
    }

    /// Events on one calendar day, in insertion order.
    pub fn find_by_day(&self, day: NaiveDate) -> Result<Vec<Event>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, title, description, location, date, time,
                    documentation_url, documentation_files, user_id,
                    created_at, updated_at
             FROM events
             WHERE date = ?
             ORDER BY created_at ASC",
        )?;

        let events = stmt
            .query_map([day.format(DATE_FORMAT).to_string()], map_event_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(events)
    }
}
