use super::shared::{serialize_files, DATE_FORMAT};
use super::EventService;
use crate::models::event::{Event, EventPatch};
use anyhow::{anyhow, Context, Result};
use chrono::Local;
use rusqlite::params;

impl<'a> EventService<'a> {
    /// Insert a new event. The event is validated before anything touches
    /// the database.
    pub fn create(&self, mut event: Event) -> Result<Event> {
        event.validate().map_err(|e| anyhow!(e))?;

        let now = Local::now();
        let now_str = now.to_rfc3339();

        self.conn
            .execute(
                "INSERT INTO events (
                    id, title, description, location, date, time,
                    documentation_url, documentation_files, user_id,
                    created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
                params![
                    event.id,
                    event.title,
                    event.description,
                    event.location,
                    event.date.format(DATE_FORMAT).to_string(),
                    event.time,
                    event.documentation_url,
                    serialize_files(&event.documentation_files),
                    event.user_id,
                    &now_str,
                    &now_str,
                ],
            )
            .context("Failed to insert event")?;

        event.created_at = Some(now);
        event.updated_at = Some(now);

        Ok(event)
    }

    /// Fetch a single event by id.
    pub fn get(&self, id: &str) -> Result<Option<Event>> {
        let result = self.conn.query_row(
            "SELECT id, title, description, location, date, time,
                    documentation_url, documentation_files, user_id,
                    created_at, updated_at
             FROM events WHERE id = ?",
            [id],
            super::shared::map_event_row,
        );

        match result {
            Ok(event) => Ok(Some(event)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Apply an edit to an existing event and return the updated row.
    ///
    /// The whole editable surface goes through here: title, description,
    /// documentation URL, location, date and time. Attachments are not
    /// editable after creation.
    pub fn update(&self, id: &str, patch: &EventPatch) -> Result<Event> {
        patch.validate().map_err(|e| anyhow!(e))?;

        let rows_affected = self
            .conn
            .execute(
                "UPDATE events SET
                    title = ?, description = ?, documentation_url = ?,
                    location = ?, date = ?, time = ?, updated_at = ?
                 WHERE id = ?",
                params![
                    patch.title,
                    patch.description,
                    patch.documentation_url,
                    patch.location,
                    patch.date.format(DATE_FORMAT).to_string(),
                    patch.time,
                    Local::now().to_rfc3339(),
                    id,
                ],
            )
            .context("Failed to update event")?;

        if rows_affected == 0 {
            return Err(anyhow!("Event {} not found", id));
        }

        self.get(id)?
            .ok_or_else(|| anyhow!("Event {} disappeared during update", id))
    }

    /// Delete an event, scoped to its owner. Deleting someone else's event
    /// behaves the same as deleting a missing id.
    pub fn delete(&self, id: &str, owner_id: &str) -> Result<()> {
        let rows_affected = self
            .conn
            .execute(
                "DELETE FROM events WHERE id = ? AND user_id = ?",
                params![id, owner_id],
            )
            .context("Failed to delete event")?;

        if rows_affected == 0 {
            return Err(anyhow!("Event {} not found for this user", id));
        }

        Ok(())
    }
}
