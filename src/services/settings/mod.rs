//! Persistence for UI preferences (the active view).
//! Single-row settings table, read at startup and written on change.

use anyhow::{Context, Result};

use crate::models::settings::Settings;
use crate::services::database::Database;

pub struct SettingsService<'a> {
    db: &'a Database,
}

impl<'a> SettingsService<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Load the persisted settings, falling back to defaults when the row
    /// has not been seeded yet.
    pub fn get(&self) -> Result<Settings> {
        let result = self.db.connection().query_row(
            "SELECT current_view FROM settings WHERE id = 1",
            [],
            |row| {
                Ok(Settings {
                    current_view: row.get(0)?,
                })
            },
        );

        match result {
            Ok(settings) => Ok(settings),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(Settings::default()),
            Err(e) => Err(e).context("Failed to load settings"),
        }
    }

    pub fn update(&self, settings: &Settings) -> Result<()> {
        self.db
            .connection()
            .execute(
                "UPDATE settings SET current_view = ?,
                        updated_at = CURRENT_TIMESTAMP
                 WHERE id = 1",
                rusqlite::params![settings.current_view],
            )
            .context("Failed to save settings")?;

        Ok(())
    }
}
