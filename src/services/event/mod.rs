//! Event CRUD gateway over SQLite.
//! Thin request/response wrappers: validate, touch the database, hand the
//! result back to the caller. Owner scoping happens here, not in the UI.

use rusqlite::Connection;

pub mod crud;
pub mod queries;
mod shared;

/// Service for managing documented events stored in SQLite.
pub struct EventService<'a> {
    pub(crate) conn: &'a Connection,
}

impl<'a> EventService<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::event::{DocumentationFile, Event, EventPatch};
    use crate::services::database::Database;
    use chrono::NaiveDate;

    fn setup_test_db() -> Database {
        let db = Database::in_memory().unwrap();
        db.initialize_schema().unwrap();
        db
    }

    fn sample_event(title: &str, day: u32) -> Event {
        Event::new(
            title,
            NaiveDate::from_ymd_opt(2024, 6, day).unwrap(),
            "10:00",
            "user-1",
        )
        .unwrap()
    }

    #[test]
    fn test_create_event() {
        let db = setup_test_db();
        let service = EventService::new(db.connection());

        let created = service.create(sample_event("Rapat", 10)).unwrap();
        assert_eq!(created.title, "Rapat");
        assert!(created.created_at.is_some());
        assert!(created.updated_at.is_some());
    }

    #[test]
    fn test_create_rejects_blank_title() {
        let db = setup_test_db();
        let service = EventService::new(db.connection());

        let mut event = sample_event("x", 10);
        event.title = "  ".to_string();
        assert!(service.create(event).is_err());
    }

    #[test]
    fn test_get_event_with_attachments() {
        let db = setup_test_db();
        let service = EventService::new(db.connection());

        let mut event = sample_event("Sosialisasi", 12);
        event.documentation_files = vec![DocumentationFile {
            id: "f1".to_string(),
            path: "images/f1.png".to_string(),
            url: "https://files.example/images/f1.png".to_string(),
            full_path: "file-docs/images/f1.png".to_string(),
            file_type: Some("png".to_string()),
            file_name: Some("foto.png".to_string()),
        }];
        let created = service.create(event).unwrap();

        let found = service.get(&created.id).unwrap().unwrap();
        assert_eq!(found.documentation_files.len(), 1);
        assert_eq!(found.documentation_files[0].id, "f1");
    }

    #[test]
    fn test_get_nonexistent_event() {
        let db = setup_test_db();
        let service = EventService::new(db.connection());

        assert!(service.get("missing").unwrap().is_none());
    }

    #[test]
    fn test_legacy_url_attachment_is_normalized() {
        let db = setup_test_db();
        let service = EventService::new(db.connection());
        let created = service.create(sample_event("Lama", 5)).unwrap();

        // Simulate a pre-migration row holding a bare URL string.
        db.connection()
            .execute(
                "UPDATE events SET documentation_files = 'https://files.example/lama.pdf' WHERE id = ?",
                [&created.id],
            )
            .unwrap();

        let found = service.get(&created.id).unwrap().unwrap();
        assert_eq!(found.documentation_files.len(), 1);
        assert_eq!(found.documentation_files[0].url, "https://files.example/lama.pdf");
    }

    #[test]
    fn test_update_event_full_surface() {
        let db = setup_test_db();
        let service = EventService::new(db.connection());
        let created = service.create(sample_event("Rapat", 10)).unwrap();

        let patch = EventPatch {
            title: "Rapat Koordinasi".to_string(),
            description: Some("Agenda baru".to_string()),
            documentation_url: Some("https://docs.example/notulen".to_string()),
            location: Some("Aula".to_string()),
            date: NaiveDate::from_ymd_opt(2024, 6, 11).unwrap(),
            time: "13:30".to_string(),
        };
        let updated = service.update(&created.id, &patch).unwrap();

        assert_eq!(updated.title, "Rapat Koordinasi");
        assert_eq!(updated.location.as_deref(), Some("Aula"));
        assert_eq!(updated.date, patch.date);
        assert_eq!(updated.time, "13:30");
    }

    #[test]
    fn test_update_nonexistent_event() {
        let db = setup_test_db();
        let service = EventService::new(db.connection());

        let patch = EventPatch::from_event(&sample_event("x", 1));
        assert!(service.update("missing", &patch).is_err());
    }

    #[test]
    fn test_delete_scoped_to_owner() {
        let db = setup_test_db();
        let service = EventService::new(db.connection());
        let created = service.create(sample_event("Rapat", 10)).unwrap();

        // Another user cannot delete it.
        assert!(service.delete(&created.id, "user-2").is_err());
        assert!(service.get(&created.id).unwrap().is_some());

        // The owner can.
        service.delete(&created.id, "user-1").unwrap();
        assert!(service.get(&created.id).unwrap().is_none());
    }

    #[test]
    fn test_list_all_ordered_by_date() {
        let db = setup_test_db();
        let service = EventService::new(db.connection());

        service.create(sample_event("Ketiga", 20)).unwrap();
        service.create(sample_event("Pertama", 5)).unwrap();
        service.create(sample_event("Kedua", 12)).unwrap();

        let events = service.list_all().unwrap();
        let titles: Vec<_> = events.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Pertama", "Kedua", "Ketiga"]);
    }

    #[test]
    fn test_find_by_day() {
        let db = setup_test_db();
        let service = EventService::new(db.connection());

        service.create(sample_event("Hari ini", 10)).unwrap();
        service.create(sample_event("Besok", 11)).unwrap();

        let events = service
            .find_by_day(NaiveDate::from_ymd_opt(2024, 6, 10).unwrap())
            .unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].title, "Hari ini");
    }
}
