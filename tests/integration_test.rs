// Integration tests for event persistence across database sessions
use chrono::NaiveDate;
use docu_calendar::models::event::{Event, EventPatch};
use docu_calendar::models::settings::Settings;
use docu_calendar::services::database::Database;
use docu_calendar::services::event::EventService;
use docu_calendar::services::settings::SettingsService;
use tempfile::TempDir;

fn temp_db(dir: &TempDir) -> Database {
    let path = dir.path().join("events.db");
    let db = Database::new(&path).expect("Failed to create database");
    db.initialize_schema().expect("Failed to initialize schema");
    db
}

fn event_on(title: &str, date: NaiveDate, time: &str, user: &str) -> Event {
    Event::new(title, date, time, user).expect("valid event")
}

#[test]
fn test_event_lifecycle() {
    let dir = TempDir::new().unwrap();
    let db = temp_db(&dir);
    let service = EventService::new(db.connection());

    let date = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
    let mut event = event_on("Rapat koordinasi", date, "09:00", "user-1");
    event.location = Some("Aula utama".to_string());
    event.description = Some("Pembahasan agenda bulanan".to_string());

    // Create
    let created = service.create(event).expect("Failed to create event");
    assert!(created.created_at.is_some());

    // Read back
    let fetched = service
        .get(&created.id)
        .expect("Failed to fetch event")
        .expect("Event should exist");
    assert_eq!(fetched.title, "Rapat koordinasi");
    assert_eq!(fetched.location.as_deref(), Some("Aula utama"));
    assert_eq!(fetched.date, date);

    // Update the full editable surface
    let patch = EventPatch {
        title: "Rapat koordinasi (revisi)".to_string(),
        description: Some("Agenda diperbarui".to_string()),
        documentation_url: Some("https://docs.example/notulen".to_string()),
        location: Some("Ruang rapat 2".to_string()),
        date: NaiveDate::from_ymd_opt(2024, 6, 12).unwrap(),
        time: "14:30".to_string(),
    };
    let updated = service.update(&created.id, &patch).expect("Failed to update");
    assert_eq!(updated.title, "Rapat koordinasi (revisi)");
    assert_eq!(updated.time, "14:30");
    assert_eq!(updated.date, patch.date);
    assert_eq!(updated.documentation_url.as_deref(), Some("https://docs.example/notulen"));

    // Delete, owner-scoped
    service
        .delete(&created.id, "user-1")
        .expect("Owner delete should succeed");
    assert!(service.get(&created.id).unwrap().is_none());
}

#[test]
fn test_delete_is_scoped_to_owner() {
    let dir = TempDir::new().unwrap();
    let db = temp_db(&dir);
    let service = EventService::new(db.connection());

    let date = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
    let created = service
        .create(event_on("Milik user-1", date, "09:00", "user-1"))
        .unwrap();

    // A different user cannot delete it.
    assert!(service.delete(&created.id, "user-2").is_err());
    assert!(service.get(&created.id).unwrap().is_some());

    // The owner can.
    service.delete(&created.id, "user-1").unwrap();
    assert!(service.get(&created.id).unwrap().is_none());
}

#[test]
fn test_list_is_ordered_across_restarts() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("events.db");

    // First session: write events out of date order.
    {
        let db = Database::new(&path).expect("Failed to create database");
        db.initialize_schema().expect("Failed to initialize schema");
        let service = EventService::new(db.connection());

        for (title, day) in [("Ketiga", 20u32), ("Pertama", 5), ("Kedua", 12)] {
            let date = NaiveDate::from_ymd_opt(2024, 6, day).unwrap();
            service
                .create(event_on(title, date, "10:00", "user-1"))
                .expect("Failed to create event");
        }
    } // Database connection closed

    // Second session: the list comes back date-ascending.
    {
        let db = Database::new(&path).expect("Failed to reopen database");
        db.initialize_schema().expect("Schema init must be idempotent");
        let service = EventService::new(db.connection());

        let events = service.list_all().expect("Failed to list events");
        let titles: Vec<_> = events.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Pertama", "Kedua", "Ketiga"]);
    }
}

#[test]
fn test_view_preference_persists_across_restarts() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("settings.db");

    {
        let db = Database::new(&path).expect("Failed to create database");
        db.initialize_schema().expect("Failed to initialize schema");
        let service = SettingsService::new(&db);

        let mut settings = service.get().expect("Failed to get settings");
        assert_eq!(settings.current_view, "Month");

        settings.current_view = "Week".to_string();
        service.update(&settings).expect("Failed to save view");
    }

    {
        let db = Database::new(&path).expect("Failed to reopen database");
        let service = SettingsService::new(&db);
        let settings = service.get().expect("Failed to load settings");
        assert_eq!(
            settings.current_view, "Week",
            "View preference should persist across app restarts"
        );
    }
}

#[test]
fn test_each_view_label_round_trips() {
    let dir = TempDir::new().unwrap();
    let db = temp_db(&dir);
    let service = SettingsService::new(&db);

    for view in ["Month", "Week", "Day", "Year"] {
        let settings = Settings {
            current_view: view.to_string(),
        };
        service.update(&settings).expect("Failed to update view");

        let loaded = service.get().expect("Failed to load settings");
        assert_eq!(loaded.current_view, view, "View '{view}' should persist");
    }
}
