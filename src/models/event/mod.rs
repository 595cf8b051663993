// Event module
// Calendar event model with documentation attachments

use chrono::{DateTime, Local, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// A single uploaded attachment (image or PDF) associated with an event.
///
/// The shape mirrors what the object-storage collaborator returns on upload.
/// Older rows in the database stored a bare URL string instead of a JSON array
/// of these objects; [`DocumentationFile::normalize_stored`] folds both shapes
/// into this one representation at the persistence boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentationFile {
    pub id: String,
    pub path: String,
    pub url: String,
    #[serde(rename = "fullPath", default)]
    pub full_path: String,
    #[serde(rename = "fileType", default, skip_serializing_if = "Option::is_none")]
    pub file_type: Option<String>,
    #[serde(rename = "fileName", default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
}

impl DocumentationFile {
    /// Normalize the persisted attachments column into a uniform list.
    ///
    /// Accepts three historical shapes: NULL/empty (no attachments), a JSON
    /// array of file objects (current), and a bare URL string (legacy rows
    /// written before structured attachments existed).
    pub fn normalize_stored(raw: Option<&str>) -> Vec<DocumentationFile> {
        let raw = match raw {
            Some(s) if !s.trim().is_empty() => s.trim(),
            _ => return Vec::new(),
        };

        if let Ok(files) = serde_json::from_str::<Vec<DocumentationFile>>(raw) {
            return files;
        }

        // Legacy rows: either a JSON-encoded string or the URL itself.
        let url = serde_json::from_str::<String>(raw).unwrap_or_else(|_| raw.to_string());
        vec![DocumentationFile {
            id: url.clone(),
            path: String::new(),
            url,
            full_path: String::new(),
            file_type: None,
            file_name: None,
        }]
    }
}

/// Calendar event belonging to exactly one day.
///
/// `time` is advisory wall-clock metadata ("HH:mm"); it never drives duration
/// or conflict logic, only hour placement in the week/day views.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    pub time: String,
    pub location: Option<String>,
    pub description: Option<String>,
    pub documentation_url: Option<String>,
    pub documentation_files: Vec<DocumentationFile>,
    pub user_id: String,
    pub created_at: Option<DateTime<Local>>,
    pub updated_at: Option<DateTime<Local>>,
}

impl Event {
    /// Create a new event with required fields.
    ///
    /// The id is assigned on creation and is opaque from then on.
    pub fn new(
        title: impl Into<String>,
        date: NaiveDate,
        time: impl Into<String>,
        user_id: impl Into<String>,
    ) -> Result<Self, String> {
        let event = Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.into(),
            date,
            time: time.into(),
            location: None,
            description: None,
            documentation_url: None,
            documentation_files: Vec::new(),
            user_id: user_id.into(),
            created_at: None,
            updated_at: None,
        };
        event.validate()?;
        Ok(event)
    }

    /// Validate the event fields.
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Event title cannot be empty".to_string());
        }

        if !self.time.is_empty() && NaiveTime::parse_from_str(&self.time, "%H:%M").is_err() {
            return Err("Event time must be in HH:mm format".to_string());
        }

        Ok(())
    }

    /// Hour-of-day parsed from the advisory time field, if present and valid.
    pub fn hour(&self) -> Option<u32> {
        NaiveTime::parse_from_str(&self.time, "%H:%M")
            .ok()
            .map(|t| chrono::Timelike::hour(&t))
    }

    /// Whether the event carries any documentation (URL or files).
    pub fn has_documentation(&self) -> bool {
        self.documentation_url.is_some() || !self.documentation_files.is_empty()
    }
}

/// Fields accepted by the update path.
///
/// Covers the complete editable surface: title, description, documentation
/// URL, location, date and time. Attachments are immutable after creation.
#[derive(Debug, Clone)]
pub struct EventPatch {
    pub title: String,
    pub description: Option<String>,
    pub documentation_url: Option<String>,
    pub location: Option<String>,
    pub date: NaiveDate,
    pub time: String,
}

impl EventPatch {
    /// Build a patch pre-filled from an existing event.
    pub fn from_event(event: &Event) -> Self {
        Self {
            title: event.title.clone(),
            description: event.description.clone(),
            documentation_url: event.documentation_url.clone(),
            location: event.location.clone(),
            date: event.date,
            time: event.time.clone(),
        }
    }

    /// Validate the patch the same way a full event is validated.
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Event title cannot be empty".to_string());
        }
        if !self.time.is_empty() && NaiveTime::parse_from_str(&self.time, "%H:%M").is_err() {
            return Err("Event time must be in HH:mm format".to_string());
        }
        Ok(())
    }
}
