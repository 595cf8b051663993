//! Create/edit event dialog.
//!
//! One modal window shared by both flows. Validation runs locally on submit;
//! failures are shown inline next to the offending field and nothing leaves
//! the dialog until every field passes. While a submission is in flight the
//! submit button is disabled, so at most one submission runs at a time.

use chrono::NaiveDate;
use egui::{Color32, Context, RichText};
use std::fs;
use std::path::Path;

use crate::models::event::Event;
use crate::services::storage::{validate_files, LocalFile};

const ERROR_TEXT: Color32 = Color32::from_rgb(255, 120, 120);
const ATTACHMENT_FILTER: [&str; 5] = ["pdf", "jpg", "jpeg", "png", "gif"];

/// Per-field validation messages, rendered inline under each field.
#[derive(Debug, Default)]
pub struct FieldErrors {
    pub title: Option<String>,
    pub time: Option<String>,
    pub url: Option<String>,
    pub files: Option<String>,
}

impl FieldErrors {
    fn clear(&mut self) {
        *self = FieldErrors::default();
    }

    fn any(&self) -> bool {
        self.title.is_some() || self.time.is_some() || self.url.is_some() || self.files.is_some()
    }
}

/// What the dialog asked the app to do this frame.
pub enum DialogAction {
    None,
    /// All fields validated; the app should persist and close on success.
    Submit,
    Cancelled,
}

pub struct EventDialog {
    pub open: bool,
    /// Id of the event being edited; `None` means the create flow.
    pub editing: Option<String>,
    pub title: String,
    pub date: NaiveDate,
    pub time: String,
    pub location: String,
    pub description: String,
    pub documentation_url: String,
    /// Picked-but-not-yet-uploaded attachments (create flow only).
    pub picked_files: Vec<LocalFile>,
    pub errors: FieldErrors,
    is_submitting: bool,
}

impl EventDialog {
    /// Open the create flow prefilled from a clicked grid cell.
    pub fn create_at(date: NaiveDate, hour: Option<u32>) -> Self {
        Self {
            open: true,
            editing: None,
            title: String::new(),
            date,
            time: hour.map(|h| format!("{h:02}:00")).unwrap_or_default(),
            location: String::new(),
            description: String::new(),
            documentation_url: String::new(),
            picked_files: Vec::new(),
            errors: FieldErrors::default(),
            is_submitting: false,
        }
    }

    /// Open the edit flow prefilled from an existing event.
    pub fn edit(event: &Event) -> Self {
        Self {
            open: true,
            editing: Some(event.id.clone()),
            title: event.title.clone(),
            date: event.date,
            time: event.time.clone(),
            location: event.location.clone().unwrap_or_default(),
            description: event.description.clone().unwrap_or_default(),
            documentation_url: event.documentation_url.clone().unwrap_or_default(),
            picked_files: Vec::new(),
            errors: FieldErrors::default(),
            is_submitting: false,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    /// Called by the app when a submission finished (either way) so the
    /// submit button unlocks.
    pub fn finish_submission(&mut self) {
        self.is_submitting = false;
    }

    /// Optional-field helper: trimmed-empty strings persist as NULL.
    pub fn optional(value: &str) -> Option<String> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    fn validate(&mut self) -> bool {
        self.errors.clear();

        if self.title.trim().is_empty() {
            self.errors.title = Some("Judul wajib diisi".to_string());
        }

        if !self.time.is_empty()
            && chrono::NaiveTime::parse_from_str(&self.time, "%H:%M").is_err()
        {
            self.errors.time = Some("Format waktu HH:mm".to_string());
        }

        let url = self.documentation_url.trim();
        if !url.is_empty() && !url.starts_with("http://") && !url.starts_with("https://") {
            self.errors.url = Some("URL tidak valid".to_string());
        }

        if let Err(e) = validate_files(&self.picked_files) {
            self.errors.files = Some(e.to_string());
        }

        !self.errors.any()
    }

    fn pick_files(&mut self) {
        let Some(paths) = rfd::FileDialog::new()
            .add_filter("Dokumen", &ATTACHMENT_FILTER)
            .pick_files()
        else {
            return;
        };

        for path in paths {
            match load_local_file(&path) {
                Ok(file) => self.picked_files.push(file),
                Err(e) => {
                    log::warn!("Failed to read {}: {e:#}", path.display());
                    self.errors.files = Some(format!("Gagal membaca {}", path.display()));
                }
            }
        }
    }

    pub fn show(&mut self, ctx: &Context) -> DialogAction {
        if !self.open {
            return DialogAction::None;
        }

        let mut action = DialogAction::None;
        let heading = if self.editing.is_some() {
            "Edit Acara"
        } else {
            "Tambah Acara"
        };

        let mut keep_open = true;
        egui::Window::new(heading)
            .collapsible(false)
            .resizable(false)
            .open(&mut keep_open)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.set_min_width(340.0);

                ui.label("Judul");
                ui.text_edit_singleline(&mut self.title);
                if let Some(err) = &self.errors.title {
                    ui.label(RichText::new(err).size(11.0).color(ERROR_TEXT));
                }
                ui.add_space(6.0);

                ui.horizontal(|ui| {
                    ui.label("Tanggal");
                    ui.add(egui_extras::DatePickerButton::new(&mut self.date).id_source("event_date"));
                    ui.add_space(12.0);
                    ui.label("Waktu");
                    ui.add(
                        egui::TextEdit::singleline(&mut self.time)
                            .hint_text("HH:mm")
                            .desired_width(60.0),
                    );
                });
                if let Some(err) = &self.errors.time {
                    ui.label(RichText::new(err).size(11.0).color(ERROR_TEXT));
                }
                ui.add_space(6.0);

                ui.label("Lokasi");
                ui.text_edit_singleline(&mut self.location);
                ui.add_space(6.0);

                ui.label("Deskripsi");
                ui.text_edit_multiline(&mut self.description);
                ui.add_space(6.0);

                ui.label("URL Dokumentasi");
                ui.add(
                    egui::TextEdit::singleline(&mut self.documentation_url)
                        .hint_text("https://"),
                );
                if let Some(err) = &self.errors.url {
                    ui.label(RichText::new(err).size(11.0).color(ERROR_TEXT));
                }
                ui.add_space(6.0);

                // Attachments can only be added at creation; existing events
                // keep theirs untouched.
                if self.editing.is_none() {
                    ui.horizontal(|ui| {
                        ui.label(format!("Lampiran ({}/4)", self.picked_files.len()));
                        if ui.button("Pilih file…").clicked() {
                            self.errors.files = None;
                            self.pick_files();
                        }
                    });

                    let mut removed = None;
                    for (i, file) in self.picked_files.iter().enumerate() {
                        ui.horizontal(|ui| {
                            ui.label(RichText::new(&file.name).size(11.0));
                            if ui.small_button("✗").clicked() {
                                removed = Some(i);
                            }
                        });
                    }
                    if let Some(i) = removed {
                        self.picked_files.remove(i);
                    }

                    if let Some(err) = &self.errors.files {
                        ui.label(RichText::new(err).size(11.0).color(ERROR_TEXT));
                    }
                    ui.add_space(6.0);
                }

                ui.separator();
                ui.horizontal(|ui| {
                    let submit_label = if self.is_submitting {
                        "Menyimpan…"
                    } else {
                        "Simpan"
                    };
                    let submit = ui.add_enabled(
                        !self.is_submitting,
                        egui::Button::new(submit_label),
                    );
                    if submit.clicked() && self.validate() {
                        self.is_submitting = true;
                        action = DialogAction::Submit;
                    }

                    if ui
                        .add_enabled(!self.is_submitting, egui::Button::new("Batal"))
                        .clicked()
                    {
                        action = DialogAction::Cancelled;
                    }
                });
            });

        if !keep_open {
            action = DialogAction::Cancelled;
        }
        if matches!(action, DialogAction::Cancelled) {
            self.open = false;
        }

        action
    }
}

fn content_type_for(extension: &str) -> &'static str {
    match extension {
        "pdf" => "application/pdf",
        "png" => "image/png",
        "gif" => "image/gif",
        "jpg" | "jpeg" => "image/jpeg",
        _ => "application/octet-stream",
    }
}

fn load_local_file(path: &Path) -> anyhow::Result<LocalFile> {
    use anyhow::Context as _;

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .context("File has no name")?;
    let extension = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    let bytes = fs::read(path).context("Failed to read file")?;

    Ok(LocalFile {
        name,
        content_type: content_type_for(&extension).to_string(),
        bytes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dialog() -> EventDialog {
        EventDialog::create_at(NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(), Some(9))
    }

    #[test]
    fn test_create_prefills_hour() {
        let d = dialog();
        assert_eq!(d.time, "09:00");
        assert!(d.editing.is_none());
    }

    #[test]
    fn test_validate_requires_title() {
        let mut d = dialog();
        assert!(!d.validate());
        assert!(d.errors.title.is_some());

        d.title = "Rapat".to_string();
        assert!(d.validate());
    }

    #[test]
    fn test_validate_rejects_bad_time_and_url() {
        let mut d = dialog();
        d.title = "Rapat".to_string();
        d.time = "9 pagi".to_string();
        d.documentation_url = "bukan-url".to_string();

        assert!(!d.validate());
        assert!(d.errors.time.is_some());
        assert!(d.errors.url.is_some());
    }

    #[test]
    fn test_validate_rejects_too_many_files() {
        let mut d = dialog();
        d.title = "Rapat".to_string();
        d.picked_files = (0..5)
            .map(|i| LocalFile {
                name: format!("foto{i}.png"),
                content_type: "image/png".to_string(),
                bytes: vec![0u8; 8],
            })
            .collect();

        assert!(!d.validate());
        assert!(d.errors.files.is_some());
    }

    #[test]
    fn test_optional_field_helper() {
        assert_eq!(EventDialog::optional("  "), None);
        assert_eq!(EventDialog::optional(" Aula "), Some("Aula".to_string()));
    }

    #[test]
    fn test_edit_prefills_from_event() {
        let mut event = Event::new(
            "Rapat",
            NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(),
            "09:30",
            "user-1",
        )
        .unwrap();
        event.location = Some("Aula".to_string());

        let d = EventDialog::edit(&event);
        assert_eq!(d.editing.as_deref(), Some(event.id.as_str()));
        assert_eq!(d.location, "Aula");
        assert_eq!(d.time, "09:30");
    }

    #[test]
    fn test_content_types() {
        assert_eq!(content_type_for("pdf"), "application/pdf");
        assert_eq!(content_type_for("jpeg"), "image/jpeg");
        assert_eq!(content_type_for("bin"), "application/octet-stream");
    }
}
