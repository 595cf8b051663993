//! Event detail sheet.
//!
//! Read-only summary of a selected event: schedule, location, description
//! and documentation links. Edit and delete are offered only to users whose
//! session allows writes.

use egui::{Color32, Context, RichText};

use crate::models::event::Event;
use crate::utils::date;

const MUTED_TEXT: Color32 = Color32::from_rgb(150, 155, 165);
const LINK_TEXT: Color32 = Color32::from_rgb(100, 180, 255);

pub enum SheetAction {
    None,
    Edit(String),
    Delete(String),
    Close,
}

pub struct EventSheet;

impl EventSheet {
    pub fn show(ctx: &Context, event: &Event, can_write: bool) -> SheetAction {
        let mut action = SheetAction::None;
        let mut keep_open = true;

        egui::Window::new(&event.title)
            .id(egui::Id::new("event_sheet"))
            .collapsible(false)
            .resizable(false)
            .open(&mut keep_open)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.set_min_width(320.0);

                let mut schedule = date::format_long(event.date);
                if !event.time.is_empty() {
                    schedule.push_str(&format!(", {}", event.time));
                }
                ui.label(RichText::new(schedule).size(13.0).color(MUTED_TEXT));

                if let Some(location) = &event.location {
                    ui.add_space(4.0);
                    ui.label(format!("📍 {location}"));
                }

                if let Some(description) = &event.description {
                    ui.add_space(8.0);
                    ui.label(description);
                }

                if event.has_documentation() {
                    ui.add_space(8.0);
                    ui.separator();
                    ui.label(RichText::new("Dokumentasi").strong());

                    if let Some(url) = &event.documentation_url {
                        if ui
                            .link(RichText::new(url).size(12.0).color(LINK_TEXT))
                            .clicked()
                        {
                            open_external(url);
                        }
                    }

                    for file in &event.documentation_files {
                        let label = file.file_name.as_deref().unwrap_or(&file.url);
                        if ui
                            .link(RichText::new(label).size(12.0).color(LINK_TEXT))
                            .clicked()
                        {
                            open_external(&file.url);
                        }
                    }
                }

                if can_write {
                    ui.add_space(8.0);
                    ui.separator();
                    ui.horizontal(|ui| {
                        if ui.button("Edit").clicked() {
                            action = SheetAction::Edit(event.id.clone());
                        }
                        if ui
                            .button(RichText::new("Hapus").color(Color32::from_rgb(255, 120, 120)))
                            .clicked()
                        {
                            action = SheetAction::Delete(event.id.clone());
                        }
                    });
                }
            });

        if !keep_open {
            action = SheetAction::Close;
        }

        action
    }
}

fn open_external(url: &str) {
    if let Err(e) = webbrowser::open(url) {
        log::warn!("Failed to open {url}: {e}");
    }
}
