//! The application shell: owns the stores, the collaborator clients and the
//! frame loop, and applies the actions the views emit.

pub mod navigation;
pub mod state;
pub mod toast;

use anyhow::{Context as _, Result};
use chrono::Datelike;
use egui::RichText;

use crate::models::event::{Event, EventPatch};
use crate::models::session::Session;
use crate::services::auth::AuthClient;
use crate::services::config::AppConfig;
use crate::services::database::Database;
use crate::services::event::EventService;
use crate::services::settings::SettingsService;
use crate::services::storage::{upload_attachments, SupabaseStore};
use crate::ui_egui::event_dialog::{DialogAction, EventDialog};
use crate::ui_egui::event_sheet::{EventSheet, SheetAction};
use crate::ui_egui::views::{DayView, MonthView, ViewAction, WeekView, YearView};
use crate::utils::date;

use state::{DateCursor, EventIndex, ViewType};
use toast::ToastManager;

pub struct CalendarApp {
    database: Database,
    auth: AuthClient,
    store: SupabaseStore,
    session_token: Option<String>,
    session: Option<Session>,
    current_view: ViewType,
    cursor: DateCursor,
    event_index: EventIndex,
    dialog: Option<EventDialog>,
    toasts: ToastManager,
}

impl CalendarApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Result<Self> {
        let config = AppConfig::load()?;

        let db_path = config.resolve_database_path()?;
        let database = Database::new(&db_path)
            .with_context(|| format!("Failed to open database at {}", db_path.display()))?;
        database.initialize_schema()?;

        let auth = AuthClient::new(&config.auth.base_url)?;
        let store = SupabaseStore::new(
            &config.storage.base_url,
            &config.storage.bucket,
            &config.storage.api_key,
        )?;

        let session_token = config.session_token.clone();
        let session = match session_token.as_deref() {
            Some(token) => match auth.get_session(token) {
                Ok(session) => session,
                Err(e) => {
                    log::warn!("Session lookup failed: {e:#}");
                    None
                }
            },
            None => None,
        };
        if let Some(session) = &session {
            log::info!("Signed in as {} ({})", session.user.name, session.user.role);
        }

        let settings = SettingsService::new(&database).get().unwrap_or_default();

        let mut app = Self {
            database,
            auth,
            store,
            session_token,
            session,
            current_view: ViewType::parse(&settings.current_view),
            cursor: DateCursor::today(),
            event_index: EventIndex::default(),
            dialog: None,
            toasts: ToastManager::new(),
        };
        app.reload_events();
        Ok(app)
    }

    fn can_write(&self) -> bool {
        matches!(&self.session, Some(session) if session.is_admin())
    }

    /// Replace the event index from the database, wholesale.
    fn reload_events(&mut self) {
        match EventService::new(self.database.connection()).list_all() {
            Ok(events) => self.event_index.replace(events),
            Err(e) => {
                log::error!("Failed to load events: {e:#}");
                self.toasts.error("Terjadi kesalahan");
            }
        }
    }

    fn set_view(&mut self, view: ViewType) {
        if view == self.current_view {
            return;
        }
        self.current_view = view;

        let service = SettingsService::new(&self.database);
        match service.get() {
            Ok(mut settings) => {
                settings.current_view = view.label().to_string();
                if let Err(e) = service.update(&settings) {
                    log::warn!("Failed to persist view preference: {e:#}");
                }
            }
            Err(e) => log::warn!("Failed to load settings: {e:#}"),
        }
    }

    fn header_title(&self) -> String {
        let selected = self.cursor.selected_date();
        match self.current_view {
            ViewType::Month => format!(
                "{} {}",
                date::month_name(self.cursor.month_index() as usize),
                self.cursor.year()
            ),
            ViewType::Week => format!(
                "{} {}",
                date::month_name(selected.month0() as usize),
                selected.year()
            ),
            ViewType::Day => date::format_long(selected),
            ViewType::Year => selected.year().to_string(),
        }
    }

    fn sign_out(&mut self) {
        if let Some(token) = self.session_token.take() {
            if let Err(e) = self.auth.sign_out(&token) {
                log::warn!("Sign-out call failed: {e:#}");
            }
        }
        self.session = None;
        self.dialog = None;
        self.event_index.close_summary();
        self.toasts.info("Anda telah keluar");
    }

    fn handle_view_action(&mut self, action: ViewAction) {
        match action {
            ViewAction::None => {}
            ViewAction::CreateEvent { date, hour } => {
                if self.can_write() {
                    self.dialog = Some(EventDialog::create_at(date, hour));
                }
            }
            ViewAction::OpenEvent(id) => self.event_index.open_summary(id),
            ViewAction::SwitchToDay(date) => {
                self.cursor.set_date(date);
                self.set_view(ViewType::Day);
            }
        }
    }

    fn submit_dialog(&mut self) {
        let saved = {
            let Some(dialog) = &mut self.dialog else {
                return;
            };
            let service = EventService::new(self.database.connection());

            if let Some(id) = dialog.editing.clone() {
                let patch = EventPatch {
                    title: dialog.title.trim().to_string(),
                    description: EventDialog::optional(&dialog.description),
                    documentation_url: EventDialog::optional(&dialog.documentation_url),
                    location: EventDialog::optional(&dialog.location),
                    date: dialog.date,
                    time: dialog.time.trim().to_string(),
                };
                match service.update(&id, &patch) {
                    Ok(_) => true,
                    Err(e) => {
                        log::error!("Failed to update event {id}: {e:#}");
                        dialog.finish_submission();
                        false
                    }
                }
            } else {
                // The session can expire between opening the dialog and
                // submitting; the user needs to hear about it.
                let Some(session) = &self.session else {
                    dialog.finish_submission();
                    self.toasts.error("Sesi berakhir, silakan masuk kembali");
                    return;
                };

                // Attachments first: a failed upload leaves no event behind.
                let uploaded = match upload_attachments(&self.store, &dialog.picked_files) {
                    Ok(files) => files,
                    Err(e) => {
                        log::error!("Attachment upload failed: {e:#}");
                        dialog.errors.files = Some("Gagal mengunggah lampiran".to_string());
                        dialog.finish_submission();
                        return;
                    }
                };

                let created = Event::new(
                    dialog.title.trim(),
                    dialog.date,
                    dialog.time.trim(),
                    &session.user.id,
                )
                .map(|mut event| {
                    event.location = EventDialog::optional(&dialog.location);
                    event.description = EventDialog::optional(&dialog.description);
                    event.documentation_url = EventDialog::optional(&dialog.documentation_url);
                    event.documentation_files = uploaded;
                    event
                });

                match created {
                    Ok(event) => match service.create(event) {
                        Ok(_) => true,
                        Err(e) => {
                            log::error!("Failed to create event: {e:#}");
                            dialog.finish_submission();
                            false
                        }
                    },
                    Err(e) => {
                        dialog.errors.title = Some(e);
                        dialog.finish_submission();
                        false
                    }
                }
            }
        };

        if saved {
            self.dialog = None;
            self.toasts.success("Acara berhasil disimpan");
            self.reload_events();
        } else {
            self.toasts.error("Terjadi kesalahan");
        }
    }

    fn delete_event(&mut self, id: &str) {
        let Some(session) = &self.session else {
            return;
        };

        let deleted =
            EventService::new(self.database.connection()).delete(id, &session.user.id);
        match deleted {
            Ok(()) => {
                self.event_index.close_summary();
                self.toasts.success("Acara berhasil dihapus");
                self.reload_events();
            }
            Err(e) => {
                log::error!("Failed to delete event {id}: {e:#}");
                self.toasts.error("Terjadi kesalahan");
            }
        }
    }

    fn render_header(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                if ui.button("Hari ini").clicked() {
                    self.jump_to_today();
                }
                if ui.button("◀").clicked() {
                    self.navigate(-1);
                }
                if ui.button("▶").clicked() {
                    self.navigate(1);
                }
                ui.add_space(8.0);
                ui.label(RichText::new(self.header_title()).size(17.0).strong());

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if let Some(session) = self.session.clone() {
                        if ui.button("Keluar").clicked() {
                            self.sign_out();
                        }
                        ui.label(RichText::new(&session.user.name).size(12.0));
                    }

                    let add = ui.add_enabled(
                        self.can_write(),
                        egui::Button::new("+ Tambah Acara"),
                    );
                    if add.clicked() {
                        self.dialog = Some(EventDialog::create_at(
                            self.cursor.selected_date(),
                            None,
                        ));
                    }

                    let mut selected_view = self.current_view;
                    egui::ComboBox::from_id_source("view_select")
                        .selected_text(selected_view.label())
                        .show_ui(ui, |ui| {
                            for view in ViewType::ALL {
                                ui.selectable_value(&mut selected_view, view, view.label());
                            }
                        });
                    if selected_view != self.current_view {
                        self.set_view(selected_view);
                    }
                });
            });
            ui.add_space(6.0);
        });
    }

    fn render_active_view(&mut self, ui: &mut egui::Ui) {
        let can_write = self.can_write();
        let action = match self.current_view {
            ViewType::Month => MonthView::show(
                ui,
                self.cursor.month_grid(),
                self.cursor.month_index(),
                self.event_index.events(),
                can_write,
            ),
            ViewType::Week => WeekView::show(
                ui,
                self.cursor.selected_date(),
                self.event_index.events(),
                can_write,
            ),
            ViewType::Day => DayView::show(
                ui,
                self.cursor.selected_date(),
                self.event_index.events(),
                can_write,
            ),
            ViewType::Year => YearView::show(
                ui,
                self.cursor.selected_date().year(),
                self.event_index.events(),
            ),
        };
        self.handle_view_action(action);
    }
}

impl eframe::App for CalendarApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.render_header(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.session.is_none() {
                ui.centered_and_justified(|ui| {
                    ui.label(
                        RichText::new("Masuk untuk melihat kalender dokumentasi")
                            .size(16.0),
                    );
                });
                return;
            }
            self.render_active_view(ui);
        });

        let mut dialog_action = DialogAction::None;
        if let Some(dialog) = &mut self.dialog {
            dialog_action = dialog.show(ctx);
        }
        match dialog_action {
            DialogAction::Submit => self.submit_dialog(),
            DialogAction::Cancelled => self.dialog = None,
            DialogAction::None => {}
        }

        // Detail sheet for the selected event; hidden while the dialog is up.
        if self.dialog.is_none() {
            let mut sheet_action = SheetAction::None;
            if let Some(event) = self.event_index.selected() {
                sheet_action = EventSheet::show(ctx, event, self.can_write());
            }
            match sheet_action {
                SheetAction::Edit(id) => {
                    if let Some(event) = self.event_index.get(&id) {
                        self.dialog = Some(EventDialog::edit(event));
                    }
                    self.event_index.close_summary();
                }
                SheetAction::Delete(id) => self.delete_event(&id),
                SheetAction::Close => self.event_index.close_summary(),
                SheetAction::None => {}
            }
        }

        self.toasts.render(ctx);
    }
}
