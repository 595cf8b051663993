//! egui user interface.

pub mod app;
pub mod event_dialog;
pub mod event_sheet;
pub mod views;

pub use app::CalendarApp;
