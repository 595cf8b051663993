//! Desktop calendar for documenting events.
//!
//! Events belong to exactly one day, carry advisory time-of-day metadata and
//! optional documentation (a URL and up to four uploaded files). The calendar
//! renders them in month, week, day and year layouts; writes are gated by a
//! session from an external auth provider.

pub mod models;
pub mod services;
pub mod ui_egui;
pub mod utils;
