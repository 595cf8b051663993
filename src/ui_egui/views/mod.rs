//! Calendar view rendering.
//!
//! Each view is a stateless `show` function over the cursor, the event index
//! and the wall clock. Views never mutate application state; they return a
//! [`ViewAction`] that the app applies after the frame.

pub mod day_view;
pub mod event_rendering;
pub mod month_view;
pub mod palette;
pub mod week_view;
pub mod year_view;

use chrono::NaiveDate;

pub use day_view::DayView;
pub use month_view::MonthView;
pub use week_view::WeekView;
pub use year_view::YearView;

/// Action requested by a view during rendering.
pub enum ViewAction {
    None,
    /// Open the create dialog prefilled with a date (and hour, from the
    /// time-grid views).
    CreateEvent {
        date: NaiveDate,
        hour: Option<u32>,
    },
    /// Open the detail sheet for an existing event.
    OpenEvent(String),
    /// Jump the cursor to a date and switch to the day view.
    SwitchToDay(NaiveDate),
}

impl ViewAction {
    pub fn is_none(&self) -> bool {
        matches!(self, ViewAction::None)
    }
}
