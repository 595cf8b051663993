//! Today/previous/next navigation, interpreted per active view.

use chrono::{Datelike, Duration, Local, NaiveDate};

use super::state::ViewType;
use super::CalendarApp;

impl CalendarApp {
    /// Re-center the active view on the current day.
    pub(super) fn jump_to_today(&mut self) {
        let today = Local::now().date_naive();
        match self.current_view {
            ViewType::Month => {
                self.cursor.set_month(today.year(), today.month0() as i32);
            }
            ViewType::Week | ViewType::Day => {
                self.cursor.set_date(today);
                self.cursor.set_month(today.year(), today.month0() as i32);
            }
            ViewType::Year => {
                self.cursor.set_date(today);
            }
        }
    }

    /// Step the cursor by one unit of the active view: a month, a week,
    /// a day or a year. `delta` is -1 or +1.
    pub(super) fn navigate(&mut self, delta: i32) {
        match self.current_view {
            ViewType::Month => self.cursor.step_months(delta),
            ViewType::Week => {
                let date = self.cursor.selected_date() + Duration::days(7 * delta as i64);
                self.cursor.set_date(date);
            }
            ViewType::Day => {
                let date = self.cursor.selected_date() + Duration::days(delta as i64);
                self.cursor.set_date(date);
            }
            ViewType::Year => {
                let current = self.cursor.selected_date();
                let year = current.year() + delta;
                // Feb 29 has no counterpart in a non-leap year.
                let date = current.with_year(year).unwrap_or_else(|| {
                    NaiveDate::from_ymd_opt(year, 2, 28).unwrap_or(current)
                });
                self.cursor.set_date(date);
            }
        }
    }
}
