//! Application-state stores: view mode, date cursor, event index.
//!
//! Each store is an explicit object with a single mutation entry point per
//! transition, owned by the app and handed to the views by reference. The
//! views never mutate them directly; they return actions instead.

use chrono::{Datelike, Local, NaiveDate};

use crate::models::event::Event;
use crate::services::calendar::grid::{self, GRID_COLS, GRID_ROWS};

/// Calendar view modes. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewType {
    Month,
    Week,
    Day,
    Year,
}

impl ViewType {
    pub fn label(&self) -> &'static str {
        match self {
            ViewType::Month => "Month",
            ViewType::Week => "Week",
            ViewType::Day => "Day",
            ViewType::Year => "Year",
        }
    }

    pub fn parse(value: &str) -> ViewType {
        match value {
            "Week" => ViewType::Week,
            "Day" => ViewType::Day,
            "Year" => ViewType::Year,
            _ => ViewType::Month,
        }
    }

    pub const ALL: [ViewType; 4] = [
        ViewType::Month,
        ViewType::Week,
        ViewType::Day,
        ViewType::Year,
    ];
}

/// Navigation cursor: the selected date, the month the month view looks at,
/// and the derived 35-cell grid.
///
/// `set_month` replaces the index and the grid together, so a consumer can
/// never observe a new index with a stale grid.
pub struct DateCursor {
    selected_date: NaiveDate,
    year: i32,
    month_index: i32,
    month_grid: [[NaiveDate; GRID_COLS]; GRID_ROWS],
}

impl DateCursor {
    pub fn today() -> Self {
        let now = Local::now().date_naive();
        Self {
            selected_date: now,
            year: now.year(),
            month_index: now.month0() as i32,
            month_grid: grid::month_grid(now.year(), now.month0() as i32),
        }
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.selected_date
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Zero-based month index of the month view, always in 0..=11.
    pub fn month_index(&self) -> i32 {
        self.month_index
    }

    pub fn month_grid(&self) -> &[[NaiveDate; GRID_COLS]; GRID_ROWS] {
        &self.month_grid
    }

    pub fn set_date(&mut self, date: NaiveDate) {
        self.selected_date = date;
    }

    /// Point the month view at (year, month index). Out-of-range indices
    /// (-1, 12) wrap the year; index and grid are replaced in one step.
    pub fn set_month(&mut self, year: i32, month_index: i32) {
        let total = year * 12 + month_index;
        self.year = total.div_euclid(12);
        self.month_index = total.rem_euclid(12);
        self.month_grid = grid::month_grid(self.year, self.month_index);
    }

    pub fn step_months(&mut self, delta: i32) {
        self.set_month(self.year, self.month_index + delta);
    }
}

/// In-memory event collection plus the detail-sheet selection.
///
/// Rebuilt wholesale from the upstream fetch; no incremental patching.
#[derive(Default)]
pub struct EventIndex {
    events: Vec<Event>,
    selected_event_id: Option<String>,
}

impl EventIndex {
    pub fn replace(&mut self, events: Vec<Event>) {
        self.events = events;
        // The selected event may have been deleted upstream.
        if let Some(id) = &self.selected_event_id {
            if !self.events.iter().any(|e| &e.id == id) {
                self.selected_event_id = None;
            }
        }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn get(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    pub fn open_summary(&mut self, id: String) {
        self.selected_event_id = Some(id);
    }

    pub fn close_summary(&mut self) {
        self.selected_event_id = None;
    }

    pub fn selected(&self) -> Option<&Event> {
        self.selected_event_id
            .as_deref()
            .and_then(|id| self.get(id))
    }
}
