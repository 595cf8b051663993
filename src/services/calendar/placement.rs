//! Event placement: which events occupy a given grid cell.
//!
//! Placement is exact string-key matching on the event's stored day (and
//! hour, for the time-grid views), so an event is visible in exactly one
//! cell per view. There is no interval matching and no multi-day spanning.

use chrono::NaiveDate;

use crate::models::event::Event;

/// Number of colors in the event badge palette.
pub const PALETTE_SIZE: usize = 10;

/// A single unit of a rendered grid: a date, plus an hour for the week/day
/// views. Derived per render, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarCell {
    pub date: NaiveDate,
    pub hour: Option<u32>,
}

impl CalendarCell {
    /// Day-granularity cell (month and year views).
    pub fn day(date: NaiveDate) -> Self {
        Self { date, hour: None }
    }

    /// Hour-granularity cell (week and day views).
    pub fn at_hour(date: NaiveDate, hour: u32) -> Self {
        Self {
            date,
            hour: Some(hour),
        }
    }

    fn key(&self) -> String {
        cell_key(self.date, self.hour)
    }
}

/// Comparison key: `DD-MM-YY` for day granularity, `DD-MM-YY HH` with an
/// hour appended for hour granularity.
pub fn cell_key(date: NaiveDate, hour: Option<u32>) -> String {
    match hour {
        None => date.format("%d-%m-%y").to_string(),
        Some(h) => format!("{} {:02}", date.format("%d-%m-%y"), h),
    }
}

fn event_key(event: &Event, granularity_hour: bool) -> String {
    if granularity_hour {
        // Events without a parseable time sit at midnight, matching how the
        // source data behaved before the time field became mandatory.
        cell_key(event.date, Some(event.hour().unwrap_or(0)))
    } else {
        cell_key(event.date, None)
    }
}

/// The subset of `events` occupying `cell`, in the order they were received.
///
/// The upstream fetch is date-ascending, so within a cell this is insertion
/// order; there is deliberately no secondary sort key.
pub fn place_events<'a>(events: &'a [Event], cell: &CalendarCell) -> Vec<&'a Event> {
    let key = cell.key();
    events
        .iter()
        .filter(|event| event_key(event, cell.hour.is_some()) == key)
        .collect()
}

/// Deterministic palette index for an event id: sum of the id's character
/// codes modulo the palette size. Stable across views and re-renders, so the
/// same event always gets the same color without storing one.
pub fn color_index(event_id: &str) -> usize {
    let sum: u64 = event_id.chars().map(|c| c as u64).sum();
    (sum % PALETTE_SIZE as u64) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn event_on(title: &str, date: NaiveDate, time: &str) -> Event {
        Event::new(title, date, time, "user-1").unwrap()
    }

    fn march_15() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    #[test]
    fn test_cell_key_formats() {
        assert_eq!(cell_key(march_15(), None), "15-03-24");
        assert_eq!(cell_key(march_15(), Some(9)), "15-03-24 09");
        assert_eq!(cell_key(march_15(), Some(14)), "15-03-24 14");
    }

    #[test]
    fn test_day_placement_matches_exactly_one_cell() {
        let events = vec![event_on("Rapat", march_15(), "")];

        let hit = place_events(&events, &CalendarCell::day(march_15()));
        assert_eq!(hit.len(), 1);
        assert_eq!(hit[0].title, "Rapat");

        // Every other day of March 2024 is empty.
        for day in 1..=31u32 {
            if day == 15 {
                continue;
            }
            let date = NaiveDate::from_ymd_opt(2024, 3, day).unwrap();
            assert!(place_events(&events, &CalendarCell::day(date)).is_empty());
        }
    }

    #[test]
    fn test_hour_placement_uses_time_field() {
        let events = vec![event_on("Briefing", march_15(), "09:30")];

        let hit = place_events(&events, &CalendarCell::at_hour(march_15(), 9));
        assert_eq!(hit.len(), 1);

        assert!(place_events(&events, &CalendarCell::at_hour(march_15(), 10)).is_empty());
        assert!(place_events(&events, &CalendarCell::at_hour(march_15(), 8)).is_empty());
    }

    #[test]
    fn test_event_without_time_lands_at_midnight() {
        let events = vec![event_on("Tanpa jam", march_15(), "")];

        assert_eq!(
            place_events(&events, &CalendarCell::at_hour(march_15(), 0)).len(),
            1
        );
        assert!(place_events(&events, &CalendarCell::at_hour(march_15(), 12)).is_empty());
    }

    #[test]
    fn test_placement_preserves_insertion_order() {
        let events = vec![
            event_on("Pertama", march_15(), "10:00"),
            event_on("Kedua", march_15(), "08:00"),
            event_on("Ketiga", march_15(), "09:00"),
        ];

        let placed = place_events(&events, &CalendarCell::day(march_15()));
        let titles: Vec<_> = placed.iter().map(|e| e.title.as_str()).collect();
        // No secondary sort: received order wins even though times differ.
        assert_eq!(titles, vec!["Pertama", "Kedua", "Ketiga"]);
    }

    #[test]
    fn test_color_index_is_stable() {
        let id = "4f2b8a9e-1c3d-4e5f-8a7b-6c5d4e3f2a1b";
        let first = color_index(id);
        for _ in 0..10 {
            assert_eq!(color_index(id), first);
        }
        assert!(first < PALETTE_SIZE);
    }

    #[test]
    fn test_color_index_matches_char_code_sum() {
        // "ab" = 97 + 98 = 195, 195 % 10 = 5
        assert_eq!(color_index("ab"), 5);
        assert_eq!(color_index(""), 0);
    }
}
