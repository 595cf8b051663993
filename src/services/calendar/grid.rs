//! Date-grid generation for the month, week, day and year layouts.
//!
//! Everything here is pure date arithmetic over `chrono::NaiveDate`; the
//! views only iterate the results. Weekdays are Sunday-indexed (0 = Sunday)
//! throughout.

use chrono::{Datelike, Duration, Local, NaiveDate, NaiveTime};

/// The month view is a fixed five-week grid. Months spanning six calendar
/// weeks spill their trailing days into the next month's grid instead of
/// growing a sixth row; this is a policy choice, not an accident.
pub const GRID_ROWS: usize = 5;
pub const GRID_COLS: usize = 7;

/// Resolve a possibly out-of-range month index (-1, 12, ...) into a concrete
/// (year, month 1-12) pair.
fn normalize_month(year: i32, month_index: i32) -> (i32, u32) {
    let total = year * 12 + month_index;
    (total.div_euclid(12), total.rem_euclid(12) as u32 + 1)
}

fn first_of_month(year: i32, month_index: i32) -> NaiveDate {
    let (year, month) = normalize_month(year, month_index);
    // Safe: normalize_month always yields month in 1..=12.
    NaiveDate::from_ymd_opt(year, month, 1).expect("normalized month is valid")
}

/// 5x7 grid of concrete dates for the given month.
///
/// Cell (0,0) is the first of the month moved back by the month's starting
/// weekday offset, so the grid always begins on a Sunday column; leading and
/// trailing cells are real dates in the adjacent months.
pub fn month_grid(year: i32, month_index: i32) -> [[NaiveDate; GRID_COLS]; GRID_ROWS] {
    let first = first_of_month(year, month_index);
    let offset = first.weekday().num_days_from_sunday() as i64;
    let mut day = first - Duration::days(offset);

    let mut grid = [[first; GRID_COLS]; GRID_ROWS];
    for row in grid.iter_mut() {
        for cell in row.iter_mut() {
            *cell = day;
            day += Duration::days(1);
        }
    }
    grid
}

/// One day of a week strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekDay {
    pub date: NaiveDate,
    pub is_today: bool,
}

/// Seven consecutive dates starting at the cursor's start of week (Sunday),
/// flagged against the real current day.
pub fn week_days(cursor: NaiveDate) -> [WeekDay; 7] {
    week_days_relative_to(cursor, Local::now().date_naive())
}

/// Same as [`week_days`] with an explicit "today", so the flagging is
/// testable without the wall clock.
pub fn week_days_relative_to(cursor: NaiveDate, today: NaiveDate) -> [WeekDay; 7] {
    let offset = cursor.weekday().num_days_from_sunday() as i64;
    let start = cursor - Duration::days(offset);

    std::array::from_fn(|i| {
        let date = start + Duration::days(i as i64);
        WeekDay {
            date,
            is_today: date == today,
        }
    })
}

/// A cell of the year view's per-month grids, which unlike the month view
/// keep a variable week count and flag out-of-month days instead of
/// borrowing the fixed 35-cell shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlaggedDay {
    pub date: NaiveDate,
    pub is_current_month: bool,
}

/// Per-month grid in the flagged-day form: leading previous-month days,
/// the month itself, and trailing next-month days completing the last week.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthCells {
    pub weeks: Vec<[FlaggedDay; 7]>,
}

pub fn flagged_month(year: i32, month_index: i32) -> MonthCells {
    let first = first_of_month(year, month_index);
    let next_first = first_of_month(year, month_index + 1);
    let days_in_month = (next_first - first).num_days();
    let offset = first.weekday().num_days_from_sunday() as i64;

    let start = first - Duration::days(offset);
    let total_cells = offset + days_in_month;
    let week_count = (total_cells + 6) / 7;

    let mut day = start;
    let mut weeks = Vec::with_capacity(week_count as usize);
    for _ in 0..week_count {
        let week = std::array::from_fn(|_| {
            let cell = FlaggedDay {
                date: day,
                is_current_month: day >= first && day < next_first,
            };
            day += Duration::days(1);
            cell
        });
        weeks.push(week);
    }

    MonthCells { weeks }
}

/// Twelve independent month grids for the year view, one per month index.
pub fn year_grid(year: i32) -> Vec<MonthCells> {
    (0..12).map(|month| flagged_month(year, month)).collect()
}

/// The 24 hour slots of a day, for the week/day time grids.
pub fn day_hours() -> [NaiveTime; 24] {
    std::array::from_fn(|h| NaiveTime::from_hms_opt(h as u32, 0, 0).expect("hour in range"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_month_grid_is_35_consecutive_days() {
        let grid = month_grid(2024, 2); // March 2024
        let flat: Vec<NaiveDate> = grid.iter().flatten().copied().collect();
        assert_eq!(flat.len(), 35);
        for pair in flat.windows(2) {
            assert_eq!(pair[1] - pair[0], Duration::days(1));
        }
    }

    #[test]
    fn test_month_grid_first_of_month_at_offset() {
        // March 1st 2024 is a Friday (offset 5 from Sunday).
        let grid = month_grid(2024, 2);
        let flat: Vec<NaiveDate> = grid.iter().flatten().copied().collect();
        assert_eq!(flat[5], NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        // Leading cells belong to February.
        assert_eq!(flat[0], NaiveDate::from_ymd_opt(2024, 2, 25).unwrap());
    }

    #[test]
    fn test_month_grid_starts_on_sunday_column() {
        for month in 0..12 {
            let grid = month_grid(2024, month);
            assert_eq!(grid[0][0].weekday().num_days_from_sunday(), 0);
        }
    }

    #[test_case(-1, 2023, 12 ; "index below zero wraps to december of previous year")]
    #[test_case(12, 2025, 1 ; "index twelve wraps to january of next year")]
    #[test_case(0, 2024, 1 ; "index zero is january")]
    #[test_case(11, 2024, 12 ; "index eleven is december")]
    fn test_month_index_normalization(index: i32, want_year: i32, want_month: u32) {
        let grid = month_grid(2024, index);
        // The 1st of the resolved month always appears in the grid.
        let first = NaiveDate::from_ymd_opt(want_year, want_month, 1).unwrap();
        assert!(grid.iter().flatten().any(|d| *d == first));
    }

    #[test]
    fn test_week_days_are_consecutive_from_sunday() {
        let cursor = NaiveDate::from_ymd_opt(2024, 6, 12).unwrap(); // a Wednesday
        let week = week_days(cursor);
        assert_eq!(week[0].date.weekday().num_days_from_sunday(), 0);
        for pair in week.windows(2) {
            assert_eq!(pair[1].date - pair[0].date, Duration::days(1));
        }
        assert!(week.iter().any(|d| d.date == cursor));
    }

    #[test]
    fn test_week_days_today_flag() {
        let cursor = NaiveDate::from_ymd_opt(2024, 6, 12).unwrap();

        // Today inside the cursor's week: exactly one flag.
        let today = NaiveDate::from_ymd_opt(2024, 6, 14).unwrap();
        let week = week_days_relative_to(cursor, today);
        assert_eq!(week.iter().filter(|d| d.is_today).count(), 1);
        assert!(week.iter().find(|d| d.is_today).unwrap().date == today);

        // Today outside the week: zero flags.
        let elsewhere = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
        let week = week_days_relative_to(cursor, elsewhere);
        assert_eq!(week.iter().filter(|d| d.is_today).count(), 0);
    }

    #[test]
    fn test_flagged_month_marks_out_of_month_days() {
        // June 2024 starts on a Saturday: 6 leading days from May.
        let cells = flagged_month(2024, 5);
        let first_week = &cells.weeks[0];
        assert_eq!(
            first_week.iter().filter(|c| !c.is_current_month).count(),
            6
        );
        assert_eq!(
            first_week[6].date,
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
        );
    }

    #[test]
    fn test_flagged_month_variable_week_count() {
        // February 2015: starts on Sunday, 28 days, exactly 4 weeks.
        assert_eq!(flagged_month(2015, 1).weeks.len(), 4);
        // June 2024: offset 6 + 30 days needs 6 weeks.
        assert_eq!(flagged_month(2024, 5).weeks.len(), 6);
    }

    #[test]
    fn test_year_grid_has_twelve_months() {
        let year = year_grid(2024);
        assert_eq!(year.len(), 12);
        assert!(year[0].weeks[0]
            .iter()
            .any(|c| c.date == NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()));
        assert!(year[11]
            .weeks
            .iter()
            .flatten()
            .any(|c| c.date == NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()));
    }

    #[test]
    fn test_day_hours() {
        let hours = day_hours();
        assert_eq!(hours.len(), 24);
        assert_eq!(hours[0], NaiveTime::from_hms_opt(0, 0, 0).unwrap());
        assert_eq!(hours[23], NaiveTime::from_hms_opt(23, 0, 0).unwrap());
    }
}
