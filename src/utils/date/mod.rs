// Date display helpers
// Indonesian day/month names used across the views

use chrono::{Datelike, NaiveDate};

pub const DAY_NAMES: [&str; 7] = [
    "Minggu", "Senin", "Selasa", "Rabu", "Kamis", "Jumat", "Sabtu",
];

pub const SHORT_DAY_NAMES: [&str; 7] = ["MIN", "SEN", "SEL", "RAB", "KAM", "JUM", "SAB"];

pub const MONTH_NAMES: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

pub fn day_name(date: NaiveDate) -> &'static str {
    DAY_NAMES[date.weekday().num_days_from_sunday() as usize]
}

pub fn short_day_name(date: NaiveDate) -> &'static str {
    SHORT_DAY_NAMES[date.weekday().num_days_from_sunday() as usize]
}

/// Month name for a zero-based month index.
pub fn month_name(month_index: usize) -> &'static str {
    MONTH_NAMES[month_index % 12]
}

/// "Senin, 10 Juni 2024"
pub fn format_long(date: NaiveDate) -> String {
    format!(
        "{}, {} {} {}",
        day_name(date),
        date.day(),
        month_name(date.month0() as usize),
        date.year()
    )
}
