use chrono::{Datelike, Duration, NaiveDate, Weekday};

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Sunday on or before the given date.
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_sunday() as i64)
}

/// Saturday on or after the given date.
pub fn end_of_week(date: NaiveDate) -> NaiveDate {
    start_of_week(date) + Duration::days(6)
}

/// Whether both dates fall in the same Sunday-first calendar week.
pub fn is_same_week(a: NaiveDate, b: NaiveDate) -> bool {
    start_of_week(a) == start_of_week(b)
}

/// Number of Monday-Friday days between the given dates, both inclusive.
pub fn count_workdays(start: NaiveDate, end: NaiveDate) -> u32 {
    start
        .iter_days()
        .take_while(|d| *d <= end)
        .filter(|d| !is_weekend(*d))
        .count() as u32
}

/// Cheap week-count approximation based on workdays (5 per week, at least 1).
/// Use the bucketizer when exact week boundaries matter.
pub fn weeks_in_range(start: NaiveDate, end: NaiveDate) -> u32 {
    let weeks = (count_workdays(start, end) as f64 / 5.0).round() as u32;
    weeks.max(1)
}

/// Rounds half-up to one decimal place.
pub(crate) fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
