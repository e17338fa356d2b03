use chrono::{Duration, NaiveDate};

use super::attendance_record::AttendanceRecord;

/// Sunday-start calendar week. `end` is the Saturday, or the range end when
/// the week was truncated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde_derive::Serialize)]
pub struct Week {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeekBucket<'a> {
    pub week: Week,
    pub records: Vec<&'a AttendanceRecord>,
}

// --

impl Week {
    /// Saturday of this week, ignoring truncation.
    pub fn full_end(&self) -> NaiveDate {
        self.start + Duration::days(6)
    }

    pub fn is_truncated(&self) -> bool {
        self.end < self.full_end()
    }
}
