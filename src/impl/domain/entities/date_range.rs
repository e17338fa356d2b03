use chrono::NaiveDate;

/// Inclusive calendar range. `start > end` is allowed and describes an empty
/// range (zero weeks).
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde_derive::Serialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}
