use super::{date_range::DateRange, week::Week};

pub const UNKNOWN_LOCATION_LABEL: &str = "Unknown";
pub const NO_DATA_LABEL: &str = "No data";

#[derive(Debug, Clone, PartialEq, serde_derive::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyScore {
    pub week: Week,
    /// Verified office days plus substitutes, capped at the weekly target.
    pub counted_office_days: u32,
    pub compliant: bool,
    /// All office visits in the week, verified or self-reported.
    pub raw_office_visits: u32,
    pub verified_office_days: u32,
    pub temp_badge_days: u32,
    pub substitutes_used: u32,
    pub sick_days: u32,
    pub pto_days: u32,
    pub event_days: u32,
    pub holiday_days: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, serde_derive::Serialize)]
pub struct LocationCount {
    pub name: String,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, serde_derive::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceSummary {
    pub weekly_average: f64,
    /// Percentage of compliant weeks, 0..=100.
    pub compliance_rate: u32,
    pub compliant_weeks: u32,
    /// Exact number of calendar weeks in the range.
    pub total_weeks: u32,
    /// Workday-based estimate of the week count (workdays / 5, at least 1).
    pub approximate_weeks: u32,
    pub total_office_visits: u32,
    pub office_visits_per_approximate_week: f64,
    pub total_sick_days: u32,
    pub total_pto_days: u32,
    pub total_event_days: u32,
    pub total_holiday_days: u32,
    pub top_office_locations: Vec<LocationCount>,
}

#[derive(Debug, Clone, PartialEq, serde_derive::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceReport {
    pub range: DateRange,
    pub weekly_scores: Vec<WeeklyScore>,
    pub summary: ComplianceSummary,
}

// --

impl LocationCount {
    /// Sentinel entry returned in place of an empty list.
    pub fn no_data() -> Self {
        Self {
            name: NO_DATA_LABEL.to_string(),
            count: 0,
        }
    }

    pub fn is_no_data(&self) -> bool {
        self.count == 0 && self.name == NO_DATA_LABEL
    }
}
