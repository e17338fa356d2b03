use std::collections::HashMap;

use crate::entities::{
    AttendanceRecord, AttendanceType, ComplianceSummary, CompliancePolicy, DateRange,
    LocationCount, WeeklyScore, UNKNOWN_LOCATION_LABEL,
};

use super::{
    compliance_scorer::{compliance_rate, weekly_average},
    range_utils::{round_to_tenth, weeks_in_range},
};

pub(crate) struct Aggregator<'a> {
    scores: &'a [WeeklyScore],
    records: &'a [&'a AttendanceRecord],
    policy: &'a CompliancePolicy,
}

impl<'a> Aggregator<'a> {
    /// `records` must already be weekend-filtered.
    pub(crate) fn new(
        scores: &'a [WeeklyScore],
        records: &'a [&'a AttendanceRecord],
        policy: &'a CompliancePolicy,
    ) -> Self {
        Self {
            scores,
            records,
            policy,
        }
    }

    pub(crate) fn process(self, range: &DateRange) -> ComplianceSummary {
        let count_of = |t: AttendanceType| {
            self.records
                .iter()
                .filter(|r| r.attendance_type == t)
                .count() as u32
        };
        let total_office_visits = count_of(AttendanceType::OfficeVisit);
        let approximate_weeks = if range.is_empty() {
            0
        } else {
            weeks_in_range(range.start, range.end)
        };
        let office_visits_per_approximate_week = if approximate_weeks == 0 {
            0.0
        } else {
            round_to_tenth(total_office_visits as f64 / approximate_weeks as f64)
        };

        ComplianceSummary {
            weekly_average: weekly_average(self.scores),
            compliance_rate: compliance_rate(self.scores),
            compliant_weeks: self.scores.iter().filter(|s| s.compliant).count() as u32,
            total_weeks: self.scores.len() as u32,
            approximate_weeks,
            total_office_visits,
            office_visits_per_approximate_week,
            total_sick_days: count_of(AttendanceType::Sick),
            total_pto_days: count_of(AttendanceType::Pto),
            total_event_days: count_of(AttendanceType::Event),
            total_holiday_days: count_of(AttendanceType::Holiday),
            top_office_locations: top_office_locations(self.records, self.policy.top_locations),
        }
    }
}

/// Office visits (verified or self-reported) grouped by location, most
/// visited first. Ties keep first-encountered order. An empty result is
/// replaced by the single "no data" sentinel.
pub fn top_office_locations(records: &[&AttendanceRecord], limit: usize) -> Vec<LocationCount> {
    let mut counts: Vec<LocationCount> = Vec::new();
    let mut index_by_name: HashMap<&str, usize> = HashMap::new();
    for record in records.iter().filter(|r| r.is_office_visit()) {
        let name = record
            .office_location
            .as_deref()
            .filter(|l| !l.trim().is_empty())
            .unwrap_or(UNKNOWN_LOCATION_LABEL);
        match index_by_name.get(name) {
            Some(&i) => counts[i].count += 1,
            None => {
                index_by_name.insert(name, counts.len());
                counts.push(LocationCount {
                    name: name.to_string(),
                    count: 1,
                });
            }
        }
    }

    // Stable sort keeps first-encountered order among ties.
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(limit);
    if counts.is_empty() {
        return vec![LocationCount::no_data()];
    }
    counts
}
