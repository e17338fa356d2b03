use crate::entities::{AttendanceRecord, AttendanceType, CompliancePolicy, WeekBucket, WeeklyScore};

use super::range_utils::round_to_tenth;

/// Record kinds that can fill the gap between verified office days and the
/// weekly target, in the order they are consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Substitute {
    TempBadge,
    Sick,
    Pto,
    Event,
    Holiday,
}

const SUBSTITUTION_PRIORITY: [Substitute; 5] = [
    Substitute::TempBadge,
    Substitute::Sick,
    Substitute::Pto,
    Substitute::Event,
    Substitute::Holiday,
];

#[derive(Debug, Default)]
struct WeekTally {
    verified: u32,
    temp_badge: u32,
    sick: u32,
    pto: u32,
    event: u32,
    holiday: u32,
}

impl WeekTally {
    fn of(records: &[&AttendanceRecord]) -> Self {
        records.iter().fold(Self::default(), |mut t, r| {
            match r.attendance_type {
                AttendanceType::OfficeVisit if r.is_temp_badge => t.temp_badge += 1,
                AttendanceType::OfficeVisit => t.verified += 1,
                AttendanceType::Sick => t.sick += 1,
                AttendanceType::Pto => t.pto += 1,
                AttendanceType::Event => t.event += 1,
                AttendanceType::Holiday => t.holiday += 1,
            }
            t
        })
    }

    fn available(&self, substitute: Substitute) -> u32 {
        match substitute {
            Substitute::TempBadge => self.temp_badge,
            Substitute::Sick => self.sick,
            Substitute::Pto => self.pto,
            Substitute::Event => self.event,
            Substitute::Holiday => self.holiday,
        }
    }
}

pub(crate) struct ComplianceScorer<'a> {
    policy: &'a CompliancePolicy,
}

impl<'a> ComplianceScorer<'a> {
    pub(crate) fn new(policy: &'a CompliancePolicy) -> Self {
        Self { policy }
    }

    /// Scores one week. Verified office days count first; the remaining need
    /// is filled from substitutes in priority order, and the result never
    /// exceeds the weekly target.
    pub(crate) fn score_week(&self, bucket: &WeekBucket) -> WeeklyScore {
        let target = self.policy.weekly_target;
        let tally = WeekTally::of(&bucket.records);

        let need = target.saturating_sub(tally.verified);
        let substitutes_used = SUBSTITUTION_PRIORITY
            .iter()
            .fold((need, 0u32), |(remaining, used), s| {
                let take = std::cmp::min(remaining, tally.available(*s));
                (remaining - take, used + take)
            })
            .1;
        let counted_office_days = std::cmp::min(target, tally.verified + substitutes_used);

        WeeklyScore {
            week: bucket.week,
            counted_office_days,
            compliant: counted_office_days >= target,
            raw_office_visits: tally.verified + tally.temp_badge,
            verified_office_days: tally.verified,
            temp_badge_days: tally.temp_badge,
            substitutes_used,
            sick_days: tally.sick,
            pto_days: tally.pto,
            event_days: tally.event,
            holiday_days: tally.holiday,
        }
    }

    pub(crate) fn score_weeks(&self, buckets: &[WeekBucket]) -> Vec<WeeklyScore> {
        buckets.iter().map(|b| self.score_week(b)).collect()
    }
}

/// Mean counted office days per week, rounded to one decimal. Zero weeks
/// yield 0.
pub fn weekly_average(scores: &[WeeklyScore]) -> f64 {
    if scores.is_empty() {
        return 0.0;
    }
    let total: u32 = scores.iter().map(|s| s.counted_office_days).sum();
    round_to_tenth(total as f64 / scores.len() as f64)
}

/// Percentage of compliant weeks, rounded to an integer. Zero weeks yield 0.
pub fn compliance_rate(scores: &[WeeklyScore]) -> u32 {
    if scores.is_empty() {
        return 0;
    }
    let compliant = scores.iter().filter(|s| s.compliant).count();
    (compliant as f64 / scores.len() as f64 * 100.0).round() as u32
}
