use tracing::debug;

use crate::entities::{AttendanceRecord, ComplianceReport, CompliancePolicy, DateRange};

use super::{
    aggregator::Aggregator, bucketizer::bucketize, compliance_scorer::ComplianceScorer,
    weekday_filter::filter_business_days,
};

/// The attendance pipeline: weekday filter, weekly buckets, per-week scores,
/// summary. Pure; the same snapshot always produces the same report.
pub(crate) struct ComplianceProcessor<'a> {
    records: Vec<&'a AttendanceRecord>,
    range: DateRange,
    policy: &'a CompliancePolicy,
}

impl<'a> ComplianceProcessor<'a> {
    pub(crate) fn new<I>(records: I, range: DateRange, policy: &'a CompliancePolicy) -> Self
    where
        I: IntoIterator<Item = &'a AttendanceRecord>,
    {
        Self {
            records: records.into_iter().collect(),
            range,
            policy,
        }
    }

    pub(crate) fn process(self) -> ComplianceReport {
        let business_days = filter_business_days(self.records.iter().copied());
        let buckets = bucketize(
            business_days.iter().copied(),
            self.range.start,
            self.range.end,
        );

        // Totals cover exactly the records the weekly scores saw.
        let in_scope: Vec<&AttendanceRecord> = match (buckets.first(), buckets.last()) {
            (Some(first), Some(last)) => {
                let (from, until) = (first.week.start, last.week.full_end());
                business_days
                    .iter()
                    .copied()
                    .filter(|r| from <= r.date && r.date <= until)
                    .collect()
            }
            _ => Vec::new(),
        };

        let weekly_scores = ComplianceScorer::new(self.policy).score_weeks(&buckets);
        let summary = Aggregator::new(&weekly_scores, &in_scope, self.policy).process(&self.range);
        debug!(
            records = self.records.len(),
            business_day_records = business_days.len(),
            weeks = weekly_scores.len(),
            compliance_rate = summary.compliance_rate,
            "computed attendance compliance"
        );

        ComplianceReport {
            range: self.range,
            weekly_scores,
            summary,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate};

    use super::*;
    use crate::entities::AttendanceType;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn record(
        id: &str,
        date: NaiveDate,
        attendance_type: AttendanceType,
        is_temp_badge: bool,
    ) -> AttendanceRecord {
        AttendanceRecord {
            id: id.to_string(),
            date,
            attendance_type,
            user_id: "u1".to_string(),
            note: None,
            office_location: Some("HQ".to_string()),
            is_temp_badge,
        }
    }

    fn badge(id: &str, date: NaiveDate) -> AttendanceRecord {
        record(id, date, AttendanceType::OfficeVisit, false)
    }

    fn run(records: &[AttendanceRecord], start: NaiveDate, end: NaiveDate) -> ComplianceReport {
        let policy = CompliancePolicy::default();
        ComplianceProcessor::new(records, DateRange::new(start, end), &policy).process()
    }

    // Mon 2024-03-04 .. Fri 2024-03-08.
    fn work_week() -> (NaiveDate, NaiveDate) {
        (d(2024, 3, 4), d(2024, 3, 8))
    }

    #[test]
    fn three_verified_visits_make_full_compliance() {
        let (start, end) = work_week();
        let records = vec![
            badge("mon", d(2024, 3, 4)),
            badge("wed", d(2024, 3, 6)),
            badge("fri", d(2024, 3, 8)),
        ];
        let report = run(&records, start, end);
        assert_eq!(report.weekly_scores.len(), 1);
        assert_eq!(report.weekly_scores[0].counted_office_days, 3);
        assert!(report.weekly_scores[0].compliant);
        assert_eq!(report.summary.weekly_average, 3.0);
        assert_eq!(report.summary.compliance_rate, 100);
        assert_eq!(report.summary.top_office_locations[0].name, "HQ");
        assert_eq!(report.summary.top_office_locations[0].count, 3);
    }

    #[test]
    fn temp_badge_and_holiday_substitute() {
        let (start, end) = work_week();
        let records = vec![
            badge("mon", d(2024, 3, 4)),
            record("tue", d(2024, 3, 5), AttendanceType::OfficeVisit, true),
            record("wed", d(2024, 3, 6), AttendanceType::Holiday, false),
        ];
        let score = &run(&records, start, end).weekly_scores[0];
        assert_eq!(score.counted_office_days, 3);
        assert!(score.compliant);
    }

    #[test]
    fn single_verified_visit_is_not_compliant() {
        let (start, end) = work_week();
        let records = vec![badge("mon", d(2024, 3, 4))];
        let report = run(&records, start, end);
        assert_eq!(report.weekly_scores[0].counted_office_days, 1);
        assert!(!report.weekly_scores[0].compliant);
        assert_eq!(report.summary.compliance_rate, 0);
        assert_eq!(report.summary.weekly_average, 1.0);
    }

    #[test]
    fn half_compliant_fortnight() {
        let records = vec![
            badge("1", d(2024, 3, 4)),
            badge("2", d(2024, 3, 5)),
            badge("3", d(2024, 3, 6)),
        ];
        let report = run(&records, d(2024, 3, 4), d(2024, 3, 15));
        assert_eq!(report.summary.total_weeks, 2);
        assert_eq!(report.summary.compliant_weeks, 1);
        assert_eq!(report.summary.compliance_rate, 50);
        assert_eq!(report.summary.weekly_average, 1.5);
    }

    #[test]
    fn weekend_records_never_count() {
        let (start, end) = work_week();
        // Saturday 2024-03-09 falls in the same calendar week.
        let records = vec![
            badge("sat", d(2024, 3, 9)),
            record("sun", d(2024, 3, 3), AttendanceType::Sick, false),
        ];
        let report = run(&records, start, end);
        let score = &report.weekly_scores[0];
        assert_eq!(score.counted_office_days, 0);
        assert_eq!(score.raw_office_visits, 0);
        assert_eq!(score.sick_days, 0);
        assert_eq!(report.summary.total_office_visits, 0);
        assert_eq!(report.summary.total_sick_days, 0);
        assert!(report.summary.top_office_locations[0].is_no_data());
    }

    #[test]
    fn counted_days_stay_within_target_everywhere() {
        let start = d(2024, 1, 1);
        let records: Vec<AttendanceRecord> = start
            .iter_days()
            .take(60)
            .enumerate()
            .map(|(i, date)| {
                let attendance_type = match i % 4 {
                    0 => AttendanceType::OfficeVisit,
                    1 => AttendanceType::Sick,
                    2 => AttendanceType::Event,
                    _ => AttendanceType::OfficeVisit,
                };
                record(&i.to_string(), date, attendance_type, i % 3 == 0)
            })
            .collect();
        let report = run(&records, start, start + Duration::days(59));
        assert!(report
            .weekly_scores
            .iter()
            .all(|s| s.counted_office_days <= 3));
    }

    #[test]
    fn recomputation_is_identical() {
        let (start, end) = work_week();
        let records = vec![
            badge("mon", d(2024, 3, 4)),
            record("tue", d(2024, 3, 5), AttendanceType::Pto, false),
        ];
        assert_eq!(run(&records, start, end), run(&records, start, end));
    }

    #[test]
    fn inverted_range_reports_zeroes() {
        let records = vec![badge("mon", d(2024, 3, 4))];
        let report = run(&records, d(2024, 3, 8), d(2024, 3, 4));
        assert!(report.weekly_scores.is_empty());
        assert_eq!(report.summary.weekly_average, 0.0);
        assert_eq!(report.summary.compliance_rate, 0);
        assert_eq!(report.summary.total_weeks, 0);
        assert_eq!(report.summary.approximate_weeks, 0);
        assert_eq!(report.summary.total_office_visits, 0);
        assert!(report.summary.top_office_locations[0].is_no_data());
    }

    #[test]
    fn totals_ignore_records_outside_emitted_weeks() {
        let (start, end) = work_week();
        let records = vec![
            record("prev", d(2024, 2, 28), AttendanceType::Sick, false),
            record("in", d(2024, 3, 5), AttendanceType::Sick, false),
            record("next", d(2024, 3, 12), AttendanceType::Pto, false),
        ];
        let summary = run(&records, start, end).summary;
        assert_eq!(summary.total_sick_days, 1);
        assert_eq!(summary.total_pto_days, 0);
    }
}
