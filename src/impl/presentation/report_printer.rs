use crate::entities::{ComplianceReport, LocationCount, WeeklyScore};

pub(crate) struct ReportPrinter {
    weekly_target: u32,
}

impl ReportPrinter {
    pub(crate) fn new(weekly_target: u32) -> Self {
        Self { weekly_target }
    }

    pub(crate) fn print_report(&self, report: &ComplianceReport) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "; --- Weeks ({} to {}) ---------------------------------------------\n\n",
            report.range.start, report.range.end
        ));
        if report.weekly_scores.is_empty() {
            output.push_str("(no weeks in range)\n");
        }
        for score in &report.weekly_scores {
            self.print_week(&mut output, score);
        }
        output.push('\n');

        output.push_str(
            "; --- Summary ----------------------------------------------------------------\n\n",
        );
        let s = &report.summary;
        output.push_str(&format!("weekly average      {:.1}\n", s.weekly_average));
        output.push_str(&format!(
            "compliance rate     {}% ({}/{} weeks)\n",
            s.compliance_rate, s.compliant_weeks, s.total_weeks
        ));
        output.push_str(&format!(
            "office visits       {} ({:.1} per week over ~{} weeks)\n",
            s.total_office_visits, s.office_visits_per_approximate_week, s.approximate_weeks
        ));
        output.push_str(&format!(
            "time off            sick {}, pto {}, event {}, holiday {}\n",
            s.total_sick_days, s.total_pto_days, s.total_event_days, s.total_holiday_days
        ));
        output.push('\n');

        output.push_str(
            "; --- Top locations ----------------------------------------------------------\n\n",
        );
        self.print_locations(&mut output, &s.top_office_locations);

        output
    }

    fn print_week(&self, output: &mut String, score: &WeeklyScore) {
        output.push_str(&format!(
            "{} .. {}  {}/{}  {:<9}  verified {}  temp {}  sick {}  pto {}  event {}  holiday {}\n",
            score.week.start,
            score.week.end,
            score.counted_office_days,
            self.weekly_target,
            if score.compliant { "ok" } else { "short" },
            score.verified_office_days,
            score.temp_badge_days,
            score.sick_days,
            score.pto_days,
            score.event_days,
            score.holiday_days,
        ));
    }

    fn print_locations(&self, output: &mut String, locations: &[LocationCount]) {
        for (i, location) in locations.iter().enumerate() {
            if location.is_no_data() {
                output.push_str(&format!("{}\n", location.name));
            } else {
                output.push_str(&format!("{}. {} ({})\n", i + 1, location.name, location.count));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::{
        domain::logic::compliance_processor::ComplianceProcessor,
        entities::{AttendanceRecord, AttendanceType, CompliancePolicy, DateRange},
    };

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, day).unwrap()
    }

    fn visit(id: &str, day: u32, location: &str) -> AttendanceRecord {
        AttendanceRecord {
            id: id.to_string(),
            date: d(day),
            attendance_type: AttendanceType::OfficeVisit,
            user_id: "u1".to_string(),
            note: None,
            office_location: Some(location.to_string()),
            is_temp_badge: false,
        }
    }

    #[test]
    fn prints_weeks_summary_and_locations() {
        let policy = CompliancePolicy::default();
        let records = vec![
            visit("1", 4, "Berlin"),
            visit("2", 5, "Berlin"),
            visit("3", 6, "Oslo"),
        ];
        let report =
            ComplianceProcessor::new(&records, DateRange::new(d(4), d(15)), &policy).process();
        let printed = ReportPrinter::new(policy.weekly_target).print_report(&report);

        assert!(printed.contains("2024-03-03 .. 2024-03-09  3/3  ok"));
        assert!(printed.contains("2024-03-10 .. 2024-03-15  0/3  short"));
        assert!(printed.contains("weekly average      1.5\n"));
        assert!(printed.contains("compliance rate     50% (1/2 weeks)\n"));
        assert!(printed.contains("1. Berlin (2)\n2. Oslo (1)\n"));
    }

    #[test]
    fn prints_empty_range() {
        let policy = CompliancePolicy::default();
        let records: Vec<AttendanceRecord> = Vec::new();
        let report =
            ComplianceProcessor::new(&records, DateRange::new(d(15), d(4)), &policy).process();
        let printed = ReportPrinter::new(policy.weekly_target).print_report(&report);
        assert!(printed.contains("(no weeks in range)"));
        assert!(printed.contains("compliance rate     0% (0/0 weeks)"));
        assert!(printed.contains("No data\n"));
    }
}
