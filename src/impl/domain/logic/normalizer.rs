use chrono::{DateTime, NaiveDate, NaiveDateTime};
use fractic_server_error::ServerError;
use tracing::{debug, warn};

use crate::{
    entities::{AttendanceRecord, AttendanceType, BadgeScan, SourceRecord, UserEntry},
    errors::InvalidAttendanceDate,
};

pub(crate) struct Normalizer;

impl Normalizer {
    pub(crate) fn new() -> Self {
        Self
    }

    /// Normalizes a batch of source records. The first invalid record rejects
    /// the whole batch.
    pub(crate) fn process(
        &self,
        source_records: Vec<SourceRecord>,
    ) -> Result<Vec<AttendanceRecord>, ServerError> {
        let total = source_records.len();
        let records = source_records
            .into_iter()
            .map(|r| match r {
                SourceRecord::BadgeScan(scan) => self.normalize_badge_scan(scan),
                SourceRecord::UserEntry(entry) => self.normalize_user_entry(entry),
            })
            .collect::<Result<Vec<_>, _>>()
            .inspect_err(|_| warn!(total, "rejected attendance batch"))?;
        debug!(total, "normalized attendance records");
        Ok(records)
    }

    pub(crate) fn normalize_badge_scan(
        &self,
        scan: BadgeScan,
    ) -> Result<AttendanceRecord, ServerError> {
        Ok(AttendanceRecord {
            date: parse_record_date(&scan.date)?,
            id: scan.id,
            attendance_type: AttendanceType::OfficeVisit,
            user_id: scan.user_id,
            note: scan.note,
            office_location: scan.office_location,
            is_temp_badge: false,
        })
    }

    pub(crate) fn normalize_user_entry(
        &self,
        entry: UserEntry,
    ) -> Result<AttendanceRecord, ServerError> {
        let attendance_type: AttendanceType = entry.attendance_type.parse()?;
        Ok(AttendanceRecord {
            date: parse_record_date(&entry.date)?,
            id: entry.id,
            attendance_type,
            user_id: entry.user_id,
            note: entry.note,
            office_location: entry.office_location,
            is_temp_badge: attendance_type == AttendanceType::OfficeVisit,
        })
    }
}

/// Parses a record date down to its calendar day. Accepts plain ISO dates,
/// RFC 3339 timestamps (date taken in the timestamp's own offset) and naive
/// ISO date-times.
pub(crate) fn parse_record_date(raw: &str) -> Result<NaiveDate, ServerError> {
    let s = raw.trim();
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(d);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.date_naive());
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|dt| dt.date())
        .map_err(|e| InvalidAttendanceDate::with_debug(raw, &e))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn scan(id: &str, date: &str) -> BadgeScan {
        BadgeScan {
            id: id.to_string(),
            date: date.to_string(),
            user_id: "u1".to_string(),
            office_location: Some("HQ".to_string()),
            note: None,
        }
    }

    fn entry(id: &str, date: &str, attendance_type: &str) -> UserEntry {
        UserEntry {
            id: id.to_string(),
            date: date.to_string(),
            attendance_type: attendance_type.to_string(),
            user_id: "u1".to_string(),
            office_location: None,
            note: Some("note".to_string()),
        }
    }

    #[test]
    fn badge_scans_are_verified_office_visits() {
        let record = Normalizer::new()
            .normalize_badge_scan(scan("b1", "2024-03-04"))
            .unwrap();
        assert_eq!(record.attendance_type, AttendanceType::OfficeVisit);
        assert!(!record.is_temp_badge);
        assert_eq!(record.date, d(2024, 3, 4));
        assert_eq!(record.office_location.as_deref(), Some("HQ"));
    }

    #[test]
    fn user_office_visits_are_temp_badge() {
        let normalizer = Normalizer::new();
        let visit = normalizer
            .normalize_user_entry(entry("e1", "2024-03-04", "office-visit"))
            .unwrap();
        assert!(visit.is_temp_badge);
        assert!(visit.is_temp_badge_visit());

        let sick = normalizer
            .normalize_user_entry(entry("e2", "2024-03-05", "sick"))
            .unwrap();
        assert_eq!(sick.attendance_type, AttendanceType::Sick);
        assert!(!sick.is_temp_badge);
        assert_eq!(sick.note.as_deref(), Some("note"));
    }

    #[test]
    fn timestamps_are_truncated_to_day() {
        assert_eq!(
            parse_record_date("2024-03-04T23:30:00-05:00").unwrap(),
            d(2024, 3, 4)
        );
        assert_eq!(
            parse_record_date("2024-03-04T08:15:00.000Z").unwrap(),
            d(2024, 3, 4)
        );
        assert_eq!(
            parse_record_date("2024-03-04T08:15:00").unwrap(),
            d(2024, 3, 4)
        );
        assert_eq!(parse_record_date(" 2024-03-04 ").unwrap(), d(2024, 3, 4));
    }

    #[test]
    fn rejects_unparseable_dates() {
        assert!(parse_record_date("").is_err());
        assert!(parse_record_date("04/03/2024").is_err());
        assert!(parse_record_date("2024-02-30").is_err());
    }

    #[test]
    fn first_invalid_record_rejects_batch() {
        let batch = vec![
            scan("b1", "2024-03-04").into(),
            entry("e1", "2024-03-05", "remote").into(),
            scan("b2", "2024-03-06").into(),
        ];
        assert!(Normalizer::new().process(batch).is_err());

        let batch = vec![
            scan("b1", "2024-03-04").into(),
            scan("b2", "not-a-date").into(),
        ];
        assert!(Normalizer::new().process(batch).is_err());
    }

    #[test]
    fn valid_batch_keeps_order() {
        let batch = vec![
            scan("b1", "2024-03-04").into(),
            entry("e1", "2024-03-05", "pto").into(),
        ];
        let records = Normalizer::new().process(batch).unwrap();
        let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["b1", "e1"]);
    }
}
