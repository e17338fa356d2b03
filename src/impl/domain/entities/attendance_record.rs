use std::str::FromStr;

use chrono::NaiveDate;
use fractic_server_error::ServerError;

use crate::errors::InvalidAttendanceType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde_derive::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AttendanceType {
    OfficeVisit,
    Sick,
    Pto,
    Event,
    Holiday,
}

/// Canonical attendance record. Every source shape is normalized into this
/// before any computation runs.
#[derive(Debug, Clone, PartialEq, serde_derive::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub id: String,
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub attendance_type: AttendanceType,
    pub user_id: String,
    pub note: Option<String>,
    pub office_location: Option<String>,
    /// Self-reported office visit (no badge swipe). Only meaningful for
    /// office visits; always false for verified scans.
    pub is_temp_badge: bool,
}

// --

impl AttendanceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceType::OfficeVisit => "office-visit",
            AttendanceType::Sick => "sick",
            AttendanceType::Pto => "pto",
            AttendanceType::Event => "event",
            AttendanceType::Holiday => "holiday",
        }
    }
}

impl FromStr for AttendanceType {
    type Err = ServerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "office-visit" => Ok(AttendanceType::OfficeVisit),
            "sick" => Ok(AttendanceType::Sick),
            "pto" => Ok(AttendanceType::Pto),
            "event" => Ok(AttendanceType::Event),
            "holiday" => Ok(AttendanceType::Holiday),
            _ => Err(InvalidAttendanceType::new(s)),
        }
    }
}

impl std::fmt::Display for AttendanceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl AttendanceRecord {
    pub fn is_office_visit(&self) -> bool {
        self.attendance_type == AttendanceType::OfficeVisit
    }

    /// Office visit confirmed by a physical badge scan.
    pub fn is_verified_office_visit(&self) -> bool {
        self.is_office_visit() && !self.is_temp_badge
    }

    pub fn is_temp_badge_visit(&self) -> bool {
        self.is_office_visit() && self.is_temp_badge
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_closed_set_of_types() {
        assert_eq!(
            "office-visit".parse::<AttendanceType>().unwrap(),
            AttendanceType::OfficeVisit
        );
        assert_eq!(" pto ".parse::<AttendanceType>().unwrap(), AttendanceType::Pto);
        assert_eq!("holiday".parse::<AttendanceType>().unwrap(), AttendanceType::Holiday);
    }

    #[test]
    fn rejects_types_outside_closed_set() {
        assert!("remote".parse::<AttendanceType>().is_err());
        assert!("Office-Visit".parse::<AttendanceType>().is_err());
        assert!("".parse::<AttendanceType>().is_err());
    }

    #[test]
    fn display_matches_wire_names() {
        assert_eq!(AttendanceType::OfficeVisit.to_string(), "office-visit");
        assert_eq!(AttendanceType::Sick.to_string(), "sick");
    }
}
