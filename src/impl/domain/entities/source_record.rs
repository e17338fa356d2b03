// Raw records as delivered by the two record sources, before normalization.
// Dates and types are kept as strings so the normalizer can reject bad input
// explicitly.

#[derive(Debug, Clone, PartialEq)]
pub struct BadgeScan {
    pub id: String,
    pub date: String,
    pub user_id: String,
    pub office_location: Option<String>,
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserEntry {
    pub id: String,
    pub date: String,
    pub attendance_type: String,
    pub user_id: String,
    pub office_location: Option<String>,
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SourceRecord {
    BadgeScan(BadgeScan),
    UserEntry(UserEntry),
}

// --

impl From<BadgeScan> for SourceRecord {
    fn from(scan: BadgeScan) -> Self {
        SourceRecord::BadgeScan(scan)
    }
}

impl From<UserEntry> for SourceRecord {
    fn from(entry: UserEntry) -> Self {
        SourceRecord::UserEntry(entry)
    }
}
