use crate::entities::UserEntry;

/// User-submitted entry as returned by the REST record source.
#[derive(Debug, serde_derive::Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UserEntryModel {
    pub id: String,
    pub date: String,
    #[serde(rename = "type")]
    pub attendance_type: String,
    pub user_id: String,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub office_location: Option<String>,
}

impl Into<UserEntry> for UserEntryModel {
    fn into(self) -> UserEntry {
        UserEntry {
            id: self.id,
            date: self.date,
            attendance_type: self.attendance_type,
            user_id: self.user_id,
            office_location: self.office_location.filter(|s| !s.trim().is_empty()),
            note: self.note.filter(|s| !s.is_empty()),
        }
    }
}
