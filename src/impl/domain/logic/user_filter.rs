use crate::entities::{AttendanceRecord, UserIdentity};

/// Keeps the records owned by the given user. A record's `user_id` may hold
/// either the user's id (exact match) or email (case-insensitive match).
pub fn filter_for_user<'a, I>(records: I, identity: &UserIdentity) -> Vec<&'a AttendanceRecord>
where
    I: IntoIterator<Item = &'a AttendanceRecord>,
{
    records
        .into_iter()
        .filter(|r| belongs_to(r, identity))
        .collect()
}

fn belongs_to(record: &AttendanceRecord, identity: &UserIdentity) -> bool {
    let owner = record.user_id.trim();
    owner == identity.id
        || identity
            .email
            .as_deref()
            .is_some_and(|email| owner.eq_ignore_ascii_case(email.trim()))
}
