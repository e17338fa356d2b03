use crate::entities::AttendanceRecord;

use super::range_utils::is_weekend;

/// Drops Saturday and Sunday records, whatever their type.
pub fn filter_business_days<'a, I>(records: I) -> Vec<&'a AttendanceRecord>
where
    I: IntoIterator<Item = &'a AttendanceRecord>,
{
    records.into_iter().filter(|r| !is_weekend(r.date)).collect()
}
