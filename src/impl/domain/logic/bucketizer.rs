use std::collections::HashMap;

use chrono::{Duration, NaiveDate};

use crate::entities::{AttendanceRecord, Week, WeekBucket};

use super::range_utils::{end_of_week, start_of_week};

/// Enumerates the Sunday-first weeks touching the range. The first week
/// starts on the Sunday on or before `range_start`; the last one is truncated
/// at `range_end`.
pub fn weeks_between(range_start: NaiveDate, range_end: NaiveDate) -> Vec<Week> {
    let mut weeks = Vec::new();
    if range_start > range_end {
        return weeks;
    }
    let mut cursor = start_of_week(range_start);
    while cursor <= range_end {
        weeks.push(Week {
            start: cursor,
            end: std::cmp::min(end_of_week(cursor), range_end),
        });
        cursor += Duration::days(7);
    }
    weeks
}

/// Assigns each record to the emitted week it shares a calendar week with.
/// Membership is by week, not by containment in `[start, end]`, so records
/// later in a truncated final week still land in it. Records outside every
/// emitted week are dropped.
pub fn bucketize<'a, I>(records: I, range_start: NaiveDate, range_end: NaiveDate) -> Vec<WeekBucket<'a>>
where
    I: IntoIterator<Item = &'a AttendanceRecord>,
{
    let mut buckets: Vec<WeekBucket<'a>> = weeks_between(range_start, range_end)
        .into_iter()
        .map(|week| WeekBucket {
            week,
            records: Vec::new(),
        })
        .collect();
    let index_by_start: HashMap<NaiveDate, usize> = buckets
        .iter()
        .enumerate()
        .map(|(i, b)| (b.week.start, i))
        .collect();

    for record in records {
        if let Some(&i) = index_by_start.get(&start_of_week(record.date)) {
            buckets[i].records.push(record);
        }
    }
    buckets
}
