//! Date arithmetic relative to an explicit "now".
//!
//! The library never reads the wall clock; callers pass the current
//! moment in. Deadlines are date-only and anchored at local midnight.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};

const SECONDS_PER_DAY: i64 = 86_400;

/// Whole days from `now` until `deadline` at midnight, rounded toward
/// the future. A deadline later today yields 0; a passed deadline goes
/// negative.
pub fn days_until(deadline: NaiveDate, now: NaiveDateTime) -> i64 {
    let midnight = deadline.and_time(NaiveTime::MIN);
    let seconds = (midnight - now).num_seconds();
    let days = seconds.div_euclid(SECONDS_PER_DAY);
    if seconds.rem_euclid(SECONDS_PER_DAY) == 0 {
        days
    } else {
        days + 1
    }
}

/// A deadline strictly before `now`, regardless of task status.
pub fn is_overdue(deadline: NaiveDate, now: NaiveDateTime) -> bool {
    days_until(deadline, now) < 0
}

/// Week bucket key for the deadline trend: `{year}-W{n}` where n is a
/// simplified month-aligned week index (Monday offset), NOT an ISO-8601
/// week number. Kept as-is so trend buckets stay comparable with the
/// historical series.
pub fn week_key(date: NaiveDate) -> String {
    let monday_offset = date.weekday().num_days_from_monday();
    let week = (date.day() + monday_offset).div_ceil(7);
    format!("{}-W{}", date.year(), week)
}
