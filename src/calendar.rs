//! Day arithmetic in a reference calendar.
//!
//! Every instant is stored in UTC and read as a wall-clock time in the
//! calendar `tz` before days are counted, added or compared, so trip dates
//! and activity timestamps always go through the same convention.

use chrono::{DateTime, Days, TimeDelta, TimeZone, Utc};

/// Whole days from `start` to `end` as local wall-clock times in `tz`.
///
/// Truncates toward zero: an `end` with an earlier time-of-day than `start`
/// counts one day less than the calendar dates suggest.
pub fn days_between<Tz: TimeZone>(tz: &Tz, start: DateTime<Utc>, end: DateTime<Utc>) -> i64 {
    let start = start.with_timezone(tz).naive_local();
    let end = end.with_timezone(tz).naive_local();
    (end - start).num_days()
}

/// `start` moved forward by `days` calendar days, keeping the local time-of-day.
///
/// Falls back to whole 24h steps when the shifted wall-clock time does not
/// exist in `tz`. `None` only on overflow.
pub fn add_days<Tz: TimeZone>(tz: &Tz, start: DateTime<Utc>, days: u64) -> Option<DateTime<Tz>> {
    let local = start.with_timezone(tz);
    local.clone().checked_add_days(Days::new(days)).or_else(|| {
        let delta = TimeDelta::try_days(i64::try_from(days).ok()?)?;
        local.checked_add_signed(delta)
    })
}

/// Whether `instant` falls on the same local date as `reference`.
pub fn is_same_day<Tz: TimeZone>(tz: &Tz, instant: DateTime<Utc>, reference: &DateTime<Tz>) -> bool {
    instant.with_timezone(tz).date_naive() == reference.date_naive()
}
