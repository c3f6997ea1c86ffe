use chrono::{DateTime, TimeZone, Utc};
use serde::Serialize;

use crate::{calendar, models::activity::Activity};

/// One calendar day of a trip and the activities happening on it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayBucket {
    pub date: DateTime<Utc>,
    pub activities: Vec<Activity>,
}

/// Buckets `activities` into one entry per day from `starts_at` to `ends_at`.
///
/// Days with nothing planned still get an empty bucket. Activities outside
/// the range are dropped and input order is kept inside each bucket. A range
/// that ends before it starts yields no buckets.
pub fn group_by_day<Tz: TimeZone>(
    tz: &Tz,
    starts_at: DateTime<Utc>,
    ends_at: DateTime<Utc>,
    activities: &[Activity],
) -> Vec<DayBucket> {
    let day_count = calendar::days_between(tz, starts_at, ends_at) + 1;
    let day_count = u64::try_from(day_count).unwrap_or(0);

    (0..day_count)
        .map_while(|index| calendar::add_days(tz, starts_at, index))
        .map(|date| DayBucket {
            activities: activities
                .iter()
                .filter(|activity| calendar::is_same_day(tz, activity.occurs_at, &date))
                .cloned()
                .collect(),
            date: date.with_timezone(&Utc),
        })
        .collect()
}
