//! Wall-clock helpers.
//!
//! Ranking functions never read the clock; the caller reads it once here and
//! passes the same day through every computation.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, Offset, Utc};

/// Offset of Asia/Dhaka (UTC+06:00), the default reference zone.
pub const DEFAULT_UTC_OFFSET_MINUTES: i32 = 6 * 60;

/// Clamp a day-of-month into a usable multiplier: anything below 1 becomes 1.
pub fn normalize_day(day: i64) -> u32 {
    day.clamp(1, u32::MAX as i64) as u32
}

fn offset(utc_offset_minutes: i32) -> FixedOffset {
    utc_offset_minutes
        .checked_mul(60)
        .and_then(FixedOffset::east_opt)
        .unwrap_or_else(|| {
            tracing::warn!(utc_offset_minutes, "invalid UTC offset, falling back to UTC");
            Utc.fix()
        })
}

/// Local calendar date of `now` in the given fixed offset.
pub fn local_date(now: DateTime<Utc>, utc_offset_minutes: i32) -> NaiveDate {
    now.with_timezone(&offset(utc_offset_minutes)).date_naive()
}

/// Day-of-month of `now` in the given fixed offset, always at least 1.
pub fn day_of_month(now: DateTime<Utc>, utc_offset_minutes: i32) -> u32 {
    normalize_day(local_date(now, utc_offset_minutes).day() as i64)
}
