//! Timestamp value generators.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime};
use rand::Rng;

/// Unix seconds of 2024-01-01 00:00:00 UTC, the start of the generation window.
pub const EPOCH_SECONDS: i64 = 1_704_067_200;

/// Width of the generation window in days (inclusive).
pub const WINDOW_DAYS: i64 = 365;

/// Start of the generation window.
pub fn epoch() -> NaiveDateTime {
    DateTime::from_timestamp(EPOCH_SECONDS, 0)
        .unwrap_or_default()
        .naive_utc()
}

/// Generate a random timestamp: `start` plus a whole number of days in
/// `[0, days]` plus a whole number of hours in `[0, 23]`.
pub fn generate_timestamp<R: Rng>(rng: &mut R, start: NaiveDateTime, days: i64) -> NaiveDateTime {
    let day_offset = rng.gen_range(0..=days);
    let hour_offset = rng.gen_range(0..=23i64);
    start + Duration::days(day_offset) + Duration::hours(hour_offset)
}

/// Generate a date `min_days..=max_days` after `start`.
pub fn generate_date_after<R: Rng>(
    rng: &mut R,
    start: NaiveDate,
    min_days: i64,
    max_days: i64,
) -> NaiveDate {
    start + Duration::days(rng.gen_range(min_days..=max_days))
}
