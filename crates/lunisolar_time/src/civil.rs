//! Civil reference dates.
//!
//! Month boundaries, principal-term days and the target day are compared as
//! dates, not instants. All of them are read on one fixed meridian (UTC+8),
//! whatever timezone the request was made in, so that every comparison in a
//! conversion sees the same calendar day for the same instant.

use chrono::{DateTime, NaiveDate, TimeDelta, Utc};

/// Offset of the civil reference meridian from UTC, in hours.
pub const CIVIL_REFERENCE_OFFSET_HOURS: i64 = 8;

/// Convert a UTC instant to its civil reference date (UTC+8, truncated to the day).
pub fn civil_date(utc: DateTime<Utc>) -> NaiveDate {
    (utc.naive_utc() + TimeDelta::hours(CIVIL_REFERENCE_OFFSET_HOURS)).date()
}

/// Whole days from `from` to `to` (negative when `to` is earlier).
pub fn civil_days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    to.signed_duration_since(from).num_days()
}
