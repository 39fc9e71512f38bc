//! Time normalization for the lunisolar calendar.
//!
//! This crate provides:
//! - Parsing of local `YYYY-MM-DD` / `HH:MM` input
//! - Local → UTC resolution through a pluggable [`TimezoneResolver`]
//! - Civil reference dates (fixed UTC+8 meridian) for date-only comparisons

pub mod civil;
pub mod error;
pub mod local_time;
pub mod zone;

use chrono::{DateTime, NaiveDate, Utc};

pub use civil::{CIVIL_REFERENCE_OFFSET_HOURS, civil_date, civil_days_between};
pub use error::TimeError;
pub use local_time::{LocalInstant, parse_local_datetime};
pub use zone::{IanaTimezones, TimezoneResolver};

/// Converts request input to UTC instants and UTC instants to civil dates.
#[derive(Debug, Clone, Default)]
pub struct TimeNormalizer<Z = IanaTimezones> {
    resolver: Z,
}

impl TimeNormalizer<IanaTimezones> {
    /// Normalizer backed by the IANA timezone database.
    pub fn new() -> Self {
        Self {
            resolver: IanaTimezones,
        }
    }
}

impl<Z: TimezoneResolver> TimeNormalizer<Z> {
    /// Normalizer backed by a custom timezone resolver.
    pub fn with_resolver(resolver: Z) -> Self {
        Self { resolver }
    }

    /// Parse `date`/`time` as wall-clock time in `timezone_id` and resolve it to UTC.
    pub fn to_utc(
        &self,
        date: &str,
        time: &str,
        timezone_id: &str,
    ) -> Result<LocalInstant, TimeError> {
        let local = parse_local_datetime(date, time)?;
        let utc = self.resolver.to_utc(local, timezone_id)?;
        Ok(LocalInstant::new(local, utc))
    }

    /// Civil reference date of a UTC instant.
    pub fn to_civil_date(&self, utc: DateTime<Utc>) -> NaiveDate {
        civil_date(utc)
    }
}
