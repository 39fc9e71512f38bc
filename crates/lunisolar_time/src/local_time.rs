//! Local wall-clock input and its UTC resolution.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Utc};

use crate::civil::civil_date;
use crate::error::TimeError;

/// Parse a `YYYY-MM-DD` date and an `HH:MM` or `HH:MM:SS` time into a local
/// wall-clock datetime.
pub fn parse_local_datetime(date: &str, time: &str) -> Result<NaiveDateTime, TimeError> {
    let date = date.trim();
    let time = time.trim();
    let d = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|e| TimeError::InvalidInput(format!("date '{date}': {e}")))?;
    let t = NaiveTime::parse_from_str(time, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(time, "%H:%M"))
        .map_err(|e| TimeError::InvalidInput(format!("time '{time}': {e}")))?;
    Ok(d.and_time(t))
}

/// A request time as both the caller's wall clock and the matching UTC instant.
///
/// Day and hour pairs are read from `local`; month resolution uses `utc`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LocalInstant {
    /// Wall-clock time in the request timezone.
    pub local: NaiveDateTime,
    /// The same moment in UTC.
    pub utc: DateTime<Utc>,
}

impl LocalInstant {
    pub fn new(local: NaiveDateTime, utc: DateTime<Utc>) -> Self {
        Self { local, utc }
    }

    /// Civil reference date of the UTC instant.
    pub fn civil_date(&self) -> NaiveDate {
        civil_date(self.utc)
    }

    /// Local hour of day (0-23).
    pub fn local_hour(&self) -> u32 {
        self.local.hour()
    }
}

impl std::fmt::Display for LocalInstant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({})",
            self.local.format("%Y-%m-%d %H:%M:%S"),
            self.utc.format("%Y-%m-%dT%H:%M:%SZ")
        )
    }
}
