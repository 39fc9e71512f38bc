//! Timezone resolution for local wall-clock times.
//!
//! The conversion core never looks up zone rules itself; it goes through
//! [`TimezoneResolver`]. [`IanaTimezones`] is the default implementation,
//! backed by the IANA database compiled into `chrono-tz`.

use chrono::{DateTime, LocalResult, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::TimeError;

/// Maps a local wall-clock time in a named timezone to a UTC instant.
pub trait TimezoneResolver {
    /// Resolve `local` in the zone named `timezone_id`.
    ///
    /// Fails with [`TimeError::UnknownTimezone`] for identifiers the resolver
    /// does not know, and [`TimeError::InvalidInput`] for local times that do
    /// not exist in that zone.
    fn to_utc(&self, local: NaiveDateTime, timezone_id: &str) -> Result<DateTime<Utc>, TimeError>;
}

/// IANA timezone database resolver.
///
/// Ambiguous local times (DST fold) resolve to the earlier instant.
/// Local times skipped by a DST gap are rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IanaTimezones;

impl IanaTimezones {
    /// Parse an IANA timezone identifier.
    pub fn parse(timezone_id: &str) -> Result<Tz, TimeError> {
        timezone_id
            .parse::<Tz>()
            .map_err(|_| TimeError::UnknownTimezone(timezone_id.to_string()))
    }
}

impl TimezoneResolver for IanaTimezones {
    fn to_utc(&self, local: NaiveDateTime, timezone_id: &str) -> Result<DateTime<Utc>, TimeError> {
        let tz = Self::parse(timezone_id)?;
        match tz.from_local_datetime(&local) {
            LocalResult::Single(dt) => Ok(dt.with_timezone(&Utc)),
            LocalResult::Ambiguous(earliest, _) => {
                tracing::debug!(%local, timezone_id, "ambiguous local time, using earlier instant");
                Ok(earliest.with_timezone(&Utc))
            }
            LocalResult::None => Err(TimeError::InvalidInput(format!(
                "local time {local} does not exist in {timezone_id}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn local(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn shanghai_is_utc_plus_8() {
        let utc = IanaTimezones
            .to_utc(local(2017, 7, 30, 12, 0), "Asia/Shanghai")
            .unwrap();
        assert_eq!(utc.naive_utc(), local(2017, 7, 30, 4, 0));
    }

    #[test]
    fn ho_chi_minh_is_utc_plus_7() {
        let utc = IanaTimezones
            .to_utc(local(2024, 2, 10, 0, 30), "Asia/Ho_Chi_Minh")
            .unwrap();
        assert_eq!(utc.naive_utc(), local(2024, 2, 9, 17, 30));
    }

    #[test]
    fn unknown_zone_rejected() {
        let err = IanaTimezones
            .to_utc(local(2024, 1, 1, 0, 0), "Asia/Atlantis")
            .unwrap_err();
        assert_eq!(err, TimeError::UnknownTimezone("Asia/Atlantis".into()));
    }

    #[test]
    fn dst_gap_rejected() {
        // 2024-03-10 02:30 does not exist in New York.
        let err = IanaTimezones
            .to_utc(local(2024, 3, 10, 2, 30), "America/New_York")
            .unwrap_err();
        assert!(matches!(err, TimeError::InvalidInput(_)), "got {err:?}");
    }

    #[test]
    fn dst_fold_uses_earlier_instant() {
        // 2024-11-03 01:30 occurs twice in New York; EDT (UTC-4) comes first.
        let utc = IanaTimezones
            .to_utc(local(2024, 11, 3, 1, 30), "America/New_York")
            .unwrap();
        assert_eq!(utc.naive_utc(), local(2024, 11, 3, 5, 30));
    }
}
