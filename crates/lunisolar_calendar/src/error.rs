//! Error type for calendar conversion.

use chrono::NaiveDate;
use lunisolar_ephem::EphemError;
use lunisolar_time::TimeError;

/// Errors from a lunisolar conversion. All are fatal for the request that
/// raised them; nothing is retried.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum CalendarError {
    /// Malformed date or time, or a local time skipped by a DST transition.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("unknown timezone: {0}")]
    UnknownTimezone(String),
    /// The solstice finder has no Winter Solstice for a year the window needs.
    #[error("winter solstice not found for year {year}")]
    SolsticeNotFound { year: i32 },
    /// Fewer than two new moons in the calculation window.
    #[error("insufficient ephemeris data: {found} new moon(s) in window, need at least 2")]
    InsufficientEphemerisData { found: usize },
    /// No month period contains the anchor Winter Solstice.
    #[error("no month period contains the anchor winter solstice")]
    ZiMonthNotFound,
    /// No month period contains the target civil date.
    #[error("no month period contains civil date {date}")]
    NoPeriodFound { date: NaiveDate },
    /// The target falls in a period before the Winter-Solstice month, which
    /// the window leaves unnumbered.
    #[error("civil date {date} precedes the winter-solstice month of its window")]
    UnnumberedPeriod { date: NaiveDate },
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
    /// Any other ephemeris provider failure.
    #[error("ephemeris: {0}")]
    Ephemeris(EphemError),
}

impl From<TimeError> for CalendarError {
    fn from(e: TimeError) -> Self {
        match e {
            TimeError::UnknownTimezone(id) => Self::UnknownTimezone(id),
            TimeError::InvalidInput(msg) => Self::InvalidInput(msg),
            other => Self::InvalidInput(other.to_string()),
        }
    }
}

impl From<EphemError> for CalendarError {
    fn from(e: EphemError) -> Self {
        match e {
            EphemError::SolsticeNotFound { year } => Self::SolsticeNotFound { year },
            other => Self::Ephemeris(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            CalendarError::InsufficientEphemerisData { found: 1 }.to_string(),
            "insufficient ephemeris data: 1 new moon(s) in window, need at least 2"
        );
        let date = NaiveDate::from_ymd_opt(2017, 7, 30).unwrap();
        assert_eq!(
            CalendarError::NoPeriodFound { date }.to_string(),
            "no month period contains civil date 2017-07-30"
        );
        assert_eq!(
            CalendarError::InvalidConfig("window_margin_days must be 30..=90").to_string(),
            "invalid config: window_margin_days must be 30..=90"
        );
    }

    #[test]
    fn time_errors_map_onto_taxonomy() {
        assert_eq!(
            CalendarError::from(TimeError::UnknownTimezone("Mars/Base".into())),
            CalendarError::UnknownTimezone("Mars/Base".into())
        );
        assert!(matches!(
            CalendarError::from(TimeError::InvalidInput("bad".into())),
            CalendarError::InvalidInput(_)
        ));
    }

    #[test]
    fn missing_solstice_keeps_its_year() {
        assert_eq!(
            CalendarError::from(EphemError::SolsticeNotFound { year: 1899 }),
            CalendarError::SolsticeNotFound { year: 1899 }
        );
        assert!(matches!(
            CalendarError::from(EphemError::Io("gone".into())),
            CalendarError::Ephemeris(EphemError::Io(_))
        ));
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CalendarError>();
    }
}
