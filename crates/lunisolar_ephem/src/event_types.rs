//! Types for astronomical events consumed by the calendar pipeline.

use chrono::{DateTime, NaiveDate, Utc};
use lunisolar_time::civil_date;

use crate::error::EphemError;

/// Index of the principal term that coincides with the Winter Solstice.
pub const WINTER_SOLSTICE_TERM: u8 = 11;

/// Names of the principal terms Z1..Z12 (index 0 = Z1).
const PRINCIPAL_TERM_NAMES: [&str; 12] = [
    "雨水", "春分", "穀雨", "小滿", "夏至", "大暑", "處暑", "秋分", "霜降", "小雪", "冬至", "大寒",
];

/// Apparent solar longitude of Z1..Z12 in degrees (index 0 = Z1).
const PRINCIPAL_TERM_LONGITUDES: [u16; 12] = [330, 0, 30, 60, 90, 120, 150, 180, 210, 240, 270, 300];

/// Name of principal term `Z{index}`, or `None` outside 1..=12.
pub fn principal_term_name(index: u8) -> Option<&'static str> {
    PRINCIPAL_TERM_NAMES.get(usize::from(index).checked_sub(1)?).copied()
}

/// Solar longitude (degrees) at which principal term `Z{index}` occurs.
pub fn principal_term_longitude(index: u8) -> Option<u16> {
    PRINCIPAL_TERM_LONGITUDES
        .get(usize::from(index).checked_sub(1)?)
        .copied()
}

/// A principal solar term (zhongqi) crossing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PrincipalTermEvent {
    /// Instant of the crossing.
    pub instant_utc: DateTime<Utc>,
    /// Civil reference date of the crossing.
    pub civil_date: NaiveDate,
    /// Term number, 1..=12 for Z1..Z12.
    pub term_index: u8,
}

impl PrincipalTermEvent {
    /// Build an event, precomputing its civil reference date.
    pub fn new(instant_utc: DateTime<Utc>, term_index: u8) -> Result<Self, EphemError> {
        if !(1..=12).contains(&term_index) {
            return Err(EphemError::InvalidTermIndex {
                index: u32::from(term_index),
            });
        }
        Ok(Self {
            instant_utc,
            civil_date: civil_date(instant_utc),
            term_index,
        })
    }

    /// Whether this is Z11, the Winter Solstice.
    pub fn is_winter_solstice(&self) -> bool {
        self.term_index == WINTER_SOLSTICE_TERM
    }

    /// Traditional name of the term, or "?" for an index outside 1..=12.
    pub fn name(&self) -> &'static str {
        principal_term_name(self.term_index).unwrap_or("?")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn civil_date_precomputed() {
        // 15:15 UTC is 23:15 on the reference meridian: same day.
        let t = Utc.with_ymd_and_hms(2017, 7, 22, 15, 15, 0).unwrap();
        let ev = PrincipalTermEvent::new(t, 6).unwrap();
        assert_eq!(ev.civil_date, NaiveDate::from_ymd_opt(2017, 7, 22).unwrap());
        assert_eq!(ev.name(), "大暑");
        assert!(!ev.is_winter_solstice());
    }

    #[test]
    fn late_utc_rolls_civil_date() {
        let t = Utc.with_ymd_and_hms(2017, 12, 21, 16, 28, 0).unwrap();
        let ev = PrincipalTermEvent::new(t, 11).unwrap();
        assert_eq!(ev.civil_date, NaiveDate::from_ymd_opt(2017, 12, 22).unwrap());
        assert!(ev.is_winter_solstice());
    }

    #[test]
    fn index_out_of_range() {
        let t = Utc.with_ymd_and_hms(2017, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(
            PrincipalTermEvent::new(t, 0),
            Err(EphemError::InvalidTermIndex { index: 0 })
        );
        assert_eq!(
            PrincipalTermEvent::new(t, 13),
            Err(EphemError::InvalidTermIndex { index: 13 })
        );
    }

    #[test]
    fn name_of_hand_built_event_with_bad_index() {
        let t = Utc.with_ymd_and_hms(2017, 1, 1, 0, 0, 0).unwrap();
        let ev = PrincipalTermEvent {
            instant_utc: t,
            civil_date: civil_date(t),
            term_index: 0,
        };
        assert_eq!(ev.name(), "?");
        assert_eq!(PrincipalTermEvent { term_index: 13, ..ev }.name(), "?");
    }

    #[test]
    fn term_tables() {
        assert_eq!(principal_term_name(11), Some("冬至"));
        assert_eq!(principal_term_longitude(11), Some(270));
        assert_eq!(principal_term_longitude(2), Some(0));
        assert_eq!(principal_term_name(0), None);
        assert_eq!(principal_term_name(13), None);
    }
}
