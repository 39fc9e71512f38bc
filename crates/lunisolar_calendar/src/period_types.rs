//! Lunar month periods.

use chrono::{DateTime, NaiveDate, Utc};
use lunisolar_time::civil_days_between;

/// One lunation: the span between two consecutive new moons.
///
/// Built unnumbered; principal-term tagging and month numbering each return
/// a new sequence with the matching fields filled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthPeriod {
    /// Position in the window's period sequence.
    pub index: usize,
    /// New moon opening the month.
    pub start_utc: DateTime<Utc>,
    /// New moon opening the next month (exclusive).
    pub end_utc: DateTime<Utc>,
    /// Civil reference date of `start_utc`: day 1 of the month.
    pub start_civil: NaiveDate,
    /// Civil reference date of `end_utc` (exclusive).
    pub end_civil: NaiveDate,
    /// Whether a principal term falls on a civil date inside the period.
    pub has_principal_term: bool,
    /// Month number 1..=12, or `None` before the Winter-Solstice month.
    pub month_number: Option<u8>,
    pub is_leap: bool,
}

impl MonthPeriod {
    /// Whether `date` is a day of this month (`start_civil <= date < end_civil`).
    pub fn contains_civil(&self, date: NaiveDate) -> bool {
        self.start_civil <= date && date < self.end_civil
    }

    /// Whether `instant` lies in `[start_utc, end_utc)`.
    pub fn contains_instant(&self, instant: DateTime<Utc>) -> bool {
        self.start_utc <= instant && instant < self.end_utc
    }

    /// Number of civil days in the month (29 or 30 for real lunations).
    pub fn length_days(&self) -> i64 {
        civil_days_between(self.start_civil, self.end_civil)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use lunisolar_time::civil_date;

    fn period(start: DateTime<Utc>, end: DateTime<Utc>) -> MonthPeriod {
        MonthPeriod {
            index: 0,
            start_utc: start,
            end_utc: end,
            start_civil: civil_date(start),
            end_civil: civil_date(end),
            has_principal_term: false,
            month_number: None,
            is_leap: false,
        }
    }

    #[test]
    fn civil_containment_is_half_open() {
        let p = period(
            Utc.with_ymd_and_hms(2017, 7, 23, 9, 46, 0).unwrap(),
            Utc.with_ymd_and_hms(2017, 8, 21, 18, 30, 0).unwrap(),
        );
        assert!(p.contains_civil(NaiveDate::from_ymd_opt(2017, 7, 23).unwrap()));
        assert!(p.contains_civil(NaiveDate::from_ymd_opt(2017, 8, 21).unwrap()));
        // 18:30 UTC is already 08-22 on the reference meridian.
        assert!(!p.contains_civil(NaiveDate::from_ymd_opt(2017, 8, 22).unwrap()));
        assert_eq!(p.length_days(), 30);
    }

    #[test]
    fn instant_containment_is_half_open() {
        let start = Utc.with_ymd_and_hms(2017, 7, 23, 9, 46, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2017, 8, 21, 18, 30, 0).unwrap();
        let p = period(start, end);
        assert!(p.contains_instant(start));
        assert!(!p.contains_instant(end));
    }
}
