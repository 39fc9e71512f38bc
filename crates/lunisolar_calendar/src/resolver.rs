//! Locating a target instant in numbered month periods.

use chrono::{DateTime, Datelike, Utc};
use lunisolar_time::{civil_date, civil_days_between};

use crate::error::CalendarError;
use crate::period_types::MonthPeriod;

/// Longest possible lunar month.
pub const MAX_LUNAR_DAY: u8 = 30;

/// Lunar month, day and year of a target instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedMonth {
    pub period: MonthPeriod,
    pub lunar_year: i32,
    pub month: u8,
    pub is_leap: bool,
    /// Day of the month, 1..=30.
    pub day: u8,
}

/// Period whose civil dates contain the target's civil date.
pub fn find_period(periods: &[MonthPeriod], target: DateTime<Utc>) -> Result<&MonthPeriod, CalendarError> {
    let date = civil_date(target);
    periods
        .iter()
        .find(|p| p.contains_civil(date))
        .ok_or(CalendarError::NoPeriodFound { date })
}

/// Day of the month for `target`, counting the period's first civil day as 1.
pub fn lunar_day(target: DateTime<Utc>, period: &MonthPeriod) -> u8 {
    let days = civil_days_between(period.start_civil, civil_date(target)) + 1;
    days.clamp(1, i64::from(MAX_LUNAR_DAY)) as u8
}

/// Lunar year a numbered period belongs to, or `None` if it is unnumbered.
///
/// Months 1-11 take the UTC year of their opening new moon. Month 12 may open
/// in January, after the Gregorian year has turned; it still belongs to the
/// previous lunar year.
pub fn lunar_year(period: &MonthPeriod) -> Option<i32> {
    let month = period.month_number?;
    let year = period.start_utc.year();
    if month == 12 && period.start_utc.month() <= 2 {
        Some(year - 1)
    } else {
        Some(year)
    }
}

/// Find the period of `target` and derive its lunar year, month and day.
pub fn resolve_month(periods: &[MonthPeriod], target: DateTime<Utc>) -> Result<ResolvedMonth, CalendarError> {
    let period = find_period(periods, target)?;
    let (Some(month), Some(year)) = (period.month_number, lunar_year(period)) else {
        return Err(CalendarError::UnnumberedPeriod {
            date: civil_date(target),
        });
    };
    Ok(ResolvedMonth {
        period: *period,
        lunar_year: year,
        month,
        is_leap: period.is_leap,
        day: lunar_day(target, period),
    })
}
