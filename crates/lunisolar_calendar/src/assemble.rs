//! Assembling the final record from a resolved month and the local time.

use chrono::{NaiveDateTime, Timelike};
use lunisolar_sexagenary::{day_pair, hour_pair, month_pair, year_pair};

use crate::lunisolar_types::LunisolarDate;
use crate::resolver::ResolvedMonth;

/// Combine a resolved month with the sexagenary pairs.
///
/// Year and month pairs follow the lunar year and month; day and hour pairs
/// follow the request's local wall clock.
pub fn assemble(resolved: &ResolvedMonth, local: NaiveDateTime) -> LunisolarDate {
    let day = day_pair(local.date());
    LunisolarDate {
        year: resolved.lunar_year,
        month: resolved.month,
        day: resolved.day,
        hour: local.hour(),
        is_leap_month: resolved.is_leap,
        year_pair: year_pair(resolved.lunar_year),
        month_pair: month_pair(resolved.lunar_year, resolved.month),
        day_pair: day,
        hour_pair: hour_pair(local, day.stem),
    }
}
