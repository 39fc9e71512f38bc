//! Month periods from consecutive new moons.

use chrono::{DateTime, Utc};
use lunisolar_time::civil_date;

use crate::error::CalendarError;
use crate::period_types::MonthPeriod;

/// One unnumbered period per adjacent pair of `new_moons` (ascending).
pub fn build_month_periods(new_moons: &[DateTime<Utc>]) -> Result<Vec<MonthPeriod>, CalendarError> {
    if new_moons.len() < 2 {
        return Err(CalendarError::InsufficientEphemerisData {
            found: new_moons.len(),
        });
    }

    let periods: Vec<MonthPeriod> = new_moons
        .windows(2)
        .enumerate()
        .map(|(index, pair)| MonthPeriod {
            index,
            start_utc: pair[0],
            end_utc: pair[1],
            start_civil: civil_date(pair[0]),
            end_civil: civil_date(pair[1]),
            has_principal_term: false,
            month_number: None,
            is_leap: false,
        })
        .collect();

    tracing::debug!(
        count = periods.len(),
        first = %periods[0].start_civil,
        "built month periods"
    );
    Ok(periods)
}
