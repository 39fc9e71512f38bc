//! Month numbering with leap-month insertion.
//!
//! The period containing the anchor Winter Solstice is month 11 (the Zi
//! month). Walking forward, a period with a principal term takes the next
//! number; a period without one repeats the previous number as a leap month.

use chrono::{DateTime, Utc};

use crate::error::CalendarError;
use crate::period_types::MonthPeriod;

/// Month number of the period containing the Winter Solstice.
pub const ZI_MONTH_NUMBER: u8 = 11;

/// Index of the period with `start_utc <= solstice < end_utc`.
pub fn find_zi_month(periods: &[MonthPeriod], solstice: DateTime<Utc>) -> Result<usize, CalendarError> {
    periods
        .iter()
        .position(|p| p.contains_instant(solstice))
        .ok_or(CalendarError::ZiMonthNotFound)
}

/// Copy of `periods` numbered from the Zi month of `anchor_solstice`.
///
/// Periods before the Zi month come back unnumbered. Any numbering already on
/// the input is replaced.
pub fn assign_month_numbers(
    periods: &[MonthPeriod],
    anchor_solstice: DateTime<Utc>,
) -> Result<Vec<MonthPeriod>, CalendarError> {
    let zi = find_zi_month(periods, anchor_solstice)?;
    let mut numbered = periods.to_vec();

    for p in &mut numbered[..zi] {
        p.month_number = None;
        p.is_leap = false;
    }
    numbered[zi].month_number = Some(ZI_MONTH_NUMBER);
    numbered[zi].is_leap = false;

    let last = numbered[zi + 1..]
        .iter_mut()
        .fold(ZI_MONTH_NUMBER, |current, p| {
            let (number, is_leap) = if p.has_principal_term {
                (current % 12 + 1, false)
            } else {
                (current, true)
            };
            p.month_number = Some(number);
            p.is_leap = is_leap;
            if is_leap {
                tracing::debug!(month = number, start = %p.start_civil, "leap month");
            }
            number
        });

    tracing::debug!(
        zi_index = zi,
        zi_start = %numbered[zi].start_civil,
        numbered = numbered.len() - zi,
        last_month = last,
        "assigned month numbers"
    );
    Ok(numbered)
}
