//! Calculation windows anchored on Winter Solstices.

use chrono::{DateTime, Datelike, TimeDelta, Utc};
use lunisolar_ephem::SolsticeFinder;

use crate::config::ConversionConfig;
use crate::error::CalendarError;

/// Time range whose new moons and principal terms suffice to number every
/// month of one solstice-to-solstice year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalculationWindow {
    /// Anchor solstice minus the margin.
    pub start: DateTime<Utc>,
    /// Closing solstice plus the margin.
    pub end: DateTime<Utc>,
    /// Winter Solstice on or before the target; its month is numbered 11.
    pub anchor_solstice: DateTime<Utc>,
    /// Winter Solstice after the target.
    pub closing_solstice: DateTime<Utc>,
}

impl CalculationWindow {
    /// Smallest window covering both `self` and `other`, keeping `self`'s anchor.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
            ..*self
        }
    }
}

/// Window for `target`.
///
/// Looks up the Winter Solstices of the target's UTC year and its
/// neighbours. A target at or after this year's solstice is anchored on it;
/// an earlier target is anchored on last year's.
pub fn compute_window<S: SolsticeFinder>(
    finder: &S,
    target: DateTime<Utc>,
    config: &ConversionConfig,
) -> Result<CalculationWindow, CalendarError> {
    let year = target.year();
    let previous = finder.find_winter_solstice(year - 1)?;
    let current = finder.find_winter_solstice(year)?;
    let next = finder.find_winter_solstice(year + 1)?;

    let (anchor_solstice, closing_solstice) = if target >= current {
        (current, next)
    } else {
        (previous, current)
    };
    let margin = TimeDelta::days(i64::from(config.window_margin_days));

    let window = CalculationWindow {
        start: anchor_solstice - margin,
        end: closing_solstice + margin,
        anchor_solstice,
        closing_solstice,
    };
    tracing::debug!(
        %target,
        start = %window.start,
        end = %window.end,
        anchor = %anchor_solstice,
        "planned calculation window"
    );
    Ok(window)
}
