//! Conversion orchestrator.
//!
//! Single path: normalize → window → ephemeris → periods → term tagging →
//! numbering → resolution → sexagenary pairs.
//!
//! Batch path: ephemeris, periods and tagging run once over the union of
//! every entry's window; numbering runs once per distinct anchor solstice.

use std::collections::BTreeMap;

use chrono::{DateTime, TimeDelta, Utc};
use lunisolar_ephem::{EphemerisProvider, SolsticeFinder};
use lunisolar_time::{IanaTimezones, LocalInstant, TimeNormalizer, TimezoneResolver};

use crate::assemble::assemble;
use crate::config::ConversionConfig;
use crate::error::CalendarError;
use crate::leap_month::{assign_month_numbers, find_zi_month};
use crate::lunisolar_types::LunisolarDate;
use crate::month_period::build_month_periods;
use crate::period_types::MonthPeriod;
use crate::resolver::{lunar_year, resolve_month};
use crate::term_index::tag_principal_terms;
use crate::window::{CalculationWindow, compute_window};

/// Converts solar date-times to lunisolar dates.
///
/// Holds no state between calls; every conversion rebuilds its periods from
/// the ephemeris.
#[derive(Debug, Clone)]
pub struct LunisolarCalendar<E, Z = IanaTimezones> {
    ephemeris: E,
    normalizer: TimeNormalizer<Z>,
    config: ConversionConfig,
}

impl<E> LunisolarCalendar<E, IanaTimezones>
where
    E: SolsticeFinder + EphemerisProvider,
{
    /// Calendar over `ephemeris`, resolving zones with the IANA database.
    pub fn new(ephemeris: E) -> Self {
        Self::with_timezones(ephemeris, IanaTimezones)
    }
}

impl<E, Z> LunisolarCalendar<E, Z>
where
    E: SolsticeFinder + EphemerisProvider,
    Z: TimezoneResolver,
{
    /// Calendar over `ephemeris` with a custom timezone collaborator.
    pub fn with_timezones(ephemeris: E, timezones: Z) -> Self {
        Self {
            ephemeris,
            normalizer: TimeNormalizer::with_resolver(timezones),
            config: ConversionConfig::default(),
        }
    }

    /// Replace the configuration after validating it.
    pub fn with_config(mut self, config: ConversionConfig) -> Result<Self, CalendarError> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    pub fn ephemeris(&self) -> &E {
        &self.ephemeris
    }

    /// Convert one local date and time in `timezone_id`.
    #[tracing::instrument(skip(self))]
    pub fn convert(
        &self,
        date: &str,
        time: &str,
        timezone_id: &str,
    ) -> Result<LunisolarDate, CalendarError> {
        let instant = self.normalizer.to_utc(date, time, timezone_id)?;
        let window = compute_window(&self.ephemeris, instant.utc, &self.config)?;
        let periods = self.tagged_periods(&window)?;
        let numbered = assign_month_numbers(&periods, window.anchor_solstice)?;
        let result = resolve(&numbered, &instant)?;
        tracing::info!(%instant, %result, "converted");
        Ok(result)
    }

    /// Convert many `(date, time)` entries sharing one timezone.
    ///
    /// Returns one result per entry, in input order. A failing entry does not
    /// affect the others; entries sharing an anchor solstice see the same
    /// month numbering.
    #[tracing::instrument(skip_all, fields(entries = entries.len(), timezone = timezone_id))]
    pub fn convert_batch<D, T>(
        &self,
        entries: &[(D, T)],
        timezone_id: &str,
    ) -> Vec<Result<LunisolarDate, CalendarError>>
    where
        D: AsRef<str>,
        T: AsRef<str>,
    {
        let planned: Vec<Result<(LocalInstant, CalculationWindow), CalendarError>> = entries
            .iter()
            .map(|(date, time)| {
                let instant = self
                    .normalizer
                    .to_utc(date.as_ref(), time.as_ref(), timezone_id)?;
                let window = compute_window(&self.ephemeris, instant.utc, &self.config)?;
                Ok((instant, window))
            })
            .collect();

        let shared = planned
            .iter()
            .filter_map(|p| p.as_ref().ok().map(|(_, w)| *w))
            .reduce(|a, b| a.union(&b))
            .map(|union| self.tagged_periods(&union));

        let mut numbered_by_anchor: BTreeMap<DateTime<Utc>, Result<Vec<MonthPeriod>, CalendarError>> =
            BTreeMap::new();

        let results: Vec<Result<LunisolarDate, CalendarError>> = planned
            .into_iter()
            .enumerate()
            .map(|(position, entry)| {
                let result = entry.and_then(|(instant, window)| {
                    // `shared` is only absent when every entry already failed.
                    let periods = match &shared {
                        Some(Ok(periods)) => periods,
                        Some(Err(e)) => return Err(e.clone()),
                        None => return Err(CalendarError::InsufficientEphemerisData { found: 0 }),
                    };
                    let numbered = numbered_by_anchor
                        .entry(window.anchor_solstice)
                        .or_insert_with(|| assign_month_numbers(periods, window.anchor_solstice))
                        .as_ref()
                        .map_err(Clone::clone)?;
                    resolve(numbered, &instant)
                });
                if let Err(e) = &result {
                    tracing::warn!(position, error = %e, "batch entry failed");
                }
                result
            })
            .collect();

        tracing::info!(
            anchors = numbered_by_anchor.len(),
            failed = results.iter().filter(|r| r.is_err()).count(),
            "converted batch"
        );
        results
    }

    /// Numbered months of one lunar year, in order, leap month included.
    ///
    /// Months before the Winter-Solstice month of `year` are numbered from the
    /// solstice of `year - 1`; that month and the ones after it from the
    /// solstice of `year`, matching the anchor [`convert`](Self::convert) uses.
    pub fn lunar_year_months(&self, year: i32) -> Result<Vec<MonthPeriod>, CalendarError> {
        let opening = self.ephemeris.find_winter_solstice(year - 1)?;
        let turning = self.ephemeris.find_winter_solstice(year)?;
        let closing = self.ephemeris.find_winter_solstice(year + 1)?;
        let margin = TimeDelta::days(i64::from(self.config.window_margin_days));
        let window = CalculationWindow {
            start: opening - margin,
            end: closing + margin,
            anchor_solstice: opening,
            closing_solstice: closing,
        };

        let periods = self.tagged_periods(&window)?;
        let zi = find_zi_month(&periods, turning)?;
        let early = assign_month_numbers(&periods, opening)?;
        let late = assign_month_numbers(&periods, turning)?;
        let months: Vec<MonthPeriod> = early[..zi]
            .iter()
            .chain(&late[zi..])
            .filter(|p| lunar_year(p) == Some(year))
            .copied()
            .collect();
        tracing::debug!(year, months = months.len(), "listed lunar year");
        Ok(months)
    }

    fn tagged_periods(&self, window: &CalculationWindow) -> Result<Vec<MonthPeriod>, CalendarError> {
        let new_moons = self.ephemeris.compute_new_moons(window.start, window.end)?;
        let terms = self
            .ephemeris
            .compute_principal_terms(window.start, window.end)?;
        let periods = build_month_periods(&new_moons)?;
        Ok(tag_principal_terms(&periods, &terms))
    }
}

fn resolve(numbered: &[MonthPeriod], instant: &LocalInstant) -> Result<LunisolarDate, CalendarError> {
    let resolved = resolve_month(numbered, instant.utc)?;
    Ok(assemble(&resolved, instant.local))
}
