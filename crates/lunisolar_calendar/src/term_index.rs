//! Principal-term tagging of month periods.
//!
//! Terms are attributed by civil date, never by instant: a term whose civil
//! date equals a period's `end_civil` belongs to the following period.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use lunisolar_ephem::PrincipalTermEvent;

use crate::period_types::MonthPeriod;

/// Civil dates on which a principal term falls.
///
/// Built once per conversion from that conversion's terms and dropped with
/// it, so lookups never leak between requests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermDayIndex {
    days: BTreeSet<NaiveDate>,
}

impl TermDayIndex {
    pub fn new(terms: &[PrincipalTermEvent]) -> Self {
        Self {
            days: terms.iter().map(|t| t.civil_date).collect(),
        }
    }

    /// Whether a principal term falls on `date`.
    pub fn is_term_day(&self, date: NaiveDate) -> bool {
        self.days.contains(&date)
    }

    /// Whether any principal term falls in `[start, end)`.
    pub fn any_between(&self, start: NaiveDate, end: NaiveDate) -> bool {
        start < end && self.days.range(start..end).next().is_some()
    }
}

/// Copy of `periods` with `has_principal_term` set from `terms`.
pub fn tag_principal_terms(
    periods: &[MonthPeriod],
    terms: &[PrincipalTermEvent],
) -> Vec<MonthPeriod> {
    let index = TermDayIndex::new(terms);
    periods
        .iter()
        .map(|p| {
            let has_principal_term = index.any_between(p.start_civil, p.end_civil);
            if !has_principal_term {
                tracing::debug!(start = %p.start_civil, "period has no principal term");
            }
            MonthPeriod {
                has_principal_term,
                ..*p
            }
        })
        .collect()
}
