//! Precomputed event table.
//!
//! Serves new-moon and principal-term instants computed ahead of time by an
//! external ephemeris. The text format is one record per line:
//!
//! ```text
//! # comment
//! NEW_MOON  2017-07-23T09:46:00Z
//! TERM  Z6  2017-07-22T15:15:00Z
//! ```
//!
//! Timestamps are RFC 3339. Term labels are `Z1`..`Z12` or bare `1`..`12`.
//! Winter Solstices are the `Z11` records.

use std::path::Path;

use chrono::{DateTime, Datelike, Utc};

use crate::error::EphemError;
use crate::event_types::PrincipalTermEvent;
use crate::{EphemerisProvider, SolsticeFinder};

/// In-memory table of new moons and principal terms, both sorted by instant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventTable {
    new_moons: Vec<DateTime<Utc>>,
    terms: Vec<PrincipalTermEvent>,
}

impl EventTable {
    /// Build a table from unsorted events. Duplicate new moons are dropped.
    pub fn new(mut new_moons: Vec<DateTime<Utc>>, mut terms: Vec<PrincipalTermEvent>) -> Self {
        new_moons.sort_unstable();
        new_moons.dedup();
        terms.sort_by_key(|t| t.instant_utc);
        Self { new_moons, terms }
    }

    /// Load a table from a file.
    pub fn load(path: &Path) -> Result<Self, EphemError> {
        let content = std::fs::read_to_string(path)?;
        let table = Self::parse(&content)?;
        tracing::debug!(
            path = %path.display(),
            new_moons = table.new_moons.len(),
            terms = table.terms.len(),
            "loaded event table"
        );
        Ok(table)
    }

    /// Parse a table from its text content.
    pub fn parse(content: &str) -> Result<Self, EphemError> {
        let mut new_moons = Vec::new();
        let mut terms = Vec::new();

        for (i, raw) in content.lines().enumerate() {
            let line_no = i + 1;
            let line = raw.split('#').next().unwrap_or("").trim();
            if line.is_empty() {
                continue;
            }
            let fields: Vec<&str> = line.split_whitespace().collect();
            match fields.as_slice() {
                ["NEW_MOON", ts] => new_moons.push(parse_instant(ts, line_no)?),
                ["TERM", label, ts] => {
                    let index = parse_term_label(label, line_no)?;
                    let instant = parse_instant(ts, line_no)?;
                    let event = PrincipalTermEvent::new(instant, index).map_err(|e| {
                        EphemError::Parse {
                            line: line_no,
                            message: e.to_string(),
                        }
                    })?;
                    terms.push(event);
                }
                [kind, ..] => {
                    return Err(EphemError::Parse {
                        line: line_no,
                        message: format!("unrecognised record '{kind}' ({} fields)", fields.len()),
                    });
                }
                [] => {}
            }
        }

        Ok(Self::new(new_moons, terms))
    }

    /// All new moons, ascending.
    pub fn new_moons(&self) -> &[DateTime<Utc>] {
        &self.new_moons
    }

    /// All principal terms, ascending.
    pub fn principal_terms(&self) -> &[PrincipalTermEvent] {
        &self.terms
    }

    /// `true` when the table holds no events at all.
    pub fn is_empty(&self) -> bool {
        self.new_moons.is_empty() && self.terms.is_empty()
    }
}

impl SolsticeFinder for EventTable {
    fn find_winter_solstice(&self, year: i32) -> Result<DateTime<Utc>, EphemError> {
        self.terms
            .iter()
            .find(|t| t.is_winter_solstice() && t.instant_utc.year() == year)
            .map(|t| t.instant_utc)
            .ok_or(EphemError::SolsticeNotFound { year })
    }
}

impl EphemerisProvider for EventTable {
    fn compute_new_moons(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<DateTime<Utc>>, EphemError> {
        let lo = self.new_moons.partition_point(|t| *t < start);
        let hi = self.new_moons.partition_point(|t| *t <= end);
        Ok(self.new_moons[lo..hi.max(lo)].to_vec())
    }

    fn compute_principal_terms(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<PrincipalTermEvent>, EphemError> {
        let lo = self.terms.partition_point(|t| t.instant_utc < start);
        let hi = self.terms.partition_point(|t| t.instant_utc <= end);
        Ok(self.terms[lo..hi.max(lo)].to_vec())
    }
}

fn parse_instant(s: &str, line: usize) -> Result<DateTime<Utc>, EphemError> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| EphemError::Parse {
            line,
            message: format!("bad timestamp '{s}': {e}"),
        })
}

fn parse_term_label(s: &str, line: usize) -> Result<u8, EphemError> {
    let digits = s.strip_prefix(['Z', 'z']).unwrap_or(s);
    digits.parse::<u8>().map_err(|_| EphemError::Parse {
        line,
        message: format!("bad term label '{s}'"),
    })
}
