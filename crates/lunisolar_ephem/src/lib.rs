//! Ephemeris seams for the lunisolar calendar.
//!
//! The calendar never computes lunar or solar positions. It consumes event
//! instants through two traits:
//! - [`SolsticeFinder`]: the Winter Solstice of a given year
//! - [`EphemerisProvider`]: new moons and principal terms inside a window
//!
//! [`EventTable`] implements both from precomputed data.

pub mod error;
pub mod event_types;
pub mod table;

use chrono::{DateTime, Utc};

pub use error::EphemError;
pub use event_types::{
    PrincipalTermEvent, WINTER_SOLSTICE_TERM, principal_term_longitude, principal_term_name,
};
pub use table::EventTable;

/// Locates Winter Solstice instants.
pub trait SolsticeFinder {
    /// Winter Solstice falling in Gregorian (UTC) year `year`.
    fn find_winter_solstice(&self, year: i32) -> Result<DateTime<Utc>, EphemError>;
}

/// Supplies new-moon and principal-term instants for a time window.
pub trait EphemerisProvider {
    /// New moons with `start <= instant <= end`, ascending.
    fn compute_new_moons(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<DateTime<Utc>>, EphemError>;

    /// Principal terms with `start <= instant <= end`, ascending.
    fn compute_principal_terms(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<PrincipalTermEvent>, EphemError>;
}

impl<T: SolsticeFinder + ?Sized> SolsticeFinder for &T {
    fn find_winter_solstice(&self, year: i32) -> Result<DateTime<Utc>, EphemError> {
        (**self).find_winter_solstice(year)
    }
}

impl<T: EphemerisProvider + ?Sized> EphemerisProvider for &T {
    fn compute_new_moons(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<DateTime<Utc>>, EphemError> {
        (**self).compute_new_moons(start, end)
    }

    fn compute_principal_terms(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<PrincipalTermEvent>, EphemError> {
        (**self).compute_principal_terms(start, end)
    }
}
