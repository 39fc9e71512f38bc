//! Sexagenary (ganzhi) cycle for years, months, days and double-hours.
//!
//! Stems and branches are enums; every lookup table is an array indexed by
//! them. Cycle positions are 1-based, 1 = 甲子.

pub mod branch;
pub mod cycle;
pub mod pair;
pub mod stem;

pub use branch::{ALL_BRANCHES, Branch};
pub use cycle::{
    DAY_CYCLE_EPOCH_DAYS_FROM_CE, YEAR_CYCLE_EPOCH, day_pair, hour_branch, hour_pair, month_pair,
    year_pair,
};
pub use pair::{SexagenaryPair, cycle_from_stem_branch};
pub use stem::{ALL_STEMS, Stem};
