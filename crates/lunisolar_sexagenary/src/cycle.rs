//! Year, month, day and double-hour pairs.
//!
//! All functions are total. Year and day positions are counted from fixed
//! epochs that fall on 甲子; month and hour stems come from the classical
//! five-tiger and five-rat tables.

use chrono::{Datelike, NaiveDate, NaiveDateTime, TimeDelta, Timelike};

use crate::branch::{ALL_BRANCHES, Branch};
use crate::pair::SexagenaryPair;
use crate::stem::Stem;

/// Gregorian year 4 CE is cycle position 1 (甲子).
pub const YEAR_CYCLE_EPOCH: i32 = 4;

/// Day 0004-01-31 (proleptic Gregorian) is cycle position 1 (甲子),
/// expressed as days from CE (0001-01-01 = 1).
pub const DAY_CYCLE_EPOCH_DAYS_FROM_CE: i32 = 1126;

/// Stem of lunar month 1 (寅), keyed by the year stem ("five tigers").
const FIRST_MONTH_STEM: [Stem; 10] = [
    Stem::Bing,
    Stem::Wu,
    Stem::Geng,
    Stem::Ren,
    Stem::Jia,
    Stem::Bing,
    Stem::Wu,
    Stem::Geng,
    Stem::Ren,
    Stem::Jia,
];

/// Stem of the 子 double-hour, keyed by the day stem ("five rats").
const ZI_HOUR_STEM: [Stem; 10] = [
    Stem::Jia,
    Stem::Bing,
    Stem::Wu,
    Stem::Geng,
    Stem::Ren,
    Stem::Jia,
    Stem::Bing,
    Stem::Wu,
    Stem::Geng,
    Stem::Ren,
];

/// Pair of a lunar year.
pub fn year_pair(lunar_year: i32) -> SexagenaryPair {
    SexagenaryPair::from_offset(i64::from(lunar_year - YEAR_CYCLE_EPOCH))
}

/// Pair of lunar month `month` (1..=12) in `lunar_year`.
///
/// Month 1 is always 寅; a leap month takes the pair of the month it repeats.
pub fn month_pair(lunar_year: i32, month: u8) -> SexagenaryPair {
    debug_assert!((1..=12).contains(&month), "month {month}");
    // 0-based distance from month 1, so month 0 behaves as 12.
    let steps = (u32::from(month) + 11) % 12;
    let first = FIRST_MONTH_STEM[year_pair(lunar_year).stem.index() as usize];
    let stem = first.advance(steps);
    let branch = ALL_BRANCHES[((steps + 2) % 12) as usize];
    SexagenaryPair::combine(stem, branch)
}

/// Pair of a calendar day.
pub fn day_pair(date: NaiveDate) -> SexagenaryPair {
    SexagenaryPair::from_offset(i64::from(date.num_days_from_ce() - DAY_CYCLE_EPOCH_DAYS_FROM_CE))
}

/// Branch of the double-hour containing `hour` (0-23).
///
/// 23:00-00:59 is 子, 01:00-02:59 is 丑, and so on.
pub fn hour_branch(hour: u32) -> Branch {
    ALL_BRANCHES[(((hour + 1) / 2) % 12) as usize]
}

/// Pair of the double-hour containing `local`.
///
/// `day_stem` is the stem of `local`'s day. From 23:00 the 子 hour already
/// belongs to the next day, so the stem of `local + 1 day` is used instead.
pub fn hour_pair(local: NaiveDateTime, day_stem: Stem) -> SexagenaryPair {
    let branch = hour_branch(local.hour());
    let day_stem = if local.hour() >= 23 {
        day_pair((local + TimeDelta::days(1)).date()).stem
    } else {
        day_stem
    };
    let stem = ZI_HOUR_STEM[day_stem.index() as usize].advance(u32::from(branch.index()));
    SexagenaryPair::combine(stem, branch)
}
