//! Golden values for the sexagenary cycle.

use chrono::{NaiveDate, TimeDelta};
use lunisolar_sexagenary::{
    ALL_BRANCHES, ALL_STEMS, Branch, SexagenaryPair, Stem, cycle_from_stem_branch, day_pair,
    hour_pair, month_pair, year_pair,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn exactly_sixty_valid_pairs() {
    let mut seen = Vec::new();
    for stem in ALL_STEMS {
        for branch in ALL_BRANCHES {
            if let Some(i) = cycle_from_stem_branch(stem, branch) {
                seen.push(i);
            }
        }
    }
    seen.sort_unstable();
    assert_eq!(seen, (1..=60).collect::<Vec<u8>>());
}

#[test]
fn year_pairs() {
    let cases = [
        (1984, "甲子", 1),
        (2016, "丙申", 33),
        (2017, "丁酉", 34),
        (2018, "戊戌", 35),
        (2024, "甲辰", 41),
        (2026, "丙午", 43),
    ];
    for (year, hanzi, cycle) in cases {
        let p = year_pair(year);
        assert_eq!(p.hanzi(), hanzi, "year {year}");
        assert_eq!(p.cycle_index, cycle, "year {year}");
    }
}

#[test]
fn year_pairs_before_common_era_wrap() {
    assert_eq!(year_pair(-56).cycle_index, year_pair(4).cycle_index);
    assert_eq!(year_pair(0).cycle_index, 57);
}

#[test]
fn year_and_day_round_trip() {
    for offset in 0..60 {
        let y = year_pair(1984 + offset);
        assert_eq!(cycle_from_stem_branch(y.stem, y.branch), Some(y.cycle_index));
        assert_eq!(SexagenaryPair::from_cycle_index(y.cycle_index), Some(y));

        let d = day_pair(date(2000, 1, 1) + TimeDelta::days(i64::from(offset)));
        assert_eq!(cycle_from_stem_branch(d.stem, d.branch), Some(d.cycle_index));
        assert_eq!(SexagenaryPair::from_cycle_index(d.cycle_index), Some(d));
    }
}

#[test]
fn day_pairs() {
    let cases = [
        (date(2000, 1, 1), "戊午", 55),
        (date(2017, 1, 10), "丁酉", 34),
        (date(2017, 1, 28), "乙卯", 52),
        (date(2024, 2, 10), "甲辰", 41),
    ];
    for (d, hanzi, cycle) in cases {
        let p = day_pair(d);
        assert_eq!(p.hanzi(), hanzi, "{d}");
        assert_eq!(p.cycle_index, cycle, "{d}");
    }
}

#[test]
fn day_cycle_repeats_every_sixty_days() {
    let d = date(2017, 7, 30);
    assert_eq!(day_pair(d), day_pair(d + TimeDelta::days(60)));
    assert_eq!(day_pair(d), day_pair(d - TimeDelta::days(600)));
}

#[test]
fn month_pairs_for_2017() {
    let expected = [
        "壬寅", "癸卯", "甲辰", "乙巳", "丙午", "丁未", "戊申", "己酉", "庚戌", "辛亥", "壬子",
        "癸丑",
    ];
    for (m, hanzi) in (1..=12u8).zip(expected) {
        assert_eq!(month_pair(2017, m).hanzi(), hanzi, "month {m}");
    }
}

#[test]
fn every_hour_of_a_day() {
    // 2024-02-10 is 甲辰: 甲 days run 甲子 .. 乙亥 through the double-hours.
    let d = date(2024, 2, 10);
    let stem = day_pair(d).stem;
    assert_eq!(stem, Stem::Jia);
    for hour in 0..23u32 {
        let p = hour_pair(d.and_hms_opt(hour, 0, 0).unwrap(), stem);
        let bin = ((hour + 1) / 2) as u8;
        assert_eq!(p.branch, Branch::from_index(bin).unwrap(), "hour {hour}");
        assert_eq!(p.stem, Stem::Jia.advance(u32::from(bin)), "hour {hour}");
    }
    // 23:00 belongs to 乙巳 day, whose 子 hour is 丙子.
    let late = hour_pair(d.and_hms_opt(23, 0, 0).unwrap(), stem);
    assert_eq!(late.hanzi(), "丙子");
}
