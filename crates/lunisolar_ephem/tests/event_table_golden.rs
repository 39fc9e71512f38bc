//! Golden tests for the checked-in 2016-2018 event table.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use lunisolar_ephem::{EphemError, EphemerisProvider, EventTable, SolsticeFinder};

const EVENTS: &str = include_str!("../../../data/events_2016_2018.txt");

fn table() -> EventTable {
    EventTable::parse(EVENTS).expect("fixture parses")
}

fn utc(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
}

#[test]
fn fixture_shape() {
    let t = table();
    assert_eq!(t.new_moons().len(), 31);
    assert!(t.new_moons().windows(2).all(|w| w[0] < w[1]));
    assert!(
        t.principal_terms()
            .windows(2)
            .all(|w| w[0].instant_utc < w[1].instant_utc)
    );
}

#[test]
fn solstices_2015_through_2019() {
    let t = table();
    assert_eq!(t.find_winter_solstice(2016).unwrap(), utc(2016, 12, 21, 10, 44));
    assert_eq!(t.find_winter_solstice(2017).unwrap(), utc(2017, 12, 21, 16, 28));
    for year in 2015..=2019 {
        assert!(t.find_winter_solstice(year).is_ok(), "year {year}");
    }
    assert_eq!(
        t.find_winter_solstice(2020),
        Err(EphemError::SolsticeNotFound { year: 2020 })
    );
}

#[test]
fn lunation_lengths_are_plausible() {
    for w in table().new_moons().windows(2) {
        let days = (w[1] - w[0]).num_hours() as f64 / 24.0;
        assert!((29.0..30.0).contains(&days), "{} -> {}", w[0], w[1]);
    }
}

#[test]
fn one_principal_term_per_month_except_leap_2017() {
    // The lunation starting 2017-07-23 is the only one in 2017 without a
    // principal term.
    let t = table();
    let start = utc(2016, 12, 29, 0, 0);
    let end = utc(2018, 1, 17, 3, 0);
    let moons = t.compute_new_moons(start, end).unwrap();
    let terms = t.compute_principal_terms(start, end).unwrap();

    let empty: Vec<NaiveDate> = moons
        .windows(2)
        .filter(|w| {
            let (a, b) = (lunisolar_time::civil_date(w[0]), lunisolar_time::civil_date(w[1]));
            !terms.iter().any(|e| a <= e.civil_date && e.civil_date < b)
        })
        .map(|w| lunisolar_time::civil_date(w[0]))
        .collect();
    assert_eq!(empty, vec![NaiveDate::from_ymd_opt(2017, 7, 23).unwrap()]);
}

#[test]
fn term_window_is_inclusive_at_both_ends() {
    let t = table();
    let z6 = utc(2017, 7, 22, 15, 15);
    let z7 = utc(2017, 8, 23, 6, 20);
    let terms = t.compute_principal_terms(z6, z7).unwrap();
    let idx: Vec<u8> = terms.iter().map(|e| e.term_index).collect();
    assert_eq!(idx, vec![6, 7]);
}
