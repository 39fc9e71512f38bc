//! Plain-text rendering of conversion results.

use lunisolar_calendar::{CalendarError, LunisolarDate, MonthPeriod, month_name};

/// Multi-line report for a single conversion.
pub fn date_report(input: &str, date: &LunisolarDate) -> String {
    let leap = if date.is_leap_month { " (leap month)" } else { "" };
    let pairs = [
        ("Year:", &date.year_pair),
        ("Month:", &date.month_pair),
        ("Day:", &date.day_pair),
        ("Hour:", &date.hour_pair),
    ];
    let mut out = format!(
        "Solar:     {input}\nLunisolar: {}-{:02}-{:02}{leap}  {date}\n",
        date.year, date.month, date.day
    );
    for (label, pair) in pairs {
        out.push_str(&format!(
            "{label:<10} {} {:<12} cycle {:>2}\n",
            pair.hanzi(),
            pair.pinyin(),
            pair.cycle_index
        ));
    }
    out.push_str(&format!("Zodiac:    {}\n", date.year_pair.branch.animal()));
    out
}

/// One tab-separated line of batch output.
pub fn batch_line(input: &str, result: &Result<LunisolarDate, CalendarError>) -> String {
    match result {
        Ok(d) => format!(
            "{input}\t{}-{:02}{}-{:02}\t{} {} {} {}",
            d.year,
            d.month,
            if d.is_leap_month { "L" } else { "" },
            d.day,
            d.year_pair,
            d.month_pair,
            d.day_pair,
            d.hour_pair
        ),
        Err(e) => format!("{input}\terror: {e}"),
    }
}

/// One line per month of a lunar year.
pub fn month_table(year: i32, months: &[MonthPeriod]) -> String {
    let mut out = format!("Lunar year {year}\n");
    for p in months {
        let number = p.month_number.unwrap_or_default();
        let leap = if p.is_leap { "闰" } else { "" };
        out.push_str(&format!(
            "{number:>2}\t{leap}{}\t{}\t{} days\n",
            month_name(number).unwrap_or("?"),
            p.start_civil,
            p.length_days()
        ));
    }
    out
}
