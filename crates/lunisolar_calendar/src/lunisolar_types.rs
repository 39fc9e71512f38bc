//! The lunisolar date record and its traditional labels.

use lunisolar_sexagenary::SexagenaryPair;

const MONTH_NAMES: [&str; 12] = [
    "正月", "二月", "三月", "四月", "五月", "六月", "七月", "八月", "九月", "十月", "冬月", "腊月",
];

const DAY_TENS: [&str; 3] = ["初", "十", "廿"];

const DAY_UNITS: [&str; 10] = ["十", "一", "二", "三", "四", "五", "六", "七", "八", "九"];

/// A converted date: lunar year, month and day, the local hour, and the four
/// sexagenary pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LunisolarDate {
    pub year: i32,
    /// Month number 1..=12.
    pub month: u8,
    /// Day of the month 1..=30.
    pub day: u8,
    /// Local hour of the request (0-23).
    pub hour: u32,
    pub is_leap_month: bool,
    pub year_pair: SexagenaryPair,
    pub month_pair: SexagenaryPair,
    pub day_pair: SexagenaryPair,
    pub hour_pair: SexagenaryPair,
}

impl LunisolarDate {
    /// Traditional month name, e.g. "六月" or "闰六月".
    pub fn month_name(&self) -> String {
        let name = month_name(self.month).unwrap_or("?月");
        if self.is_leap_month {
            format!("闰{name}")
        } else {
            name.to_string()
        }
    }

    /// Traditional day name, e.g. "初八" or "廿三".
    pub fn day_name(&self) -> String {
        day_name(self.day).unwrap_or_else(|| "?".to_string())
    }
}

impl std::fmt::Display for LunisolarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}年{}{} {}时",
            self.year_pair,
            self.month_name(),
            self.day_name(),
            self.hour_pair.branch
        )
    }
}

/// Name of month 1..=12.
pub fn month_name(month: u8) -> Option<&'static str> {
    MONTH_NAMES.get(usize::from(month).checked_sub(1)?).copied()
}

/// Name of day 1..=30.
pub fn day_name(day: u8) -> Option<String> {
    match day {
        20 => Some("二十".to_string()),
        30 => Some("三十".to_string()),
        1..=29 => {
            let tens = if day <= 10 { 0 } else { usize::from(day / 10) };
            Some(format!("{}{}", DAY_TENS[tens], DAY_UNITS[usize::from(day % 10)]))
        }
        _ => None,
    }
}
