//! Lunisolar calendar reconstruction.
//!
//! Turns new-moon and principal-term instants into numbered lunar months
//! (with leap-month insertion anchored on the Winter Solstice), then resolves
//! solar date-times to lunar year, month and day plus the four sexagenary
//! pairs.
//!
//! ```no_run
//! use lunisolar_calendar::LunisolarCalendar;
//! use lunisolar_ephem::EventTable;
//!
//! let table = EventTable::load("events.txt".as_ref())?;
//! let calendar = LunisolarCalendar::new(table);
//! let date = calendar.convert("2017-07-30", "12:00", "Asia/Shanghai")?;
//! println!("{date}");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod assemble;
pub mod config;
pub mod convert;
pub mod error;
pub mod leap_month;
pub mod lunisolar_types;
pub mod month_period;
pub mod period_types;
pub mod resolver;
pub mod term_index;
pub mod window;

pub use assemble::assemble;
pub use config::{
    ConversionConfig, DEFAULT_WINDOW_MARGIN_DAYS, MAX_WINDOW_MARGIN_DAYS, MIN_WINDOW_MARGIN_DAYS,
};
pub use convert::LunisolarCalendar;
pub use error::CalendarError;
pub use leap_month::{ZI_MONTH_NUMBER, assign_month_numbers, find_zi_month};
pub use lunisolar_types::{LunisolarDate, day_name, month_name};
pub use month_period::build_month_periods;
pub use period_types::MonthPeriod;
pub use resolver::{MAX_LUNAR_DAY, ResolvedMonth, find_period, lunar_day, lunar_year, resolve_month};
pub use term_index::{TermDayIndex, tag_principal_terms};
pub use window::{CalculationWindow, compute_window};
