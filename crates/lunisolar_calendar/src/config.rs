//! Conversion configuration.

use crate::error::CalendarError;

/// Default padding added to both ends of a calculation window.
pub const DEFAULT_WINDOW_MARGIN_DAYS: u32 = 30;

/// Smallest accepted window padding. A lunation is under 30 days, so the
/// new moon opening the solstice month always falls inside the window.
pub const MIN_WINDOW_MARGIN_DAYS: u32 = 30;

/// Largest accepted window padding.
pub const MAX_WINDOW_MARGIN_DAYS: u32 = 90;

/// Tunables for [`LunisolarCalendar`](crate::LunisolarCalendar).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionConfig {
    /// Days added before the anchor solstice and after the closing one, so
    /// months straddling either edge are fully covered (default 30).
    pub window_margin_days: u32,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            window_margin_days: DEFAULT_WINDOW_MARGIN_DAYS,
        }
    }
}

impl ConversionConfig {
    pub fn with_window_margin_days(mut self, days: u32) -> Self {
        self.window_margin_days = days;
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), CalendarError> {
        if !(MIN_WINDOW_MARGIN_DAYS..=MAX_WINDOW_MARGIN_DAYS).contains(&self.window_margin_days) {
            return Err(CalendarError::InvalidConfig(
                "window_margin_days must be 30..=90",
            ));
        }
        Ok(())
    }
}
