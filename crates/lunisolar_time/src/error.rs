//! Error types for time normalization.

/// Errors from parsing local date/time input or resolving a timezone.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum TimeError {
    /// Malformed date or time string, or a local time that does not exist
    /// in the requested timezone.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// Timezone identifier not known to the timezone database.
    #[error("unknown timezone: {0}")]
    UnknownTimezone(String),
}
