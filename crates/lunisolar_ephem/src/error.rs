//! Error types for ephemeris providers.

/// Errors from an ephemeris provider or from loading an event table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum EphemError {
    /// No Winter Solstice is known for the requested year.
    #[error("winter solstice not found for year {year}")]
    SolsticeNotFound { year: i32 },
    /// Principal-term index outside 1..=12.
    #[error("invalid principal term index {index} (must be 1..=12)")]
    InvalidTermIndex { index: u32 },
    /// Event-table text could not be parsed.
    #[error("event table line {line}: {message}")]
    Parse { line: usize, message: String },
    /// I/O error while reading an event table.
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for EphemError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}
