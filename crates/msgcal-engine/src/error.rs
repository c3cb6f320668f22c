use std::fmt;

/// Result type for msgcal-engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the engine layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Requested calendar covers a negative or absurdly long span of years
    YearSpan { start_year: i32, end_year: i32 },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::YearSpan {
                start_year,
                end_year,
            } => write!(
                f,
                "Refusing to render years {} to {}: the span must be between 0 and {} years (swapped or unparsed dates?)",
                start_year,
                end_year,
                crate::render::MAX_YEAR_SPAN
            ),
        }
    }
}

impl std::error::Error for Error {}
