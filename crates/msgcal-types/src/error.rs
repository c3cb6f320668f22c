use std::fmt;

/// Result type for msgcal-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Color string is not a 6-hex-digit RGB value
    InvalidColor(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidColor(raw) => {
                write!(f, "Invalid color '{}': expected 6 hex digits like #56D364", raw)
            }
        }
    }
}

impl std::error::Error for Error {}
