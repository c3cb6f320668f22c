use serde::{Deserialize, Serialize};
use std::fmt;

/// How month boundaries are decorated in the calendar grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MonthMode {
    #[default]
    None,
    /// Extra blank column before the first cell of a new month in each row
    Separation,
    /// Thin vertical rule before the first cell of a new month in each row
    Lines,
    /// Alternate background on the first day of every month
    Background,
}

impl MonthMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            MonthMode::None => "none",
            MonthMode::Separation => "separation",
            MonthMode::Lines => "lines",
            MonthMode::Background => "background",
        }
    }
}

impl fmt::Display for MonthMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
