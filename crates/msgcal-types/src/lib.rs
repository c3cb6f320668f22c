pub mod calendar;
pub mod color;
pub mod error;
pub mod stats;

pub use calendar::MonthMode;
pub use color::Rgb;
pub use error::{Error, Result};
pub use stats::AggregateStatistics;
