use clap::ValueEnum;
use msgcal_engine::IntensityStrategy;
use msgcal_types::MonthMode;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    Plain,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Plain => write!(f, "plain"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Error => write!(f, "error"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Trace => write!(f, "trace"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum MonthModeArg {
    None,
    Separation,
    Lines,
    Background,
}

impl From<MonthModeArg> for MonthMode {
    fn from(value: MonthModeArg) -> Self {
        match value {
            MonthModeArg::None => MonthMode::None,
            MonthModeArg::Separation => MonthMode::Separation,
            MonthModeArg::Lines => MonthMode::Lines,
            MonthModeArg::Background => MonthMode::Background,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum StrategyArg {
    #[value(alias = "log")]
    Logarithmic,
    Median,
    Max,
    Binary,
}

impl From<StrategyArg> for IntensityStrategy {
    fn from(value: StrategyArg) -> Self {
        match value {
            StrategyArg::Logarithmic => IntensityStrategy::Logarithmic,
            StrategyArg::Median => IntensityStrategy::Median,
            StrategyArg::Max => IntensityStrategy::Max,
            StrategyArg::Binary => IntensityStrategy::Binary,
        }
    }
}
