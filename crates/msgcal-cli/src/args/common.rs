use crate::config::RenderSettings;
use crate::types::{MonthModeArg, StrategyArg};
use chrono::NaiveDate;
use clap::Args;
use msgcal_engine::RenderConfig;
use msgcal_types::Rgb;

#[derive(Debug, Clone, Default, Args)]
pub struct SelectionArgs {
    #[arg(long, help = "Server whose channels to include")]
    pub server: Option<String>,

    #[arg(
        long = "channel",
        requires = "server",
        help = "Only this channel of --server (repeatable; default: all text, voice and thread channels)"
    )]
    pub channels: Vec<String>,

    #[arg(long = "dm", help = "Direct message by username, or group chat by name (repeatable)")]
    pub dms: Vec<String>,

    #[arg(long, help = "Include every direct message and group chat")]
    pub all_dms: bool,
}

impl SelectionArgs {
    pub fn is_empty(&self) -> bool {
        self.server.is_none() && self.dms.is_empty() && !self.all_dms
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct RenderArgs {
    #[arg(long, help = "How counts map to color intensity")]
    pub strategy: Option<StrategyArg>,

    #[arg(long, help = "Month boundary decoration")]
    pub month_mode: Option<MonthModeArg>,

    #[arg(long, value_name = "HEX", help = "Color of the busiest days, e.g. #56D364")]
    pub active_color: Option<Rgb>,

    #[arg(long, value_name = "HEX", help = "Color of days without messages")]
    pub base_color: Option<Rgb>,

    #[arg(long, value_name = "HEX", help = "First-of-month fill for --month-mode background")]
    pub month_background: Option<Rgb>,

    #[arg(long, help = "Hide the year label column")]
    pub no_labels: bool,

    #[arg(long, help = "Raw data layer: no labels, solid base-color background")]
    pub no_calendar: bool,

    #[arg(long, value_name = "YYYY-MM-DD", help = "First day of the range (default: first message)")]
    pub from: Option<NaiveDate>,

    #[arg(long, value_name = "YYYY-MM-DD", help = "Last day of the range (default: last message)")]
    pub to: Option<NaiveDate>,
}

impl RenderArgs {
    /// Flags override config-file settings.
    pub fn resolve(&self, settings: &RenderSettings) -> RenderConfig {
        RenderConfig {
            month_mode: self
                .month_mode
                .map(Into::into)
                .unwrap_or(settings.month_mode),
            strategy: self.strategy.map(Into::into).unwrap_or(settings.strategy),
            active_color: self.active_color.unwrap_or(settings.active_color),
            base_color: self.base_color.unwrap_or(settings.base_color),
            month_background: self.month_background.unwrap_or(settings.month_background),
            labels: settings.labels && !self.no_labels,
            no_calendar: self.no_calendar,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use msgcal_engine::IntensityStrategy;
    use msgcal_types::MonthMode;

    #[test]
    fn test_flags_override_settings() {
        let settings = RenderSettings {
            month_mode: MonthMode::Lines,
            strategy: IntensityStrategy::Median,
            ..Default::default()
        };
        let args = RenderArgs {
            strategy: Some(StrategyArg::Binary),
            base_color: Some(Rgb::new(0, 0, 0)),
            no_labels: true,
            ..Default::default()
        };

        let config = args.resolve(&settings);
        assert_eq!(config.month_mode, MonthMode::Lines);
        assert_eq!(config.strategy, IntensityStrategy::Binary);
        assert_eq!(config.base_color, Rgb::new(0, 0, 0));
        assert_eq!(config.active_color, settings.active_color);
        assert!(!config.labels);
    }

    #[test]
    fn test_empty_selection() {
        assert!(SelectionArgs::default().is_empty());
        let dms = SelectionArgs {
            all_dms: true,
            ..Default::default()
        };
        assert!(!dms.is_empty());
    }
}
