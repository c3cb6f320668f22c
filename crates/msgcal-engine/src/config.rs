use crate::intensity::IntensityStrategy;
use msgcal_types::{MonthMode, Rgb};
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE: Rgb = Rgb::new(0x15, 0x1B, 0x23);
pub const DEFAULT_ACTIVE: Rgb = Rgb::new(0x56, 0xD3, 0x64);
pub const DEFAULT_MONTH_BACKGROUND: Rgb = Rgb::new(0x2D, 0x33, 0x3B);

/// Options for one render pass. Built once from config and flags, then only read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    pub month_mode: MonthMode,
    pub strategy: IntensityStrategy,
    pub active_color: Rgb,
    pub base_color: Rgb,
    /// Fill for first-of-month cells in [`MonthMode::Background`]
    pub month_background: Rgb,
    pub labels: bool,
    /// Raw data layer: no labels, every cell painted on `base_color`
    pub no_calendar: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            month_mode: MonthMode::None,
            strategy: IntensityStrategy::Logarithmic,
            active_color: DEFAULT_ACTIVE,
            base_color: DEFAULT_BASE,
            month_background: DEFAULT_MONTH_BACKGROUND,
            labels: true,
            no_calendar: false,
        }
    }
}

impl RenderConfig {
    pub fn show_labels(&self) -> bool {
        self.labels && !self.no_calendar
    }

    /// Background forced onto every cell, if any.
    pub fn layer_background(&self) -> Option<Rgb> {
        self.no_calendar.then_some(self.base_color)
    }
}
