// Engine module - day aggregation, calendar layout and color mixing.
// This layer sits between parsed timestamps (providers) and CLI presentation.
// Everything here is pure and synchronous; output is a grid model, not text.

pub mod aggregate;
pub mod color;
pub mod config;
pub mod error;
pub mod intensity;
pub mod layout;
pub mod render;

pub use aggregate::DayAggregator;
pub use color::{Oklab, mix};
pub use config::RenderConfig;
pub use error::{Error, Result};
pub use intensity::{IntensityStrategy, VISIBLE_FLOOR, cell_alpha};
pub use layout::{cell_to_date, crosses_month_boundary, grid_origin};
pub use render::{DayCell, GridToken, HeatmapGrid, HeatmapRenderer, YearBlock};

use chrono::{NaiveDate, NaiveDateTime};

// Façade API - Stable public interface for CLI layer

/// Bucket timestamps into per-day counts.
pub fn aggregate_days<I>(timestamps: I) -> DayAggregator
where
    I: IntoIterator<Item = NaiveDateTime>,
{
    let mut aggregator = DayAggregator::new();
    aggregator.ingest(timestamps);
    aggregator
}

/// Build the heatmap grid for `[start, end]` using an aggregator as the count source.
pub fn render_heatmap(
    aggregator: &DayAggregator,
    start: NaiveDate,
    end: NaiveDate,
    config: &RenderConfig,
) -> Result<HeatmapGrid> {
    HeatmapRenderer::new(config, aggregator.statistics())
        .render(start, end, |date| aggregator.count_on(date))
}
