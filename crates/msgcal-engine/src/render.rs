use crate::color::mix;
use crate::config::RenderConfig;
use crate::error::{Error, Result};
use crate::intensity::cell_alpha;
use crate::layout::{WEEK_COLUMNS, WEEKDAY_ROWS, cell_to_date, crosses_month_boundary};
use chrono::{Datelike, NaiveDate};
use msgcal_types::{AggregateStatistics, MonthMode, Rgb};
use serde::Serialize;

/// Largest accepted `end_year - start_year`.
pub const MAX_YEAR_SPAN: i32 = 99;

/// Width of the year label column.
pub const LABEL_WIDTH: usize = 5;

/// A fully resolved heatmap, ready to be painted by a presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapGrid {
    pub start: NaiveDate,
    pub end: NaiveDate,
    /// Background applied to every token (no-calendar mode)
    pub layer_background: Option<Rgb>,
    pub years: Vec<YearBlock>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearBlock {
    pub year: i32,
    /// Seven rows, Monday first
    pub rows: Vec<Vec<GridToken>>,
}

/// One printable run inside a grid row.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GridToken {
    /// Year label or equal-width padding in the label column
    Label { text: String },
    /// Cell outside the year
    Blank,
    /// Extra column before a month boundary (separation mode)
    Gap,
    /// Vertical rule before a month boundary (lines mode)
    Rule,
    Day(DayCell),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayCell {
    pub date: NaiveDate,
    pub count: u32,
    pub alpha: f64,
    pub color: Rgb,
    pub background: Option<Rgb>,
}

impl HeatmapGrid {
    pub fn day_cells(&self) -> impl Iterator<Item = &DayCell> {
        self.years
            .iter()
            .flat_map(|y| y.rows.iter())
            .flat_map(|row| row.iter())
            .filter_map(|token| match token {
                GridToken::Day(cell) => Some(cell),
                _ => None,
            })
    }
}

impl GridToken {
    /// Terminal columns the token occupies.
    pub fn width(&self) -> usize {
        match self {
            GridToken::Label { text } => text.chars().count(),
            GridToken::Blank | GridToken::Day(_) => 2,
            GridToken::Gap | GridToken::Rule => 1,
        }
    }
}

/// Reject spans that are negative or longer than a century.
pub fn validate_year_span(start_year: i32, end_year: i32) -> Result<()> {
    let span = end_year as i64 - start_year as i64;
    if !(0..=MAX_YEAR_SPAN as i64).contains(&span) {
        return Err(Error::YearSpan {
            start_year,
            end_year,
        });
    }
    Ok(())
}

/// Lays out whole calendar years and colors each day.
pub struct HeatmapRenderer<'a> {
    config: &'a RenderConfig,
    stats: &'a AggregateStatistics,
}

impl<'a> HeatmapRenderer<'a> {
    pub fn new(config: &'a RenderConfig, stats: &'a AggregateStatistics) -> Self {
        Self { config, stats }
    }

    /// Build the grid for every year touched by `[start, end]`.
    ///
    /// Only the years of `start` and `end` matter; whole years are always
    /// drawn. Fails before producing anything when the span is invalid.
    pub fn render<F>(&self, start: NaiveDate, end: NaiveDate, count_on: F) -> Result<HeatmapGrid>
    where
        F: Fn(NaiveDate) -> u32,
    {
        let start_year = start.year();
        let end_year = end.year();
        validate_year_span(start_year, end_year)?;

        tracing::debug!(
            start_year,
            end_year,
            mode = %self.config.month_mode,
            strategy = %self.config.strategy,
            "rendering heatmap"
        );

        let years = (start_year..=end_year)
            .map(|year| self.render_year(year, &count_on))
            .collect();

        Ok(HeatmapGrid {
            start,
            end,
            layer_background: self.config.layer_background(),
            years,
        })
    }

    fn render_year<F>(&self, year: i32, count_on: &F) -> YearBlock
    where
        F: Fn(NaiveDate) -> u32,
    {
        let rows = (0..WEEKDAY_ROWS)
            .map(|row| {
                let mut tokens = Vec::with_capacity(WEEK_COLUMNS as usize + 8);

                if self.config.show_labels() {
                    let text = if row == 0 {
                        format!("{:<width$}", year, width = LABEL_WIDTH)
                    } else {
                        " ".repeat(LABEL_WIDTH)
                    };
                    tokens.push(GridToken::Label { text });
                }

                for week in 0..WEEK_COLUMNS {
                    let Some(date) = cell_to_date(year, week, row) else {
                        tokens.push(GridToken::Blank);
                        continue;
                    };

                    if crosses_month_boundary(year, week, row) {
                        match self.config.month_mode {
                            MonthMode::Separation => tokens.push(GridToken::Gap),
                            MonthMode::Lines => tokens.push(GridToken::Rule),
                            MonthMode::None | MonthMode::Background => {}
                        }
                    }

                    tokens.push(GridToken::Day(self.day_cell(date, count_on(date))));
                }

                tokens
            })
            .collect();

        YearBlock { year, rows }
    }

    fn day_cell(&self, date: NaiveDate, count: u32) -> DayCell {
        let alpha = cell_alpha(self.config.strategy, count, self.stats);
        let color = mix(self.config.base_color, self.config.active_color, alpha);

        // The no-calendar layer is solid, so month banding never shows through.
        let background = self.config.layer_background().or_else(|| {
            (self.config.month_mode == MonthMode::Background && date.day() == 1)
                .then_some(self.config.month_background)
        });

        DayCell {
            date,
            count,
            alpha,
            color,
            background,
        }
    }
}
