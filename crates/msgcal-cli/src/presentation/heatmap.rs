use msgcal_engine::{GridToken, HeatmapGrid};
use msgcal_types::Rgb;
use owo_colors::OwoColorize;
use std::fmt;

const DAY_GLYPH: &str = "■ ";
const EMPTY_DAY_GLYPH: &str = "□ ";
const BLANK: &str = "  ";
const GAP: &str = " ";
const RULE: &str = "│";

/// Terminal painter for a [`HeatmapGrid`].
///
/// With color every day is a truecolor `■`; without it, days with messages
/// print `■` and empty days `□` so the layout stays readable.
pub struct HeatmapView<'a> {
    grid: &'a HeatmapGrid,
    color: bool,
}

impl<'a> HeatmapView<'a> {
    pub fn new(grid: &'a HeatmapGrid, color: bool) -> Self {
        Self { grid, color }
    }

    /// Widest row in terminal columns.
    pub fn width(&self) -> usize {
        self.grid
            .years
            .iter()
            .flat_map(|year| year.rows.iter())
            .map(|row| row.iter().map(GridToken::width).sum::<usize>())
            .max()
            .unwrap_or(0)
    }

    fn write_token(&self, f: &mut fmt::Formatter, token: &GridToken) -> fmt::Result {
        let layer = self.grid.layer_background;

        match token {
            GridToken::Label { text } => self.paint(f, text, None, layer),
            GridToken::Blank => self.paint(f, BLANK, None, layer),
            GridToken::Gap => self.paint(f, GAP, None, layer),
            GridToken::Rule => self.paint(f, RULE, None, layer),
            GridToken::Day(cell) => {
                let glyph = if self.color || cell.count > 0 {
                    DAY_GLYPH
                } else {
                    EMPTY_DAY_GLYPH
                };
                self.paint(f, glyph, Some(cell.color), cell.background)
            }
        }
    }

    fn paint(
        &self,
        f: &mut fmt::Formatter,
        text: &str,
        fg: Option<Rgb>,
        bg: Option<Rgb>,
    ) -> fmt::Result {
        if !self.color {
            return f.write_str(text);
        }

        match (fg, bg) {
            (Some(fg), Some(bg)) => write!(
                f,
                "{}",
                text.truecolor(fg.r, fg.g, fg.b).on_truecolor(bg.r, bg.g, bg.b)
            ),
            (Some(fg), None) => write!(f, "{}", text.truecolor(fg.r, fg.g, fg.b)),
            (None, Some(bg)) => write!(f, "{}", text.on_truecolor(bg.r, bg.g, bg.b)),
            (None, None) => f.write_str(text),
        }
    }
}

impl<'a> fmt::Display for HeatmapView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f)?;

        for year in &self.grid.years {
            for row in &year.rows {
                for token in row {
                    self.write_token(f, token)?;
                }
                writeln!(f)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use msgcal_engine::{HeatmapRenderer, RenderConfig};
    use msgcal_types::{AggregateStatistics, MonthMode};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn stats() -> AggregateStatistics {
        AggregateStatistics {
            max_count: 3,
            mean_count: 3.0,
            median_count: 3.0,
            first_day: Some(date(2024, 1, 1)),
            last_day: Some(date(2024, 1, 1)),
            active_days: 1,
            total_count: 3,
            ..Default::default()
        }
    }

    fn render(config: &RenderConfig) -> HeatmapGrid {
        let stats = stats();
        HeatmapRenderer::new(config, &stats)
            .render(date(2024, 1, 1), date(2024, 1, 1), |d| {
                if d == date(2024, 1, 1) { 3 } else { 0 }
            })
            .unwrap()
    }

    #[test]
    fn test_plain_layout() {
        let grid = render(&RenderConfig::default());
        let out = HeatmapView::new(&grid, false).to_string();
        let lines: Vec<&str> = out.split('\n').collect();

        // leading blank, 7 rows, blank after the year, final newline
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "");
        assert_eq!(lines[8], "");

        // 2024 starts on a Monday and row 0 runs through Monday Dec 30
        let monday = format!("2024 {}{}", DAY_GLYPH, EMPTY_DAY_GLYPH.repeat(52));
        assert_eq!(lines[1], monday);

        // Wednesday column 52 would be 2025-01-01
        assert!(lines[3].starts_with("     □ "));
        assert!(lines[3].ends_with(&format!("{}{}", EMPTY_DAY_GLYPH, BLANK)));
    }

    #[test]
    fn test_width_counts_labels_and_rules() {
        let grid = render(&RenderConfig::default());
        assert_eq!(HeatmapView::new(&grid, false).width(), 5 + 53 * 2);

        let config = RenderConfig {
            month_mode: MonthMode::Lines,
            labels: false,
            ..Default::default()
        };
        let grid = render(&config);
        let out = HeatmapView::new(&grid, false).to_string();
        assert!(out.contains(RULE));
        // eleven month boundaries at most per row
        assert!(HeatmapView::new(&grid, false).width() <= 53 * 2 + 11);
    }

    #[test]
    fn test_color_output_uses_truecolor_escapes() {
        let grid = render(&RenderConfig::default());
        let out = HeatmapView::new(&grid, true).to_string();

        // active color #56D364 at full intensity
        assert!(out.contains("\x1b[38;2;86;211;100m■ "));
        assert!(!out.contains(EMPTY_DAY_GLYPH));
    }

    #[test]
    fn test_no_calendar_paints_layer_background() {
        let config = RenderConfig {
            no_calendar: true,
            ..Default::default()
        };
        let grid = render(&config);
        let out = HeatmapView::new(&grid, true).to_string();

        assert!(!out.contains("2024"));
        // base #151B23 behind blank cells
        assert!(out.contains("\x1b[48;2;21;27;35m  "));
    }
}
