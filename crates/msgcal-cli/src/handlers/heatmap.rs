use super::selection::load_selection;
use crate::args::{RenderArgs, SelectionArgs};
use crate::context::ExecutionContext;
use crate::presentation::{HeatmapView, StatsView, print_json};
use crate::types::OutputFormat;
use anyhow::{Context, Result};
use msgcal_engine::render_heatmap;

pub const NO_MESSAGES: &str = "No messages found for the selected channels.";

pub fn handle(ctx: &ExecutionContext, selection: &SelectionArgs, render: &RenderArgs) -> Result<()> {
    let config = render.resolve(&ctx.config()?.render);
    let data = load_selection(ctx, selection)?;
    let stats = data.aggregator.statistics();

    if stats.is_empty() {
        println!("{}", NO_MESSAGES);
        return Ok(());
    }

    let start = render
        .from
        .or(stats.first_day)
        .context("No start date for the heatmap")?;
    let end = render
        .to
        .or(stats.last_day)
        .context("No end date for the heatmap")?;

    let grid = render_heatmap(&data.aggregator, start, end, &config)
        .with_context(|| format!("Cannot render {} to {}", start, end))?;

    match ctx.format {
        OutputFormat::Json => print_json(&grid),
        OutputFormat::Plain => {
            let color = ctx.enable_color();
            let view = HeatmapView::new(&grid, color);

            if let Some((terminal_size::Width(columns), _)) = terminal_size::terminal_size() {
                if (columns as usize) < view.width() {
                    tracing::warn!(
                        columns,
                        needed = view.width(),
                        "terminal is narrower than the heatmap, rows will wrap"
                    );
                }
            }

            print!("{}", StatsView::new(stats, data.channel_count, color));
            print!("{}", view);
            Ok(())
        }
    }
}
