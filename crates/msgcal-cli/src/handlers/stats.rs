use super::selection::load_selection;
use crate::args::SelectionArgs;
use crate::context::ExecutionContext;
use crate::presentation::{StatsView, print_json};
use crate::types::OutputFormat;
use anyhow::Result;

pub fn handle(ctx: &ExecutionContext, selection: &SelectionArgs) -> Result<()> {
    let data = load_selection(ctx, selection)?;
    let stats = data.aggregator.statistics();

    match ctx.format {
        OutputFormat::Json => print_json(stats),
        OutputFormat::Plain => {
            print!(
                "{}",
                StatsView::new(stats, data.channel_count, ctx.enable_color())
            );
            Ok(())
        }
    }
}
