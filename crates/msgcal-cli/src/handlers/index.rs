use crate::context::ExecutionContext;
use crate::presentation::{IndexSummaryView, print_json};
use crate::types::OutputFormat;
use anyhow::Result;

pub fn handle(ctx: &ExecutionContext) -> Result<()> {
    let index = ctx.index()?;

    match ctx.format {
        OutputFormat::Json => print_json(index),
        OutputFormat::Plain => {
            print!("{}", IndexSummaryView::new(index, ctx.enable_color()));
            Ok(())
        }
    }
}
