mod heatmap;
mod summary;

pub use heatmap::HeatmapView;
pub use summary::{
    ChannelKindGroup, IndexSummaryView, ServerChannelsView, ServerListView, StatsView,
};

use anyhow::Result;
use serde::Serialize;

/// Print any serializable model as pretty JSON on stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Width of the key column in summary panels.
pub(crate) const KEY_WIDTH: usize = 20;
