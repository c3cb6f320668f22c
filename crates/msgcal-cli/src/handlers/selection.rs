use crate::args::SelectionArgs;
use crate::context::ExecutionContext;
use anyhow::{Context, Result, anyhow, bail};
use msgcal_engine::{DayAggregator, aggregate_days};
use msgcal_providers::{ChannelKind, ExportIndex, load_channel_metadata, load_timestamps};
use std::collections::BTreeSet;
use std::path::Path;

const SELECTION_HINT: &str = "Select channels with --server <name> [--channel <name>], --dm <name> or --all-dms.\nRun `msgcal channels` to see what the export contains.";

/// Channel ids for a selection, in selection order without duplicates.
///
/// A server without `--channel` expands to its text, voice and thread
/// channels; that requires reading each channel's metadata.
pub fn resolve_channel_ids(
    export_dir: &Path,
    index: &ExportIndex,
    selection: &SelectionArgs,
) -> Result<Vec<String>> {
    if selection.is_empty() {
        bail!("No channels selected.\n{}", SELECTION_HINT);
    }

    let mut ids = Vec::new();

    if let Some(server) = &selection.server {
        let channels = index.server(server).ok_or_else(|| {
            anyhow!(
                "Unknown server '{}'. Run `msgcal channels` to list servers.",
                server
            )
        })?;

        if selection.channels.is_empty() {
            let kinds = load_channel_metadata(export_dir, channels)
                .with_context(|| format!("Failed to read channel metadata of '{}'", server))?;
            ids.extend(
                channels
                    .iter()
                    .filter(|c| {
                        kinds
                            .get(&c.id)
                            .is_some_and(|kind| ChannelKind::LISTED.contains(kind))
                    })
                    .map(|c| c.id.clone()),
            );
        } else {
            for name in &selection.channels {
                let before = ids.len();
                ids.extend(
                    channels
                        .iter()
                        .filter(|c| &c.name == name)
                        .map(|c| c.id.clone()),
                );
                if ids.len() == before {
                    bail!(
                        "Unknown channel '{}' in server '{}'. Run `msgcal channels --server \"{}\"` to list its channels.",
                        name,
                        server,
                        server
                    );
                }
            }
        }
    }

    for label in &selection.dms {
        let before = ids.len();
        ids.extend(index.find_direct_messages(label).map(|dm| dm.id.clone()));
        if ids.len() == before {
            bail!(
                "Unknown direct message '{}'. Run `msgcal channels` to list direct messages.",
                label
            );
        }
    }

    if selection.all_dms {
        ids.extend(index.direct_messages.iter().map(|dm| dm.id.clone()));
    }

    let mut seen = BTreeSet::new();
    ids.retain(|id| seen.insert(id.clone()));

    if ids.is_empty() {
        bail!("The selection contains no channels.\n{}", SELECTION_HINT);
    }

    Ok(ids)
}

/// Day table for a selection.
pub struct SelectedData {
    pub channel_count: usize,
    pub aggregator: DayAggregator,
}

pub fn load_selection(ctx: &ExecutionContext, selection: &SelectionArgs) -> Result<SelectedData> {
    let export_dir = ctx.export_dir()?;
    let index = ctx.index()?;
    let ids = resolve_channel_ids(&export_dir, index, selection)?;

    let timestamps = load_timestamps(&export_dir, &ids)
        .with_context(|| format!("Failed to load messages from {}", export_dir.display()))?;

    tracing::info!(
        channels = ids.len(),
        messages = timestamps.len(),
        "loaded selection"
    );

    Ok(SelectedData {
        channel_count: ids.len(),
        aggregator: aggregate_days(timestamps),
    })
}
