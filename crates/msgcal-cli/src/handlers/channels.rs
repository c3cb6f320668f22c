use crate::context::ExecutionContext;
use crate::presentation::{ChannelKindGroup, ServerChannelsView, ServerListView, print_json};
use crate::types::OutputFormat;
use anyhow::{Context, Result, anyhow};
use msgcal_providers::{ChannelKind, load_channel_metadata};
use serde::Serialize;

#[derive(Serialize)]
struct ServerChannels<'a> {
    server: &'a str,
    groups: &'a [ChannelKindGroup],
}

pub fn handle(ctx: &ExecutionContext, server: Option<String>) -> Result<()> {
    let index = ctx.index()?;

    let Some(server) = server else {
        return match ctx.format {
            OutputFormat::Json => print_json(index),
            OutputFormat::Plain => {
                print!("{}", ServerListView::new(index, ctx.enable_color()));
                Ok(())
            }
        };
    };

    let channels = index.server(&server).ok_or_else(|| {
        anyhow!(
            "Unknown server '{}'. Run `msgcal channels` to list servers.",
            server
        )
    })?;

    let export_dir = ctx.export_dir()?;
    let kinds = load_channel_metadata(&export_dir, channels)
        .with_context(|| format!("Failed to read channel metadata of '{}'", server))?;

    // Invalid kinds are not selectable, so they are not listed either.
    let groups: Vec<ChannelKindGroup> = ChannelKind::LISTED
        .iter()
        .map(|&kind| ChannelKindGroup {
            kind,
            channels: channels
                .iter()
                .filter(|c| kinds.get(&c.id) == Some(&kind))
                .cloned()
                .collect(),
        })
        .filter(|group| !group.channels.is_empty())
        .collect();

    match ctx.format {
        OutputFormat::Json => print_json(&ServerChannels {
            server: &server,
            groups: &groups,
        }),
        OutputFormat::Plain => {
            print!(
                "{}",
                ServerChannelsView::new(&server, &groups, ctx.enable_color())
            );
            Ok(())
        }
    }
}
