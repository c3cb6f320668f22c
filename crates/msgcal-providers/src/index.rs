use crate::channel::{ChannelEntry, ChannelRef, DirectMessage, classify};
use crate::{INDEX_FILE, Result, messages_dir, require_file};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Channels of an export, classified from `Messages/index.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExportIndex {
    /// Server name -> channels, each list sorted by channel name
    pub servers: BTreeMap<String, Vec<ChannelRef>>,
    /// Direct messages and group chats, sorted by label
    pub direct_messages: Vec<DirectMessage>,
}

impl ExportIndex {
    pub fn load(export_dir: &Path) -> Result<Self> {
        let messages = messages_dir(export_dir)?;
        let index_path = messages.join(INDEX_FILE);
        require_file(&index_path)?;

        let reader = BufReader::new(File::open(&index_path)?);
        let raw: BTreeMap<String, Option<String>> = serde_json::from_reader(reader)?;

        let index = Self::from_entries(
            raw.iter()
                .filter_map(|(id, name)| name.as_deref().map(|name| (id.as_str(), name))),
        );

        tracing::debug!(
            path = %index_path.display(),
            entries = raw.len(),
            servers = index.servers.len(),
            direct_messages = index.direct_messages.len(),
            "loaded channel index"
        );

        Ok(index)
    }

    /// Build from `(id, display name)` pairs.
    pub fn from_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut index = ExportIndex::default();

        for (id, display_name) in entries {
            match classify(id, display_name) {
                ChannelEntry::Server { server, channel } => {
                    index.servers.entry(server).or_default().push(channel);
                }
                ChannelEntry::Direct(dm) => index.direct_messages.push(dm),
                ChannelEntry::Ignored => {
                    tracing::debug!(id, display_name, "skipping index entry");
                }
            }
        }

        for channels in index.servers.values_mut() {
            channels.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        }
        index
            .direct_messages
            .sort_by(|a, b| a.label().cmp(b.label()).then_with(|| a.id.cmp(&b.id)));

        index
    }

    pub fn server(&self, name: &str) -> Option<&[ChannelRef]> {
        self.servers.get(name).map(Vec::as_slice)
    }

    /// DMs whose username or display name equals `label`.
    pub fn find_direct_messages<'a>(
        &'a self,
        label: &'a str,
    ) -> impl Iterator<Item = &'a DirectMessage> + 'a {
        self.direct_messages
            .iter()
            .filter(move |dm| dm.label() == label || dm.name == label)
    }

    pub fn channel_count(&self) -> usize {
        self.servers.values().map(Vec::len).sum()
    }
}
