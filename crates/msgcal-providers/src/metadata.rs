use crate::channel::{ChannelKind, ChannelRef};
use crate::{Result, channel_dir, messages_dir, require_file};
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

const CHANNEL_FILE: &str = "channel.json";

#[derive(Debug, Deserialize)]
struct ChannelRecord {
    #[serde(rename = "type", default)]
    kind: Option<Value>,
}

/// Read `c<id>/channel.json` for every channel and map id -> kind.
pub fn load_channel_metadata(
    export_dir: &Path,
    channels: &[ChannelRef],
) -> Result<BTreeMap<String, ChannelKind>> {
    let messages = messages_dir(export_dir)?;
    let mut kinds = BTreeMap::new();

    for channel in channels {
        let path = channel_dir(&messages, &channel.id)?.join(CHANNEL_FILE);
        require_file(&path)?;

        let reader = BufReader::new(File::open(&path)?);
        let record: ChannelRecord = serde_json::from_reader(reader)?;
        let kind = record.kind.as_ref().map_or(ChannelKind::Invalid, kind_from_value);

        if kind == ChannelKind::Invalid {
            tracing::warn!(id = %channel.id, name = %channel.name, "unrecognised channel type");
        }

        kinds.insert(channel.id.clone(), kind);
    }

    Ok(kinds)
}

// Older packages store the numeric API channel type instead of its name.
fn kind_from_value(value: &Value) -> ChannelKind {
    match value {
        Value::String(raw) => ChannelKind::from_export_type(raw),
        Value::Number(n) => match n.as_u64() {
            Some(0) => ChannelKind::Text,
            Some(2) => ChannelKind::Voice,
            Some(11) => ChannelKind::PublicThread,
            Some(12) => ChannelKind::PrivateThread,
            _ => ChannelKind::Invalid,
        },
        _ => ChannelKind::Invalid,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use std::fs;
    use tempfile::TempDir;

    fn channel(id: &str, name: &str) -> ChannelRef {
        ChannelRef {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    fn write_channel(root: &Path, id: &str, json: &str) {
        let dir = root.join("Messages").join(format!("c{}", id));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("channel.json"), json).unwrap();
    }

    #[test]
    fn test_reads_kinds() -> anyhow::Result<()> {
        let tmp = TempDir::new()?;
        write_channel(tmp.path(), "1", r#"{"id": "1", "type": "GUILD_TEXT"}"#);
        write_channel(tmp.path(), "2", r#"{"id": "2", "type": "PUBLIC_THREAD", "name": "t"}"#);
        write_channel(tmp.path(), "3", r#"{"id": "3", "type": 2}"#);
        write_channel(tmp.path(), "4", r#"{"id": "4"}"#);

        let kinds = load_channel_metadata(
            tmp.path(),
            &[
                channel("1", "general"),
                channel("2", "thread"),
                channel("3", "voice"),
                channel("4", "mystery"),
            ],
        )?;

        assert_eq!(kinds["1"], ChannelKind::Text);
        assert_eq!(kinds["2"], ChannelKind::PublicThread);
        assert_eq!(kinds["3"], ChannelKind::Voice);
        assert_eq!(kinds["4"], ChannelKind::Invalid);
        Ok(())
    }

    #[test]
    fn test_missing_channel_dir() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("Messages")).unwrap();

        let err = load_channel_metadata(tmp.path(), &[channel("99", "gone")]).unwrap_err();
        match err {
            Error::NotFound(path) => assert!(path.ends_with("c99")),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }
}
