use crate::{Error, Result, channel_dir, messages_dir, require_file};
use chrono::{DateTime, NaiveDateTime};
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

const MESSAGES_FILE: &str = "messages.json";

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];
const OFFSET_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f%:z", "%Y-%m-%d %H:%M:%S%.f%z"];

#[derive(Debug, Deserialize)]
struct MessageRecord {
    #[serde(rename = "Timestamp", alias = "timestamp")]
    timestamp: String,
}

/// Parse an export timestamp into its local wall-clock time.
///
/// Offsets are accepted but dropped: days are bucketed in whatever local
/// representation the export used.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }

    for format in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(raw, format) {
            return Some(dt.naive_local());
        }
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
}

/// All message timestamps of the given channels, in file order.
pub fn load_timestamps<S: AsRef<str>>(
    export_dir: &Path,
    channel_ids: &[S],
) -> Result<Vec<NaiveDateTime>> {
    let messages = messages_dir(export_dir)?;
    let mut timestamps = Vec::new();

    for id in channel_ids {
        let path = channel_dir(&messages, id.as_ref())?.join(MESSAGES_FILE);
        require_file(&path)?;

        let reader = BufReader::new(File::open(&path)?);
        let records: Vec<MessageRecord> = serde_json::from_reader(reader)?;
        let before = timestamps.len();

        for record in &records {
            let parsed = parse_timestamp(&record.timestamp).ok_or_else(|| {
                Error::Parse(format!(
                    "unrecognised timestamp '{}' in {}",
                    record.timestamp,
                    path.display()
                ))
            })?;
            timestamps.push(parsed);
        }

        tracing::debug!(
            channel = id.as_ref(),
            messages = timestamps.len() - before,
            "loaded channel messages"
        );
    }

    Ok(timestamps)
}
