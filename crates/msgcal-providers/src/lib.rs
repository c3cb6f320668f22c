//! Readers for chat data packages.
//!
//! Only the Discord data package layout is supported:
//!
//! ```text
//! <export>/Messages/index.json            channel id -> display name
//! <export>/Messages/c<id>/channel.json    channel metadata (type)
//! <export>/Messages/c<id>/messages.json   message records with a Timestamp
//! ```

pub mod channel;
pub mod error;
pub mod index;
pub mod messages;
pub mod metadata;

pub use channel::{ChannelEntry, ChannelKind, ChannelRef, DirectMessage, classify};
pub use error::{Error, Result};
pub use index::ExportIndex;
pub use messages::{load_timestamps, parse_timestamp};
pub use metadata::load_channel_metadata;

use std::path::{Path, PathBuf};

pub const MESSAGES_DIR: &str = "Messages";
pub const INDEX_FILE: &str = "index.json";

/// `<export>/Messages`, after checking both directories exist.
pub fn messages_dir(export_dir: &Path) -> Result<PathBuf> {
    require_dir(export_dir)?;
    let messages = export_dir.join(MESSAGES_DIR);
    require_dir(&messages)?;
    Ok(messages)
}

/// `<export>/Messages/c<id>`, after checking it exists.
pub fn channel_dir(messages_dir: &Path, channel_id: &str) -> Result<PathBuf> {
    let dir = messages_dir.join(format!("c{}", channel_id));
    require_dir(&dir)?;
    Ok(dir)
}

pub(crate) fn require_dir(path: &Path) -> Result<()> {
    if path.is_dir() {
        Ok(())
    } else {
        Err(Error::NotFound(path.to_path_buf()))
    }
}

pub(crate) fn require_file(path: &Path) -> Result<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(Error::NotFound(path.to_path_buf()))
    }
}
