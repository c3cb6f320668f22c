use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

static SERVER_CHANNEL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?<name>.+)\sin\s(?<server>.+)$").unwrap());

static DIRECT_MESSAGE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Direct Message with (?<user>.+?)#\d+$").unwrap());

const UNKNOWN_CHANNEL: &str = "Unknown channel";
const IGNORED_NAMES: [&str; 2] = ["Direct Message with Unknown Participant", "None"];

/// A channel inside a server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelRef {
    pub id: String,
    pub name: String,
}

/// A one-to-one or group conversation outside any server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectMessage {
    pub id: String,
    pub name: String,
    /// `None` for group chats
    pub username: Option<String>,
}

impl DirectMessage {
    pub fn is_group(&self) -> bool {
        self.username.is_none()
    }

    /// Username for DMs, full display name for groups.
    pub fn label(&self) -> &str {
        self.username.as_deref().unwrap_or(&self.name)
    }
}

/// Classification of one index entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelEntry {
    Server { server: String, channel: ChannelRef },
    Direct(DirectMessage),
    Ignored,
}

/// Classify an `index.json` entry by its display name.
pub fn classify(id: &str, display_name: &str) -> ChannelEntry {
    if let Some(caps) = SERVER_CHANNEL_REGEX.captures(display_name) {
        let name = &caps["name"];
        if name == UNKNOWN_CHANNEL {
            return ChannelEntry::Ignored;
        }
        return ChannelEntry::Server {
            server: caps["server"].to_string(),
            channel: ChannelRef {
                id: id.to_string(),
                name: name.to_string(),
            },
        };
    }

    if let Some(caps) = DIRECT_MESSAGE_REGEX.captures(display_name) {
        return ChannelEntry::Direct(DirectMessage {
            id: id.to_string(),
            name: display_name.to_string(),
            username: Some(caps["user"].to_string()),
        });
    }

    if IGNORED_NAMES.contains(&display_name) {
        return ChannelEntry::Ignored;
    }

    ChannelEntry::Direct(DirectMessage {
        id: id.to_string(),
        name: display_name.to_string(),
        username: None,
    })
}

/// Channel type from `channel.json`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelKind {
    Text,
    Voice,
    PrivateThread,
    PublicThread,
    Invalid,
}

impl ChannelKind {
    pub const LISTED: [ChannelKind; 4] = [
        ChannelKind::Text,
        ChannelKind::Voice,
        ChannelKind::PrivateThread,
        ChannelKind::PublicThread,
    ];

    pub fn from_export_type(raw: &str) -> Self {
        match raw {
            "GUILD_TEXT" => ChannelKind::Text,
            "GUILD_VOICE" => ChannelKind::Voice,
            "PRIVATE_THREAD" => ChannelKind::PrivateThread,
            "PUBLIC_THREAD" => ChannelKind::PublicThread,
            _ => ChannelKind::Invalid,
        }
    }

    /// Plural heading used when listing channels.
    pub fn heading(&self) -> &'static str {
        match self {
            ChannelKind::Text => "Text Channels",
            ChannelKind::Voice => "Voice Channels",
            ChannelKind::PrivateThread => "Private Threads",
            ChannelKind::PublicThread => "Public Threads",
            ChannelKind::Invalid => "Other",
        }
    }
}

impl fmt::Display for ChannelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ChannelKind::Text => "text",
            ChannelKind::Voice => "voice",
            ChannelKind::PrivateThread => "private_thread",
            ChannelKind::PublicThread => "public_thread",
            ChannelKind::Invalid => "invalid",
        };
        f.write_str(s)
    }
}
