//! TestWorld pattern for declarative integration test setup.
//!
//! Provides a fluent interface for:
//! - Creating an isolated data package (`Messages/index.json`, `c<id>/...`)
//! - Adding server channels, direct messages and group chats
//! - Executing the CLI against that package with an isolated config file

use anyhow::Result;
use assert_cmd::Command;
use serde_json::json;
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use msgcal_testing::TestWorld;
///
/// let world = TestWorld::new()
///     .with_server_channel("1", "Crab Club", "general", "GUILD_TEXT")
///     .with_messages("1", &["2023-01-01 10:00:00"]);
///
/// let result = world.run(&["stats", "--server", "Crab Club"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    export_dir: PathBuf,
    config_path: PathBuf,
    env_vars: HashMap<String, String>,
    index: BTreeMap<String, Option<String>>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create an empty package: `Messages/` with an empty index.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let export_dir = temp_dir.path().join("discord-package");
        let config_path = temp_dir.path().join("config").join("config.toml");

        std::fs::create_dir_all(export_dir.join("Messages"))
            .expect("Failed to create Messages dir");

        let world = Self {
            temp_dir,
            export_dir,
            config_path,
            env_vars: HashMap::new(),
            index: BTreeMap::new(),
        };
        world.write_index();
        world
    }

    pub fn export_dir(&self) -> &Path {
        &self.export_dir
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    fn messages_dir(&self) -> PathBuf {
        self.export_dir.join("Messages")
    }

    fn channel_dir(&self, id: &str) -> PathBuf {
        let dir = self.messages_dir().join(format!("c{}", id));
        std::fs::create_dir_all(&dir).expect("Failed to create channel dir");
        dir
    }

    fn write_index(&self) {
        let content = serde_json::to_string_pretty(&self.index).expect("Failed to encode index");
        std::fs::write(self.messages_dir().join("index.json"), content)
            .expect("Failed to write index.json");
    }

    fn write_channel(&self, id: &str, kind: &str) {
        let content = json!({ "id": id, "type": kind }).to_string();
        std::fs::write(self.channel_dir(id).join("channel.json"), content)
            .expect("Failed to write channel.json");
    }

    /// Add a raw index entry without creating a channel directory.
    pub fn with_index_entry(mut self, id: &str, display_name: Option<&str>) -> Self {
        self.index
            .insert(id.to_string(), display_name.map(str::to_string));
        self.write_index();
        self
    }

    /// Add `<name> in <server>` with a `channel.json` of the given type.
    pub fn with_server_channel(self, id: &str, server: &str, name: &str, kind: &str) -> Self {
        let world = self.with_index_entry(id, Some(&format!("{} in {}", name, server)));
        world.write_channel(id, kind);
        world
    }

    /// Add a one-to-one conversation with `username`.
    pub fn with_direct_message(self, id: &str, username: &str) -> Self {
        let world = self.with_index_entry(id, Some(&format!("Direct Message with {}#0001", username)));
        world.write_channel(id, "DM");
        world
    }

    /// Add a named group chat.
    pub fn with_group(self, id: &str, name: &str) -> Self {
        let world = self.with_index_entry(id, Some(name));
        world.write_channel(id, "GROUP_DM");
        world
    }

    /// Write `messages.json` for a channel, one record per timestamp.
    pub fn with_messages(self, id: &str, timestamps: &[&str]) -> Self {
        let records: Vec<_> = timestamps
            .iter()
            .enumerate()
            .map(|(n, ts)| json!({ "ID": n + 1, "Timestamp": ts, "Contents": "", "Attachments": "" }))
            .collect();

        std::fs::write(
            self.channel_dir(id).join("messages.json"),
            serde_json::to_string_pretty(&records).expect("Failed to encode messages"),
        )
        .expect("Failed to write messages.json");
        self
    }

    /// Write the config file used by every run.
    pub fn with_config(self, toml: &str) -> Self {
        if let Some(parent) = self.config_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create config dir");
        }
        std::fs::write(&self.config_path, toml).expect("Failed to write config");
        self
    }

    /// Set an environment variable for CLI execution.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Point a command at this package and config, without colors.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--export-dir")
            .arg(&self.export_dir)
            .arg("--config")
            .arg(&self.config_path)
            .arg("--no-color");

        cmd.current_dir(self.temp_dir.path());
        cmd.env_remove("RUST_LOG")
            .env_remove("NO_COLOR")
            .env_remove("MSGCAL_CONFIG");

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Execute the CLI with the given arguments.
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("msgcal")
            .map_err(|e| anyhow::anyhow!("Failed to find msgcal binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args);

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Captured output of one CLI run.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders_write_package_layout() -> Result<()> {
        let world = TestWorld::new()
            .with_server_channel("1", "Crab Club", "general", "GUILD_TEXT")
            .with_direct_message("2", "amy")
            .with_messages("1", &["2023-01-01 10:00:00"]);

        let messages = world.export_dir().join("Messages");
        let index: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(messages.join("index.json"))?)?;
        assert_eq!(index["1"], "general in Crab Club");
        assert_eq!(index["2"], "Direct Message with amy#0001");

        let channel: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(messages.join("c1/channel.json"))?)?;
        assert_eq!(channel["type"], "GUILD_TEXT");
        assert!(messages.join("c1/messages.json").is_file());
        Ok(())
    }
}
