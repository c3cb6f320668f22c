use anyhow::{Context, Result};
use msgcal_engine::IntensityStrategy;
use msgcal_engine::config::{DEFAULT_ACTIVE, DEFAULT_BASE, DEFAULT_MONTH_BACKGROUND};
use msgcal_types::{MonthMode, Rgb};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_ENV: &str = "MSGCAL_CONFIG";
pub const DEFAULT_EXPORT_DIR: &str = "discord-package";

/// Resolve the config file path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. MSGCAL_CONFIG environment variable (with tilde expansion)
/// 3. User config directory (`~/.config/msgcal/config.toml` on Linux)
pub fn resolve_config_path(explicit_path: Option<&str>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        return Some(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV) {
        return Some(expand_tilde(&env_path));
    }

    dirs::config_dir().map(|dir| dir.join("msgcal").join("config.toml"))
}

/// Expand tilde (~) in paths to the user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    pub active_color: Rgb,
    pub base_color: Rgb,
    pub month_background: Rgb,
    pub month_mode: MonthMode,
    pub strategy: IntensityStrategy,
    pub labels: bool,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            active_color: DEFAULT_ACTIVE,
            base_color: DEFAULT_BASE,
            month_background: DEFAULT_MONTH_BACKGROUND,
            month_mode: MonthMode::None,
            strategy: IntensityStrategy::Logarithmic,
            labels: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_dir: Option<PathBuf>,

    #[serde(default)]
    pub render: RenderSettings,
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config {}", path.display()))?;
        Ok(())
    }
}
