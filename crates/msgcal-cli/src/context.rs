use crate::config::{Config, DEFAULT_EXPORT_DIR, expand_tilde, resolve_config_path};
use crate::types::OutputFormat;
use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use msgcal_providers::ExportIndex;
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

/// Per-invocation state shared by the command handlers.
///
/// The config file and the channel index are loaded on first use only, so
/// commands that never touch the export (`config path`) work without one.
pub struct ExecutionContext {
    export_dir_flag: Option<String>,
    config_path: Option<PathBuf>,
    config: OnceCell<Config>,
    index: OnceCell<ExportIndex>,
    pub format: OutputFormat,
    pub no_color: bool,
}

impl ExecutionContext {
    pub fn new(
        export_dir: Option<String>,
        config_path: Option<String>,
        format: OutputFormat,
        no_color: bool,
    ) -> Self {
        Self {
            export_dir_flag: export_dir,
            config_path: resolve_config_path(config_path.as_deref()),
            config: OnceCell::new(),
            index: OnceCell::new(),
            format,
            no_color,
        }
    }

    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    pub fn config(&self) -> Result<&Config> {
        self.config.get_or_try_init(|| match &self.config_path {
            Some(path) => Config::load_from(path),
            None => Ok(Config::default()),
        })
    }

    /// `--export-dir`, then the config file, then `./discord-package`.
    pub fn export_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.export_dir_flag {
            return Ok(expand_tilde(dir));
        }

        let config = self.config()?;
        Ok(config
            .export_dir
            .as_deref()
            .map(|dir| expand_tilde(&dir.to_string_lossy()))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_EXPORT_DIR)))
    }

    pub fn index(&self) -> Result<&ExportIndex> {
        self.index.get_or_try_init(|| {
            let export_dir = self.export_dir()?;
            ExportIndex::load(&export_dir).with_context(|| {
                format!(
                    "Failed to load the channel index of {} (is this an unpacked data package?)",
                    export_dir.display()
                )
            })
        })
    }

    /// ANSI colors only for an interactive stdout, unless disabled.
    pub fn enable_color(&self) -> bool {
        !self.no_color
            && std::env::var_os("NO_COLOR").is_none()
            && std::io::stdout().is_terminal()
    }
}
