// NOTE: Command Organization Rationale
//
// Why selection flags are shared (not per command)?
// - `stats` and `heatmap` answer questions about the same channel selection
// - One flattened `SelectionArgs` keeps their flags identical in --help

mod commands;
mod common;

pub use commands::*;
pub use common::*;

use crate::types::{LogLevel, OutputFormat};
use clap::Parser;

#[derive(Parser)]
#[command(name = "msgcal")]
#[command(
    about = "Render GitHub-style activity calendars from chat message exports",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        help = "Unpacked data package directory (default: config export_dir, then ./discord-package)"
    )]
    pub export_dir: Option<String>,

    #[arg(long, global = true, help = "Config file (default: $MSGCAL_CONFIG or the user config dir)")]
    pub config: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[arg(long, global = true, help = "Disable ANSI colors")]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
