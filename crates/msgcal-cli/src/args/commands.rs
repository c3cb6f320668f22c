use super::common::{RenderArgs, SelectionArgs};
use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Load the channel index and show what the export contains")]
    Index,

    #[command(about = "List servers and direct messages, or the channels of one server")]
    Channels {
        #[arg(long, help = "Show this server's channels grouped by type")]
        server: Option<String>,
    },

    #[command(about = "Print per-day message statistics for a selection")]
    Stats {
        #[command(flatten)]
        selection: SelectionArgs,
    },

    #[command(about = "Render the activity calendar for a selection")]
    Heatmap {
        #[command(flatten)]
        selection: SelectionArgs,

        #[command(flatten)]
        render: RenderArgs,
    },

    #[command(about = "Inspect or create the config file")]
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    #[command(about = "Print the effective configuration")]
    Show,

    #[command(about = "Write the default configuration file")]
    Init {
        #[arg(long, help = "Overwrite an existing file")]
        force: bool,
    },

    #[command(about = "Print the config file location")]
    Path,
}
