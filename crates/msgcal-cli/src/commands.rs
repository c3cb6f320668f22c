use super::args::{Cli, Commands, ConfigCommand};
use super::context::ExecutionContext;
use super::handlers;
use crate::logging;
use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.log_level);

    let ctx = ExecutionContext::new(cli.export_dir, cli.config, cli.format, cli.no_color);

    let Some(command) = cli.command else {
        show_guidance(&ctx)?;
        return Ok(());
    };

    match command {
        Commands::Index => handlers::index::handle(&ctx),

        Commands::Channels { server } => handlers::channels::handle(&ctx, server),

        Commands::Stats { selection } => handlers::stats::handle(&ctx, &selection),

        Commands::Heatmap { selection, render } => {
            handlers::heatmap::handle(&ctx, &selection, &render)
        }

        Commands::Config { command } => match command {
            ConfigCommand::Show => handlers::config::show(&ctx),
            ConfigCommand::Init { force } => handlers::config::init(&ctx, force),
            ConfigCommand::Path => handlers::config::path(&ctx),
        },
    }
}

fn show_guidance(ctx: &ExecutionContext) -> Result<()> {
    let export_dir = ctx.export_dir()?;

    println!("msgcal - activity calendars for chat message exports\n");

    if export_dir.join(msgcal_providers::MESSAGES_DIR).is_dir() {
        println!("Export found at {}\n", export_dir.display());
        println!("Quick commands:");
        println!("  msgcal index                       # What the export contains");
        println!("  msgcal channels                    # Servers and direct messages");
        println!("  msgcal heatmap --all-dms           # Calendar of all direct messages");
        println!("  msgcal heatmap --server <name>     # Calendar of one server\n");
    } else {
        println!("No export found at {}\n", export_dir.display());
        println!("Get started:");
        println!("  1. Request your data package and unzip it");
        println!("  2. msgcal --export-dir <dir> index");
        println!("  3. Or store the location: msgcal config init, then set export_dir\n");
    }

    println!("For more commands:");
    println!("  msgcal --help");
    Ok(())
}
