use crate::config::Config;
use crate::context::ExecutionContext;
use crate::presentation::print_json;
use crate::types::OutputFormat;
use anyhow::{Context, Result, bail};
use std::path::Path;

fn require_path(ctx: &ExecutionContext) -> Result<&Path> {
    ctx.config_path().context(
        "Cannot determine a config location; pass --config or set MSGCAL_CONFIG",
    )
}

pub fn show(ctx: &ExecutionContext) -> Result<()> {
    let config = ctx.config()?;

    match ctx.format {
        OutputFormat::Json => print_json(config),
        OutputFormat::Plain => {
            print!("{}", toml::to_string_pretty(config)?);
            Ok(())
        }
    }
}

pub fn init(ctx: &ExecutionContext, force: bool) -> Result<()> {
    let path = require_path(ctx)?;

    if path.exists() && !force {
        bail!(
            "Config already exists at {} (use --force to overwrite)",
            path.display()
        );
    }

    Config::default().save_to(path)?;
    println!("Wrote default config to {}", path.display());
    Ok(())
}

pub fn path(ctx: &ExecutionContext) -> Result<()> {
    println!("{}", require_path(ctx)?.display());
    Ok(())
}
