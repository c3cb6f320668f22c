// NOTE: msgcal Architecture Rationale
//
// Why a grid model between engine and terminal?
// - The engine resolves every cell (date, count, alpha, color, decoration) into plain data
// - Presentation only paints tokens, so layout is testable without a terminal
// - The same model backs `--format json` for compositing in other tools
//
// Why rebuild the day table per command?
// - A selection change means new channels; there is no incremental update path
// - Exports are bounded (one row per message), so a full pass is cheap
//
// Why flags instead of selection menus?
// - Commands stay scriptable and testable; `msgcal channels` lists what can be selected

mod args;
mod commands;
pub mod config;
pub mod context;
mod handlers;
pub mod logging;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands, ConfigCommand, RenderArgs, SelectionArgs};
pub use commands::run;
