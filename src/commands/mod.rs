//! Command implementations for docketpost.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations, plus the loading helpers they share.

mod format;
mod notify;
mod subscribe;

use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::context::AppContext;
use crate::docket::{Docket, DocketSource, JsonDocketSource, read_json_file};
use crate::error::Result;
use crate::subscription::FileStore;

/// Dispatch a command to its implementation.
///
/// This is the main entry point for command execution. The state directory
/// is resolved once and handed to every command.
pub fn dispatch(cli: Cli) -> Result<()> {
    let ctx = AppContext::resolve(cli.state_dir.as_deref())?;

    match cli.command {
        Command::Format(args) => format::cmd_format(&ctx, args),
        Command::Inspect(args) => format::cmd_inspect(&ctx, args),
        Command::Templates => format::cmd_templates(&ctx),
        Command::Subscribe(args) => subscribe::cmd_subscribe(&ctx, args),
        Command::Subscriptions => subscribe::cmd_subscriptions(&ctx),
        Command::Notify(args) => notify::cmd_notify(&ctx, args),
    }
}

fn load_config(ctx: &AppContext) -> Result<Config> {
    Config::load_or_default(ctx.config_path())
}

fn open_store(ctx: &AppContext) -> FileStore {
    FileStore::new(ctx.subscriptions_path())
}

/// Load a docket given either a CourtListener id (looked up in the state
/// directory's `dockets/`) or a path to a docket JSON file.
fn load_docket(ctx: &AppContext, docket: &str) -> Result<Docket> {
    match docket.parse::<u64>() {
        Ok(id) => JsonDocketSource::new(ctx.dockets_dir()).docket(id),
        Err(_) => read_json_file(docket),
    }
}
