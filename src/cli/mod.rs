//! CLI argument parsing for docketpost.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Docketpost: post new court filings to social media.
///
/// Filings are formatted through character-budgeted templates so that a
/// post never exceeds the platform limit, with the entry description
/// truncated to fit.
#[derive(Parser, Debug)]
#[command(name = "docketpost")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// State directory (defaults to $DOCKETPOST_HOME, then ./.docketpost).
    #[arg(long, global = true, value_name = "DIR")]
    pub state_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Available commands for docketpost.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Format a post from a template and explicit field values.
    ///
    /// The truncatable field is shortened with an ellipsis if the post
    /// would exceed the template's character budget.
    Format(FormatArgs),

    /// Show the character budget of a template.
    Inspect(InspectArgs),

    /// List available templates.
    Templates,

    /// Subscribe to a case.
    ///
    /// Subscribing twice to the same PACER case returns the existing
    /// subscription.
    Subscribe(SubscribeArgs),

    /// List subscriptions.
    Subscriptions,

    /// Post a docket entry.
    ///
    /// Uses the `post` template for entries with a document and the
    /// `minute` template otherwise.
    Notify(NotifyArgs),
}

/// Arguments for the `format` command.
#[derive(Parser, Debug)]
pub struct FormatArgs {
    /// Template name (see `docketpost templates`).
    #[arg(short, long, default_value = "post")]
    pub template: String,

    /// Field value as key=value. Repeatable.
    #[arg(long = "set", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub values: Vec<(String, String)>,
}

/// Arguments for the `inspect` command.
#[derive(Parser, Debug)]
pub struct InspectArgs {
    /// Template name.
    #[arg(short, long, default_value = "post")]
    pub template: String,
}

/// Arguments for the `subscribe` command.
#[derive(Parser, Debug)]
pub struct SubscribeArgs {
    /// Docket JSON file, or a CourtListener docket id saved under `<state>/dockets/`.
    pub docket: String,
}

/// Arguments for the `notify` command.
#[derive(Parser, Debug)]
pub struct NotifyArgs {
    /// Docket JSON file, or a CourtListener docket id saved under `<state>/dockets/`.
    pub docket: String,

    /// Docket entry JSON file.
    pub entry: PathBuf,

    /// Print the post instead of publishing it.
    #[arg(long)]
    pub dry_run: bool,
}

fn parse_key_value(input: &str) -> Result<(String, String), String> {
    match input.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected KEY=VALUE, got '{}'", input)),
    }
}
