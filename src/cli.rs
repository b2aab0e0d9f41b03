//! CLI struct definitions for the formdeck command-line interface.
//!
//! All clap-derived types live here. Dispatch logic lives in `lib.rs`.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[clap(
    name = "formdeck",
    version = env!("CARGO_PKG_VERSION"),
    about = "Formdeck is a terminal multi-form data-entry deck: pick a built-in schema, fill fields, and review submitted records in per-schema tables with edit/delete actions."
)]
pub(crate) struct Cli {
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Command {
    /// Inspect the built-in schema catalog.
    Schema(SchemaCli),
    /// Run an interactive data-entry session (state is discarded on exit).
    Session,
    /// Replay JSON actions from a file or stdin and print the final envelope.
    Script(ScriptCli),
}

#[derive(clap::Args, Debug)]
pub(crate) struct SchemaCli {
    /// Output format for this command group.
    #[clap(long, global = true, value_enum, default_value = "text")]
    pub format: OutputFormat,
    #[clap(subcommand)]
    pub command: SchemaCommand,
}

#[derive(Subcommand, Debug)]
pub(crate) enum SchemaCommand {
    /// List schema names in catalog order.
    List,
    /// Show one schema's field list.
    Show {
        /// Schema name (e.g. "User Information").
        #[clap(value_name = "NAME")]
        name: String,
    },
}

#[derive(clap::Args, Debug)]
pub(crate) struct ScriptCli {
    /// Read actions from this file (one JSON object per line).
    #[clap(long)]
    pub file: Option<PathBuf>,
    /// Read actions from stdin instead of a file.
    #[clap(long)]
    pub stdin: bool,
}
