//! Formdeck: a terminal multi-form data-entry deck.
//!
//! Formdeck wraps a fixed catalog of form schemas in a small session engine:
//! select a schema, fill its fields, submit, and review submitted records in
//! per-schema tables with edit/delete actions. All state is in-memory for the
//! lifetime of one session; nothing is persisted.
//!
//! # Architecture
//!
//! - **Catalog** ([`core::catalog`]): three built-in schemas, fixed at build
//!   time. Read-only; an unknown schema name is a contract violation.
//! - **Session engine** ([`core::editor`]): one owned [`core::editor::Session`]
//!   holds the transient editor state and the submitted-record store. Every
//!   user action is a synchronous, run-to-completion transition.
//! - **Store** ([`core::store`]): records partitioned by schema name,
//!   insertion-ordered, ulid-identified, updated in place.
//! - **Surfaces**: an interactive line loop ([`core::repl`]), a JSON action
//!   replay surface ([`core::script`]), and catalog inspection — all rendered
//!   through [`core::tui`].
//!
//! # Examples
//!
//! ```bash
//! # List the built-in schemas
//! formdeck schema list
//!
//! # Inspect one schema's fields
//! formdeck schema show "User Information"
//!
//! # Interactive entry session
//! formdeck session
//!
//! # Replay a recorded action stream
//! formdeck script --file actions.jsonl
//! ```

pub mod core;

mod cli;

use crate::cli::{Cli, Command, OutputFormat, SchemaCommand};
use crate::core::{catalog, editor::Session, error::FormdeckError, repl, script, tui};

use clap::Parser;
use std::fs::File;
use std::io::{self, BufReader};

pub fn run() -> Result<(), FormdeckError> {
    let cli = Cli::parse();

    match cli.command {
        Command::Schema(schema_cli) => match schema_cli.command {
            SchemaCommand::List => match schema_cli.format {
                OutputFormat::Json => {
                    println!(
                        "{}",
                        serde_json::to_string_pretty(&catalog::schema_names())?
                    );
                }
                OutputFormat::Text => {
                    for name in catalog::schema_names() {
                        println!("  • {}", name);
                    }
                }
            },
            SchemaCommand::Show { name } => {
                let schema = catalog::get_schema(&name)?;
                match schema_cli.format {
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(&schema)?);
                    }
                    OutputFormat::Text => {
                        println!("{}", tui::render_schema(&schema));
                    }
                }
            }
        },
        Command::Session => {
            let mut session = Session::new();
            let stdin = io::stdin();
            let stdout = io::stdout();
            repl::run_session(&mut session, stdin.lock(), stdout.lock())?;
        }
        Command::Script(script_cli) => {
            let envelope = match (&script_cli.file, script_cli.stdin) {
                (Some(path), _) => script::run_script(BufReader::new(File::open(path)?))?,
                (None, true) => script::run_script(io::stdin().lock())?,
                (None, false) => {
                    return Err(FormdeckError::ValidationError(
                        "script requires --file <path> or --stdin".to_string(),
                    ));
                }
            };
            println!("{}", serde_json::to_string_pretty(&envelope)?);
        }
    }

    Ok(())
}
