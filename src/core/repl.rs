//! Interactive line-driven session loop.
//!
//! One command per line; every accepted command runs to completion before the
//! next line is read, and the active view is re-rendered after each mutation.
//! The loop is generic over its input/output so tests can drive it with a
//! `Cursor` and capture the transcript.

use crate::core::editor::{Session, ViewMode};
use crate::core::error::FormdeckError;
use crate::core::tui;
use std::io::{BufRead, Write};

const HELP: &str = "\
Commands:
  schemas                 list the built-in schemas
  select [<schema>]       select a schema (no argument clears the selection)
  set <field> <value>     enter a value for one field
  submit                  validate and submit the current entry
  edit <schema> <id>      load a submitted record for updating
  delete <schema> <id>    delete a submitted record
  back                    return from review to form entry
  show                    re-render the current view
  help                    show this help
  quit                    end the session (all records are discarded)";

/// Split `rest` into a leading schema name and a trailing id token.
///
/// Schema names contain spaces, so the id is taken as the last
/// whitespace-separated token and the schema is everything before it.
fn split_schema_and_id(rest: &str) -> Option<(&str, &str)> {
    let rest = rest.trim();
    let (schema, id) = rest.rsplit_once(char::is_whitespace)?;
    let schema = schema.trim();
    if schema.is_empty() || id.is_empty() {
        return None;
    }
    Some((schema, id))
}

fn render_current(session: &Session) -> String {
    match session.editor.mode {
        ViewMode::Entry => tui::render_entry_view(session),
        ViewMode::Review => tui::render_review_view(session),
    }
}

/// Apply one command line to the session. Returns the text to show, or `None`
/// when the loop should end.
fn apply_line(session: &mut Session, line: &str) -> Option<String> {
    let line = line.trim();
    let (cmd, rest) = match line.split_once(char::is_whitespace) {
        Some((cmd, rest)) => (cmd, rest.trim()),
        None => (line, ""),
    };

    let out = match cmd {
        "" => String::new(),
        "quit" | "exit" => return None,
        "help" => HELP.to_string(),
        "schemas" => {
            let mut names = vec![crate::core::catalog::SELECT_SENTINEL.to_string()];
            names.extend(crate::core::catalog::schema_names());
            names.join("\n")
        }
        "select" => match session.select_schema(rest) {
            Ok(()) => render_current(session),
            Err(e) => format!("error: {}", e),
        },
        "set" => match rest.split_once(char::is_whitespace) {
            Some((field, value)) => match session.set_field_value(field, value.trim()) {
                Ok(()) => render_current(session),
                Err(e) => format!("error: {}", e),
            },
            None => "usage: set <field> <value>".to_string(),
        },
        "submit" => {
            session.submit();
            render_current(session)
        }
        "edit" => match split_schema_and_id(rest) {
            Some((schema, id)) => {
                session.begin_edit(schema, id);
                render_current(session)
            }
            None => "usage: edit <schema> <id>".to_string(),
        },
        "delete" => match split_schema_and_id(rest) {
            Some((schema, id)) => {
                session.delete_record(schema, id);
                render_current(session)
            }
            None => "usage: delete <schema> <id>".to_string(),
        },
        "back" => {
            session.go_back();
            render_current(session)
        }
        "show" => render_current(session),
        other => format!("unknown command: {} (try 'help')", other),
    };
    Some(out)
}

/// Run the session loop until `quit` or end of input.
pub fn run_session<R: BufRead, W: Write>(
    session: &mut Session,
    input: R,
    mut out: W,
) -> Result<(), FormdeckError> {
    writeln!(out, "{}", render_current(session))?;
    write!(out, "formdeck> ")?;
    out.flush()?;

    for line in input.lines() {
        let line = line?;
        match apply_line(session, &line) {
            Some(rendered) => {
                if !rendered.is_empty() {
                    writeln!(out, "{}", rendered)?;
                }
            }
            None => break,
        }
        write!(out, "formdeck> ")?;
        out.flush()?;
    }
    writeln!(out)?;
    Ok(())
}
