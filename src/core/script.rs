//! Non-interactive replay surface: JSON actions in, JSON envelope out.
//!
//! Each input line is one action object tagged by `op`. Actions apply in
//! order against a fresh session; the final envelope carries the submitted
//! store, the view mode, and the status line observed after each action.
//! Record ids are generated at runtime, so edit/delete actions may address a
//! record either by `id` or by zero-based `index` within its schema's list.

use crate::core::editor::Session;
use crate::core::error::FormdeckError;
use crate::core::time;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::io::BufRead;

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Action {
    SelectSchema {
        #[serde(default)]
        name: String,
    },
    SetField {
        field: String,
        value: String,
    },
    Submit,
    BeginEdit {
        schema: String,
        #[serde(default)]
        id: Option<String>,
        #[serde(default)]
        index: Option<usize>,
    },
    DeleteRecord {
        schema: String,
        #[serde(default)]
        id: Option<String>,
        #[serde(default)]
        index: Option<usize>,
    },
    GoBack,
}

fn resolve_id(
    session: &Session,
    schema: &str,
    id: Option<&str>,
    index: Option<usize>,
) -> Option<String> {
    if let Some(id) = id {
        return Some(id.to_string());
    }
    let index = index?;
    session
        .store
        .records(schema)
        .get(index)
        .map(|r| r.id.clone())
}

/// Apply one action to the session.
pub fn apply_action(session: &mut Session, action: &Action) -> Result<(), FormdeckError> {
    match action {
        Action::SelectSchema { name } => session.select_schema(name),
        Action::SetField { field, value } => session.set_field_value(field, value),
        Action::Submit => {
            session.submit();
            Ok(())
        }
        Action::BeginEdit { schema, id, index } => {
            // Unresolvable targets fall through to the engine's silent no-op.
            if let Some(id) = resolve_id(session, schema, id.as_deref(), *index) {
                session.begin_edit(schema, &id);
            }
            Ok(())
        }
        Action::DeleteRecord { schema, id, index } => {
            if let Some(id) = resolve_id(session, schema, id.as_deref(), *index) {
                session.delete_record(schema, &id);
            } else {
                // Match the engine: absent targets still set the delete status.
                session.delete_record(schema, "");
            }
            Ok(())
        }
        Action::GoBack => {
            session.go_back();
            Ok(())
        }
    }
}

/// Parse one action per non-empty line, apply them all against a fresh
/// session, and return the final command envelope.
pub fn run_script<R: BufRead>(input: R) -> Result<JsonValue, FormdeckError> {
    let mut session = Session::new();
    let mut trail: Vec<JsonValue> = Vec::new();

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let action: Action = serde_json::from_str(&line)?;
        match apply_action(&mut session, &action) {
            Ok(()) => trail.push(serde_json::json!({
                "op": op_name(&action),
                "status": session.editor.status,
            })),
            Err(e) => trail.push(serde_json::json!({
                "op": op_name(&action),
                "error": e.to_string(),
            })),
        }
    }

    Ok(time::command_envelope(
        "script",
        "ok",
        serde_json::json!({
            "actions": trail.len(),
            "trail": trail,
            "mode": session.editor.mode,
            "records": session.store.len(),
            "store": session.store,
        }),
    ))
}

fn op_name(action: &Action) -> &'static str {
    match action {
        Action::SelectSchema { .. } => "select_schema",
        Action::SetField { .. } => "set_field",
        Action::Submit => "submit",
        Action::BeginEdit { .. } => "begin_edit",
        Action::DeleteRecord { .. } => "delete_record",
        Action::GoBack => "go_back",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_round_trips_by_op_tag() {
        let action: Action =
            serde_json::from_str(r#"{"op":"select_schema","name":"User Information"}"#).unwrap();
        assert!(matches!(action, Action::SelectSchema { ref name } if name == "User Information"));
    }

    #[test]
    fn test_index_resolution() {
        let mut session = Session::new();
        session.select_schema("User Information").unwrap();
        session.set_field_value("firstName", "Ann").unwrap();
        session.set_field_value("lastName", "Lee").unwrap();
        session.submit();
        let id = resolve_id(&session, "User Information", None, Some(0)).unwrap();
        assert_eq!(session.store.records("User Information")[0].id, id);
        assert!(resolve_id(&session, "User Information", None, Some(5)).is_none());
    }
}
