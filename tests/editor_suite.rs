use formdeck::core::editor::{MSG_DELETED, MSG_REQUIRED, MSG_SUBMITTED, Session, ViewMode};
use formdeck::core::error::FormdeckError;

fn filled_user_session() -> Session {
    let mut session = Session::new();
    session.select_schema("User Information").unwrap();
    session.set_field_value("firstName", "Ann").unwrap();
    session.set_field_value("lastName", "Lee").unwrap();
    session
}

#[test]
fn test_completion_ratio_counts_all_fields_uniformly() {
    let mut session = Session::new();
    session.select_schema("User Information").unwrap();
    assert_eq!(session.editor.completion, 0.0);

    // 1 of 3 fields filled, required flag irrelevant to the ratio.
    session.set_field_value("age", "30").unwrap();
    assert!((session.editor.completion - 100.0 / 3.0).abs() < 1e-9);

    session.set_field_value("firstName", "Ann").unwrap();
    assert!((session.editor.completion - 200.0 / 3.0).abs() < 1e-9);

    session.set_field_value("lastName", "Lee").unwrap();
    assert!((session.editor.completion - 100.0).abs() < 1e-9);
}

#[test]
fn test_completion_ignores_whitespace_only_values() {
    let mut session = Session::new();
    session.select_schema("User Information").unwrap();
    session.set_field_value("firstName", "   ").unwrap();
    assert_eq!(session.editor.completion, 0.0);
}

#[test]
fn test_empty_selection_has_zero_completion() {
    let mut session = Session::new();
    session.select_schema("").unwrap();
    assert!(session.editor.fields.is_empty());
    assert_eq!(session.editor.completion, 0.0);
}

#[test]
fn test_unknown_field_is_rejected() {
    let mut session = Session::new();
    session.select_schema("User Information").unwrap();
    let err = session.set_field_value("street", "Elm").unwrap_err();
    assert!(matches!(err, FormdeckError::ValidationError(_)));
    assert!(session.editor.values.is_empty());
}

#[test]
fn test_unknown_schema_is_not_found() {
    let mut session = Session::new();
    let err = session.select_schema("Shipping Information").unwrap_err();
    assert!(matches!(err, FormdeckError::NotFound(_)));
}

#[test]
fn test_submit_missing_required_leaves_store_untouched() {
    let mut session = Session::new();
    session.select_schema("User Information").unwrap();
    session.set_field_value("firstName", "Ann").unwrap();
    assert!((session.editor.completion - 100.0 / 3.0).abs() < 1e-9);

    session.submit();
    assert_eq!(session.editor.status, MSG_REQUIRED);
    assert!(session.store.is_empty());
    assert_eq!(session.editor.mode, ViewMode::Entry);
    assert_eq!(session.editor.values["firstName"], "Ann");
    assert!(session.editor.status_visible());
}

#[test]
fn test_submit_whitespace_required_value_fails_validation() {
    let mut session = filled_user_session();
    session.set_field_value("lastName", "   ").unwrap();
    session.submit();
    assert_eq!(session.editor.status, MSG_REQUIRED);
    assert!(session.store.is_empty());
}

#[test]
fn test_submit_without_selection_does_not_panic_or_append() {
    let mut session = Session::new();
    session.submit();
    assert_eq!(session.editor.status, MSG_REQUIRED);
    assert!(session.store.is_empty());
}

#[test]
fn test_valid_submit_appends_one_record_and_switches_to_review() {
    let mut session = filled_user_session();
    session.submit();

    let records = session.store.records("User Information");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].values["firstName"], "Ann");
    assert_eq!(records[0].values["lastName"], "Lee");
    assert!(!records[0].id.is_empty());

    assert_eq!(session.editor.status, MSG_SUBMITTED);
    assert_eq!(session.editor.mode, ViewMode::Review);
    assert!(session.editor.values.is_empty());
    assert_eq!(session.editor.completion, 0.0);
    assert!(session.editor.editing_id.is_none());
}

#[test]
fn test_submitted_ids_are_unique() {
    let mut session = filled_user_session();
    session.submit();
    session.go_back();
    session.set_field_value("firstName", "Ben").unwrap();
    session.set_field_value("lastName", "Roy").unwrap();
    session.submit();

    let records = session.store.records("User Information");
    assert_eq!(records.len(), 2);
    assert_ne!(records[0].id, records[1].id);
}

#[test]
fn test_edit_submit_replaces_in_place() {
    let mut session = filled_user_session();
    session.submit();
    let id = session.store.records("User Information")[0].id.clone();

    session.begin_edit("User Information", &id);
    assert_eq!(session.editor.mode, ViewMode::Entry);
    assert_eq!(session.editor.editing_id.as_deref(), Some(id.as_str()));
    assert_eq!(session.editor.values["lastName"], "Lee");
    assert_eq!(session.editor.submit_label(), "Update");
    // Completion reflects the loaded record (2 of 3 fields).
    assert!((session.editor.completion - 200.0 / 3.0).abs() < 1e-9);

    session.set_field_value("lastName", "Lane").unwrap();
    session.submit();

    let records = session.store.records("User Information");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, id);
    assert_eq!(records[0].values["lastName"], "Lane");
    assert_eq!(records[0].values["firstName"], "Ann");
    // The update path shows no success message.
    assert!(session.editor.status.is_empty());
    assert_eq!(session.editor.mode, ViewMode::Review);
    assert!(session.editor.editing_id.is_none());
}

#[test]
fn test_edit_restores_schema_selection() {
    let mut session = filled_user_session();
    session.submit();
    let id = session.store.records("User Information")[0].id.clone();

    // Move the editor onto a different schema, then edit the user record.
    session.select_schema("Address Information").unwrap();
    session.begin_edit("User Information", &id);
    assert_eq!(
        session.editor.selected_schema.as_deref(),
        Some("User Information")
    );
    assert!(session.editor.fields.iter().any(|f| f.name == "firstName"));
}

#[test]
fn test_edit_unknown_id_is_silent_noop() {
    let mut session = filled_user_session();
    session.submit();
    let before = session.clone();
    session.begin_edit("User Information", "no-such-id");
    assert_eq!(session.editor.mode, before.editor.mode);
    assert!(session.editor.editing_id.is_none());
    assert!(session.editor.values.is_empty());
}

#[test]
fn test_edit_does_not_leak_id_into_values() {
    let mut session = filled_user_session();
    session.submit();
    let id = session.store.records("User Information")[0].id.clone();
    session.begin_edit("User Information", &id);
    assert!(!session.editor.values.contains_key("id"));
}

#[test]
fn test_delete_removes_exactly_one_record() {
    let mut session = filled_user_session();
    session.submit();
    session.go_back();
    session.set_field_value("firstName", "Ben").unwrap();
    session.set_field_value("lastName", "Roy").unwrap();
    session.submit();

    session.go_back();
    session.select_schema("Address Information").unwrap();
    session.set_field_value("street", "12 Hill Rd").unwrap();
    session.set_field_value("city", "Kochi").unwrap();
    session.set_field_value("state", "Kerala").unwrap();
    session.set_field_value("zipCode", "682001").unwrap();
    session.submit();

    let ids: Vec<String> = session
        .store
        .records("User Information")
        .iter()
        .map(|r| r.id.clone())
        .collect();
    session.delete_record("User Information", &ids[0]);
    assert_eq!(session.editor.status, MSG_DELETED);

    let remaining = session.store.records("User Information");
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, ids[1]);
    assert_eq!(session.store.records("Address Information").len(), 1);
}

#[test]
fn test_delete_unknown_id_is_noop_with_status() {
    let mut session = filled_user_session();
    session.submit();
    session.delete_record("User Information", "no-such-id");
    assert_eq!(session.store.records("User Information").len(), 1);
    assert_eq!(session.editor.status, MSG_DELETED);
}

#[test]
fn test_go_back_clears_entry_but_not_store_or_selection() {
    let mut session = filled_user_session();
    session.submit();
    session.go_back();

    assert_eq!(session.editor.mode, ViewMode::Entry);
    assert!(session.editor.values.is_empty());
    assert!(session.editor.editing_id.is_none());
    assert!(session.editor.status.is_empty());
    assert_eq!(
        session.editor.selected_schema.as_deref(),
        Some("User Information")
    );
    assert_eq!(session.store.records("User Information").len(), 1);
}

#[test]
fn test_go_back_without_prior_edit_is_safe() {
    let mut session = Session::new();
    session.go_back();
    assert_eq!(session.editor.mode, ViewMode::Entry);
    assert!(session.store.is_empty());
}

#[test]
fn test_select_schema_aborts_edit_session() {
    let mut session = filled_user_session();
    session.submit();
    let id = session.store.records("User Information")[0].id.clone();
    session.begin_edit("User Information", &id);

    session.select_schema("Payment Information").unwrap();
    assert!(session.editor.editing_id.is_none());
    assert_eq!(session.editor.submit_label(), "Submit");
    assert!(session.editor.values.is_empty());
    assert_eq!(session.editor.completion, 0.0);
}

#[test]
fn test_status_hidden_while_editing() {
    let mut session = filled_user_session();
    session.submit();
    let id = session.store.records("User Information")[0].id.clone();
    session.begin_edit("User Information", &id);
    // Deleting while an edit session is active sets a status, but the entry
    // view suppresses it until the edit target clears.
    session.delete_record("User Information", &id);
    assert_eq!(session.editor.status, MSG_DELETED);
    assert!(!session.editor.status_visible());
}

#[test]
fn test_spec_scenario_full_lifecycle() {
    let mut session = Session::new();

    // Select "User Information", enter firstName only: ratio is 1 of 3.
    session.select_schema("User Information").unwrap();
    session.set_field_value("firstName", "Ann").unwrap();
    assert!((session.editor.completion - 100.0 / 3.0).abs() < 1e-9);

    // Submit without lastName: validation message, store unchanged.
    session.submit();
    assert_eq!(session.editor.status, MSG_REQUIRED);
    assert!(session.store.is_empty());

    // Fill lastName and submit: one record, review mode, success message.
    session.set_field_value("lastName", "Lee").unwrap();
    session.submit();
    assert_eq!(session.store.records("User Information").len(), 1);
    assert_eq!(session.editor.mode, ViewMode::Review);
    assert_eq!(session.editor.status, MSG_SUBMITTED);

    // Edit lastName to "Lane": same id, length still 1.
    let id = session.store.records("User Information")[0].id.clone();
    session.begin_edit("User Information", &id);
    session.set_field_value("lastName", "Lane").unwrap();
    session.submit();
    let records = session.store.records("User Information");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, id);
    assert_eq!(records[0].values["lastName"], "Lane");

    // Delete the record: store empty, deletion message.
    session.delete_record("User Information", &id);
    assert!(session.store.records("User Information").is_empty());
    assert_eq!(session.editor.status, MSG_DELETED);
}
