//! Entry/edit session engine.
//!
//! A [`Session`] owns the transient editor state plus the submitted-record
//! store for the lifetime of one run. Every user action is a synchronous,
//! run-to-completion transition on this struct; there are no concurrent
//! writers by construction.

use crate::core::catalog::{self, FieldSpec};
use crate::core::error::FormdeckError;
use crate::core::store::SubmittedStore;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Fixed status line shown when a required field is missing at submit time.
pub const MSG_REQUIRED: &str = "Please fill out all required fields.";
/// Fixed status line shown after a fresh (non-edit) submit.
pub const MSG_SUBMITTED: &str = "Form submitted successfully!";
/// Fixed status line shown after a delete.
pub const MSG_DELETED: &str = "Entry deleted successfully!";

/// The two view modes of the session.
///
/// `Entry` shows the schema picker, field list, and progress bar; `Review`
/// shows the per-schema record tables. A successful submit flips to `Review`;
/// `go_back` and `begin_edit` flip back to `Entry`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    Entry,
    Review,
}

/// Transient state of the form currently being filled or edited.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EditorState {
    /// Selected schema name, if any.
    pub selected_schema: Option<String>,
    /// Field list of the selected schema (empty when nothing is selected).
    pub fields: Vec<FieldSpec>,
    /// Entered values, keyed by field name. Keys are always drawn from the
    /// currently loaded field list.
    pub values: FxHashMap<String, String>,
    /// Completion ratio in percent (0.0..=100.0), derived from `values`.
    pub completion: f64,
    /// Status line text; empty means nothing to show.
    pub status: String,
    pub mode: ViewMode,
    /// Record id being edited; `None` means a fresh entry.
    pub editing_id: Option<String>,
}

impl Default for EditorState {
    fn default() -> Self {
        Self {
            selected_schema: None,
            fields: Vec::new(),
            values: FxHashMap::default(),
            completion: 0.0,
            status: String::new(),
            mode: ViewMode::Entry,
            editing_id: None,
        }
    }
}

impl EditorState {
    /// Whether the status line should be rendered: only in entry mode, only
    /// for fresh entries, and only when non-empty.
    pub fn status_visible(&self) -> bool {
        self.mode == ViewMode::Entry && self.editing_id.is_none() && !self.status.is_empty()
    }

    /// Submit control label: "Update" while editing, "Submit" otherwise.
    pub fn submit_label(&self) -> &'static str {
        if self.editing_id.is_some() {
            "Update"
        } else {
            "Submit"
        }
    }
}

/// One full data-entry session: editor state plus the submitted-record store.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Session {
    pub editor: EditorState,
    pub store: SubmittedStore,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a schema (or clear the selection with an empty name).
    ///
    /// Always resets the in-progress entry: values, completion, status, and
    /// any active edit target.
    pub fn select_schema(&mut self, name: &str) -> Result<(), FormdeckError> {
        if name.is_empty() {
            self.editor.selected_schema = None;
            self.editor.fields = Vec::new();
        } else {
            self.editor.fields = catalog::get_fields(name)?;
            self.editor.selected_schema = Some(name.to_string());
        }
        self.editor.values = FxHashMap::default();
        self.editor.completion = 0.0;
        self.editor.status.clear();
        self.editor.editing_id = None;
        Ok(())
    }

    /// Store one field value and recompute the completion ratio.
    ///
    /// Unknown field names for the current schema are rejected so the values
    /// map stays a subset of the loaded field list.
    pub fn set_field_value(&mut self, field: &str, value: &str) -> Result<(), FormdeckError> {
        if !self.editor.fields.iter().any(|f| f.name == field) {
            return Err(FormdeckError::ValidationError(format!(
                "Unknown field for current schema: {}",
                field
            )));
        }
        self.editor.values.insert(field.to_string(), value.to_string());
        self.editor.completion = self.completion_ratio();
        Ok(())
    }

    /// Completion as `100 * filled / total` over the loaded field list.
    ///
    /// "Filled" means non-empty after trimming, uniformly for every field
    /// kind and regardless of the `required` flag. Zero fields yields 0.
    fn completion_ratio(&self) -> f64 {
        let total = self.editor.fields.len();
        if total == 0 {
            return 0.0;
        }
        let filled = self
            .editor
            .fields
            .iter()
            .filter(|f| self.is_filled(&f.name))
            .count();
        100.0 * filled as f64 / total as f64
    }

    fn is_filled(&self, field: &str) -> bool {
        self.editor
            .values
            .get(field)
            .is_some_and(|v| !v.trim().is_empty())
    }

    /// Submit the current entry.
    ///
    /// If any required field is empty, sets the validation status and leaves
    /// the store untouched. Otherwise appends a fresh record (with a success
    /// status) or, when editing, replaces the target record in place (same id,
    /// same position, no status). Both paths clear the entry and switch to
    /// review mode.
    pub fn submit(&mut self) {
        let missing_required = self
            .editor
            .fields
            .iter()
            .any(|f| f.required && !self.is_filled(&f.name));
        if missing_required {
            self.editor.status = MSG_REQUIRED.to_string();
            return;
        }

        // Nothing to submit without a selection; surface it like validation.
        let Some(schema) = self.editor.selected_schema.clone() else {
            self.editor.status = MSG_REQUIRED.to_string();
            return;
        };

        let values = std::mem::take(&mut self.editor.values);
        match self.editor.editing_id.take() {
            Some(id) => {
                self.store.replace(&schema, &id, values);
            }
            None => {
                self.store.append(&schema, values);
                self.editor.status = MSG_SUBMITTED.to_string();
            }
        }
        self.editor.completion = 0.0;
        self.editor.mode = ViewMode::Review;
    }

    /// Load a submitted record back into the editor for updating.
    ///
    /// Silent no-op when the id is absent (ids originate from rendered rows).
    /// Re-selects the record's schema so the field list always matches the
    /// record being edited, and recomputes completion from the loaded values.
    pub fn begin_edit(&mut self, schema: &str, id: &str) {
        let Some(record) = self.store.find(schema, id) else {
            return;
        };
        let values = record.values.clone();
        // The record's schema is part of the closed catalog, so this lookup
        // cannot fail for any id that came out of the store.
        if let Ok(fields) = catalog::get_fields(schema) {
            self.editor.fields = fields;
            self.editor.selected_schema = Some(schema.to_string());
        }
        self.editor.values = values;
        self.editor.editing_id = Some(id.to_string());
        self.editor.completion = self.completion_ratio();
        self.editor.status.clear();
        self.editor.mode = ViewMode::Entry;
    }

    /// Delete a submitted record by id. Absent ids are a silent no-op; the
    /// deletion status is set either way.
    pub fn delete_record(&mut self, schema: &str, id: &str) {
        self.store.remove(schema, id);
        self.editor.status = MSG_DELETED.to_string();
    }

    /// Return from review to entry mode, discarding any in-progress values
    /// and edit target. Keeps the schema selection and the store.
    pub fn go_back(&mut self) {
        self.editor.mode = ViewMode::Entry;
        self.editor.values = FxHashMap::default();
        self.editor.completion = 0.0;
        self.editor.editing_id = None;
        self.editor.status.clear();
    }
}
