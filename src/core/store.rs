//! In-memory store for submitted records.
//!
//! Records are partitioned by schema name and kept in insertion order. The
//! store is owned exclusively by one [`Session`](crate::core::editor::Session)
//! and lives only as long as the process; there is no persistence layer.

use crate::core::time;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// One submitted, schema-conformant set of field values.
///
/// `values` keys are a subset of the owning schema's field names. The `id` is
/// unique within the schema's record list.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Record {
    pub id: String,
    pub values: FxHashMap<String, String>,
}

impl Record {
    pub fn new(values: FxHashMap<String, String>) -> Self {
        Self {
            id: time::new_record_id(),
            values,
        }
    }
}

/// Schema name -> ordered record list. Insertion order is preserved; updates
/// happen in place and never reorder.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SubmittedStore {
    records: FxHashMap<String, Vec<Record>>,
}

impl SubmittedStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records for one schema, in submission order. Empty slice if none.
    pub fn records(&self, schema: &str) -> &[Record] {
        self.records.get(schema).map_or(&[], Vec::as_slice)
    }

    /// Schema names that currently hold at least one record, in the order
    /// given by `order` (the catalog order, so review tables render stably).
    pub fn populated<'a>(&self, order: &'a [String]) -> Vec<&'a str> {
        order
            .iter()
            .map(String::as_str)
            .filter(|s| !self.records(s).is_empty())
            .collect()
    }

    pub fn find(&self, schema: &str, id: &str) -> Option<&Record> {
        self.records(schema).iter().find(|r| r.id == id)
    }

    /// Append a fresh record; returns its generated id.
    pub fn append(&mut self, schema: &str, values: FxHashMap<String, String>) -> String {
        let record = Record::new(values);
        let id = record.id.clone();
        self.records.entry(schema.to_string()).or_default().push(record);
        id
    }

    /// Replace the values of the record with `id`, keeping its id and position.
    /// Returns false (and changes nothing) when the id is absent.
    pub fn replace(&mut self, schema: &str, id: &str, values: FxHashMap<String, String>) -> bool {
        let Some(list) = self.records.get_mut(schema) else {
            return false;
        };
        match list.iter_mut().find(|r| r.id == id) {
            Some(record) => {
                record.values = values;
                true
            }
            None => false,
        }
    }

    /// Remove the record with `id`. Returns whether anything was removed;
    /// an absent id is a no-op.
    pub fn remove(&mut self, schema: &str, id: &str) -> bool {
        let Some(list) = self.records.get_mut(schema) else {
            return false;
        };
        let before = list.len();
        list.retain(|r| r.id != id);
        list.len() != before
    }

    /// Total record count across all schemas.
    pub fn len(&self) -> usize {
        self.records.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
