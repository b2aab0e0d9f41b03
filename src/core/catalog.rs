//! Built-in form schema catalog.
//!
//! The catalog is read-only constant data: three form schemas, fixed at build
//! time. Schemas cannot be added, removed, or altered at runtime; an unknown
//! schema name is a contract violation, not a user error.

use crate::core::error::FormdeckError;
use serde::{Deserialize, Serialize};

/// Input kind for one field. Closed set; rendering and masking key off this.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum FieldKind {
    /// Free-form short text.
    Text,
    /// Numeric entry (stored as entered, no parsing).
    Number,
    /// Single choice from a fixed, ordered option list.
    Dropdown { options: Vec<String> },
    /// Calendar date entry.
    Date,
    /// Secret entry; rendered masked.
    Password,
}

/// One input in a schema.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FieldSpec {
    /// Unique key within the owning schema.
    pub name: String,
    /// Display text.
    pub label: String,
    #[serde(flatten)]
    pub kind: FieldKind,
    /// Whether submit requires a non-empty value.
    pub required: bool,
}

impl FieldSpec {
    fn new(name: &str, label: &str, kind: FieldKind, required: bool) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind,
            required,
        }
    }
}

/// A named, ordered sequence of field specs.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FormSchema {
    pub name: String,
    pub fields: Vec<FieldSpec>,
}

/// Schema names in catalog order.
pub const SCHEMA_NAMES: &[&str] = &[
    "User Information",
    "Address Information",
    "Payment Information",
];

/// Sentinel shown at the top of the schema picker.
pub const SELECT_SENTINEL: &str = "-- Select --";

/// Build the full built-in catalog, in `SCHEMA_NAMES` order.
pub fn builtin_catalog() -> Vec<FormSchema> {
    vec![
        FormSchema {
            name: "User Information".to_string(),
            fields: vec![
                FieldSpec::new("firstName", "First Name", FieldKind::Text, true),
                FieldSpec::new("lastName", "Last Name", FieldKind::Text, true),
                FieldSpec::new("age", "Age", FieldKind::Number, false),
            ],
        },
        FormSchema {
            name: "Address Information".to_string(),
            fields: vec![
                FieldSpec::new("street", "Street", FieldKind::Text, true),
                FieldSpec::new("city", "City", FieldKind::Text, true),
                FieldSpec::new(
                    "state",
                    "State",
                    FieldKind::Dropdown {
                        options: vec![
                            "Kerala".to_string(),
                            "TamilNadu".to_string(),
                            "Karnataka".to_string(),
                            "Goa".to_string(),
                            "Other".to_string(),
                        ],
                    },
                    true,
                ),
                FieldSpec::new("zipCode", "Pin code", FieldKind::Number, true),
            ],
        },
        FormSchema {
            name: "Payment Information".to_string(),
            fields: vec![
                FieldSpec::new("cardNumber", "Card Number", FieldKind::Number, true),
                FieldSpec::new("expiryDate", "Expiry Date", FieldKind::Date, true),
                FieldSpec::new("cvv", "CVV", FieldKind::Password, true),
                FieldSpec::new("cardholderName", "Cardholder Name", FieldKind::Text, true),
            ],
        },
    ]
}

/// Ordered schema names.
pub fn schema_names() -> Vec<String> {
    SCHEMA_NAMES.iter().map(|s| s.to_string()).collect()
}

/// Look up one schema by name.
pub fn get_schema(name: &str) -> Result<FormSchema, FormdeckError> {
    builtin_catalog()
        .into_iter()
        .find(|s| s.name == name)
        .ok_or_else(|| FormdeckError::NotFound(format!("Unknown schema: {}", name)))
}

/// Ordered field specs for one schema.
pub fn get_fields(name: &str) -> Result<Vec<FieldSpec>, FormdeckError> {
    Ok(get_schema(name)?.fields)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order_matches_names() {
        let catalog = builtin_catalog();
        let names: Vec<&str> = catalog.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, SCHEMA_NAMES);
    }

    #[test]
    fn test_field_names_unique_per_schema() {
        for schema in builtin_catalog() {
            let mut names: Vec<&str> = schema.fields.iter().map(|f| f.name.as_str()).collect();
            names.sort_unstable();
            names.dedup();
            assert_eq!(names.len(), schema.fields.len(), "{}", schema.name);
        }
    }

    #[test]
    fn test_unknown_schema_is_not_found() {
        let err = get_fields("Shipping Information").unwrap_err();
        assert!(matches!(err, FormdeckError::NotFound(_)));
    }

    #[test]
    fn test_dropdown_options_ordered() {
        let fields = get_fields("Address Information").unwrap();
        let state = fields.iter().find(|f| f.name == "state").unwrap();
        match &state.kind {
            FieldKind::Dropdown { options } => {
                assert_eq!(options.first().map(String::as_str), Some("Kerala"));
                assert_eq!(options.last().map(String::as_str), Some("Other"));
            }
            other => panic!("state should be a dropdown, got {:?}", other),
        }
    }
}
