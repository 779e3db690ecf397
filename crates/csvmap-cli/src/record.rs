//! JSON-backed record implementations used by the import commands.
//!
//! The engine only talks to records through its collaborator traits, so
//! the CLI materializes imports as generic field maps that serialize
//! straight to JSON objects.

use std::collections::BTreeMap;

use serde::Serialize;

use csvmap_map::{ListSink, Record};
use csvmap_model::FieldValue;

/// A record assembled field-by-field, serialized as a JSON object.
/// Missing values become `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValueRecord {
    #[serde(flatten)]
    pub fields: BTreeMap<String, FieldValue>,
}

impl Record for ValueRecord {
    fn set(&mut self, field: &str, value: FieldValue) {
        self.fields.insert(field.to_string(), value);
    }
}

/// Parent object for nested import: named lists of [`ValueRecord`]
/// elements, created on first use.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ListRecord {
    #[serde(flatten)]
    pub lists: BTreeMap<String, Vec<ValueRecord>>,
}

impl ListSink for ListRecord {
    type Element = ValueRecord;

    fn list_mut(&mut self, field: &str) -> &mut Vec<ValueRecord> {
        self.lists.entry(field.to_string()).or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_record_serializes_missing_as_null() {
        let mut record = ValueRecord::default();
        record.set("hp", FieldValue::Int(12));
        record.set("portrait", FieldValue::Missing);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["hp"], 12);
        assert!(json["portrait"].is_null());
    }

    #[test]
    fn list_record_creates_lists_on_demand() {
        let mut parent = ListRecord::default();
        assert!(parent.lists.is_empty());
        parent.list_mut("entries").push(ValueRecord::default());
        parent.list_mut("entries").push(ValueRecord::default());
        assert_eq!(parent.lists["entries"].len(), 2);
    }
}
