//! Target schema descriptions.
//!
//! The mapping engine never inspects host types directly. The host
//! describes its record type as a plain [`RecordSpec`] (field names plus
//! declared kinds), and schema derivation partitions that description
//! into flat fields and one-level nested list fields.

use serde::{Deserialize, Serialize};

use crate::value::ValueKind;

/// Plain description of a record type, supplied by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordSpec {
    /// Identity of the record type (used as the schema identity).
    pub name: String,
    /// Declared fields, in declaration order.
    pub fields: Vec<FieldSpec>,
}

/// One declared field of a [`RecordSpec`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Field name.
    pub name: String,
    /// Declared field type.
    #[serde(rename = "type")]
    pub field_type: FieldType,
}

/// Declared type of a field: a scalar value or a list of sub-records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    /// A single value of the given kind.
    Scalar(ValueKind),
    /// A list whose elements follow the given record description.
    List(RecordSpec),
}

/// A target field identified by name and declared value kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Target field name.
    pub name: String,
    /// Declared value kind.
    pub kind: ValueKind,
}

/// A list-typed field together with its element schema.
#[derive(Debug, Clone, PartialEq)]
pub struct NestedFieldSpec {
    /// Name of the list field on the target record.
    pub list_field: String,
    /// Flat fields of the element record.
    pub element_fields: Vec<FieldDescriptor>,
}

/// Result of schema derivation: the flat/nested partition of a record
/// description. Field order follows declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct TargetSchema {
    /// Schema identity, taken from the record description's name.
    pub target: String,
    /// Non-nested value fields.
    pub flat_fields: Vec<FieldDescriptor>,
    /// One-level nested list fields.
    pub nested: Vec<NestedFieldSpec>,
}
