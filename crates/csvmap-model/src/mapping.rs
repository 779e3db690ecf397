//! Column mapping types for CSV-to-field binding.
//!
//! These types carry the binding choices made during the configuration
//! phase and round-trip through serde as the persisted snapshot.

use serde::{Deserialize, Serialize};

use crate::schema::FieldDescriptor;

/// One target field bound to a CSV column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldBinding {
    /// The target field.
    pub field: FieldDescriptor,
    /// Bound column name; `None` when no column is available.
    pub column: Option<String>,
}

/// Field-to-column bindings for the non-nested fields of a target schema.
///
/// Each field appears at most once; binding order follows field
/// declaration order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlatMapping {
    /// Bindings in field declaration order.
    pub bindings: Vec<FieldBinding>,
}

impl FlatMapping {
    /// Looks up the binding for a field by name.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&FieldBinding> {
        self.bindings.iter().find(|b| b.field.name == field)
    }

    /// Mutable lookup of the binding for a field by name.
    pub fn get_mut(&mut self, field: &str) -> Option<&mut FieldBinding> {
        self.bindings.iter_mut().find(|b| b.field.name == field)
    }
}

/// A list-typed target field plus the flat mapping of its element schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NestedMapping {
    /// Name of the list field on the target record.
    pub list_field: String,
    /// Presentation-only foldout state; round-trips but carries no
    /// mapping semantics.
    pub expanded: bool,
    /// Bindings for the element record's fields.
    pub mapping: FlatMapping,
}

/// The full persisted set of bindings for one target schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MappingConfig {
    /// Identity of the target schema this configuration was built for.
    pub target: String,
    /// Bindings for the flat fields.
    pub flat: FlatMapping,
    /// Bindings for the nested list fields, at most one per list field.
    pub nested: Vec<NestedMapping>,
}

impl MappingConfig {
    /// Looks up a nested mapping by list field name.
    #[must_use]
    pub fn nested_for(&self, list_field: &str) -> Option<&NestedMapping> {
        self.nested.iter().find(|n| n.list_field == list_field)
    }
}
