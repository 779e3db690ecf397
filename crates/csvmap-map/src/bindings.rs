//! Binding lifecycle for flat mappings.

use csvmap_model::{FieldBinding, FieldDescriptor, FlatMapping};

use crate::error::MapError;

/// Builds a fresh mapping with every field bound to the first available
/// column, or unbound when there are no columns.
///
/// Idempotent: the same fields and columns always yield an equivalent
/// mapping.
#[must_use]
pub fn initialize_mapping(fields: &[FieldDescriptor], columns: &[String]) -> FlatMapping {
    let default = columns.first().cloned();
    let bindings = fields
        .iter()
        .map(|field| FieldBinding {
            field: field.clone(),
            column: default.clone(),
        })
        .collect();
    FlatMapping { bindings }
}

/// Re-syncs a mapping against a changed column set.
///
/// Bindings whose column is no longer present (including unbound ones)
/// fall back to the first column of the new set, or unbound when the set
/// is empty. Bindings that are still valid are untouched, which makes
/// this idempotent and order-stable.
pub fn rebind(mapping: &mut FlatMapping, columns: &[String]) {
    for binding in &mut mapping.bindings {
        let stale = match &binding.column {
            Some(column) => !columns.iter().any(|c| c == column),
            None => true,
        };
        if stale {
            binding.column = columns.first().cloned();
        }
    }
}

/// Explicit override of a single binding.
///
/// Fails with [`MapError::UnknownField`] when the field is not part of
/// the mapping; bindings are never silently inserted.
pub fn set_binding(mapping: &mut FlatMapping, field: &str, column: &str) -> Result<(), MapError> {
    let Some(binding) = mapping.get_mut(field) else {
        return Err(MapError::UnknownField(field.to_string()));
    };
    binding.column = Some(column.to_string());
    Ok(())
}
