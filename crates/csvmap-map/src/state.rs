//! Mapping session lifecycle.
//!
//! [`MappingState`] owns the configuration for one target schema across
//! column-set changes and snapshot save/restore. Ownership is exclusive:
//! no mapping entity is shared between states, and the engine never
//! retains a reference across calls.

use csvmap_model::{FlatMapping, MappingConfig, NestedMapping, TargetSchema};
use tracing::warn;

use crate::bindings::{initialize_mapping, rebind, set_binding};
use crate::error::MapError;

/// The mapping configuration for one target schema, kept consistent
/// with the schema and the current column set.
#[derive(Debug, Clone)]
pub struct MappingState {
    schema: TargetSchema,
    config: MappingConfig,
}

impl MappingState {
    /// Fresh state: every flat and nested field bound to the first
    /// available column.
    #[must_use]
    pub fn new(schema: TargetSchema, columns: &[String]) -> Self {
        let flat = initialize_mapping(&schema.flat_fields, columns);
        let nested = schema
            .nested
            .iter()
            .map(|spec| NestedMapping {
                list_field: spec.list_field.clone(),
                expanded: false,
                mapping: initialize_mapping(&spec.element_fields, columns),
            })
            .collect();
        let config = MappingConfig {
            target: schema.target.clone(),
            flat,
            nested,
        };
        Self { schema, config }
    }

    /// Restores a persisted snapshot against the current schema and
    /// column set.
    ///
    /// The state starts from default bindings, then adopts the
    /// snapshot's column choices for every field that still exists.
    /// Snapshot entries whose field or list field is no longer part of
    /// the schema are skipped with a warning, and bindings that
    /// reference vanished columns are rebound to the first column.
    #[must_use]
    pub fn from_config(schema: TargetSchema, snapshot: &MappingConfig, columns: &[String]) -> Self {
        let mut state = Self::new(schema, columns);
        if snapshot.target != state.config.target {
            warn!(
                snapshot = %snapshot.target,
                schema = %state.config.target,
                "restoring configuration saved for a different target schema"
            );
        }

        adopt_columns(&mut state.config.flat, &snapshot.flat, None);
        for saved in &snapshot.nested {
            let Some(nested) = state
                .config
                .nested
                .iter_mut()
                .find(|n| n.list_field == saved.list_field)
            else {
                warn!(list_field = %saved.list_field, "list field not found in schema, skipping");
                continue;
            };
            nested.expanded = saved.expanded;
            adopt_columns(&mut nested.mapping, &saved.mapping, Some(&saved.list_field));
        }

        state.refresh_columns(columns);
        state
    }

    /// Re-syncs every mapping after a new column set is parsed.
    pub fn refresh_columns(&mut self, columns: &[String]) {
        rebind(&mut self.config.flat, columns);
        for nested in &mut self.config.nested {
            rebind(&mut nested.mapping, columns);
        }
    }

    /// Overrides the binding of a flat field.
    pub fn set_flat_binding(&mut self, field: &str, column: &str) -> Result<(), MapError> {
        set_binding(&mut self.config.flat, field, column)
    }

    /// Overrides the binding of an element field inside a nested
    /// mapping.
    pub fn set_nested_binding(
        &mut self,
        list_field: &str,
        field: &str,
        column: &str,
    ) -> Result<(), MapError> {
        let Some(nested) = self
            .config
            .nested
            .iter_mut()
            .find(|n| n.list_field == list_field)
        else {
            return Err(MapError::UnknownField(list_field.to_string()));
        };
        set_binding(&mut nested.mapping, field, column)
    }

    /// The schema this state was built for.
    #[must_use]
    pub fn schema(&self) -> &TargetSchema {
        &self.schema
    }

    /// The current configuration.
    #[must_use]
    pub fn config(&self) -> &MappingConfig {
        &self.config
    }

    /// Consumes the state, yielding the configuration snapshot.
    #[must_use]
    pub fn into_config(self) -> MappingConfig {
        self.config
    }

    /// Returns true when the schema declares any nested list field.
    #[must_use]
    pub fn has_nested(&self) -> bool {
        !self.config.nested.is_empty()
    }
}

/// Copies saved column choices onto matching fields; saved fields with
/// no counterpart are skipped with a warning.
fn adopt_columns(current: &mut FlatMapping, saved: &FlatMapping, list_field: Option<&str>) {
    for saved_binding in &saved.bindings {
        match current.get_mut(&saved_binding.field.name) {
            Some(binding) => binding.column = saved_binding.column.clone(),
            None => warn!(
                field = %saved_binding.field.name,
                list_field = list_field.unwrap_or("<flat>"),
                "saved binding has no matching field in schema, skipping"
            ),
        }
    }
}
