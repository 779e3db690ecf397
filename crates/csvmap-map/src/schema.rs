//! Target schema derivation.

use csvmap_model::{
    FieldDescriptor, FieldType, NestedFieldSpec, RecordSpec, TargetSchema,
};

use crate::error::MapError;

/// Partitions a record description into flat value fields and one-level
/// nested list fields.
///
/// Exactly one level of nesting is supported: a list field whose element
/// record itself declares a list field is rejected with
/// [`MapError::UnsupportedNesting`] rather than silently mishandled.
/// Field order follows declaration order.
pub fn derive_schema(spec: &RecordSpec) -> Result<TargetSchema, MapError> {
    let mut flat_fields = Vec::new();
    let mut nested = Vec::new();

    for field in &spec.fields {
        match &field.field_type {
            FieldType::Scalar(kind) => flat_fields.push(FieldDescriptor {
                name: field.name.clone(),
                kind: kind.clone(),
            }),
            FieldType::List(element) => nested.push(NestedFieldSpec {
                list_field: field.name.clone(),
                element_fields: element_fields(&field.name, element)?,
            }),
        }
    }

    Ok(TargetSchema {
        target: spec.name.clone(),
        flat_fields,
        nested,
    })
}

fn element_fields(
    list_field: &str,
    element: &RecordSpec,
) -> Result<Vec<FieldDescriptor>, MapError> {
    let mut fields = Vec::with_capacity(element.fields.len());
    for field in &element.fields {
        match &field.field_type {
            FieldType::Scalar(kind) => fields.push(FieldDescriptor {
                name: field.name.clone(),
                kind: kind.clone(),
            }),
            FieldType::List(_) => {
                return Err(MapError::UnsupportedNesting(format!(
                    "{list_field}.{}",
                    field.name
                )));
            }
        }
    }
    Ok(fields)
}
