//! Record construction from parsed rows.
//!
//! The engine never constructs host objects itself. Callers supply a
//! factory closure for allocation, a [`Record`] implementation for
//! setting converted values, and (for nested import) a [`ListSink`]
//! capability for get-or-create access to host-owned element lists.

use csvmap_model::{FieldValue, FlatMapping, NestedMapping, Row};
use tracing::warn;

use crate::convert::convert;
use crate::error::ConversionError;

/// Receives converted field values; implemented by host record types.
pub trait Record {
    /// Sets one field to the converted value. Unknown fields may be
    /// ignored by the implementation.
    fn set(&mut self, field: &str, value: FieldValue);
}

/// Get-or-create access to host-owned element lists.
///
/// `list_mut` must install an empty list the first time a field is
/// requested and return the same list on subsequent calls.
pub trait ListSink {
    /// Element type appended to the lists.
    type Element: Record;

    /// Returns the list for a nested field, creating it if absent.
    fn list_mut(&mut self, field: &str) -> &mut Vec<Self::Element>;
}

/// Conversion failures collected while building records.
///
/// A failure degrades the affected field to no value; it never aborts
/// the row or the batch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportReport {
    /// Per-cell failures in row order.
    pub errors: Vec<ConversionError>,
}

impl ImportReport {
    /// Returns true when no conversion failed.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    fn merge(&mut self, other: ImportReport) {
        self.errors.extend(other.errors);
    }
}

/// Output of a flat import: one record per row plus the error report.
#[derive(Debug)]
pub struct FlatImport<R> {
    /// Built records, in row order.
    pub records: Vec<R>,
    /// Collected conversion failures.
    pub report: ImportReport,
}

/// Builds one record per row.
///
/// Each bound field whose column exists in the row is converted and set
/// on the record; unbound fields are left at the record's default.
/// Produces exactly `rows.len()` records, in row order.
pub fn build_flat_records<R, F>(
    rows: &[Row],
    mapping: &FlatMapping,
    mut factory: F,
) -> FlatImport<R>
where
    R: Record,
    F: FnMut() -> R,
{
    let mut report = ImportReport::default();
    let mut records = Vec::with_capacity(rows.len());
    for row in rows {
        let mut record = factory();
        report.merge(populate(&mut record, row, mapping));
        records.push(record);
    }
    FlatImport { records, report }
}

/// Appends nested elements to host-owned lists.
///
/// For every row and every nested mapping, one element is constructed,
/// populated like a flat record, and appended to the list obtained from
/// the sink. Rows are not grouped by any key, so `N` rows produce `N`
/// elements per nested field.
pub fn build_nested_elements<S, F>(
    rows: &[Row],
    nested: &[NestedMapping],
    sink: &mut S,
    mut element_factory: F,
) -> ImportReport
where
    S: ListSink,
    F: FnMut(&str) -> S::Element,
{
    let mut report = ImportReport::default();
    for row in rows {
        for nested_mapping in nested {
            let mut element = element_factory(&nested_mapping.list_field);
            report.merge(populate(&mut element, row, &nested_mapping.mapping));
            sink.list_mut(&nested_mapping.list_field).push(element);
        }
    }
    report
}

fn populate<R: Record>(record: &mut R, row: &Row, mapping: &FlatMapping) -> ImportReport {
    let mut report = ImportReport::default();
    for binding in &mapping.bindings {
        let Some(column) = &binding.column else {
            continue;
        };
        let Some(raw) = row.get(column) else {
            continue;
        };
        match convert(raw, &binding.field.kind, &binding.field.name) {
            Ok(value) => record.set(&binding.field.name, value),
            Err(error) => {
                warn!(
                    field = %error.field,
                    raw = %error.raw,
                    kind = %error.kind,
                    "conversion failed"
                );
                record.set(&binding.field.name, FieldValue::Missing);
                report.errors.push(error);
            }
        }
    }
    report
}
