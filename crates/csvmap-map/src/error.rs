//! Error types for mapping operations.

use csvmap_model::ValueKind;
use thiserror::Error;

/// Errors that abort a mapping operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    /// A binding referenced a field that is not part of the mapping.
    #[error("unknown field: {0}")]
    UnknownField(String),
    /// The schema declared a list nested inside another list.
    #[error("nested lists are not supported: {0}")]
    UnsupportedNesting(String),
}

/// A per-cell conversion failure.
///
/// Recoverable: the field degrades to no value and the surrounding
/// record still builds. Collected into an [`crate::ImportReport`]
/// instead of failing the batch.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("cannot convert '{raw}' for field '{field}' to {kind}")]
pub struct ConversionError {
    /// Target field name.
    pub field: String,
    /// The raw cell text that failed to convert.
    pub raw: String,
    /// The declared value kind the text was converted towards.
    pub kind: ValueKind,
}
