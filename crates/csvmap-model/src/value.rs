//! Value kinds and converted field values.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Declared value kind of a target field.
///
/// The kind controls how raw cell text is converted during import.
/// `Reference` fields point at host-managed objects and can never be
/// populated from text; they always convert to [`FieldValue::Missing`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValueKind {
    /// Signed integer.
    Int,
    /// Floating-point number.
    Float,
    /// Boolean; only case-insensitive `true`/`false` convert.
    Bool,
    /// Free text; conversion is the identity.
    Text,
    /// Enumerated symbol matched against the declared set by exact name.
    Enum {
        /// The declared symbol set.
        symbols: Vec<String>,
    },
    /// Opaque host reference; never populated from text.
    Reference,
}

impl ValueKind {
    /// Short name used in error messages and logs.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            ValueKind::Int => "int",
            ValueKind::Float => "float",
            ValueKind::Bool => "bool",
            ValueKind::Text => "text",
            ValueKind::Enum { .. } => "enum",
            ValueKind::Reference => "reference",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A converted cell value.
///
/// `Missing` stands in wherever no value could be produced: reference
/// fields, failed conversions, and unbound fields left at their default.
/// Serializes untagged, so `Missing` becomes JSON `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Converted integer.
    Int(i64),
    /// Converted floating-point number.
    Float(f64),
    /// Converted boolean.
    Bool(bool),
    /// Verbatim cell text.
    Text(String),
    /// Matched enumeration symbol.
    Symbol(String),
    /// No value.
    Missing,
}

impl FieldValue {
    /// Returns true when this is the no-value marker.
    #[must_use]
    pub fn is_missing(&self) -> bool {
        matches!(self, FieldValue::Missing)
    }
}
