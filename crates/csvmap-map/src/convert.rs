//! Cell text to typed value conversion.

use csvmap_model::{FieldValue, ValueKind};

use crate::error::ConversionError;

/// Converts raw cell text to the declared value kind.
///
/// Numeric kinds use the standard Rust literal rules for `i64`/`f64`.
/// Booleans accept case-insensitive `true`/`false` only. Enum kinds
/// match the declared symbol set by exact name. Reference fields can
/// never be populated from text and always yield
/// [`FieldValue::Missing`] without error.
pub fn convert(raw: &str, kind: &ValueKind, field: &str) -> Result<FieldValue, ConversionError> {
    let fail = || ConversionError {
        field: field.to_string(),
        raw: raw.to_string(),
        kind: kind.clone(),
    };

    match kind {
        ValueKind::Int => raw.parse::<i64>().map(FieldValue::Int).map_err(|_| fail()),
        ValueKind::Float => raw.parse::<f64>().map(FieldValue::Float).map_err(|_| fail()),
        ValueKind::Bool => {
            if raw.eq_ignore_ascii_case("true") {
                Ok(FieldValue::Bool(true))
            } else if raw.eq_ignore_ascii_case("false") {
                Ok(FieldValue::Bool(false))
            } else {
                Err(fail())
            }
        }
        ValueKind::Text => Ok(FieldValue::Text(raw.to_string())),
        ValueKind::Enum { symbols } => symbols
            .iter()
            .find(|symbol| symbol.as_str() == raw)
            .map(|symbol| FieldValue::Symbol(symbol.clone()))
            .ok_or_else(fail),
        ValueKind::Reference => Ok(FieldValue::Missing),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_integers() {
        assert_eq!(convert("42", &ValueKind::Int, "hp"), Ok(FieldValue::Int(42)));
        assert_eq!(
            convert("-7", &ValueKind::Int, "hp"),
            Ok(FieldValue::Int(-7))
        );
    }

    #[test]
    fn malformed_integer_reports_field_and_raw_text() {
        let error = convert("abc", &ValueKind::Int, "hp").unwrap_err();
        assert_eq!(error.field, "hp");
        assert_eq!(error.raw, "abc");
        assert_eq!(error.kind, ValueKind::Int);
    }

    #[test]
    fn converts_floats() {
        assert_eq!(
            convert("1.5", &ValueKind::Float, "speed"),
            Ok(FieldValue::Float(1.5))
        );
        assert!(convert("fast", &ValueKind::Float, "speed").is_err());
    }

    #[test]
    fn bool_is_case_insensitive_true_false_only() {
        assert_eq!(
            convert("TRUE", &ValueKind::Bool, "boss"),
            Ok(FieldValue::Bool(true))
        );
        assert_eq!(
            convert("False", &ValueKind::Bool, "boss"),
            Ok(FieldValue::Bool(false))
        );
        assert!(convert("1", &ValueKind::Bool, "boss").is_err());
        assert!(convert("yes", &ValueKind::Bool, "boss").is_err());
    }

    #[test]
    fn text_is_identity() {
        assert_eq!(
            convert("", &ValueKind::Text, "note"),
            Ok(FieldValue::Text(String::new()))
        );
    }

    #[test]
    fn enum_matches_exact_symbol_names() {
        let kind = ValueKind::Enum {
            symbols: vec!["Minion".to_string(), "Elite".to_string()],
        };
        assert_eq!(
            convert("Elite", &kind, "rank"),
            Ok(FieldValue::Symbol("Elite".to_string()))
        );
        // Case matters for symbols.
        assert!(convert("elite", &kind, "rank").is_err());
    }

    #[test]
    fn reference_always_yields_missing_without_error() {
        assert_eq!(
            convert("anything", &ValueKind::Reference, "portrait"),
            Ok(FieldValue::Missing)
        );
    }
}
