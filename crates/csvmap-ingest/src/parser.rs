//! CSV text parsing.
//!
//! The dialect is deliberately minimal: a double quote toggles quoting
//! and is never part of the field, so escaped quotes (`""`) are not
//! supported; two quotes in a row toggle twice and emit nothing. Lines
//! are split on `\n` and `\r` with empty entries suppressed, which makes
//! CRLF, LF, and CR inputs equivalent and collapses blank lines.

use csvmap_model::{CsvTable, Row};
use thiserror::Error;

/// Errors raised while parsing CSV text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input contained no parseable lines.
    #[error("csv input is empty")]
    EmptyInput,
}

/// Parses raw CSV text into an ordered column set and data rows.
///
/// The first line becomes the column set. Each data line is tokenized
/// with the same algorithm and zipped positionally against the header:
/// missing trailing cells become empty strings, extra cells beyond the
/// column count are discarded. Column name uniqueness is not enforced;
/// a repeated header name means later positions overwrite earlier ones
/// in each row.
pub fn parse(text: &str) -> Result<CsvTable, ParseError> {
    let lines: Vec<&str> = text
        .split(['\n', '\r'])
        .filter(|line| !line.is_empty())
        .collect();
    let Some((header, data)) = lines.split_first() else {
        return Err(ParseError::EmptyInput);
    };

    let columns = parse_line(header);
    let mut rows = Vec::with_capacity(data.len());
    for line in data {
        let values = parse_line(line);
        let mut row = Row::default();
        for (index, column) in columns.iter().enumerate() {
            let value = values.get(index).map(String::as_str).unwrap_or("");
            row.insert(column.clone(), value);
        }
        rows.push(row);
    }

    tracing::debug!(
        columns = columns.len(),
        rows = rows.len(),
        "parsed csv text"
    );
    Ok(CsvTable { columns, rows })
}

/// Tokenizes a single CSV line into field values.
///
/// Single pass, no lookahead: a quote toggles the in-quotes state, a
/// comma outside quotes ends the current field, everything else is
/// appended verbatim. The trailing buffer (possibly empty) is always
/// emitted as the final field.
#[must_use]
pub fn parse_line(line: &str) -> Vec<String> {
    let mut values = Vec::new();
    let mut buffer = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => values.push(std::mem::take(&mut buffer)),
            _ => buffer.push(ch),
        }
    }
    values.push(buffer);
    values
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenizes_plain_fields() {
        assert_eq!(parse_line("a,b,c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn comma_inside_quotes_is_not_a_separator() {
        assert_eq!(parse_line("\"x,y\",z"), vec!["x,y", "z"]);
    }

    #[test]
    fn doubled_quotes_toggle_twice_and_emit_nothing() {
        // No escaped-quote support: "" nets out to nothing.
        assert_eq!(parse_line("a\"\"b,c"), vec!["ab", "c"]);
    }

    #[test]
    fn trailing_comma_yields_empty_final_field() {
        assert_eq!(parse_line("a,"), vec!["a", ""]);
    }

    #[test]
    fn empty_line_is_one_empty_field() {
        assert_eq!(parse_line(""), vec![""]);
    }
}
