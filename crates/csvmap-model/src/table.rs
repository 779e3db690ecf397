//! Parsed CSV document types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One parsed data line as a column-name-to-text mapping.
///
/// Every header column has an entry in every row; missing trailing cells
/// are stored as empty strings. If the header repeats a column name, the
/// later position wins (last-write-wins, a preserved quirk of the format).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    /// Cell text keyed by column name.
    pub cells: BTreeMap<String, String>,
}

impl Row {
    /// Returns the raw text for a column, if present.
    #[must_use]
    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells.get(column).map(String::as_str)
    }

    /// Inserts (or overwrites) a cell.
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.cells.insert(column.into(), value.into());
    }

    /// Returns true if the row carries the given column.
    #[must_use]
    pub fn contains_column(&self, column: &str) -> bool {
        self.cells.contains_key(column)
    }
}

/// A parsed CSV document: the ordered column set plus data rows in file
/// order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvTable {
    /// Header columns in file order.
    pub columns: Vec<String>,
    /// Data rows in file order.
    pub rows: Vec<Row>,
}
