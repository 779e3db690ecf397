//! File loading convenience for callers that start from a path.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use csvmap_model::CsvTable;

use crate::parser::parse;

/// Reads a CSV file from disk and parses it.
pub fn read_csv_table(path: &Path) -> Result<CsvTable> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("read csv: {}", path.display()))?;
    let table = parse(&text).with_context(|| format!("parse csv: {}", path.display()))?;
    tracing::info!(path = %path.display(), rows = table.rows.len(), "loaded csv file");
    Ok(table)
}
