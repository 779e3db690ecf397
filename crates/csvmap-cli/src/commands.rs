//! Command implementations.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use csvmap_ingest::read_csv_table;
use csvmap_map::{
    ConversionError, MappingState, build_flat_records, build_nested_elements, derive_schema,
};
use csvmap_model::{MappingConfig, RecordSpec};

use crate::cli::{ColumnsArgs, ImportArgs, InitArgs};
use crate::record::{ListRecord, ValueRecord};

/// Which import path was taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportMode {
    /// One output record per CSV row.
    Flat,
    /// Elements appended to list fields on a single parent record.
    Nested,
}

impl ImportMode {
    /// Human-readable name for the summary.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ImportMode::Flat => "flat",
            ImportMode::Nested => "nested",
        }
    }
}

/// Result of an `import` run, used for the summary.
#[derive(Debug)]
pub struct ImportOutcome {
    /// Which import path was taken.
    pub mode: ImportMode,
    /// Number of parsed CSV data rows.
    pub rows: usize,
    /// Flat records built, or nested elements appended.
    pub records: usize,
    /// Per-cell conversion failures (recoverable; fields degraded to null).
    pub errors: Vec<ConversionError>,
}

/// Lists the column set of a CSV file.
pub fn run_columns(args: &ColumnsArgs) -> Result<()> {
    let table = read_csv_table(&args.csv_file)?;
    for column in &table.columns {
        println!("{column}");
    }
    Ok(())
}

/// Creates a default mapping configuration: schema derived from the
/// description, every field bound to the first CSV column.
pub fn run_init(args: &InitArgs) -> Result<MappingConfig> {
    let table = read_csv_table(&args.csv_file)?;
    let spec = load_record_spec(&args.schema)?;
    let schema = derive_schema(&spec)?;
    let state = MappingState::new(schema, &table.columns);
    let config = state.into_config();
    write_json(args.out.as_deref(), &config)?;
    info!(target_schema = %config.target, "initialized mapping configuration");
    Ok(config)
}

/// Imports CSV rows into typed records.
///
/// When the schema declares nested list fields, the nested path wins:
/// every row appends one element to each list on a single parent
/// record. Otherwise each row becomes its own output record.
pub fn run_import(args: &ImportArgs) -> Result<ImportOutcome> {
    let table = read_csv_table(&args.csv_file)?;
    let spec = load_record_spec(&args.schema)?;
    let schema = derive_schema(&spec)?;

    let state = match &args.config {
        Some(path) => {
            let snapshot = load_mapping_config(path)?;
            MappingState::from_config(schema, &snapshot, &table.columns)
        }
        None => MappingState::new(schema, &table.columns),
    };
    let config = state.config();

    let outcome = if state.has_nested() {
        let mut parent = ListRecord::default();
        let report = build_nested_elements(&table.rows, &config.nested, &mut parent, |_| {
            ValueRecord::default()
        });
        let appended: usize = parent.lists.values().map(Vec::len).sum();
        write_json(args.out.as_deref(), &parent)?;
        ImportOutcome {
            mode: ImportMode::Nested,
            rows: table.rows.len(),
            records: appended,
            errors: report.errors,
        }
    } else {
        let import = build_flat_records(&table.rows, &config.flat, ValueRecord::default);
        write_json(args.out.as_deref(), &import.records)?;
        ImportOutcome {
            mode: ImportMode::Flat,
            rows: table.rows.len(),
            records: import.records.len(),
            errors: import.report.errors,
        }
    };

    info!(
        mode = outcome.mode.as_str(),
        rows = outcome.rows,
        records = outcome.records,
        errors = outcome.errors.len(),
        "import finished"
    );
    Ok(outcome)
}

fn load_record_spec(path: &Path) -> Result<RecordSpec> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("read schema: {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parse schema: {}", path.display()))
}

fn load_mapping_config(path: &Path) -> Result<MappingConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("read mapping config: {}", path.display()))?;
    serde_json::from_str(&text)
        .with_context(|| format!("parse mapping config: {}", path.display()))
}

fn write_json<T: Serialize>(out: Option<&Path>, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("serialize output")?;
    match out {
        Some(path) => fs::write(path, json)
            .with_context(|| format!("write output: {}", path.display()))?,
        None => println!("{json}"),
    }
    Ok(())
}
