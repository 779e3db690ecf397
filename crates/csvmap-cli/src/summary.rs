//! Import summary rendering.

use comfy_table::{Table, presets};

use crate::commands::ImportOutcome;

/// Prints a short table summarizing an import run.
pub fn print_summary(outcome: &ImportOutcome) {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_header(vec!["metric", "value"]);
    table.add_row(vec!["mode".to_string(), outcome.mode.as_str().to_string()]);
    table.add_row(vec!["rows".to_string(), outcome.rows.to_string()]);
    table.add_row(vec!["records".to_string(), outcome.records.to_string()]);
    table.add_row(vec![
        "conversion errors".to_string(),
        outcome.errors.len().to_string(),
    ]);
    eprintln!("{table}");

    if !outcome.errors.is_empty() {
        eprintln!("conversion errors (fields degraded to null):");
        for error in &outcome.errors {
            eprintln!("  {error}");
        }
    }
}
