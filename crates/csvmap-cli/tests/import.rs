//! File-driven tests for the init and import commands.

use std::fs;
use std::path::Path;

use csvmap_cli::cli::{ImportArgs, InitArgs};
use csvmap_cli::commands::{ImportMode, run_import, run_init};
use csvmap_model::MappingConfig;

const FLAT_SCHEMA: &str = r#"{
    "name": "Creature",
    "fields": [
        {"name": "name", "type": {"scalar": {"kind": "text"}}},
        {"name": "hp", "type": {"scalar": {"kind": "int"}}},
        {"name": "boss", "type": {"scalar": {"kind": "bool"}}}
    ]
}"#;

const NESTED_SCHEMA: &str = r#"{
    "name": "Bestiary",
    "fields": [
        {"name": "entries", "type": {"list": {"name": "Entry", "fields": [
            {"name": "name", "type": {"scalar": {"kind": "text"}}},
            {"name": "hp", "type": {"scalar": {"kind": "int"}}}
        ]}}}
    ]
}"#;

fn write_file(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("write fixture");
    path
}

fn bind_all_by_name(config: &mut MappingConfig) {
    for binding in &mut config.flat.bindings {
        binding.column = Some(binding.field.name.clone());
    }
    for nested in &mut config.nested {
        for binding in &mut nested.mapping.bindings {
            binding.column = Some(binding.field.name.clone());
        }
    }
}

#[test]
fn init_writes_a_loadable_default_configuration() {
    let dir = tempfile::tempdir().expect("tempdir");
    let csv = write_file(dir.path(), "creatures.csv", "name,hp,boss\nGoblin,12,false\n");
    let schema = write_file(dir.path(), "schema.json", FLAT_SCHEMA);
    let out = dir.path().join("config.json");

    let config = run_init(&InitArgs {
        csv_file: csv,
        schema,
        out: Some(out.clone()),
    })
    .expect("init");

    assert_eq!(config.target, "Creature");
    // Default bindings point at the first column.
    assert!(
        config
            .flat
            .bindings
            .iter()
            .all(|b| b.column.as_deref() == Some("name"))
    );

    let written: MappingConfig =
        serde_json::from_str(&fs::read_to_string(&out).expect("read config")).expect("parse");
    assert_eq!(written, config);
}

#[test]
fn flat_import_emits_one_json_record_per_row() {
    let dir = tempfile::tempdir().expect("tempdir");
    let csv = write_file(
        dir.path(),
        "creatures.csv",
        "name,hp,boss\nGoblin,12,false\nDragon,200,true\n",
    );
    let schema = write_file(dir.path(), "schema.json", FLAT_SCHEMA);

    // Build a config that binds fields to their same-named columns.
    let mut config = run_init(&InitArgs {
        csv_file: csv.clone(),
        schema: schema.clone(),
        out: Some(dir.path().join("default.json")),
    })
    .expect("init");
    bind_all_by_name(&mut config);
    let config_path = write_file(
        dir.path(),
        "config.json",
        &serde_json::to_string(&config).unwrap(),
    );

    let out = dir.path().join("records.json");
    let outcome = run_import(&ImportArgs {
        csv_file: csv,
        schema,
        config: Some(config_path),
        out: Some(out.clone()),
    })
    .expect("import");

    assert_eq!(outcome.mode, ImportMode::Flat);
    assert_eq!(outcome.rows, 2);
    assert_eq!(outcome.records, 2);
    assert!(outcome.errors.is_empty());

    let records: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out).expect("read records")).expect("parse");
    assert_eq!(records[0]["name"], "Goblin");
    assert_eq!(records[0]["hp"], 12);
    assert_eq!(records[1]["boss"], true);
}

#[test]
fn malformed_cell_degrades_to_null_and_is_reported() {
    let dir = tempfile::tempdir().expect("tempdir");
    let csv = write_file(dir.path(), "creatures.csv", "name,hp,boss\nGoblin,lots,false\n");
    let schema = write_file(dir.path(), "schema.json", FLAT_SCHEMA);

    let mut config = run_init(&InitArgs {
        csv_file: csv.clone(),
        schema: schema.clone(),
        out: Some(dir.path().join("default.json")),
    })
    .expect("init");
    bind_all_by_name(&mut config);
    let config_path = write_file(
        dir.path(),
        "config.json",
        &serde_json::to_string(&config).unwrap(),
    );

    let out = dir.path().join("records.json");
    let outcome = run_import(&ImportArgs {
        csv_file: csv,
        schema,
        config: Some(config_path),
        out: Some(out.clone()),
    })
    .expect("import");

    assert_eq!(outcome.errors.len(), 1);
    assert_eq!(outcome.errors[0].field, "hp");

    let records: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out).expect("read records")).expect("parse");
    assert!(records[0]["hp"].is_null());
    assert_eq!(records[0]["name"], "Goblin");
}

#[test]
fn nested_import_appends_one_element_per_row() {
    let dir = tempfile::tempdir().expect("tempdir");
    let csv = write_file(
        dir.path(),
        "bestiary.csv",
        "name,hp\nGoblin,12\nOgre,40\nDragon,200\n",
    );
    let schema = write_file(dir.path(), "schema.json", NESTED_SCHEMA);

    let mut config = run_init(&InitArgs {
        csv_file: csv.clone(),
        schema: schema.clone(),
        out: Some(dir.path().join("default.json")),
    })
    .expect("init");
    bind_all_by_name(&mut config);
    let config_path = write_file(
        dir.path(),
        "config.json",
        &serde_json::to_string(&config).unwrap(),
    );

    let out = dir.path().join("bestiary.json");
    let outcome = run_import(&ImportArgs {
        csv_file: csv,
        schema,
        config: Some(config_path),
        out: Some(out.clone()),
    })
    .expect("import");

    assert_eq!(outcome.mode, ImportMode::Nested);
    assert_eq!(outcome.rows, 3);
    assert_eq!(outcome.records, 3);

    let parent: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out).expect("read output")).expect("parse");
    let entries = parent["entries"].as_array().expect("entries list");
    assert_eq!(entries.len(), 3);
    assert_eq!(entries[2]["name"], "Dragon");
    assert_eq!(entries[2]["hp"], 200);
}

#[test]
fn empty_csv_fails_with_context() {
    let dir = tempfile::tempdir().expect("tempdir");
    let csv = write_file(dir.path(), "empty.csv", "");
    let schema = write_file(dir.path(), "schema.json", FLAT_SCHEMA);

    let error = run_import(&ImportArgs {
        csv_file: csv,
        schema,
        config: None,
        out: None,
    })
    .expect_err("empty input should fail");
    assert!(format!("{error:#}").contains("csv input is empty"));
}
