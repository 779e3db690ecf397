#![deny(unsafe_code)]

//! Field mapping engine.
//!
//! Given a parsed CSV table and a plain description of a target record
//! type, this crate derives the flat/nested field schema, maintains the
//! field-to-column bindings across column-set changes, and executes a
//! configuration against parsed rows to build typed records through
//! host-supplied collaborators.

pub mod bindings;
pub mod build;
pub mod convert;
pub mod error;
pub mod schema;
pub mod state;

pub use bindings::{initialize_mapping, rebind, set_binding};
pub use build::{
    FlatImport, ImportReport, ListSink, Record, build_flat_records, build_nested_elements,
};
pub use convert::convert;
pub use error::{ConversionError, MapError};
pub use schema::derive_schema;
pub use state::MappingState;
