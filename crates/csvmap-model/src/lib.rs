#![deny(unsafe_code)]

pub mod mapping;
pub mod schema;
pub mod table;
pub mod value;

pub use mapping::{FieldBinding, FlatMapping, MappingConfig, NestedMapping};
pub use schema::{
    FieldDescriptor, FieldSpec, FieldType, NestedFieldSpec, RecordSpec, TargetSchema,
};
pub use table::{CsvTable, Row};
pub use value::{FieldValue, ValueKind};
