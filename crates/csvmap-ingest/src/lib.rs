#![deny(unsafe_code)]

//! CSV ingestion: raw text parsing and file loading.

pub mod parser;
pub mod reader;

pub use parser::{ParseError, parse, parse_line};
pub use reader::read_csv_table;
