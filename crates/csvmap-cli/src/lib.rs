//! Library surface of the `csvmap` CLI.
//!
//! The command implementations live here so integration tests can drive
//! them without spawning the binary.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod record;
pub mod summary;
