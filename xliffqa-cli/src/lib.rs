//! xliffqa CLI library
//!
//! Command implementations, project configuration, input resolution and
//! report formatting for the `xliffqa` binary.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
