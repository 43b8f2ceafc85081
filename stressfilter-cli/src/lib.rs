//! Stressfilter CLI library
//!
//! This library provides the command-line interface around the
//! stressfilter rule engine: file reading and writing, per-line record
//! handling with non-fatal recovery, and user-facing diagnostics.

pub mod error;
pub mod filter;
pub mod input;
pub mod output;

pub use error::{CliError, CliResult};
