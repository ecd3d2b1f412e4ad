//! # scram-cli
//!
//! The `scramgen` command-line tool: generates SCRAM credentials for
//! storage in JSON credential files.
//!
//! The derivation itself lives in the `scram-credential` crate; this
//! crate is the surrounding glue — argument parsing, password prompting,
//! output formatting, persisted defaults, and exit codes.

#![forbid(unsafe_code)]
#![deny(warnings)]
#![deny(missing_docs)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use cli::Cli;
pub use config::CliConfig;
pub use error::{CliError, CliResult};
