//! PayMo CLI library.
//!
//! This library provides the pieces of the `antifraud` command-line tool:
//! argument parsing, configuration loading, reading payment files, and
//! writing verdict files and run summaries.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod output;

pub use cli::Cli;
pub use config::Config;
pub use error::{CliError, Result};
pub use output::Formatter;
