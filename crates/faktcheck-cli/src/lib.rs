//! Faktcheck CLI library.
//!
//! This library provides the core functionality for the `faktcheck` command-line
//! interface, including configuration management, command execution, draft
//! persistence and output formatting.

pub mod cli;
pub mod commands;
pub mod config;
pub mod draft;
pub mod error;
pub mod output;
pub mod repl;

pub use cli::{Cli, Command};
pub use config::{Config, OutputFormat};
pub use draft::{DebouncedDraft, DraftStore};
pub use error::{CliError, Result};
pub use output::{escape_html, format_number_de, format_report_html, Formatter};
