//! CLI command definitions and argument parsing.

use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

/// Faktcheck - check statistical claims in German text against reference data.
#[derive(Debug, Parser)]
#[command(name = "faktcheck")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "FAKTCHECK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (status and claim per line)
    Quiet,
    /// HTML fragment
    Html,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check the claims in a text
    Check(CheckArgs),

    /// Show which sentences would be checked
    Extract(InputArgs),

    /// Print or check the built-in example text
    Example(ExampleArgs),

    /// List the reference facts
    Facts,

    /// Manage the configuration file
    Config(ConfigArgs),

    /// Enter interactive REPL mode
    Repl,
}

/// Where to read input text from.
#[derive(Debug, Args)]
pub struct InputArgs {
    /// Text to check
    pub text: Option<String>,

    /// Read text from a file
    #[arg(short = 'i', long, conflicts_with = "text")]
    pub file: Option<PathBuf>,

    /// Read text from stdin
    #[arg(long, conflicts_with_all = ["text", "file"])]
    pub stdin: bool,
}

/// Arguments for the check command.
#[derive(Debug, Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Year to age claims against (defaults to the current year)
    #[arg(short, long)]
    pub year: Option<i32>,
}

/// Arguments for the example command.
#[derive(Debug, Args)]
pub struct ExampleArgs {
    /// Check the example instead of printing it
    #[arg(long)]
    pub check: bool,

    /// Year to age claims against (defaults to the current year)
    #[arg(short, long, requires = "check")]
    pub year: Option<i32>,
}

/// Arguments for configuration management.
#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Print the configuration file path
    Path,

    /// Overwrite the configuration file with defaults
    Reset,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
            CliFormat::Html => crate::config::OutputFormat::Html,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_command_means_repl() {
        let cli = Cli::parse_from(["faktcheck"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_check_command() {
        let cli = Cli::parse_from(["faktcheck", "check", "Berlin hat mehr Einwohner als Hamburg.", "--year", "2024"]);
        match cli.command {
            Some(Command::Check(args)) => {
                assert_eq!(args.input.text.as_deref(), Some("Berlin hat mehr Einwohner als Hamburg."));
                assert_eq!(args.year, Some(2024));
            }
            _ => panic!("Expected Check command"),
        }
    }

    #[test]
    fn test_text_and_file_conflict() {
        let result = Cli::try_parse_from(["faktcheck", "check", "text", "--file", "input.txt"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::parse_from(["faktcheck", "facts", "--format", "json", "-vv", "--no-color"]);
        assert!(matches!(cli.format, Some(CliFormat::Json)));
        assert_eq!(cli.verbose, 2);
        assert!(cli.no_color);
    }

    #[test]
    fn test_example_year_requires_check() {
        assert!(Cli::try_parse_from(["faktcheck", "example", "--year", "2020"]).is_err());
        assert!(Cli::try_parse_from(["faktcheck", "example", "--check", "--year", "2020"]).is_ok());
    }
}
