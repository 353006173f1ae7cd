//! Check command implementation.

use crate::cli::CheckArgs;
use crate::commands::read_input;
use crate::config::{Config, OutputFormat};
use crate::error::Result;
use crate::output::{format_number_de, Formatter};
use faktcheck_checker::{current_year, FactChecker};

/// Execute the check command.
pub async fn execute_check(args: CheckArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let text = read_input(&args.input)?;
    let year = args.year.unwrap_or_else(current_year);
    check_text(&text, year, config, formatter).await
}

/// Check a text and print the report.
pub async fn check_text(text: &str, year: i32, config: &Config, formatter: &Formatter) -> Result<()> {
    let checker = FactChecker::new(config.check.clone())?;

    if formatter.format() == OutputFormat::Table && !text.trim().is_empty() {
        let chars = text.chars().count() as u64;
        eprintln!(
            "{}",
            formatter.info(&format!("Analysiere {} Zeichen...", format_number_de(chars)))
        );
    }

    let report = checker.check(text, year).await?;
    println!("{}", formatter.format_report(&report)?);
    Ok(())
}
