//! Example command implementation.

use crate::cli::ExampleArgs;
use crate::commands::check::check_text;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use faktcheck_checker::{current_year, EXAMPLE_TEXT};

/// Execute the example command.
pub async fn execute_example(args: ExampleArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    if !args.check {
        println!("{}", EXAMPLE_TEXT);
        return Ok(());
    }

    let year = args.year.unwrap_or_else(current_year);
    check_text(EXAMPLE_TEXT, year, config, formatter).await
}
