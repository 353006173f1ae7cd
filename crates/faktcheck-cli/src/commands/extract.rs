//! Extract command implementation.

use crate::cli::InputArgs;
use crate::commands::read_input;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use faktcheck_checker::FactChecker;

/// Execute the extract command.
pub fn execute_extract(args: InputArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let text = read_input(&args)?;
    let checker = FactChecker::new(config.check.clone())?;

    let candidates = checker.extract(&text);
    println!("{}", formatter.format_candidates(&candidates)?);
    Ok(())
}
