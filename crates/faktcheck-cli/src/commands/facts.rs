//! Facts command implementation.

use crate::error::Result;
use crate::output::Formatter;
use faktcheck_domain::reference_facts;

/// Execute the facts command.
pub fn execute_facts(formatter: &Formatter) -> Result<()> {
    println!("{}", formatter.format_facts(reference_facts())?);
    Ok(())
}
