//! Command implementations.

pub mod check;
pub mod config;
pub mod example;
pub mod extract;
pub mod facts;

pub use self::check::execute_check;
pub use self::config::execute_config;
pub use self::example::execute_example;
pub use self::extract::execute_extract;
pub use self::facts::execute_facts;

use crate::cli::InputArgs;
use crate::error::{CliError, Result};
use std::fs;
use std::io::{self, Read};

/// Resolve the input text from the positional argument, a file or stdin.
pub fn read_input(args: &InputArgs) -> Result<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }

    if let Some(path) = &args.file {
        return Ok(fs::read_to_string(path)?);
    }

    if args.stdin {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }

    Err(CliError::InvalidInput(
        "Kein Text angegeben (TEXT, --file oder --stdin)".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_input_from_text() {
        let args = InputArgs {
            text: Some("Hallo".to_string()),
            file: None,
            stdin: false,
        };
        assert_eq!(read_input(&args).unwrap(), "Hallo");
    }

    #[test]
    fn test_read_input_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "Die Arbeitslosenquote liegt bei 3,5%.").unwrap();

        let args = InputArgs {
            text: None,
            file: Some(file.path().to_path_buf()),
            stdin: false,
        };
        assert_eq!(read_input(&args).unwrap(), "Die Arbeitslosenquote liegt bei 3,5%.");
    }

    #[test]
    fn test_read_input_missing() {
        let args = InputArgs {
            text: None,
            file: None,
            stdin: false,
        };
        assert!(matches!(read_input(&args), Err(CliError::InvalidInput(_))));
    }
}
