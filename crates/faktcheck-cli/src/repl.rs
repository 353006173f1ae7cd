//! Interactive REPL for composing and checking a draft.
//!
//! Plain lines are appended to the draft; lines starting with `:` are
//! commands. The draft survives restarts through a debounced [`DraftStore`].

use crate::commands::check::check_text;
use crate::config::Config;
use crate::draft::{DebouncedDraft, DraftStore, DEFAULT_DEBOUNCE};
use crate::error::{CliError, Result};
use crate::output::{format_number_de, Formatter};
use faktcheck_checker::{current_year, EXAMPLE_TEXT};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;
use tracing::warn;

/// Run the interactive REPL.
pub async fn run_repl(config: &Config, formatter: &Formatter) -> Result<()> {
    println!("{}", formatter.info("Faktcheck REPL - Type 'help' for commands, 'exit' to quit"));
    println!();

    let mut editor = DefaultEditor::new()?;

    let history_path = get_history_path()?;
    let _ = editor.load_history(&history_path);

    let store = DraftStore::default_location()?;
    let mut text = match store.load() {
        Ok(Some(saved)) => {
            println!(
                "{}",
                formatter.info(&format!(
                    "Entwurf wiederhergestellt ({} Zeichen)",
                    format_number_de(saved.chars().count() as u64)
                ))
            );
            saved
        }
        Ok(None) => String::new(),
        Err(e) => {
            warn!("Could not restore draft: {}", e);
            String::new()
        }
    };
    let draft = DebouncedDraft::new(store, DEFAULT_DEBOUNCE);

    loop {
        match editor.readline("faktcheck> ") {
            Ok(line) => {
                let command = match parse_repl_line(&line) {
                    Ok(Some(command)) => command,
                    Ok(None) => continue,
                    Err(e) => {
                        eprintln!("{}", formatter.error(&e.to_string()));
                        continue;
                    }
                };

                if !matches!(command, ReplCommand::Append(_)) {
                    editor.add_history_entry(line.trim()).ok();
                }

                match command {
                    ReplCommand::Exit => {
                        println!("{}", formatter.info("Auf Wiedersehen!"));
                        break;
                    }
                    ReplCommand::Help => print_help(formatter),
                    ReplCommand::Append(addition) => {
                        append_line(&mut text, &addition);
                        draft.update(text.clone());
                    }
                    ReplCommand::Show => {
                        if text.is_empty() {
                            println!("{}", formatter.info("Der Entwurf ist leer"));
                        } else {
                            println!("{}", text);
                        }
                    }
                    ReplCommand::Clear => {
                        text.clear();
                        draft.clear().await;
                        println!("{}", formatter.success("Entwurf geleert"));
                    }
                    ReplCommand::Example => {
                        text = EXAMPLE_TEXT.to_string();
                        draft.update(text.clone());
                        println!("{}", formatter.success("Beispieltext geladen"));
                    }
                    ReplCommand::Check => {
                        if let Err(e) = check_text(&text, current_year(), config, formatter).await {
                            if e.is_recoverable() {
                                eprintln!("{}", formatter.warning(&e.to_string()));
                            } else {
                                eprintln!("{}", formatter.error(&format!("Ein Fehler ist aufgetreten: {}", e)));
                            }
                        }
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", formatter.info("Use 'exit' to quit"));
            }
            Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                eprintln!("{}", formatter.error(&format!("Error: {}", err)));
                break;
            }
        }
    }

    draft.shutdown().await;
    editor.save_history(&history_path).ok();

    Ok(())
}

/// A parsed REPL line.
#[derive(Debug, PartialEq)]
enum ReplCommand {
    Exit,
    Help,
    Check,
    Clear,
    Example,
    Show,
    Append(String),
}

/// Parse one input line. Blank lines yield `None`.
fn parse_repl_line(line: &str) -> Result<Option<ReplCommand>> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let command = match trimmed {
        "exit" | "quit" | ":q" => ReplCommand::Exit,
        "help" | "?" | ":help" => ReplCommand::Help,
        ":check" => ReplCommand::Check,
        ":clear" => ReplCommand::Clear,
        ":example" => ReplCommand::Example,
        ":show" => ReplCommand::Show,
        other if other.starts_with(':') => {
            return Err(CliError::InvalidInput(format!(
                "Unknown command: {}. Type 'help' for available commands.",
                other
            )));
        }
        _ => ReplCommand::Append(line.trim_end().to_string()),
    };

    Ok(Some(command))
}

fn append_line(text: &mut String, line: &str) {
    if !text.is_empty() && !text.ends_with('\n') {
        text.push('\n');
    }
    text.push_str(line);
}

fn get_history_path() -> Result<PathBuf> {
    let dir = Config::data_dir()?;
    std::fs::create_dir_all(&dir)?;
    Ok(dir.join("history.txt"))
}

fn print_help(formatter: &Formatter) {
    println!("{}", formatter.info("Available commands:"));
    println!();
    println!("  <text>                         - Append a line to the draft");
    println!("  :check                         - Check the draft");
    println!("  :show                          - Print the draft");
    println!("  :clear                         - Empty the draft and the saved copy");
    println!("  :example                       - Replace the draft with the example text");
    println!("  help, ?                        - Show this help");
    println!("  exit, quit, :q                 - Exit REPL");
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_lines_are_ignored() {
        assert_eq!(parse_repl_line("   ").unwrap(), None);
    }

    #[test]
    fn test_commands() {
        assert_eq!(parse_repl_line(":check").unwrap(), Some(ReplCommand::Check));
        assert_eq!(parse_repl_line("  :clear ").unwrap(), Some(ReplCommand::Clear));
        assert_eq!(parse_repl_line("exit").unwrap(), Some(ReplCommand::Exit));
        assert_eq!(parse_repl_line("?").unwrap(), Some(ReplCommand::Help));
    }

    #[test]
    fn test_unknown_command() {
        assert!(matches!(parse_repl_line(":frobnicate"), Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn test_text_is_appended() {
        assert_eq!(
            parse_repl_line("  Berlin hat 3,7 Millionen Einwohner.  ").unwrap(),
            Some(ReplCommand::Append("  Berlin hat 3,7 Millionen Einwohner.".to_string()))
        );

        let mut text = String::new();
        append_line(&mut text, "Erste Zeile.");
        append_line(&mut text, "Zweite Zeile.");
        assert_eq!(text, "Erste Zeile.\nZweite Zeile.");
    }
}
