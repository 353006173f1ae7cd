//! Faktcheck CLI - check statistical claims in German text.

use clap::Parser;
use faktcheck_cli::commands;
use faktcheck_cli::repl;
use faktcheck_cli::{Cli, Command, Config, Formatter};
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli).await {
        if e.is_recoverable() {
            eprintln!("⚠ {}", e);
            std::process::exit(2);
        }
        eprintln!("Ein Fehler ist aufgetreten: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_env("FAKTCHECK_LOG").unwrap_or_else(|_| {
        EnvFilter::new(match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        })
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> faktcheck_cli::Result<()> {
    // Resolve config location
    let config_path = match cli.config {
        Some(path) => path,
        None => Config::path()?,
    };

    let config = Config::load_from(&config_path).unwrap_or_else(|e| {
        warn!("Using default configuration: {}", e);
        Config::default()
    });

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        None | Some(Command::Repl) => {
            repl::run_repl(&config, &formatter).await?;
        }
        Some(Command::Check(args)) => {
            commands::execute_check(args, &config, &formatter).await?;
        }
        Some(Command::Extract(args)) => {
            commands::execute_extract(args, &config, &formatter)?;
        }
        Some(Command::Example(args)) => {
            commands::execute_example(args, &config, &formatter).await?;
        }
        Some(Command::Facts) => {
            commands::execute_facts(&formatter)?;
        }
        Some(Command::Config(args)) => {
            commands::execute_config(args, &config, &config_path, &formatter)?;
        }
    }

    Ok(())
}
