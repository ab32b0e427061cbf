//! UI exports CLI
//!
//! Discovers plugins, aggregates their exports and queries the registry.

mod cli;
mod commands;
mod context;
mod error;

use clap::{CommandFactory, Parser};
use colored::Colorize;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use cli::{Cli, Commands};
use context::{Context, Settings};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command.clone() {
        Some(Commands::Completions { shell }) => {
            clap_complete::generate(shell, &mut Cli::command(), "uix", &mut std::io::stdout());
            Ok(())
        }
        Some(cmd) => execute_command(&cli, cmd),
        None => {
            // No command provided - show help hint
            println!("{} UI exports registry CLI", "uix".green().bold());
            println!();
            println!("Run {} for available commands.", "uix --help".cyan());
            Ok(())
        }
    }
}

/// Log to stderr so `--json` output stays clean.
///
/// `RUST_LOG` wins when set; otherwise `warn`, or `debug` with `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .compact();

    // Ignore failure: a subscriber may already be installed
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

fn execute_command(cli: &Cli, cmd: Commands) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let context = Context::build(Settings::resolve(cli, &cwd)?)?;

    match cmd {
        Commands::Check => commands::run_check(&context),
        Commands::Apps { json } => commands::run_apps(&context, json),
        Commands::Links { json } => commands::run_links(&context, json),
        Commands::Find { patterns, json } => commands::run_find(&context, &patterns, json),
        Commands::Bundles { json } => commands::run_bundles(&context, json),
        Commands::Completions { .. } => Ok(()),
    }
}
