//! archsplit CLI
//!
//! Splits a header with `__CUDA_ARCH__` guarded blocks into host and device
//! variants.

mod cli;
mod error;
mod pipeline;

use clap::Parser;
use clap::error::ErrorKind;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, USAGE_EXAMPLE};
use error::{CliError, Result};

fn main() {
    if let Err(e) = run() {
        if e.is_validation() {
            println!("{}", e);
        } else {
            eprintln!("{}: {}", "error".red().bold(), e);
        }
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = parse_args()?;

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    pipeline::run(&cli.input_file)?;
    Ok(())
}

/// Parses arguments, turning clap's usage errors into a status-1 exit.
fn parse_args() -> Result<Cli> {
    Cli::try_parse().or_else(|e| match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
        _ => Err(CliError::Usage {
            usage: format!("{}{}", e.render(), USAGE_EXAMPLE),
        }),
    })
}
