// src/main.rs

use anyhow::Result;
use clap::Parser;
use namescrub::cli::Cli;
use namescrub::config::ConfigBuilder;
use namescrub::errors::{ConfigError, Error};
use namescrub::run;
use namescrub::signal::setup_signal_handler;
use std::io::{self, Write};

fn main() -> Result<()> {
    // Initialize logging. Default to 'info' if RUST_LOG is not set.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(
                if cfg!(debug_assertions) {
                    "namescrub=debug".parse()?
                } else {
                    "namescrub=info".parse()?
                },
            ),
        )
        .init();

    log::info!("Starting namescrub v{}...", env!("CARGO_PKG_VERSION"));
    log::debug!("Raw arguments: {:?}", std::env::args().collect::<Vec<_>>());

    // --- Setup ---
    let cli = Cli::parse();

    // --- Configuration ---
    let config = match ConfigBuilder::from_cli(cli).build() {
        Ok(config) => config,
        Err(Error::Config(e @ ConfigError::DangerousRoot(_))) => {
            eprintln!("{}", e);
            std::process::exit(2);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    log::debug!("Configuration built successfully.");

    let token = setup_signal_handler()?;

    // --- Execution ---
    let stdout = io::stdout();
    let mut writer = stdout.lock();
    let result = run(&config, &token, &mut writer);
    writer.flush()?;

    // --- Error Handling ---
    match result {
        Ok(report) => {
            if report.has_errors() {
                std::process::exit(report.exit_code());
            }
        }
        Err(Error::Interrupted) => {
            eprintln!("\nOperation cancelled.");
            std::process::exit(130);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
