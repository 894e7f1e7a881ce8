// src/signal.rs

//! Ctrl+C handling for the binary.

use crate::cancellation::CancellationToken;
use anyhow::{Context, Result};

/// Installs a Ctrl+C (SIGINT/SIGTERM) handler that cancels the returned token.
///
/// # Errors
/// Returns an error if a handler is already installed or cannot be registered.
pub fn setup_signal_handler() -> Result<CancellationToken> {
    let token = CancellationToken::new();
    let handler_token = token.clone();

    ctrlc::set_handler(move || {
        log::info!("Ctrl+C received, stopping after the current file.");
        handler_token.cancel();
    })
    .context("Failed to set Ctrl+C signal handler")?;

    Ok(token)
}
