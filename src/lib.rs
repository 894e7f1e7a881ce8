//! `namescrub` is a library and command-line tool that deletes or replaces a
//! fixed phrase in filenames, e.g. stripping `(Z-Library)` from downloaded
//! e-books.
//!
//! A run is a simple sequential pipeline:
//! 1.  **Discover**: walk the root directory (optionally recursively) and yield
//!     every regular file in a deterministic order.
//! 2.  **Plan**: find the phrase in each base name, compute the new name and
//!     classify the file into a terminal [`RenameStatus`]. In apply mode the
//!     rename happens here, and never overwrites an existing file.
//! 3.  **Report**: print one line per changed file and fold every result into a
//!     [`RunReport`].
//!
//! # Example: Library Usage
//!
//! ```
//! use namescrub::{run, CancellationToken, ConfigBuilder, RenameStatus};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! // 1. Set up a temporary directory with some files.
//! let temp_dir = tempdir().unwrap();
//! fs::write(temp_dir.path().join("Book Title (Z-Library).pdf"), "pdf").unwrap();
//! fs::write(temp_dir.path().join("Notes.txt"), "notes").unwrap();
//!
//! // 2. Build a Config. Without `.apply(true)` this is a dry-run.
//! let config = ConfigBuilder::new()
//!     .root_path(temp_dir.path())
//!     .phrase("(Z-Library)")
//!     .build()
//!     .unwrap();
//!
//! // 3. Run it, collecting the report lines in a buffer.
//! let mut output = Vec::new();
//! let report = run(&config, &CancellationToken::new(), &mut output).unwrap();
//!
//! assert_eq!(report.checked, 2);
//! assert_eq!(report.would_change, 1);
//! let text = String::from_utf8(output).unwrap();
//! assert!(text.contains("[DRY-RUN] Book Title (Z-Library).pdf -> Book Title.pdf"));
//!
//! // Nothing was renamed.
//! assert!(temp_dir.path().join("Book Title (Z-Library).pdf").exists());
//! ```

pub mod cancellation;
pub mod cli;
pub mod config;
pub mod constants;
pub mod core_types;
pub mod discovery;
pub mod errors;
pub mod matching;
pub mod output;
pub mod planner;
pub mod prelude;
pub mod report;
pub mod signal;
pub mod transform;

// Re-export key public types for easier use as a library
pub use cancellation::CancellationToken;
pub use config::{Config, ConfigBuilder, MatchOptions, Mode};
pub use core_types::{CandidateFile, MatchResult, RenameStatus};
pub use discovery::discover;
pub use planner::{NoClobberRename, Planner, RenameBackend};
pub use report::RunReport;

use crate::errors::{Error, Result};
use log::{debug, info};
use std::io::Write;

/// Returns every candidate whose base name contains the phrase, in walk order.
///
/// This is what `--list-matches` prints; it never touches the filesystem
/// beyond reading directories.
pub fn collect_matches(config: &Config) -> Vec<CandidateFile> {
    let planner = Planner::new(config, &NoClobberRename);
    discover(config).filter(|c| planner.matches(c)).collect()
}

/// Executes a complete run against the real filesystem.
///
/// Equivalent to [`run_with_backend`] with [`NoClobberRename`].
///
/// # Errors
/// Returns `Error::Interrupted` if `token` is cancelled, and `Error::Output` if
/// writing to `writer` fails. Per-file failures do not abort the run; they are
/// collected in [`RunReport::errors`].
pub fn run(config: &Config, token: &CancellationToken, writer: &mut dyn Write) -> Result<RunReport> {
    run_with_backend(config, token, &NoClobberRename, writer)
}

/// Executes a complete run: optional match listing, then discover, plan and
/// report every candidate, then the summary.
///
/// Candidates are processed one at a time in walk order. The token is checked
/// before each candidate; a cancelled run stops with `Error::Interrupted`,
/// leaving files that were already renamed in place.
pub fn run_with_backend(
    config: &Config,
    token: &CancellationToken,
    backend: &dyn RenameBackend,
    writer: &mut dyn Write,
) -> Result<RunReport> {
    info!(
        "Starting {} run: {} '{}' under {}",
        if config.is_dry_run() { "dry" } else { "apply" },
        config.mode,
        config.matching.phrase,
        config.root_path.display()
    );

    if config.list_matches {
        output::write_match_listing(writer, &collect_matches(config))?;
    }

    if config.is_dry_run() {
        writeln!(
            writer,
            "Mode: DRY-RUN (no changes). Use --apply to perform renames.\n"
        )?;
    }

    let mut planner = Planner::new(config, backend);
    let mut report = RunReport::new(config.is_dry_run());

    for candidate in discover(config) {
        if token.is_cancelled() {
            info!("Run cancelled after {} file(s).", report.checked);
            return Err(Error::Interrupted);
        }
        let result = planner.process(candidate);
        output::write_result_line(writer, &result)?;
        report.record(&result);
    }

    debug!("Run complete: {:?}", report);
    output::summary::write_summary(writer, &report, &config.root_path)?;
    Ok(report)
}
