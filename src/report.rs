//! Folds per-candidate results into the run's counters.

use crate::core_types::{MatchResult, RenameStatus};
use std::path::PathBuf;

/// Aggregated counters for one run.
///
/// # Examples
///
/// ```
/// use namescrub::report::RunReport;
///
/// let report = RunReport::new(true);
/// assert_eq!(report.checked, 0);
/// assert!(!report.has_errors());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Whether the run was a dry-run.
    pub dry_run: bool,
    /// Every candidate seen.
    pub checked: usize,
    /// Candidates whose base name contained the phrase.
    pub matched: usize,
    /// Files actually renamed.
    pub changed: usize,
    /// Files a dry-run would rename.
    pub would_change: usize,
    /// Candidates left alone because of a collision or no match.
    pub skipped: usize,
    /// The collision share of `skipped`.
    pub collisions: usize,
    /// `(path, reason)` for every candidate that ended in `Error`.
    pub errors: Vec<(PathBuf, String)>,
}

impl RunReport {
    /// Creates an empty report.
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            ..Default::default()
        }
    }

    /// Folds one terminal result into the counters.
    pub fn record(&mut self, result: &MatchResult) {
        self.checked += 1;
        if result.status.is_match() {
            self.matched += 1;
        }
        match result.status {
            RenameStatus::NoMatch => self.skipped += 1,
            RenameStatus::MatchedNoChange => {}
            RenameStatus::WouldRename => self.would_change += 1,
            RenameStatus::Renamed => self.changed += 1,
            RenameStatus::Collision => {
                self.skipped += 1;
                self.collisions += 1;
            }
            RenameStatus::Error => self.errors.push((
                result.candidate.original_path.clone(),
                result
                    .error
                    .clone()
                    .unwrap_or_else(|| "unknown error".to_string()),
            )),
        }
    }

    /// Whether any candidate ended in `Error`.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Process exit code for this report: `0` for a clean run, `1` if any error occurred.
    pub fn exit_code(&self) -> i32 {
        if self.has_errors() {
            1
        } else {
            0
        }
    }
}
