//! Classifies each candidate into a terminal [`RenameStatus`] and, in apply
//! mode, performs the rename.
//!
//! ```text
//! Pending ─┬─ no spans ─────────────────────────────► NoMatch
//!          ├─ new name invalid ─────────────────────► Error
//!          ├─ new name == old name ─────────────────► MatchedNoChange
//!          ├─ target occupied ──────────────────────► Collision
//!          ├─ dry-run ──────────────────────────────► WouldRename
//!          └─ rename ─┬─ ok ────────────────────────► Renamed
//!                     └─ I/O failure ───────────────► Error
//! ```

use crate::config::Config;
use crate::core_types::{CandidateFile, MatchResult, RenameStatus};
use crate::errors::io_error_with_path;
use crate::matching::PhraseMatcher;
use crate::transform::compute_new_name;
use log::{debug, warn};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::instrument;

pub mod backend;

pub use backend::{NoClobberRename, RenameBackend};

/// Per-run planning state.
///
/// In dry-run mode nothing is renamed, so the planner keeps track of the
/// targets it has promised and the sources it has freed. This makes a dry-run
/// predict the same collisions an apply run over the same tree would hit.
#[derive(Debug)]
pub struct Planner<'a> {
    config: &'a Config,
    matcher: PhraseMatcher,
    backend: &'a dyn RenameBackend,
    claimed: HashSet<PathBuf>,
    vacated: HashSet<PathBuf>,
}

impl<'a> Planner<'a> {
    /// Creates a planner for one run.
    pub fn new(config: &'a Config, backend: &'a dyn RenameBackend) -> Self {
        Self {
            config,
            matcher: PhraseMatcher::new(&config.matching),
            backend,
            claimed: HashSet::new(),
            vacated: HashSet::new(),
        }
    }

    /// Returns `true` if the phrase occurs in the candidate's base name.
    pub fn matches(&self, candidate: &CandidateFile) -> bool {
        !self.matcher.find_spans(&candidate.base_name).is_empty()
    }

    /// Drives one candidate from `Pending` to its terminal state.
    #[instrument(level = "debug", skip(self, candidate), fields(file = %candidate))]
    pub fn process(&mut self, candidate: CandidateFile) -> MatchResult {
        let spans = self.matcher.find_spans(&candidate.base_name);
        if spans.is_empty() {
            return MatchResult::new(candidate, RenameStatus::NoMatch);
        }

        let new_name = match compute_new_name(
            &candidate.base_name,
            &candidate.extension,
            &spans,
            self.config.mode,
            &self.config.replacement,
        ) {
            Ok(name) => name,
            Err(e) => {
                warn!("{}", e);
                let mut result = MatchResult::new(candidate, RenameStatus::Error);
                result.error = Some(e.to_string());
                return result;
            }
        };

        if new_name == candidate.file_name() {
            debug!("Computed name is unchanged");
            let mut result = MatchResult::new(candidate, RenameStatus::MatchedNoChange);
            result.computed_name = Some(new_name);
            return result;
        }

        let target = candidate.directory.join(&new_name);
        let status = if self.target_occupied(&candidate.original_path, &target) {
            debug!("Target '{}' is occupied", target.display());
            RenameStatus::Collision
        } else if self.config.is_dry_run() {
            self.vacated.insert(candidate.original_path.clone());
            self.vacated.remove(&target);
            self.claimed.insert(target.clone());
            RenameStatus::WouldRename
        } else {
            match self.backend.rename(&candidate.original_path, &target) {
                Ok(()) => RenameStatus::Renamed,
                Err(e) => {
                    let err = io_error_with_path(e, &candidate.original_path);
                    warn!("{}", err);
                    let mut result = MatchResult::new(candidate, RenameStatus::Error);
                    result.computed_name = Some(new_name);
                    result.target = Some(target);
                    result.error = Some(err.to_string());
                    return result;
                }
            }
        };

        let mut result = MatchResult::new(candidate, status);
        result.computed_name = Some(new_name);
        result.target = Some(target);
        result
    }

    fn target_occupied(&self, source: &Path, target: &Path) -> bool {
        if self.config.is_dry_run() {
            if self.claimed.contains(target) {
                return true;
            }
            if self.vacated.contains(target) {
                return false;
            }
        }
        self.backend.exists(target) && !self.backend.is_case_variant(source, target)
    }
}
