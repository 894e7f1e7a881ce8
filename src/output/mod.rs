//! Renders per-file decisions and the match listing.
//!
//! Everything is written to a caller-supplied `&mut dyn Write` so the library
//! can be used with a buffer and the binary with stdout.

use crate::constants::{TAG_DRY_RUN, TAG_ERROR, TAG_MATCH, TAG_RENAME, TAG_SKIP};
use crate::core_types::{CandidateFile, MatchResult, RenameStatus};
use std::io::{self, Write};

pub mod summary;

/// Writes the line for one result. `NoMatch` and `MatchedNoChange` print nothing.
pub fn write_result_line(writer: &mut dyn Write, result: &MatchResult) -> io::Result<()> {
    let old = result.candidate.file_name();
    let new = result.computed_name.as_deref().unwrap_or_default();
    match result.status {
        RenameStatus::NoMatch | RenameStatus::MatchedNoChange => {}
        RenameStatus::WouldRename => writeln!(writer, "{} {} -> {}", TAG_DRY_RUN, old, new)?,
        RenameStatus::Renamed => writeln!(writer, "{} {} -> {}", TAG_RENAME, old, new)?,
        RenameStatus::Collision => writeln!(
            writer,
            "{} Target exists: {}  (from: {})",
            TAG_SKIP, new, old
        )?,
        RenameStatus::Error => writeln!(
            writer,
            "{} {}: {}",
            TAG_ERROR,
            old,
            result.error.as_deref().unwrap_or("unknown error")
        )?,
    }
    Ok(())
}

/// Writes the `--list-matches` preview.
pub fn write_match_listing(writer: &mut dyn Write, matches: &[CandidateFile]) -> io::Result<()> {
    if matches.is_empty() {
        writeln!(writer, "No filenames matched the phrase.")?;
    }
    for candidate in matches {
        writeln!(writer, "{} {}", TAG_MATCH, candidate.file_name())?;
    }
    writer.flush()?;
    Ok(())
}
