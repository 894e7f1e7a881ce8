// src/discovery/entry_processor.rs

use crate::core_types::CandidateFile;
use log::{trace, warn};
use walkdir::DirEntry;

/// Processes a single directory entry from the walk.
///
/// Returns `Some(CandidateFile)` for regular files with a UTF-8 name, `None` for
/// everything else (directories, symlinks, special files, walk errors).
pub(crate) fn process_direntry(entry_result: walkdir::Result<DirEntry>) -> Option<CandidateFile> {
    let entry = match entry_result {
        Ok(entry) => entry,
        Err(walk_error) => {
            warn!("Walker error: {}", walk_error);
            return None;
        }
    };

    let path = entry.path();
    // With follow_links(false) a symlink reports its own type, so this also skips symlinks.
    if !entry.file_type().is_file() {
        trace!("Skipping non-regular entry: {}", path.display());
        return None;
    }

    match CandidateFile::from_path(path) {
        Some(candidate) => {
            trace!("Candidate: {}", path.display());
            Some(candidate)
        }
        None => {
            warn!("Skipping file with a non UTF-8 name: {}", path.display());
            None
        }
    }
}
