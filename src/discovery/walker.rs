use crate::config::Config;
use log::debug;
use walkdir::WalkDir;

/// Configures the `WalkDir` for the run.
///
/// Entries are sorted by file name within each directory so that two runs over
/// the same tree visit files in the same order. Symlinks are never followed.
pub(super) fn build_walker(config: &Config) -> WalkDir {
    let mut walker = WalkDir::new(&config.root_path)
        .min_depth(1)
        .follow_links(false)
        .sort_by_file_name();

    if !config.recursive {
        // Max depth 1 means only the immediate children of the root
        walker = walker.max_depth(1);
        debug!("Recursion disabled (max depth: 1).");
    } else {
        debug!("Recursion enabled (no max depth).");
    }
    walker
}
