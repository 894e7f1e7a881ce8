//! Discovers the regular files a run will look at.
use crate::config::Config;
use crate::core_types::CandidateFile;
use log::debug;

mod entry_processor;
mod walker;

use entry_processor::process_direntry;
use walker::build_walker;

/// Walks `config.root_path` and lazily yields every regular file in scope.
///
/// Only the root's direct children are visited unless `config.recursive` is set.
/// Directories and symlinks are never yielded. The order is deterministic: names
/// are sorted within each directory and subdirectories are visited depth-first.
/// Walk errors (e.g. an unreadable subdirectory) are logged and skipped.
///
/// # Examples
///
/// ```
/// use namescrub::config::ConfigBuilder;
/// use namescrub::discover;
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let temp = tempfile::tempdir()?;
/// std::fs::write(temp.path().join("b.pdf"), "")?;
/// std::fs::write(temp.path().join("a.pdf"), "")?;
///
/// let config = ConfigBuilder::new().root_path(temp.path()).phrase("x").build()?;
/// let names: Vec<String> = discover(&config).map(|c| c.file_name()).collect();
/// assert_eq!(names, vec!["a.pdf", "b.pdf"]);
/// # Ok(())
/// # }
/// ```
pub fn discover(config: &Config) -> impl Iterator<Item = CandidateFile> {
    debug!(
        "Starting discovery in {} (recursive: {})",
        config.root_path.display(),
        config.recursive
    );
    build_walker(config).into_iter().filter_map(process_direntry)
}
