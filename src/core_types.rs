//! Defines core data structures used throughout the rename pipeline.
//!
//! A `CandidateFile` is produced by discovery, classified by the planner into a
//! `MatchResult`, and folded into the `RunReport`.

use std::fmt;
use std::path::{Path, PathBuf};

/// A regular file found during the walk, split into the pieces the matcher needs.
///
/// # Examples
///
/// ```
/// use namescrub::core_types::CandidateFile;
/// use std::path::Path;
///
/// let candidate = CandidateFile::from_path(Path::new("/books/Book (Z-Library).pdf")).unwrap();
/// assert_eq!(candidate.base_name, "Book (Z-Library)");
/// assert_eq!(candidate.extension, ".pdf");
/// assert_eq!(candidate.file_name(), "Book (Z-Library).pdf");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile {
    /// The path as produced by the walk.
    pub original_path: PathBuf,
    /// The directory containing the file.
    pub directory: PathBuf,
    /// The file name without its extension. This is the only part that is matched.
    pub base_name: String,
    /// The extension including its leading dot, or an empty string.
    pub extension: String,
}

impl CandidateFile {
    /// Builds a candidate from a file path.
    ///
    /// Returns `None` when the path has no file name or the name is not valid UTF-8.
    /// The extension is everything from the last `.` onward, unless that dot is the
    /// first character (`.bashrc` has no extension).
    pub fn from_path(path: &Path) -> Option<Self> {
        let file_name = path.file_name()?.to_str()?;
        let (base_name, extension) = split_extension(file_name);
        Some(Self {
            original_path: path.to_path_buf(),
            directory: path.parent().map(Path::to_path_buf).unwrap_or_default(),
            base_name: base_name.to_string(),
            extension: extension.to_string(),
        })
    }

    /// The full file name (base name plus extension).
    pub fn file_name(&self) -> String {
        format!("{}{}", self.base_name, self.extension)
    }
}

impl fmt::Display for CandidateFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.base_name, self.extension)
    }
}

/// Splits a file name into `(base_name, extension)`.
pub(crate) fn split_extension(file_name: &str) -> (&str, &str) {
    match file_name.rfind('.') {
        Some(idx) if idx > 0 => file_name.split_at(idx),
        _ => (file_name, ""),
    }
}

/// The terminal state a candidate ends in after planning (and, in apply mode, renaming).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenameStatus {
    /// The phrase does not occur in the base name.
    NoMatch,
    /// The phrase occurs, but the computed name is identical to the original.
    MatchedNoChange,
    /// Dry-run: the file would be renamed.
    WouldRename,
    /// The file was renamed.
    Renamed,
    /// The target name is already taken; the file was left alone.
    Collision,
    /// The new name was invalid or the rename failed.
    Error,
}

impl RenameStatus {
    /// Whether the phrase was found for this status.
    pub fn is_match(self) -> bool {
        !matches!(self, RenameStatus::NoMatch)
    }
}

/// The outcome of processing a single candidate.
#[derive(Debug, Clone)]
pub struct MatchResult {
    /// The candidate this result belongs to.
    pub candidate: CandidateFile,
    /// Whether the phrase was found in the base name.
    pub matched: bool,
    /// The computed file name (base name plus extension), if one was computed.
    pub computed_name: Option<String>,
    /// The full destination path, if a rename was planned.
    pub target: Option<PathBuf>,
    /// The terminal state.
    pub status: RenameStatus,
    /// A human-readable reason when `status` is `Error`.
    pub error: Option<String>,
}

impl MatchResult {
    pub(crate) fn new(candidate: CandidateFile, status: RenameStatus) -> Self {
        Self {
            candidate,
            matched: status.is_match(),
            computed_name: None,
            target: None,
            status,
            error: None,
        }
    }
}
