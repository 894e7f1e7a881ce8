// src/cli.rs

use clap::Parser;
use std::path::PathBuf;

/// Delete or replace a phrase in filenames (dry-run by default).
///
/// namescrub scans a directory for regular files whose name (without the
/// extension) contains the given phrase, and removes it or replaces it with other
/// text, e.g. to strip "(Z-Library)" from downloaded e-books. Nothing is renamed
/// unless --apply is given, and an existing file is never overwritten.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory to scan.
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// The phrase to delete or replace (literal text, not a regex).
    #[arg(short = 'p', long, value_name = "PHRASE", allow_hyphen_values = true)]
    pub phrase: String,

    /// Replace the phrase with this text instead of deleting it.
    #[arg(long, value_name = "TEXT", allow_hyphen_values = true)]
    pub replace: Option<String>,

    /// Recurse into subdirectories.
    #[arg(short = 'r', long, action = clap::ArgAction::SetTrue)]
    pub recursive: bool,

    /// Case-insensitive matching.
    #[arg(short = 'i', long, action = clap::ArgAction::SetTrue)]
    pub ignore_case: bool,

    /// Tolerant matching: treat hyphen and space variants (en dash, non-breaking
    /// hyphen, non-breaking space, ...) as equal.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub loose: bool,

    /// Actually rename files (default is a dry-run).
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub apply: bool,

    /// Allow running on '/' or your home directory.
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub force: bool,

    /// List matching filenames before renaming (helps verify matching).
    #[arg(long, action = clap::ArgAction::SetTrue)]
    pub list_matches: bool,
}
