//! Defines the core `Config` struct and related types for application configuration.
//!
//! A `Config` is built once (from the CLI or programmatically through
//! [`ConfigBuilder`]) and then passed by reference to every stage. It is never
//! mutated after `build()`.

use std::fmt;
use std::path::PathBuf;

pub use builder::ConfigBuilder;
mod builder;
pub mod path_resolve;
mod validation;

/// What to do with each occurrence of the phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Remove the phrase.
    #[default]
    Delete,
    /// Substitute the phrase with `Config::replacement`.
    Replace,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Delete => write!(f, "delete"),
            Mode::Replace => write!(f, "replace"),
        }
    }
}

/// Options that control how the phrase is located in a base name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchOptions {
    /// The literal phrase to look for. Never empty in a built `Config`.
    pub phrase: String,
    /// Lowercase both sides (full Unicode) before comparing.
    pub case_insensitive: bool,
    /// Fold hyphen and space variants before comparing.
    pub loose: bool,
}

/// Holds all the settings parsed and validated from the CLI,
/// ready to be used by discovery, planning and reporting.
#[derive(Debug, Clone)]
pub struct Config {
    /// The canonicalized root directory to scan.
    pub root_path: PathBuf,
    /// The phrase and how to match it.
    pub matching: MatchOptions,
    /// Delete or replace.
    pub mode: Mode,
    /// Replacement text; only used when `mode` is `Mode::Replace`.
    pub replacement: String,
    /// Whether to recurse into subdirectories.
    pub recursive: bool,
    /// Perform renames. When `false` the run is a dry-run.
    pub apply: bool,
    /// Allow the filesystem root or the home directory as `root_path`.
    pub force: bool,
    /// Print every matching filename before the rename pass.
    pub list_matches: bool,
}

impl Config {
    /// Whether this run only previews changes.
    pub fn is_dry_run(&self) -> bool {
        !self.apply
    }

    /// Creates a default `Config` for testing purposes.
    ///
    /// This function is hidden from public documentation and is intended for
    /// use in tests and doc tests only.
    #[doc(hidden)]
    pub fn new_for_test() -> Self {
        Self {
            root_path: PathBuf::from("."),
            matching: MatchOptions {
                phrase: "(Z-Library)".to_string(),
                case_insensitive: false,
                loose: false,
            },
            mode: Mode::Delete,
            replacement: String::new(),
            recursive: false,
            apply: false,
            force: false,
            list_matches: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_display() {
        assert_eq!(Mode::default().to_string(), "delete");
        assert_eq!(Mode::Replace.to_string(), "replace");
    }

    #[test]
    fn test_dry_run_is_the_default() {
        let mut config = Config::new_for_test();
        assert!(config.is_dry_run());
        config.apply = true;
        assert!(!config.is_dry_run());
    }
}
