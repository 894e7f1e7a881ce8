// src/config/builder.rs

use super::{
    path_resolve::{check_root_allowed, resolve_root_path},
    validation::validate_builder_options,
    Config, MatchOptions, Mode,
};
use crate::cli::Cli;
use crate::errors::Result;
use std::path::PathBuf;

/// A builder for creating a `Config` instance.
///
/// This is the primary way to configure a run when using `namescrub` as a library.
/// Every field is optional until `build()`, which validates the combination,
/// resolves the root directory and refuses dangerous roots unless forced.
///
/// # Examples
///
/// ```
/// use namescrub::config::{ConfigBuilder, Mode};
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let temp = tempfile::tempdir()?;
/// let config = ConfigBuilder::new()
///     .root_path(temp.path())
///     .phrase("(Z-Library)")
///     .replacement("[Clean]")
///     .case_insensitive(true)
///     .build()?;
///
/// assert_eq!(config.mode, Mode::Replace);
/// assert!(config.is_dry_run());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default, Clone)]
pub struct ConfigBuilder {
    pub(crate) root_path: Option<PathBuf>,
    pub(crate) phrase: Option<String>,
    pub(crate) mode: Option<Mode>,
    pub(crate) replacement: Option<String>,
    pub(crate) recursive: Option<bool>,
    pub(crate) case_insensitive: Option<bool>,
    pub(crate) loose: Option<bool>,
    pub(crate) apply: Option<bool>,
    pub(crate) force: Option<bool>,
    pub(crate) list_matches: Option<bool>,
}

impl ConfigBuilder {
    /// Creates a new `ConfigBuilder` with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder pre-populated from parsed command-line arguments.
    pub fn from_cli(cli: Cli) -> Self {
        let mut builder = Self::new()
            .root_path(cli.path)
            .phrase(cli.phrase)
            .recursive(cli.recursive)
            .case_insensitive(cli.ignore_case)
            .loose(cli.loose)
            .apply(cli.apply)
            .force(cli.force)
            .list_matches(cli.list_matches);
        if let Some(text) = cli.replace {
            builder = builder.replacement(text);
        }
        builder
    }

    /// Sets the root directory to scan.
    pub fn root_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.root_path = Some(path.into());
        self
    }
    /// Sets the phrase to delete or replace.
    pub fn phrase(mut self, phrase: impl Into<String>) -> Self {
        self.phrase = Some(phrase.into());
        self
    }
    /// Sets the operation mode explicitly.
    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = Some(mode);
        self
    }
    /// Sets the replacement text and switches to `Mode::Replace`.
    pub fn replacement(mut self, text: impl Into<String>) -> Self {
        self.replacement = Some(text.into());
        self.mode = Some(Mode::Replace);
        self
    }
    /// Sets whether to recurse into subdirectories.
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = Some(recursive);
        self
    }
    /// Sets case-insensitive matching.
    pub fn case_insensitive(mut self, case_insensitive: bool) -> Self {
        self.case_insensitive = Some(case_insensitive);
        self
    }
    /// Sets loose (hyphen/space variant) matching.
    pub fn loose(mut self, loose: bool) -> Self {
        self.loose = Some(loose);
        self
    }
    /// Sets whether renames are performed (`false` = dry-run).
    pub fn apply(mut self, apply: bool) -> Self {
        self.apply = Some(apply);
        self
    }
    /// Allows running on the filesystem root or the home directory.
    pub fn force(mut self, force: bool) -> Self {
        self.force = Some(force);
        self
    }
    /// Lists matching filenames before the rename pass.
    pub fn list_matches(mut self, list_matches: bool) -> Self {
        self.list_matches = Some(list_matches);
        self
    }

    /// Validates the options and builds the final, immutable `Config`.
    ///
    /// # Errors
    /// Returns `Error::Config` for an empty phrase, replace mode without text,
    /// a root that is not a directory, or a dangerous root without `force`.
    /// Returns `Error::Io` if the root path cannot be resolved.
    pub fn build(self) -> Result<Config> {
        validate_builder_options(&self)?;

        // validate_builder_options guarantees both are present.
        let root = self.root_path.unwrap_or_default();
        let phrase = self.phrase.unwrap_or_default();

        let force = self.force.unwrap_or(false);
        let root_path = resolve_root_path(&root)?;
        check_root_allowed(&root_path, force)?;

        let mode = self.mode.unwrap_or_default();
        let config = Config {
            root_path,
            matching: MatchOptions {
                phrase,
                case_insensitive: self.case_insensitive.unwrap_or(false),
                loose: self.loose.unwrap_or(false),
            },
            mode,
            replacement: self.replacement.unwrap_or_default(),
            recursive: self.recursive.unwrap_or(false),
            apply: self.apply.unwrap_or(false),
            force,
            list_matches: self.list_matches.unwrap_or(false),
        };
        log::debug!("Built config: {:?}", config);
        Ok(config)
    }
}
