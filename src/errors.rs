//! Defines application-specific error types.
//!
//! `ConfigError` covers everything that is rejected before any file is touched.
//! `Error` is the library-wide error; its per-file variants (`Io`,
//! `InvalidResultName`, `UnsafeResultName`) are recorded on a candidate's result instead of
//! aborting the run.

use std::path::Path;
use thiserror::Error;

/// A specialized `Result` type for namescrub operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while validating configuration. These are always fatal.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The phrase to delete or replace was empty.
    #[error("Invalid configuration: the phrase must not be empty")]
    EmptyPhrase,

    /// Replace mode was selected without any replacement text.
    #[error("Invalid configuration: replace mode requires replacement text (--replace <TEXT>)")]
    MissingReplacement,

    /// The root path does not exist or is not a directory.
    #[error("Invalid configuration: '{0}' is not a directory")]
    NotADirectory(String),

    /// The root path is `/` or the user's home directory and `--force` was not given.
    #[error("Refusing to run on '{0}' without --force")]
    DangerousRoot(String),

    /// A value was provided but could not be used.
    #[error("Invalid value for {option}: {reason}")]
    InvalidValue {
        /// The option that was invalid.
        option: String,
        /// Why it was rejected.
        reason: String,
    },
}

/// Application-specific errors used throughout `namescrub`.
#[derive(Error, Debug)]
pub enum Error {
    /// Error occurring during file or directory access (metadata, rename).
    #[error("I/O error accessing path '{path}': {source}")]
    Io {
        /// The path that caused the I/O error.
        path: String,
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    /// Writing the report failed.
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),

    /// The configuration was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Deleting or replacing the phrase left an empty base name.
    #[error("renaming '{name}' would leave an empty base name")]
    InvalidResultName {
        /// The original file name.
        name: String,
    },

    /// The cleaned name is not a plain file name (contains a path separator,
    /// or is `.` or `..`).
    #[error("renaming '{name}' would produce '{new_name}', which is not a plain file name")]
    UnsafeResultName {
        /// The original file name.
        name: String,
        /// The rejected new name.
        new_name: String,
    },

    /// Error indicating that the operation was cancelled by the user (e.g., Ctrl+C).
    #[error("Operation cancelled by user (Ctrl+C)")]
    Interrupted,
}

/// Helper function to create an `Error::Io` with path context.
pub fn io_error_with_path<P: AsRef<Path>>(source: std::io::Error, path: P) -> Error {
    Error::Io {
        path: path.as_ref().display().to_string(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{io, path::PathBuf};

    #[test]
    fn test_io_error_with_path_helper() {
        let path = PathBuf::from("some/test/Book.pdf");
        let source_error = io::Error::new(io::ErrorKind::PermissionDenied, "Access denied");
        let err = io_error_with_path(source_error, &path);

        match err {
            Error::Io {
                path: error_path,
                source,
            } => {
                assert!(error_path.contains("some/test/Book.pdf"));
                assert_eq!(source.kind(), io::ErrorKind::PermissionDenied);
            }
            _ => panic!("Expected Error::Io"),
        }
    }

    #[test]
    fn test_config_error_converts_and_keeps_message() {
        let err: Error = ConfigError::EmptyPhrase.into();
        assert!(matches!(err, Error::Config(ConfigError::EmptyPhrase)));
        assert!(err.to_string().contains("phrase must not be empty"));
    }

    #[test]
    fn test_invalid_result_name_message() {
        let err = Error::InvalidResultName {
            name: "(Z-Library).pdf".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "renaming '(Z-Library).pdf' would leave an empty base name"
        );
    }

    #[test]
    fn test_unsafe_result_name_message() {
        let err = Error::UnsafeResultName {
            name: "Book (Z-Library).pdf".to_string(),
            new_name: "Book a/b.pdf".to_string(),
        };
        assert!(err.to_string().contains("'Book a/b.pdf', which is not a plain file name"));
    }
}
