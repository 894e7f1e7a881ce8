// src/config/validation.rs

use super::{ConfigBuilder, Mode};
use crate::errors::{ConfigError, Result};

/// Validates combinations of options on the `ConfigBuilder` before any path is resolved.
pub(super) fn validate_builder_options(builder: &ConfigBuilder) -> Result<()> {
    match builder.phrase.as_deref() {
        None | Some("") => return Err(ConfigError::EmptyPhrase.into()),
        Some(_) => {}
    }
    if builder.mode == Some(Mode::Replace) && builder.replacement.is_none() {
        return Err(ConfigError::MissingReplacement.into());
    }
    if let Some(text) = builder.replacement.as_deref() {
        if text.chars().any(|c| std::path::is_separator(c) || c == '\0') {
            return Err(ConfigError::InvalidValue {
                option: "--replace".to_string(),
                reason: "replacement text must not contain a path separator".to_string(),
            }
            .into());
        }
    }
    if builder.root_path.is_none() {
        return Err(ConfigError::InvalidValue {
            option: "PATH".to_string(),
            reason: "a root directory is required".to_string(),
        }
        .into());
    }
    Ok(())
}
