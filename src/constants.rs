// src/constants.rs

/// Line prefix for a planned rename in a dry-run.
pub const TAG_DRY_RUN: &str = "[DRY-RUN]";

/// Line prefix for a performed rename.
pub const TAG_RENAME: &str = "[RENAME]";

/// Line prefix for a collision.
pub const TAG_SKIP: &str = "[SKIP]";

/// Line prefix for a per-file error.
pub const TAG_ERROR: &str = "[ERROR]";

/// Line prefix for `--list-matches` output.
pub const TAG_MATCH: &str = "[MATCH]";

/// Header line of the summary block.
pub const SUMMARY_HEADER: &str = "Summary:";

/// Width the summary labels are padded to.
pub const SUMMARY_LABEL_WIDTH: usize = 20;
