//! The `namescrub` prelude for convenient library usage.
//!
//! # Example
//!
//! ```
//! use namescrub::prelude::*;
//! # fn main() -> Result<()> {
//! # let temp = tempfile::tempdir().unwrap();
//! let config = ConfigBuilder::new()
//!     .root_path(temp.path())
//!     .phrase("(Z-Library)")
//!     .build()?;
//! let token = CancellationToken::new();
//! let report = run(&config, &token, &mut std::io::sink())?;
//! assert_eq!(report.checked, 0);
//! # Ok(())
//! # }
//! ```

pub use crate::cancellation::CancellationToken;
pub use crate::config::{Config, ConfigBuilder, MatchOptions, Mode};
pub use crate::core_types::{CandidateFile, MatchResult, RenameStatus};
pub use crate::errors::{ConfigError, Error, Result};
pub use crate::matching::{find_spans, PhraseMatcher};
pub use crate::planner::{NoClobberRename, Planner, RenameBackend};
pub use crate::report::RunReport;
pub use crate::transform::compute_new_name;
pub use crate::{collect_matches, discover, run, run_with_backend};
