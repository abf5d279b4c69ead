//! Env Drift Core
//!
//! Parses unified diffs of environment files (`KEY=VALUE` listings) into a
//! structured [`ChangeSet`] of added, removed, and modified variables.
//!
//! The parser never computes diffs itself; it consumes an already-computed,
//! line-prefixed diff text (as returned by the GitHub compare API) or a plain
//! file body when there is no baseline to diff against. Everything here is
//! synchronous and free of I/O, so it can be called from any context.
//!
//! # Example
//!
//! ```
//! use env_drift_core::parse_changes;
//!
//! let diff = "@@ -1,2 +1,2 @@\n- API_URL=http://old\n+ API_URL=http://new\n";
//! let changes = parse_changes(diff)?;
//!
//! assert_eq!(changes.modified.len(), 1);
//! assert_eq!(changes.modified[0].key, "API_URL");
//! # Ok::<(), env_drift_core::ParseError>(())
//! ```

mod parser;
mod reconcile;
mod types;

pub use parser::{
    parse_all_new_env, parse_all_new_env_lenient, parse_changes, parse_changes_lenient, ParseError,
};
pub use reconcile::reconcile;
pub use types::{ChangeSet, EnvMap, KVEntry, ModifiedEntry};
