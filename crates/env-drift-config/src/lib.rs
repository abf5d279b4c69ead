//! Run configuration for env-drift
//!
//! This crate provides:
//! - The [`CompareRequest`] value describing one comparison run
//! - Repository slug parsing ([`RepoSlug`])
//! - The GitHub Actions input layer (`INPUT_*` environment variables)
//! - GitHub token resolution
//!
//! Configuration is always an explicit value handed to the entry point,
//! never ambient mutable state, so the core and the repository client
//! stay independently testable.

pub mod actions_env;
pub mod request;
pub mod token;

pub use actions_env::{is_github_actions, request_from_actions, token_input};
pub use request::{
    CompareRequest, RepoSlug, SlugError, DEFAULT_FILE_PATH, DEFAULT_HEAD_REF, LATEST_RELEASE,
};
pub use token::resolve_token;
