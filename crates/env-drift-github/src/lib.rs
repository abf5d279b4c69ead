//! GitHub repository client
//!
//! This crate provides the trait-based repository collaborator used by the
//! env-drift entry point: given a repository and two references, it fetches
//! the unified-diff patch for a single file, the latest release tag, or a
//! raw file body at a reference. The diff-classification core never talks
//! to the network; everything async lives behind the [`RepoClient`] trait
//! so callers can substitute a stub in tests.
//!
//! # Example
//!
//! ```rust,no_run
//! use env_drift_github::{OctocrabRepoClient, RepoClient};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = OctocrabRepoClient::from_token("token".to_string())?;
//! let patch = client
//!     .compare_file_patch("owner", "repo", "v1.0.0", "main", ".env.example")
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod octocrab_client;
pub mod types;

pub use client::RepoClient;
pub use octocrab_client::OctocrabRepoClient;
pub use types::{Comparison, ComparedFile, FileContent, Release};

// Re-export octocrab so consumers don't need to depend on it directly
pub use octocrab;
