//! Repository client trait
//!
//! Defines the interface the entry point depends on for fetching diff and
//! file data. Implementations can be direct (hitting the API) or stubs for
//! tests; the diff-classification core only ever sees the resolved text.

use async_trait::async_trait;

/// Repository data client
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow sharing across async
/// tasks.
#[async_trait]
pub trait RepoClient: Send + Sync {
    /// Fetch the tag name of the repository's most recent release
    ///
    /// # Returns
    ///
    /// `Ok(None)` when the repository has no releases at all; any other
    /// API failure propagates as an error.
    async fn latest_release_tag(&self, owner: &str, repo: &str) -> anyhow::Result<Option<String>>;

    /// Fetch the unified-diff patch for a single file between two references
    ///
    /// # Arguments
    ///
    /// * `base` - Baseline reference (tag, branch, or commit SHA)
    /// * `head` - Head reference
    /// * `path` - File path relative to the repository root
    ///
    /// # Returns
    ///
    /// `Ok(None)` when the file did not change between the references or
    /// has no textual patch. Missing references propagate as errors.
    async fn compare_file_patch(
        &self,
        owner: &str,
        repo: &str,
        base: &str,
        head: &str,
        path: &str,
    ) -> anyhow::Result<Option<String>>;

    /// Fetch the decoded body of a file at a reference
    ///
    /// # Returns
    ///
    /// `Ok(None)` when the file does not exist at that reference.
    async fn file_content(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
        reference: &str,
    ) -> anyhow::Result<Option<String>>;
}
