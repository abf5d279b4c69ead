//! Octocrab-based repository client
//!
//! Direct implementation of the [`RepoClient`] trait using the octocrab
//! library. The compare and contents endpoints are called through raw GET
//! routes since octocrab has no typed wrappers for the shapes we need.

use crate::client::RepoClient;
use crate::types::{ComparedFile, Comparison, FileContent, Release};
use anyhow::Context;
use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use log::debug;
use octocrab::Octocrab;
use std::sync::Arc;

/// Direct GitHub API client using octocrab
#[derive(Debug, Clone)]
pub struct OctocrabRepoClient {
    octocrab: Arc<Octocrab>,
}

impl OctocrabRepoClient {
    /// Create a new client with the given octocrab instance
    pub fn new(octocrab: Arc<Octocrab>) -> Self {
        Self { octocrab }
    }

    /// Build a client authenticated with a personal token
    pub fn from_token(token: String) -> anyhow::Result<Self> {
        let octocrab = Octocrab::builder()
            .personal_token(token)
            .build()
            .context("failed to build GitHub client")?;
        Ok(Self::new(Arc::new(octocrab)))
    }
}

#[async_trait]
impl RepoClient for OctocrabRepoClient {
    async fn latest_release_tag(&self, owner: &str, repo: &str) -> anyhow::Result<Option<String>> {
        debug!("Fetching latest release for {}/{}", owner, repo);

        let route = format!("/repos/{}/{}/releases/latest", owner, repo);
        let result: Result<Release, octocrab::Error> = self.octocrab.get(route, None::<&()>).await;

        match result {
            Ok(release) => Ok(Some(release.tag_name)),
            // No release has ever been published
            Err(err) if is_not_found(&err) => Ok(None),
            Err(err) => Err(err).with_context(|| {
                format!("failed to fetch latest release for {}/{}", owner, repo)
            }),
        }
    }

    async fn compare_file_patch(
        &self,
        owner: &str,
        repo: &str,
        base: &str,
        head: &str,
        path: &str,
    ) -> anyhow::Result<Option<String>> {
        debug!(
            "Comparing {}...{} in {}/{} for {}",
            base, head, owner, repo, path
        );

        let route = format!("/repos/{}/{}/compare/{}...{}", owner, repo, base, head);
        let comparison: Comparison =
            self.octocrab
                .get(route, None::<&()>)
                .await
                .with_context(|| {
                    format!(
                        "failed to compare {}...{} in {}/{}; \
                         ensure both references exist in the repository",
                        base, head, owner, repo
                    )
                })?;

        Ok(select_patch(&comparison.files, path))
    }

    async fn file_content(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
        reference: &str,
    ) -> anyhow::Result<Option<String>> {
        debug!(
            "Fetching {} at {} from {}/{}",
            path, reference, owner, repo
        );

        let route = format!(
            "/repos/{}/{}/contents/{}?ref={}",
            owner, repo, path, reference
        );
        let result: Result<FileContent, octocrab::Error> =
            self.octocrab.get(route, None::<&()>).await;

        match result {
            Ok(file) => decode_content(&file).map(Some),
            Err(err) if is_not_found(&err) => Ok(None),
            Err(err) => Err(err).with_context(|| {
                format!(
                    "failed to fetch {} at {} from {}/{}",
                    path, reference, owner, repo
                )
            }),
        }
    }
}

/// Pick the patch for `path` out of a comparison's file list
fn select_patch(files: &[ComparedFile], path: &str) -> Option<String> {
    files
        .iter()
        .find(|file| file.filename == path)
        .and_then(|file| file.patch.clone())
}

/// Decode a contents-API body
///
/// The API returns base64 with embedded newlines; other encodings are
/// passed through untouched.
fn decode_content(file: &FileContent) -> anyhow::Result<String> {
    if file.encoding != "base64" {
        return Ok(file.content.clone());
    }

    let compact: String = file.content.split_whitespace().collect();
    let bytes = STANDARD
        .decode(compact.as_bytes())
        .context("invalid base64 in contents response")?;
    String::from_utf8(bytes).context("file content is not valid UTF-8")
}

fn is_not_found(err: &octocrab::Error) -> bool {
    matches!(
        err,
        octocrab::Error::GitHub { source, .. } if source.status_code.as_u16() == 404
    )
}
