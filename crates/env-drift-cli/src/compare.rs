//! Comparison orchestration
//!
//! Resolves the effective baseline, fetches the data through the repository
//! client, and hands the resulting text to the diff-classification core.

use anyhow::Context;
use env_drift_config::{CompareRequest, LATEST_RELEASE};
use env_drift_core::{parse_all_new_env_lenient, parse_changes, ChangeSet};
use env_drift_github::RepoClient;
use log::info;

/// Fetch and classify the changes described by `request`
pub async fn compare(
    client: &dyn RepoClient,
    request: &CompareRequest,
) -> anyhow::Result<ChangeSet> {
    let owner = &request.slug.owner;
    let repo = &request.slug.name;

    let base_ref = if request.base_ref == LATEST_RELEASE {
        match client.latest_release_tag(owner, repo).await? {
            Some(tag) => {
                info!("Latest release is {}", tag);
                tag
            }
            None => {
                // Nothing released yet: every variable in the file is new
                info!(
                    "No release found in {}, reading {} at {}",
                    request.slug, request.file_path, request.head_ref
                );
                let body = client
                    .file_content(owner, repo, &request.file_path, &request.head_ref)
                    .await?
                    .with_context(|| {
                        format!(
                            "unable to fetch {} at {}; \
                             ensure the file exists in the repository",
                            request.file_path, request.head_ref
                        )
                    })?;
                return Ok(parse_all_new_env_lenient(&body));
            }
        }
    } else {
        request.base_ref.clone()
    };

    let patch = client
        .compare_file_patch(owner, repo, &base_ref, &request.head_ref, &request.file_path)
        .await?;

    match patch {
        Some(patch) => Ok(parse_changes(&patch)?),
        None => {
            info!("No changes found in {}", request.file_path);
            Ok(ChangeSet::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use env_drift_config::RepoSlug;

    /// Canned repository client; panics if an unexpected base is compared
    struct StubClient {
        latest: Option<String>,
        patch: Option<String>,
        content: Option<String>,
        expect_base: Option<String>,
    }

    #[async_trait]
    impl RepoClient for StubClient {
        async fn latest_release_tag(
            &self,
            _owner: &str,
            _repo: &str,
        ) -> anyhow::Result<Option<String>> {
            Ok(self.latest.clone())
        }

        async fn compare_file_patch(
            &self,
            _owner: &str,
            _repo: &str,
            base: &str,
            _head: &str,
            _path: &str,
        ) -> anyhow::Result<Option<String>> {
            if let Some(expected) = &self.expect_base {
                assert_eq!(base, expected);
            }
            Ok(self.patch.clone())
        }

        async fn file_content(
            &self,
            _owner: &str,
            _repo: &str,
            _path: &str,
            _reference: &str,
        ) -> anyhow::Result<Option<String>> {
            Ok(self.content.clone())
        }
    }

    fn request(base_ref: &str) -> CompareRequest {
        CompareRequest {
            slug: RepoSlug {
                owner: "acme".to_string(),
                name: "widgets".to_string(),
            },
            base_ref: base_ref.to_string(),
            head_ref: "main".to_string(),
            file_path: ".env.example".to_string(),
        }
    }

    #[tokio::test]
    async fn test_latest_sentinel_resolves_release_tag() {
        let client = StubClient {
            latest: Some("v1.2.3".to_string()),
            patch: Some("@@ -1 +1 @@\n+ NEW_VAR=value\n".to_string()),
            content: None,
            expect_base: Some("v1.2.3".to_string()),
        };

        let changes = compare(&client, &request(LATEST_RELEASE)).await.unwrap();
        assert_eq!(changes.added.len(), 1);
        assert_eq!(changes.added[0].key, "NEW_VAR");
    }

    #[tokio::test]
    async fn test_no_release_falls_back_to_whole_file() {
        let client = StubClient {
            latest: None,
            patch: None,
            content: Some("FIRST_VAR=1\nSECOND_VAR=2\n".to_string()),
            expect_base: None,
        };

        let changes = compare(&client, &request(LATEST_RELEASE)).await.unwrap();
        let keys: Vec<&str> = changes.added.iter().map(|e| e.key.as_str()).collect();
        assert_eq!(keys, vec!["FIRST_VAR", "SECOND_VAR"]);
        assert!(changes.removed.is_empty());
        assert!(changes.modified.is_empty());
    }

    #[tokio::test]
    async fn test_no_release_and_missing_file_is_an_error() {
        let client = StubClient {
            latest: None,
            patch: None,
            content: None,
            expect_base: None,
        };

        let err = compare(&client, &request(LATEST_RELEASE))
            .await
            .unwrap_err();
        assert!(err.to_string().contains(".env.example"));
    }

    #[tokio::test]
    async fn test_explicit_base_skips_release_lookup() {
        let client = StubClient {
            latest: Some("v9.9.9".to_string()),
            patch: Some("@@ -1 +0,0 @@\n- OLD_VAR=gone\n".to_string()),
            content: None,
            expect_base: Some("v1.0.0".to_string()),
        };

        let changes = compare(&client, &request("v1.0.0")).await.unwrap();
        assert_eq!(changes.removed.len(), 1);
        assert_eq!(changes.removed[0].key, "OLD_VAR");
    }

    #[tokio::test]
    async fn test_untouched_file_reports_no_changes() {
        let client = StubClient {
            latest: None,
            patch: None,
            content: None,
            expect_base: Some("v1.0.0".to_string()),
        };

        let changes = compare(&client, &request("v1.0.0")).await.unwrap();
        assert!(!changes.has_changes());
    }
}
