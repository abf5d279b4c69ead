//! GitHub Actions input layer
//!
//! When running as a workflow step, inputs arrive as `INPUT_*` environment
//! variables and the workflow context fills the gaps: `GITHUB_REPOSITORY`
//! for the repository and `GITHUB_REF` for the head reference.

use crate::request::{CompareRequest, RepoSlug, DEFAULT_FILE_PATH, DEFAULT_HEAD_REF, LATEST_RELEASE};
use anyhow::Context;

/// True when running inside a GitHub Actions workflow
pub fn is_github_actions() -> bool {
    std::env::var_os("GITHUB_ACTIONS").is_some()
}

/// The `github-token` action input, if set
pub fn token_input() -> Option<String> {
    input(&env_var, "github-token")
}

/// Build a [`CompareRequest`] from the Actions environment
pub fn request_from_actions() -> anyhow::Result<CompareRequest> {
    request_from_vars(env_var)
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// Read an action input: `INPUT_<NAME>` uppercased, dashes kept
fn input(get: &impl Fn(&str) -> Option<String>, name: &str) -> Option<String> {
    get(&format!("INPUT_{}", name.to_uppercase()))
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// `refs/heads/main` -> `main`; other refs pass through unchanged
fn branch_from_ref(github_ref: &str) -> String {
    github_ref
        .strip_prefix("refs/heads/")
        .unwrap_or(github_ref)
        .to_string()
}

fn request_from_vars(get: impl Fn(&str) -> Option<String>) -> anyhow::Result<CompareRequest> {
    let repository = input(&get, "repository")
        .or_else(|| get("GITHUB_REPOSITORY"))
        .context("no repository given; set the 'repository' input or GITHUB_REPOSITORY")?;
    let slug: RepoSlug = repository.parse()?;

    let base_ref = input(&get, "base-ref").unwrap_or_else(|| LATEST_RELEASE.to_string());

    let head_ref = input(&get, "head-ref")
        .or_else(|| get("GITHUB_REF").map(|r| branch_from_ref(&r)))
        .unwrap_or_else(|| DEFAULT_HEAD_REF.to_string());

    let file_path = input(&get, "env-file-path").unwrap_or_else(|| DEFAULT_FILE_PATH.to_string());

    Ok(CompareRequest {
        slug,
        base_ref,
        head_ref,
        file_path,
    })
}
