//! GitHub token resolution
//!
//! Tries multiple sources in order:
//! 1. `GITHUB_TOKEN` environment variable
//! 2. `GH_TOKEN` environment variable
//! 3. `gh auth token` command

use anyhow::Context;
use log::debug;

/// Resolve a GitHub API token
pub async fn resolve_token() -> anyhow::Result<String> {
    for var in ["GITHUB_TOKEN", "GH_TOKEN"] {
        if let Ok(token) = std::env::var(var) {
            if !token.trim().is_empty() {
                debug!("Using token from {}", var);
                return Ok(token.trim().to_string());
            }
        }
    }

    debug!("Trying gh auth token");
    let output = tokio::process::Command::new("gh")
        .args(["auth", "token"])
        .output()
        .await
        .context("failed to run 'gh auth token'")?;

    if output.status.success() {
        let token = String::from_utf8(output.stdout)
            .context("invalid UTF-8 in gh auth token output")?
            .trim()
            .to_string();
        if !token.is_empty() {
            debug!("Using token from gh CLI");
            return Ok(token);
        }
    }

    Err(anyhow::anyhow!(
        "no GitHub token found; set GITHUB_TOKEN or run 'gh auth login'"
    ))
}
