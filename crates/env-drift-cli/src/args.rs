//! Command line arguments

use clap::Parser;
use env_drift_config::{
    CompareRequest, RepoSlug, DEFAULT_FILE_PATH, DEFAULT_HEAD_REF, LATEST_RELEASE,
};

/// Detect environment variable changes between two references of a GitHub
/// repository
#[derive(Debug, Parser)]
#[command(name = "env-drift", version, about)]
pub struct Args {
    /// Repository to inspect, as `owner/name` or a GitHub URL
    pub repository: String,

    /// Baseline reference; `latest` resolves the most recent release tag
    #[arg(long, default_value = LATEST_RELEASE)]
    pub base_ref: String,

    /// Head reference
    #[arg(long, default_value = DEFAULT_HEAD_REF)]
    pub head_ref: String,

    /// File to compare, relative to the repository root
    #[arg(long = "file", default_value = DEFAULT_FILE_PATH)]
    pub file_path: String,

    /// Markdown header placed at the top of the report
    #[arg(long)]
    pub header: Option<String>,

    /// Print nothing at all when there are no changes
    #[arg(long)]
    pub quiet_when_clean: bool,
}

impl Args {
    pub fn to_request(&self) -> anyhow::Result<CompareRequest> {
        let slug: RepoSlug = self.repository.parse()?;
        Ok(CompareRequest {
            slug,
            base_ref: self.base_ref.clone(),
            head_ref: self.head_ref.clone(),
            file_path: self.file_path.clone(),
        })
    }
}
