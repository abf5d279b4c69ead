//! Comparison run configuration

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Sentinel base reference meaning "most recent release tag"
pub const LATEST_RELEASE: &str = "latest";

/// Default head reference when none is given
pub const DEFAULT_HEAD_REF: &str = "master";

/// Default file to compare when none is given
pub const DEFAULT_FILE_PATH: &str = ".env.example";

/// Everything one comparison run needs to know
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompareRequest {
    /// Repository to inspect
    pub slug: RepoSlug,

    /// Baseline reference; [`LATEST_RELEASE`] means "resolve the most
    /// recent release tag first"
    pub base_ref: String,

    /// Head reference
    pub head_ref: String,

    /// File to compare, relative to the repository root
    pub file_path: String,
}

/// A repository identified as `owner/name`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoSlug {
    pub owner: String,
    pub name: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid repository '{0}', expected owner/name or a GitHub URL")]
pub struct SlugError(String);

impl FromStr for RepoSlug {
    type Err = SlugError;

    /// Accepts `owner/name` or a full `https://github.com/owner/name` URL
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let slug = input
            .trim()
            .trim_start_matches("https://github.com/")
            .trim_end_matches('/');

        match slug.split_once('/') {
            Some((owner, name)) if !owner.is_empty() && !name.is_empty() && !name.contains('/') => {
                Ok(Self {
                    owner: owner.to_string(),
                    name: name.to_string(),
                })
            }
            _ => Err(SlugError(input.to_string())),
        }
    }
}

impl fmt::Display for RepoSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}
