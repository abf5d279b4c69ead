//! GitHub API data transfer objects
//!
//! Deserialization targets for the raw REST routes this crate calls.
//! They carry only the fields the client actually reads.

use serde::{Deserialize, Serialize};

/// A release from the GitHub API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Release {
    /// Tag the release points at (e.g. "v1.2.0")
    pub tag_name: String,
}

/// Result of comparing two references
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comparison {
    /// Files that differ between the references
    #[serde(default)]
    pub files: Vec<ComparedFile>,
}

/// A single changed file within a comparison
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparedFile {
    /// Path relative to the repository root
    pub filename: String,

    /// Unified-diff patch; absent for binary or oversized files
    #[serde(default)]
    pub patch: Option<String>,
}

/// A file body from the contents API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileContent {
    /// Encoded file body (base64 with embedded newlines for most files)
    pub content: String,

    /// Encoding of `content` as reported by the API
    pub encoding: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comparison_deserializes_compare_response() {
        let json = r#"{
            "status": "ahead",
            "ahead_by": 3,
            "files": [
                {
                    "filename": ".env.example",
                    "status": "modified",
                    "additions": 1,
                    "deletions": 1,
                    "patch": "@@ -1 +1 @@\n-A=1\n+A=2"
                },
                {
                    "filename": "logo.png",
                    "status": "modified"
                }
            ]
        }"#;

        let comparison: Comparison = serde_json::from_str(json).unwrap();
        assert_eq!(comparison.files.len(), 2);
        assert_eq!(comparison.files[0].filename, ".env.example");
        assert!(comparison.files[0].patch.is_some());
        // Binary files come back without a patch field
        assert!(comparison.files[1].patch.is_none());
    }

    #[test]
    fn test_comparison_tolerates_missing_files_field() {
        let comparison: Comparison = serde_json::from_str(r#"{"status": "identical"}"#).unwrap();
        assert!(comparison.files.is_empty());
    }

    #[test]
    fn test_file_content_deserializes_contents_response() {
        let json = r#"{
            "name": ".env.example",
            "path": ".env.example",
            "content": "Rk9PPWJhcgo=\n",
            "encoding": "base64"
        }"#;

        let file: FileContent = serde_json::from_str(json).unwrap();
        assert_eq!(file.encoding, "base64");
        assert_eq!(file.content, "Rk9PPWJhcgo=\n");
    }
}
