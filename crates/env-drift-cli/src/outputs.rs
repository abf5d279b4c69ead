//! GitHub Actions step outputs
//!
//! Workflow steps publish outputs by appending `name=value` lines to the
//! file `$GITHUB_OUTPUT` points at; multiline values use the heredoc form
//! with a delimiter that must not occur in the value itself.

use anyhow::Context;
use std::fmt::Write as _;
use std::io::Write as _;

const CHANGELOG_DELIMITER: &str = "ENV_DRIFT_CHANGELOG";

/// Append `has-changes` and `changelog` outputs for the current step
pub fn write_step_outputs(has_changes: bool, changelog: &str) -> anyhow::Result<()> {
    let path = std::env::var("GITHUB_OUTPUT")
        .context("GITHUB_OUTPUT is not set; are we running outside a workflow?")?;

    let mut file = std::fs::OpenOptions::new()
        .append(true)
        .create(true)
        .open(&path)
        .with_context(|| format!("failed to open {}", path))?;

    file.write_all(format_step_outputs(has_changes, changelog).as_bytes())
        .with_context(|| format!("failed to write {}", path))
}

fn format_step_outputs(has_changes: bool, changelog: &str) -> String {
    let mut block = String::new();
    let _ = writeln!(block, "has-changes={}", has_changes);
    let _ = writeln!(block, "changelog<<{}", CHANGELOG_DELIMITER);
    block.push_str(changelog);
    if !changelog.is_empty() && !changelog.ends_with('\n') {
        block.push('\n');
    }
    let _ = writeln!(block, "{}", CHANGELOG_DELIMITER);
    block
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_multiline_changelog() {
        let block = format_step_outputs(true, "**New Environment Variables**\n\n- `A`\n");
        assert_eq!(
            block,
            "has-changes=true\n\
             changelog<<ENV_DRIFT_CHANGELOG\n\
             **New Environment Variables**\n\n\
             - `A`\n\
             ENV_DRIFT_CHANGELOG\n"
        );
    }

    #[test]
    fn test_format_empty_changelog() {
        let block = format_step_outputs(false, "");
        assert_eq!(
            block,
            "has-changes=false\n\
             changelog<<ENV_DRIFT_CHANGELOG\n\
             ENV_DRIFT_CHANGELOG\n"
        );
    }

    #[test]
    fn test_write_appends_to_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("github_output");
        std::fs::write(&path, "earlier=1\n").unwrap();

        // GITHUB_OUTPUT is process-global; restore it after the write
        let previous = std::env::var_os("GITHUB_OUTPUT");
        std::env::set_var("GITHUB_OUTPUT", &path);
        let result = write_step_outputs(true, "- `A`\n");
        match previous {
            Some(value) => std::env::set_var("GITHUB_OUTPUT", value),
            None => std::env::remove_var("GITHUB_OUTPUT"),
        }
        result.unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("earlier=1\n"));
        assert!(written.contains("has-changes=true"));
        assert!(written.contains("- `A`"));
    }
}
