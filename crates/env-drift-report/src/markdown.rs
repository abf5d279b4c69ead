//! Markdown report generation

use env_drift_core::ChangeSet;
use std::fmt::Write;

/// Render a change set as a markdown report.
///
/// # Arguments
///
/// * `header` - Optional text placed at the top of the report
/// * `empty_if_no_changes` - When true, a change-free set renders as a
///   zero-length string instead of the "No changes detected." message,
///   for callers that skip output entirely when there is nothing to show
pub fn render_markdown(changes: &ChangeSet, header: Option<&str>, empty_if_no_changes: bool) -> String {
    if !changes.has_changes() && empty_if_no_changes {
        return String::new();
    }

    let mut markdown = String::new();

    if let Some(header) = header.filter(|h| !h.is_empty()) {
        markdown.push_str(header);
        markdown.push_str("\n\n");
    }

    if !changes.has_changes() {
        markdown.push_str("No changes detected.\n\n");
        return markdown;
    }

    if !changes.added.is_empty() {
        markdown.push_str("**New Environment Variables**\n\n");
        for entry in &changes.added {
            // Keys only; a fresh variable's value may be a secret
            let _ = writeln!(markdown, "- `{}`", entry.key);
        }
        markdown.push('\n');
    }

    if !changes.removed.is_empty() {
        markdown.push_str("**Removed Environment Variables**\n\n");
        for entry in &changes.removed {
            let _ = writeln!(markdown, "- ~~`{}`~~", entry.key);
        }
        markdown.push('\n');
    }

    if !changes.modified.is_empty() {
        markdown.push_str("**Modified Environment Variables**\n\n");
        for entry in &changes.modified {
            let _ = writeln!(markdown, "- **`{}`**:", entry.key);
            markdown.push_str("  ```diff\n");
            let _ = writeln!(markdown, "  - {}", entry.old_value);
            let _ = writeln!(markdown, "  + {}", entry.new_value);
            markdown.push_str("  ```\n");
        }
        markdown.push('\n');
    }

    markdown
}
