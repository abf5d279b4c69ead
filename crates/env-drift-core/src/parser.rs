//! Line-oriented parsing of unified diffs and whole env files
//!
//! The diff parser classifies each line by its prefix (`+` added, `-`
//! removed), builds one ordered map per side, and hands both maps to the
//! reconciler. Malformed lines are skipped silently; only empty input is
//! an error, and only through the strict entry points.

use crate::reconcile::reconcile;
use crate::types::{ChangeSet, EnvMap};
use thiserror::Error;

/// Structural diff lines that never carry variable data
const DIFF_HEADERS: [&str; 5] = ["@@", "diff", "index", "---", "+++"];

const ADDED_PREFIX: char = '+';
const REMOVED_PREFIX: char = '-';

/// Errors that can occur during diff parsing
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty diff content provided")]
    EmptyInput,
}

/// Parse a unified diff of an env file into a classified [`ChangeSet`].
///
/// Strict variant: empty input is rejected with [`ParseError::EmptyInput`].
/// Use [`parse_changes_lenient`] to treat empty input as "no changes".
///
/// # Arguments
///
/// * `diff_text` - Unified diff text as returned by the compare API. May
///   contain literal `\n` escape sequences, which are normalized first.
pub fn parse_changes(diff_text: &str) -> Result<ChangeSet, ParseError> {
    if diff_text.is_empty() {
        return Err(ParseError::EmptyInput);
    }
    Ok(parse_changes_lenient(diff_text))
}

/// Lenient variant of [`parse_changes`]: empty input yields an empty set.
pub fn parse_changes_lenient(diff_text: &str) -> ChangeSet {
    let text = normalize_newlines(diff_text);
    let mut added = EnvMap::new();
    let mut removed = EnvMap::new();

    for line in text.lines() {
        if is_structural(line) || is_comment(line) {
            continue;
        }

        if let Some(rest) = line.strip_prefix(ADDED_PREFIX) {
            if let Some((key, value)) = split_assignment(rest) {
                added.insert(key, value);
            }
        } else if let Some(rest) = line.strip_prefix(REMOVED_PREFIX) {
            if let Some((key, value)) = split_assignment(rest) {
                removed.insert(key, value);
            }
        }
        // Context and unprefixed lines carry no classification
    }

    reconcile(&added, &removed)
}

/// Parse a whole file body as if every variable in it were newly added.
///
/// Used when the file exists at the head reference but there is no
/// baseline to diff against (e.g. no release has been tagged yet). The
/// result only ever has `added` entries.
///
/// Strict variant: empty input is rejected with [`ParseError::EmptyInput`].
pub fn parse_all_new_env(file_text: &str) -> Result<ChangeSet, ParseError> {
    if file_text.is_empty() {
        return Err(ParseError::EmptyInput);
    }
    Ok(parse_all_new_env_lenient(file_text))
}

/// Lenient variant of [`parse_all_new_env`]: empty input yields an empty set.
pub fn parse_all_new_env_lenient(file_text: &str) -> ChangeSet {
    let text = normalize_newlines(file_text);
    let mut added = EnvMap::new();

    for line in text.lines() {
        if is_structural(line) || is_comment(line) {
            continue;
        }
        // Plain file listings have no diff prefixes; lines are taken as-is
        if let Some((key, value)) = split_assignment(line) {
            added.insert(key, value);
        }
    }

    reconcile(&added, &EnvMap::new())
}

/// Turn literal `\n` escape sequences into real newlines
fn normalize_newlines(text: &str) -> String {
    text.replace("\\n", "\n")
}

fn is_structural(line: &str) -> bool {
    DIFF_HEADERS.iter().any(|header| line.starts_with(header))
}

fn is_comment(line: &str) -> bool {
    line.trim_start().starts_with('#')
}

/// Split `KEY=VALUE` on the first `=`, trimming both sides.
///
/// Further `=` characters stay in the value. Lines without `=`, or empty
/// after trimming, yield nothing.
fn split_assignment(text: &str) -> Option<(String, String)> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    let (key, value) = text.split_once('=')?;
    Some((key.trim().to_string(), value.trim().to_string()))
}
