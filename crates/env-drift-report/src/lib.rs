//! Markdown rendering of a [`ChangeSet`](env_drift_core::ChangeSet)
//!
//! Produces the change report posted to PR descriptions and release notes.
//! New variables are listed by key only (values of fresh secrets are not
//! echoed); removed keys are struck through; modified variables get a
//! `diff` fence showing the old and new value.

mod markdown;

pub use markdown::render_markdown;
