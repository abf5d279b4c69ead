//! Data model for environment variable changes
//!
//! These types are the shared result model consumed by rendering and
//! reported by the entry point. They are intentionally plain data so the
//! crate stays pure and reusable.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single `KEY=VALUE` entry extracted from a diff or file line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KVEntry {
    /// Variable name (text before the first `=`, trimmed)
    pub key: String,

    /// Variable value (text after the first `=`, trimmed)
    pub value: String,
}

/// A variable whose value differs between the two references
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModifiedEntry {
    /// Variable name
    pub key: String,

    /// Value at the baseline reference
    pub old_value: String,

    /// Value at the head reference
    pub new_value: String,
}

/// Classified environment variable changes between two file versions
///
/// A key appears in at most one of the three sequences; a key that was
/// both added and removed is resolved into `modified` (values differ) or
/// dropped entirely (values identical) during reconciliation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeSet {
    /// Variables present only at the head reference
    pub added: Vec<KVEntry>,

    /// Variables present only at the baseline reference
    pub removed: Vec<KVEntry>,

    /// Variables present at both references with different values
    pub modified: Vec<ModifiedEntry>,
}

impl ChangeSet {
    /// True iff any of the three sequences is non-empty
    pub fn has_changes(&self) -> bool {
        !self.added.is_empty() || !self.removed.is_empty() || !self.modified.is_empty()
    }
}

/// Ordered key -> value mapping built while scanning diff lines
///
/// Lookups go through a `HashMap`; iteration follows the order in which
/// keys were first inserted. Re-inserting an existing key overwrites its
/// value in place without disturbing that order (last write wins).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvMap {
    lookup: HashMap<String, String>,
    order: Vec<String>,
}

impl EnvMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a key, keeping first-occurrence order
    pub fn insert(&mut self, key: String, value: String) {
        if !self.lookup.contains_key(&key) {
            self.order.push(key.clone());
        }
        self.lookup.insert(key, value);
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.lookup.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.lookup.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterate entries in first-occurrence order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.order.iter().map(|key| {
            let value = self
                .lookup
                .get(key)
                .expect("ordered key missing from lookup");
            (key.as_str(), value.as_str())
        })
    }
}
