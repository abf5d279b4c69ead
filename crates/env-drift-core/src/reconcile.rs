//! Reconciliation of added/removed maps into a classified change set
//!
//! A key present on both sides is either a modification (values differ) or
//! diff noise (identical value deleted and re-inserted, e.g. a reordered
//! line) and is then dropped entirely. Everything else is a plain addition
//! or removal.

use crate::types::{ChangeSet, EnvMap, KVEntry, ModifiedEntry};

/// Classify two ordered key -> value maps into a [`ChangeSet`].
///
/// Runs in O(n+m) using map lookups. Entries are emitted in the order
/// keys were first encountered in their source map; `modified` follows
/// the added map's order.
pub fn reconcile(added: &EnvMap, removed: &EnvMap) -> ChangeSet {
    let mut changes = ChangeSet::default();

    for (key, new_value) in added.iter() {
        match removed.get(key) {
            // Same key, same value: unchanged noise, absorbed
            Some(old_value) if old_value == new_value => {}
            Some(old_value) => changes.modified.push(ModifiedEntry {
                key: key.to_string(),
                old_value: old_value.to_string(),
                new_value: new_value.to_string(),
            }),
            None => changes.added.push(KVEntry {
                key: key.to_string(),
                value: new_value.to_string(),
            }),
        }
    }

    for (key, value) in removed.iter() {
        if !added.contains_key(key) {
            changes.removed.push(KVEntry {
                key: key.to_string(),
                value: value.to_string(),
            });
        }
    }

    changes
}
