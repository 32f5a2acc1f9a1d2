// SPDX-License-Identifier: MIT OR Apache-2.0

//! The in-memory entry space and its mutation/query engine.
//!
//! This module provides [`ConfigStore`], the owned, encapsulated key/value
//! store behind every local controller. All concurrency control lives here:
//! reads take a shared lock, and every mutation (including the
//! read-modify-write in `add`/`add_for`) runs under a single exclusive
//! critical section so concurrent appends serialize instead of interleaving.

use crate::domain::entry::Entry;
use std::collections::HashMap;
use std::sync::RwLock;

/// Reserved key seeded at construction with the port the owning controller's
/// endpoint is bound to, enabling self-discovery by spawned processes.
pub const CONTROLLER_PORT_KEY: &str = "CONFIG_CONTROLLER_PORT";

/// The in-memory entry space owned by a local controller.
///
/// The store maps top-level string keys to [`Entry`] values and implements
/// the full mutation/query contract shared by the local and remote
/// controllers. All operations are total: a missing key or a shape mismatch
/// is reported through `None` or an empty dump, never as an error.
///
/// Keys are never deleted; the store only grows or mutates values for the
/// lifetime of the owning controller.
///
/// # Examples
///
/// ```
/// use confctl::domain::store::ConfigStore;
///
/// let store = ConfigStore::new();
/// store.set("DB_HOST", "localhost");
/// store.add("FLAGS", "verbose", ",");
/// store.add("FLAGS", "trace", ",");
///
/// assert_eq!(store.get("DB_HOST").as_deref(), Some("localhost"));
/// assert_eq!(store.get("FLAGS").as_deref(), Some("verbose,trace"));
/// assert_eq!(store.get("MISSING"), None);
/// ```
#[derive(Debug, Default)]
pub struct ConfigStore {
    /// Top-level entries, guarded by the store's single lock
    entries: RwLock<HashMap<String, Entry>>,
}

impl ConfigStore {
    /// Creates a new, empty store.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Unconditionally overwrites the scalar at `key`.
    ///
    /// Any previous contents of the slot, including a namespace, are
    /// replaced.
    pub fn set(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.write() {
            entries.insert(key.to_string(), Entry::Scalar(value.to_string()));
        }
    }

    /// Overwrites `key` within the namespace at `prefix`.
    ///
    /// Ensures `prefix` names a namespace first: if the slot is absent or
    /// currently holds a scalar, a fresh namespace replaces it. The
    /// namespace resolution and the write happen under the same exclusive
    /// section, so the namespace cannot be reassigned in between.
    pub fn set_for(&self, prefix: &str, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.write() {
            match entries.get_mut(prefix) {
                Some(Entry::Namespace(ns)) => {
                    ns.insert(key.to_string(), value.to_string());
                }
                _ => {
                    let mut ns = HashMap::new();
                    ns.insert(key.to_string(), value.to_string());
                    entries.insert(prefix.to_string(), Entry::Namespace(ns));
                }
            }
        }
    }

    /// Sets the scalar at `key`, or appends to it through `delim`.
    ///
    /// If `key` currently holds a scalar `v`, the slot becomes
    /// `v + delim + value`. A first write stores `value` bare, with no
    /// leading delimiter. The read of the current value and the write of the
    /// appended result share one exclusive section, so concurrent `add`
    /// calls on the same key serialize without lost updates.
    pub fn add(&self, key: &str, value: &str, delim: &str) {
        if let Ok(mut entries) = self.entries.write() {
            let next = match entries.get(key).and_then(Entry::as_scalar) {
                Some(current) => format!("{current}{delim}{value}"),
                None => value.to_string(),
            };
            entries.insert(key.to_string(), Entry::Scalar(next));
        }
    }

    /// Sets or appends `key` within the namespace at `prefix`.
    ///
    /// Same append rule as [`ConfigStore::add`], scoped to the namespace.
    /// A missing or scalar-shaped `prefix` slot is replaced by a fresh
    /// namespace holding the bare value.
    pub fn add_for(&self, prefix: &str, key: &str, value: &str, delim: &str) {
        if let Ok(mut entries) = self.entries.write() {
            match entries.get_mut(prefix) {
                Some(Entry::Namespace(ns)) => {
                    let next = match ns.get(key) {
                        Some(current) => format!("{current}{delim}{value}"),
                        None => value.to_string(),
                    };
                    ns.insert(key.to_string(), next);
                }
                _ => {
                    let mut ns = HashMap::new();
                    ns.insert(key.to_string(), value.to_string());
                    entries.insert(prefix.to_string(), Entry::Namespace(ns));
                }
            }
        }
    }

    /// Returns the scalar at `key`.
    ///
    /// Returns `None` if the key is absent or the slot holds a namespace.
    pub fn get(&self, key: &str) -> Option<String> {
        let entries = self.entries.read().ok()?;
        entries.get(key).and_then(Entry::as_scalar).map(String::from)
    }

    /// Returns the value of `key` within the namespace at `prefix`.
    ///
    /// Returns `None` if `prefix` does not name a namespace or `key` is
    /// absent within it.
    pub fn get_for(&self, prefix: &str, key: &str) -> Option<String> {
        let entries = self.entries.read().ok()?;
        entries
            .get(prefix)
            .and_then(Entry::as_namespace)
            .and_then(|ns| ns.get(key))
            .cloned()
    }

    /// Serializes top-level scalar entries as `key=value` strings.
    ///
    /// With an empty filter, every scalar entry is returned in unspecified
    /// order; namespace entries are skipped, since they do not serialize as
    /// `key=value`. With a filter, only the named keys that resolve to
    /// scalars are returned, in the order given by the filter.
    pub fn dump_env(&self, filter: &[&str]) -> Vec<String> {
        let Ok(entries) = self.entries.read() else {
            return Vec::new();
        };

        if filter.is_empty() {
            entries
                .iter()
                .filter_map(|(key, entry)| entry.as_scalar().map(|v| format!("{key}={v}")))
                .collect()
        } else {
            filter
                .iter()
                .filter_map(|key| {
                    entries
                        .get(*key)
                        .and_then(Entry::as_scalar)
                        .map(|v| format!("{key}={v}"))
                })
                .collect()
        }
    }

    /// Serializes the namespace at `prefix` as `key=value` strings.
    ///
    /// Same filtering rule as [`ConfigStore::dump_env`], applied to the
    /// namespace. Returns an empty dump if `prefix` is not a populated
    /// namespace.
    pub fn dump_env_for(&self, prefix: &str, filter: &[&str]) -> Vec<String> {
        let Ok(entries) = self.entries.read() else {
            return Vec::new();
        };

        let Some(ns) = entries.get(prefix).and_then(Entry::as_namespace) else {
            return Vec::new();
        };

        if filter.is_empty() {
            ns.iter().map(|(key, v)| format!("{key}={v}")).collect()
        } else {
            filter
                .iter()
                .filter_map(|key| ns.get(*key).map(|v| format!("{key}={v}")))
                .collect()
        }
    }
}
