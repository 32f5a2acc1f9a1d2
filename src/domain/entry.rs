// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tagged entry variant for top-level store slots.
//!
//! A top-level slot holds either a plain string or a nested mapping, never
//! both. This module makes that shape explicit: every key holds exactly one
//! [`Entry`] variant at a time, and operations of the wrong shape see the
//! slot as absent rather than inspecting a dynamic type.

use std::collections::HashMap;

/// The value held under a single top-level store key.
///
/// A key holds exactly one shape at any time. The shape is determined by
/// which operation last wrote to it: `set`/`add` force a [`Entry::Scalar`],
/// `set_for`/`add_for` force a [`Entry::Namespace`]. There is no automatic
/// migration between shapes; a write of the other shape replaces the slot
/// wholesale.
///
/// # Examples
///
/// ```
/// use confctl::domain::entry::Entry;
///
/// let entry = Entry::Scalar("8080".to_string());
/// assert_eq!(entry.as_scalar(), Some("8080"));
/// assert!(entry.as_namespace().is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Entry {
    /// A single opaque string value.
    Scalar(String),
    /// A sub-mapping of string keys to scalar string values, addressed
    /// through a `(prefix, key)` pair.
    Namespace(HashMap<String, String>),
}

impl Entry {
    /// Returns the scalar value, or `None` if this entry is a namespace.
    pub fn as_scalar(&self) -> Option<&str> {
        match self {
            Entry::Scalar(value) => Some(value),
            Entry::Namespace(_) => None,
        }
    }

    /// Returns the namespace mapping, or `None` if this entry is a scalar.
    pub fn as_namespace(&self) -> Option<&HashMap<String, String>> {
        match self {
            Entry::Scalar(_) => None,
            Entry::Namespace(map) => Some(map),
        }
    }
}

impl From<&str> for Entry {
    fn from(value: &str) -> Self {
        Entry::Scalar(value.to_string())
    }
}

impl From<String> for Entry {
    fn from(value: String) -> Self {
        Entry::Scalar(value)
    }
}
