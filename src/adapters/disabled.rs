// SPDX-License-Identifier: MIT OR Apache-2.0

//! Disabled controller adapter.
//!
//! Some environments run without a configured controller, and call sites
//! should not have to branch on that. [`DisabledController`] satisfies the
//! full contract with no-op writes and zero-value reads, so such call sites
//! hold a real value instead of an optional handle.

use crate::domain::Result;
use crate::ports::ConfigController;

/// A controller that is intentionally absent.
///
/// Writes are discarded, reads return zero values, and `close` always
/// succeeds. Useful as a stand-in wherever a test environment runs without
/// a configuration controller.
///
/// # Examples
///
/// ```
/// use confctl::adapters::DisabledController;
/// use confctl::ports::ConfigController;
///
/// let controller = DisabledController;
/// controller.set("ignored", "value");
///
/// assert_eq!(controller.get("ignored"), None);
/// assert!(controller.dump_env(&[]).is_empty());
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct DisabledController;

impl ConfigController for DisabledController {
    fn endpoint(&self) -> String {
        String::new()
    }

    fn set(&self, _key: &str, _value: &str) {}

    fn set_for(&self, _prefix: &str, _key: &str, _value: &str) {}

    fn add(&self, _key: &str, _value: &str, _delim: &str) {}

    fn add_for(&self, _prefix: &str, _key: &str, _value: &str, _delim: &str) {}

    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn get_for(&self, _prefix: &str, _key: &str) -> Option<String> {
        None
    }

    fn dump_env(&self, _filter: &[&str]) -> Vec<String> {
        Vec::new()
    }

    fn dump_env_for(&self, _prefix: &str, _filter: &[&str]) -> Vec<String> {
        Vec::new()
    }

    fn close(&self) -> Result<()> {
        Ok(())
    }
}
