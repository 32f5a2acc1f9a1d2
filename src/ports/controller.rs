// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration controller trait definition.
//!
//! This module defines the `ConfigController` trait, the single operation
//! contract implemented by every controller variant. The local controller
//! executes operations against its own store; the remote controller proxies
//! the identical operations over HTTP. Both paths converge on the same store
//! semantics, and that equivalence is the contract this trait exists to
//! preserve.

use crate::domain::Result;

/// The operation contract shared by local and remote controllers.
///
/// All operations are total: no operation fails with an error for a missing
/// key. Absence is expressed through `None` or an empty dump. Mutating
/// operations return nothing; on the remote side a transport failure is
/// logged and otherwise invisible to the caller.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; a controller is routinely shared
/// between concurrently running test workers.
///
/// # Examples
///
/// ```rust,no_run
/// use confctl::adapters::LocalController;
/// use confctl::ports::ConfigController;
///
/// # fn main() -> confctl::domain::Result<()> {
/// let controller = LocalController::new()?;
/// controller.set("DB_HOST", "localhost");
/// assert_eq!(controller.get("DB_HOST").as_deref(), Some("localhost"));
/// controller.close()?;
/// # Ok(())
/// # }
/// ```
pub trait ConfigController: Send + Sync {
    /// Returns the address the controller is reachable at.
    ///
    /// The address is stable for the controller's lifetime.
    fn endpoint(&self) -> String;

    /// Unconditionally overwrites the scalar at `key`.
    fn set(&self, key: &str, value: &str);

    /// Overwrites `key` within the namespace at `prefix`, creating the
    /// namespace if it is absent or currently holds a scalar.
    fn set_for(&self, prefix: &str, key: &str, value: &str);

    /// Sets the scalar at `key`, or appends `delim + value` to an existing
    /// scalar. A first write stores the value bare.
    fn add(&self, key: &str, value: &str, delim: &str);

    /// Sets or appends `key` within the namespace at `prefix`, with the same
    /// append rule as [`ConfigController::add`].
    fn add_for(&self, prefix: &str, key: &str, value: &str, delim: &str);

    /// Returns the scalar at `key`, or `None` if the key is absent or holds
    /// a namespace.
    fn get(&self, key: &str) -> Option<String>;

    /// Returns the value of `key` within the namespace at `prefix`, or
    /// `None` if `prefix` is not a namespace or `key` is absent within it.
    fn get_for(&self, prefix: &str, key: &str) -> Option<String>;

    /// Serializes top-level scalar entries as `key=value` strings.
    ///
    /// With an empty filter every scalar entry is returned in unspecified
    /// order; with a filter, only the named keys, in filter order.
    fn dump_env(&self, filter: &[&str]) -> Vec<String>;

    /// Serializes the namespace at `prefix` as `key=value` strings, with the
    /// same filtering rule as [`ConfigController::dump_env`].
    fn dump_env_for(&self, prefix: &str, filter: &[&str]) -> Vec<String>;

    /// Releases the controller's resources.
    ///
    /// For the local controller this stops accepting new requests, lets
    /// in-flight requests complete, and releases the listening socket; it is
    /// safe to call on an already-closed controller. Variants owning no
    /// resources implement this as a no-op.
    fn close(&self) -> Result<()>;
}
