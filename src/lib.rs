// SPDX-License-Identifier: MIT OR Apache-2.0

//! A shared configuration controller for test environments.
//!
//! This crate provides a network-accessible key/value store used to
//! coordinate settings between processes in a test/integration environment:
//! one process owns the in-memory store and exposes it over HTTP, while
//! other processes read and write the same store through a client that
//! mirrors the exact same contract.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: The entry space data model and store engine
//!   (`Entry`, `ConfigStore`, errors)
//! - **Ports**: The `ConfigController` trait shared by every variant
//! - **Adapters**: `LocalController` (store + HTTP server),
//!   `RemoteController` (HTTP client), `DisabledController` (explicit no-op)
//!
//! # Contract
//!
//! Both controller variants implement the identical operation surface:
//! scalar and namespaced writes (`set`, `set_for`), delimiter appends
//! (`add`, `add_for`), lookups (`get`, `get_for`), and `key=value` dumps.
//! All operations are total; absence is `None` or an empty dump, never an
//! error. On the remote side, transport failures are logged and collapse
//! into the same zero-value results.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use confctl::prelude::*;
//!
//! # fn main() -> confctl::domain::Result<()> {
//! // Process A owns the store and serves it.
//! let local = LocalController::new()?;
//! local.set("DB_HOST", "localhost");
//!
//! // Process B reaches the same store over HTTP.
//! let remote = RemoteController::new(local.endpoint())?;
//! assert_eq!(remote.get("DB_HOST").as_deref(), Some("localhost"));
//!
//! local.close()?;
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for
/// convenient access.
pub mod prelude {
    pub use crate::adapters::{DisabledController, LocalController, RemoteController};
    pub use crate::domain::{ConfigStore, ControllerError, Entry, Result, CONTROLLER_PORT_KEY};
    pub use crate::ports::ConfigController;
}
