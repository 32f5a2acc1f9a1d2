// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing core types and the store engine.
//!
//! This module contains the entry space data model and the mutation/query
//! engine shared by every controller variant. It is independent of any
//! transport concerns.

pub mod entry;
pub mod errors;
pub mod store;

// Re-export commonly used types
pub use entry::Entry;
pub use errors::{ControllerError, Result};
pub use store::{ConfigStore, CONTROLLER_PORT_KEY};
