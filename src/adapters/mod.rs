// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing the controller implementations.
//!
//! This module contains concrete implementations of the controller trait
//! defined in the ports layer: the local variant owning the store and the
//! HTTP server, the remote variant proxying operations over HTTP, and the
//! disabled variant standing in where no controller is configured. The HTTP
//! route table shared by the local side lives here as well.

pub mod disabled;
pub mod local;
pub mod remote;

mod routes;

pub use disabled::DisabledController;
pub use local::LocalController;
pub use remote::RemoteController;
