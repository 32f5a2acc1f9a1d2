// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing the controller trait.
//!
//! This module defines the interface every controller variant implements.
//! Concrete implementations live in the adapters layer.

pub mod controller;

pub use controller::ConfigController;
