// SPDX-License-Identifier: MIT OR Apache-2.0

//! Shared helpers for integration tests.

use std::sync::OnceLock;

/// Guard ensuring the subscriber is installed at most once per test binary.
static TRACING: OnceLock<()> = OnceLock::new();

/// Installs a test-friendly tracing subscriber.
///
/// Safe to call from every test; only the first call has an effect.
#[allow(dead_code)]
pub fn init_tracing() {
    TRACING.get_or_init(|| {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    });
}
