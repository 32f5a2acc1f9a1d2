// SPDX-License-Identifier: MIT OR Apache-2.0

//! Remote controller adapter.
//!
//! This module provides the client-side controller variant. Every operation
//! is translated into an HTTP exchange against a local controller's
//! endpoint; the adapter holds no entry-space state of its own.
//!
//! Failure handling is deliberately lossy: a transport failure, non-success
//! status, or undecodable response is logged and collapsed into the
//! operation's zero-value result. A caller cannot distinguish a missing key
//! from an unreachable endpoint; resilience, if needed, is wrapped around
//! these calls externally.

use crate::adapters::routes::API_PREFIX;
use crate::domain::{ControllerError, Result};
use crate::ports::ConfigController;
use reqwest::{Client, Response, StatusCode};
use std::time::Duration;
use tokio::runtime::Runtime;

/// Timeout applied to every remote request.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// The controller variant that proxies operations over HTTP.
///
/// Stateless apart from the endpoint address: reads and writes always hit
/// the remote store, so two remote controllers pointed at the same endpoint
/// observe each other's mutations immediately.
///
/// The adapter owns a private tokio runtime and bridges the synchronous
/// trait surface with `block_on`, mirroring the local side's arrangement.
///
/// # Examples
///
/// ```rust,no_run
/// use confctl::adapters::RemoteController;
/// use confctl::ports::ConfigController;
///
/// # fn main() -> confctl::domain::Result<()> {
/// let controller = RemoteController::new("127.0.0.1:8080")?;
/// controller.set("DB_HOST", "localhost");
///
/// // None means "absent" or "endpoint unreachable"; the two collapse.
/// let host = controller.get("DB_HOST");
/// # Ok(())
/// # }
/// ```
pub struct RemoteController {
    /// Base URL including the API prefix
    endpoint: String,
    /// Shared HTTP client
    client: Client,
    /// Runtime bridging the synchronous trait surface
    runtime: Runtime,
}

impl RemoteController {
    /// Creates a client for the controller reachable at `host`.
    ///
    /// `host` is a `host:port` pair as returned by the local side's
    /// `endpoint()`; a scheme may be supplied and defaults to `http://`.
    ///
    /// # Errors
    ///
    /// Returns [`ControllerError::Transport`] if the HTTP client or its
    /// runtime cannot be constructed. Reachability of the endpoint is not
    /// checked here; an unreachable endpoint surfaces later as logged,
    /// zero-value operations.
    pub fn new(host: impl AsRef<str>) -> Result<Self> {
        let host = host.as_ref();
        let base = if host.starts_with("http://") || host.starts_with("https://") {
            host.to_string()
        } else {
            format!("http://{host}")
        };

        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ControllerError::transport("create HTTP client", e))?;

        let runtime =
            Runtime::new().map_err(|e| ControllerError::transport("create client runtime", e))?;

        Ok(Self {
            endpoint: format!("{base}{API_PREFIX}"),
            client,
            runtime,
        })
    }

    fn expect_ok(response: &Response) -> Result<()> {
        if response.status() == StatusCode::OK {
            Ok(())
        } else {
            Err(ControllerError::Transport {
                message: format!("unexpected status {}", response.status()),
                source: None,
            })
        }
    }

    fn put_ok(&self, url: &str) -> Result<()> {
        self.runtime.block_on(async {
            let response = self
                .client
                .put(url)
                .send()
                .await
                .map_err(|e| ControllerError::transport("send request", e))?;
            Self::expect_ok(&response)
        })
    }

    fn post_ok(&self, url: &str) -> Result<()> {
        self.runtime.block_on(async {
            let response = self
                .client
                .post(url)
                .send()
                .await
                .map_err(|e| ControllerError::transport("send request", e))?;
            Self::expect_ok(&response)
        })
    }

    fn fetch_text(&self, url: &str) -> Result<String> {
        self.runtime.block_on(async {
            let response = self
                .client
                .get(url)
                .send()
                .await
                .map_err(|e| ControllerError::transport("send request", e))?;
            Self::expect_ok(&response)?;
            response
                .text()
                .await
                .map_err(|e| ControllerError::transport("read response body", e))
        })
    }

    fn fetch_dump(&self, url: &str, filter: &[&str]) -> Result<Vec<String>> {
        self.runtime.block_on(async {
            let response = self
                .client
                .get(url)
                .json(&filter)
                .send()
                .await
                .map_err(|e| ControllerError::transport("send request", e))?;
            Self::expect_ok(&response)?;
            response
                .json::<Vec<String>>()
                .await
                .map_err(|e| ControllerError::transport("decode dump response", e))
        })
    }
}

impl ConfigController for RemoteController {
    fn endpoint(&self) -> String {
        self.endpoint.clone()
    }

    fn set(&self, key: &str, value: &str) {
        let url = format!("{}/{key}/{value}", self.endpoint);
        if let Err(err) = self.put_ok(&url) {
            tracing::warn!(%url, error = %err, "set request failed");
        }
    }

    fn set_for(&self, prefix: &str, key: &str, value: &str) {
        let url = format!("{}/{prefix}/{key}/{value}", self.endpoint);
        if let Err(err) = self.put_ok(&url) {
            tracing::warn!(%url, error = %err, "set request failed");
        }
    }

    fn add(&self, key: &str, value: &str, delim: &str) {
        let url = format!("{}/{key}/{value}?delim={delim}", self.endpoint);
        if let Err(err) = self.post_ok(&url) {
            tracing::warn!(%url, error = %err, "add request failed");
        }
    }

    fn add_for(&self, prefix: &str, key: &str, value: &str, delim: &str) {
        let url = format!("{}/{prefix}/{key}/{value}?delim={delim}", self.endpoint);
        if let Err(err) = self.post_ok(&url) {
            tracing::warn!(%url, error = %err, "add request failed");
        }
    }

    fn get(&self, key: &str) -> Option<String> {
        let url = format!("{}/{key}", self.endpoint);
        match self.fetch_text(&url) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::debug!(%url, error = %err, "get request failed");
                None
            }
        }
    }

    fn get_for(&self, prefix: &str, key: &str) -> Option<String> {
        let url = format!("{}/{prefix}/{key}", self.endpoint);
        match self.fetch_text(&url) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::debug!(%url, error = %err, "get request failed");
                None
            }
        }
    }

    fn dump_env(&self, filter: &[&str]) -> Vec<String> {
        let url = format!("{}/dump", self.endpoint);
        match self.fetch_dump(&url, filter) {
            Ok(dump) => dump,
            Err(err) => {
                tracing::warn!(%url, error = %err, "dump request failed");
                Vec::new()
            }
        }
    }

    fn dump_env_for(&self, prefix: &str, filter: &[&str]) -> Vec<String> {
        let url = format!("{}/{prefix}/dump", self.endpoint);
        match self.fetch_dump(&url, filter) {
            Ok(dump) => dump,
            Err(err) => {
                tracing::warn!(%url, error = %err, "dump request failed");
                Vec::new()
            }
        }
    }

    fn close(&self) -> Result<()> {
        // Nothing to release: the remote side owns no local resource.
        Ok(())
    }
}
