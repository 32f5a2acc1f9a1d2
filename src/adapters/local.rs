// SPDX-License-Identifier: MIT OR Apache-2.0

//! Local controller adapter.
//!
//! This module provides the controller variant that owns the entry space and
//! exposes it over HTTP. Construction binds an ephemeral port, seeds the
//! self-discovery key, and starts serving on a background task before
//! returning; every trait operation executes directly against the in-process
//! store with no network round-trip.

use crate::adapters::routes;
use crate::domain::{ConfigStore, ControllerError, Result, CONTROLLER_PORT_KEY};
use crate::ports::ConfigController;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;
use tokio::runtime::Runtime;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// The controller variant that owns the entry space.
///
/// Wraps one [`ConfigStore`] plus the bound network endpoint. The HTTP
/// server runs on a dedicated tokio runtime owned by the controller, so the
/// type stays usable from plain synchronous test code; this is the same
/// runtime-bridging arrangement the remote side uses for its client.
///
/// Dropping an unclosed controller signals shutdown on a best-effort basis;
/// call [`ConfigController::close`] to wait for in-flight requests to drain.
///
/// # Examples
///
/// ```rust,no_run
/// use confctl::adapters::LocalController;
/// use confctl::domain::CONTROLLER_PORT_KEY;
/// use confctl::ports::ConfigController;
///
/// # fn main() -> confctl::domain::Result<()> {
/// let controller = LocalController::new()?;
///
/// // The bound port is retrievable immediately after construction.
/// let port = controller.get(CONTROLLER_PORT_KEY);
/// assert!(port.is_some());
///
/// controller.close()?;
/// # Ok(())
/// # }
/// ```
pub struct LocalController {
    /// The owned entry space
    store: Arc<ConfigStore>,
    /// Bound `host:port`, fixed for the controller's lifetime
    endpoint: String,
    /// Runtime hosting the serve task
    runtime: Runtime,
    /// Graceful-shutdown trigger, consumed by the first `close`
    shutdown_tx: Mutex<Option<oneshot::Sender<()>>>,
    /// Handle joined during `close` to wait for in-flight requests
    serve_task: Mutex<Option<JoinHandle<std::io::Result<()>>>>,
}

impl LocalController {
    /// Creates a controller bound to an ephemeral port on `127.0.0.1`.
    ///
    /// The entry space starts empty apart from [`CONTROLLER_PORT_KEY`],
    /// which is seeded with the bound port so spawned processes can discover
    /// the endpoint through the store itself.
    ///
    /// # Errors
    ///
    /// Returns [`ControllerError::Bind`] if the runtime cannot be created or
    /// the listening socket cannot be acquired. No background work starts in
    /// that case.
    pub fn new() -> Result<Self> {
        let runtime =
            Runtime::new().map_err(|e| ControllerError::bind("create controller runtime", e))?;

        let listener = runtime
            .block_on(TcpListener::bind("127.0.0.1:0"))
            .map_err(|e| ControllerError::bind("listen controller API server", e))?;

        let addr: SocketAddr = listener
            .local_addr()
            .map_err(|e| ControllerError::bind("read bound controller address", e))?;

        let store = Arc::new(ConfigStore::new());
        store.set(CONTROLLER_PORT_KEY, &addr.port().to_string());

        let app = routes::router(Arc::clone(&store));
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        let serve_task = runtime.spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.await;
                })
                .await
        });

        tracing::debug!(%addr, "config controller API server listening");

        Ok(Self {
            store,
            endpoint: addr.to_string(),
            runtime,
            shutdown_tx: Mutex::new(Some(shutdown_tx)),
            serve_task: Mutex::new(Some(serve_task)),
        })
    }
}

impl ConfigController for LocalController {
    fn endpoint(&self) -> String {
        self.endpoint.clone()
    }

    fn set(&self, key: &str, value: &str) {
        self.store.set(key, value);
    }

    fn set_for(&self, prefix: &str, key: &str, value: &str) {
        self.store.set_for(prefix, key, value);
    }

    fn add(&self, key: &str, value: &str, delim: &str) {
        self.store.add(key, value, delim);
    }

    fn add_for(&self, prefix: &str, key: &str, value: &str, delim: &str) {
        self.store.add_for(prefix, key, value, delim);
    }

    fn get(&self, key: &str) -> Option<String> {
        self.store.get(key)
    }

    fn get_for(&self, prefix: &str, key: &str) -> Option<String> {
        self.store.get_for(prefix, key)
    }

    fn dump_env(&self, filter: &[&str]) -> Vec<String> {
        self.store.dump_env(filter)
    }

    fn dump_env_for(&self, prefix: &str, filter: &[&str]) -> Vec<String> {
        self.store.dump_env_for(prefix, filter)
    }

    fn close(&self) -> Result<()> {
        if let Ok(mut shutdown_tx) = self.shutdown_tx.lock() {
            if let Some(tx) = shutdown_tx.take() {
                let _ = tx.send(());
            }
        }

        let task = match self.serve_task.lock() {
            Ok(mut serve_task) => serve_task.take(),
            Err(_) => None,
        };

        // Joining waits for in-flight requests to drain. A second close
        // finds nothing to join and returns Ok.
        if let Some(task) = task {
            self.runtime
                .block_on(task)
                .map_err(|e| ControllerError::shutdown("join controller serve task", e))?
                .map_err(|e| ControllerError::shutdown("API server shutdown", e))?;
        }

        Ok(())
    }
}

impl Drop for LocalController {
    fn drop(&mut self) {
        if let Ok(mut shutdown_tx) = self.shutdown_tx.lock() {
            if let Some(tx) = shutdown_tx.take() {
                let _ = tx.send(());
            }
        }
    }
}
