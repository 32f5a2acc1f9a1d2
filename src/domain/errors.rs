// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the configuration controller crate.
//!
//! This module defines the error taxonomy for controller lifecycle and
//! transport failures. All errors use `thiserror` for proper error handling
//! and conversion. Note that store operations themselves are total and never
//! produce an error: absence is expressed through `None` or an empty dump.

use thiserror::Error;

/// The main error type for controller operations.
///
/// This enum covers the failures that can surface from a controller's
/// lifecycle (binding the endpoint, shutting the server down) and the
/// transport failures a remote controller encounters. It is marked as
/// `#[non_exhaustive]` to allow for future additions without breaking
/// backwards compatibility.
///
/// Transport errors are never returned from a controller operation; the
/// remote side logs them and degrades to the zero-value result. They exist
/// as a variant so the failure can be described uniformly in logs and so
/// client construction can report a broken HTTP stack.
///
/// # Examples
///
/// ```
/// use confctl::domain::errors::ControllerError;
///
/// fn bind_endpoint() -> Result<(), ControllerError> {
///     Err(ControllerError::Bind {
///         message: "address already in use".to_string(),
///         source: None,
///     })
/// }
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ControllerError {
    /// The controller failed to acquire its listening endpoint or runtime.
    ///
    /// This is fatal to controller construction: no background serving is
    /// started when this error is returned.
    #[error("failed to bind controller endpoint: {message}")]
    Bind {
        /// Description of the bind failure
        message: String,
        /// The underlying error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The serving layer failed to stop cleanly.
    #[error("controller shutdown failed: {message}")]
    Shutdown {
        /// Description of the shutdown failure
        message: String,
        /// The underlying error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A remote request failed: connection error, unexpected status, or an
    /// undecodable response body.
    #[error("controller transport error: {message}")]
    Transport {
        /// Description of the transport failure
        message: String,
        /// The underlying error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl ControllerError {
    /// Creates a [`ControllerError::Bind`] wrapping the given error.
    pub fn bind<E>(message: impl Into<String>, err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        ControllerError::Bind {
            message: message.into(),
            source: Some(Box::new(err)),
        }
    }

    /// Creates a [`ControllerError::Shutdown`] wrapping the given error.
    pub fn shutdown<E>(message: impl Into<String>, err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        ControllerError::Shutdown {
            message: message.into(),
            source: Some(Box::new(err)),
        }
    }

    /// Creates a [`ControllerError::Transport`] wrapping the given error.
    pub fn transport<E>(message: impl Into<String>, err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        ControllerError::Transport {
            message: message.into(),
            source: Some(Box::new(err)),
        }
    }
}

/// A specialized Result type for controller operations.
pub type Result<T> = std::result::Result<T, ControllerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_error_display() {
        let error = ControllerError::Bind {
            message: "address already in use".to_string(),
            source: None,
        };
        assert_eq!(
            error.to_string(),
            "failed to bind controller endpoint: address already in use"
        );
    }

    #[test]
    fn test_shutdown_error_display() {
        let error = ControllerError::Shutdown {
            message: "serve task panicked".to_string(),
            source: None,
        };
        assert_eq!(
            error.to_string(),
            "controller shutdown failed: serve task panicked"
        );
    }

    #[test]
    fn test_transport_error_display() {
        let error = ControllerError::Transport {
            message: "unexpected status 500".to_string(),
            source: None,
        };
        assert_eq!(
            error.to_string(),
            "controller transport error: unexpected status 500"
        );
    }

    #[test]
    fn test_bind_constructor_wraps_source() {
        let io_error = std::io::Error::new(std::io::ErrorKind::AddrInUse, "in use");
        let error = ControllerError::bind("listen controller API server", io_error);
        assert!(matches!(error, ControllerError::Bind { .. }));
        assert!(std::error::Error::source(&error).is_some());
    }

    #[test]
    fn test_transport_constructor_wraps_source() {
        let io_error = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let error = ControllerError::transport("send request", io_error);
        assert!(matches!(error, ControllerError::Transport { .. }));
        assert!(error.to_string().contains("send request"));
    }
}
