//! Error types for the Portainer client.

use thiserror::Error;

/// Errors raised by the Portainer control-plane client.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum PortainerError {
    /// Raised when the TLS-enabled HTTP client cannot be constructed.
    #[error("failed to construct HTTP client: {message}")]
    Client {
        /// Builder error message.
        message: String,
    },
    /// Raised when a request fails before an HTTP status is available.
    #[error("transport failure during {context}: {message}")]
    Transport {
        /// Operation being performed (for example `authentication`).
        context: &'static str,
        /// Error message from the HTTP layer.
        message: String,
    },
    /// Raised when the control plane answers with a non-success status.
    #[error("{context} failed with status {status}: {body}")]
    Api {
        /// Operation being performed.
        context: &'static str,
        /// HTTP status code returned by the control plane.
        status: u16,
        /// Response body, lossily decoded as UTF-8.
        body: String,
    },
    /// Raised when a success response body cannot be decoded.
    #[error("failed to decode {context} response: {message}")]
    Decode {
        /// Operation being performed.
        context: &'static str,
        /// Parser error message.
        message: String,
    },
}
