//! Error types for launching requests, transport failures and catalog loading.

use std::path::PathBuf;

use thiserror::Error;

/// Reasons a launch does not result in a transport task.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LaunchError {
    /// A request is already outstanding. Absorbed silently by the dispatcher.
    #[error("a request is already in flight")]
    Busy,

    /// The URL template still contains a `{param}` with no binding
    #[error("{endpoint}: unresolved path parameter `{{{name}}}`")]
    UnresolvedPathParameter { endpoint: String, name: String },

    /// Cursor pointed outside the catalog
    #[error("no endpoint at index {0}")]
    UnknownEndpoint(usize),
}

/// Network-level failures reported by the transport.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("request timed out")]
    Timeout,

    #[error("connection failed: {0}")]
    Connect(String),

    #[error("error reading body: {0}")]
    Body(String),

    #[error("request failed: {0}")]
    Request(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            TransportError::Timeout
        } else if e.is_connect() {
            TransportError::Connect(e.to_string())
        } else if e.is_body() || e.is_decode() {
            TransportError::Body(e.to_string())
        } else {
            TransportError::Request(e.to_string())
        }
    }
}

/// Errors raised while loading an endpoint catalog file.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The catalog must hold at least one endpoint
    #[error("catalog has no endpoints")]
    Empty,

    #[error("endpoint `{endpoint}`: {reason}")]
    Invalid { endpoint: String, reason: String },
}
