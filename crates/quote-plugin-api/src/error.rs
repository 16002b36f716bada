//! Interface error types.

use thiserror::Error;

/// Interface error types.
#[derive(Debug, Error)]
pub enum InterfaceError {
    /// Listen address could not be parsed.
    #[error("Invalid listen address '{addr}': {source}")]
    InvalidAddress {
        addr: String,
        #[source]
        source: std::net::AddrParseError,
    },

    /// Listener could not be bound.
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// Server loop terminated with an I/O error.
    #[error("Server error: {0}")]
    Serve(#[from] std::io::Error),
}
