//! Error types for the HTTP server.

use thiserror::Error;

use crate::http::ParseError;

/// Errors that can occur during server operation.
#[derive(Debug, Error)]
pub enum Error {
    /// The listener could not be established (port in use, permission
    /// denied, unresolvable host). Fatal at startup; never retried.
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    /// I/O error on an accepted connection.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing an HTTP request. The client is answered with 400
    /// before this is surfaced.
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
}
