//! Error types for the HTTP parsing layer.

use thiserror::Error;

/// Errors that can occur while parsing an HTTP request head.
///
/// A request that fails to parse is answered with `400 Bad Request` before
/// any handler runs.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The HTTP method in the request is not recognized.
    #[error("Invalid HTTP method: {0}")]
    InvalidMethod(String),

    /// The request target is not an origin-form path.
    #[error("Invalid request target: {0}")]
    InvalidPath(String),

    /// The request line is malformed (wrong format or missing components).
    #[error("Malformed request line: {0}")]
    MalformedRequestLine(String),

    /// The HTTP version in the request is not supported.
    #[error("Invalid HTTP version: {0}")]
    InvalidVersion(String),

    /// A required header is missing from the request.
    #[error("Required header is missing: {0}")]
    MissingHeader(String),

    /// A header line in the request has an invalid format.
    #[error("Invalid header format")]
    InvalidHeaderFormat,

    /// The request is empty.
    #[error("Empty request")]
    EmptyRequest,
}
