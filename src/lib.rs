//! A single-route HTTP greeting service.
//!
//! This crate implements a small HTTP/1.1 server that answers `GET /` with
//! a fixed plain-text greeting and every other request with an explicit
//! not-found fallback.
//!
//! # Features
//!
//! - Minimal HTTP request-head parsing (method, path, version, headers)
//! - Explicit routing: a total function from (method, path) to a handler,
//!   with the not-found fallback as an ordinary arm of that function
//! - One accept loop, one tokio task per connection, no shared mutable
//!   state between requests
//! - Typed errors: bind failure is the single fatal startup error; clients
//!   only ever see 200, 400, 404, or 405
//!
//! # Examples
//!
//! ```no_run
//! use darede_greeter::{greeter, HttpServer, ServerConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), darede_greeter::Error> {
//!     let server = HttpServer::new(ServerConfig::default(), greeter::router());
//!     server.start().await
//! }
//! ```

// The greeting route table
pub mod greeter;

// The HTTP parsing layer
pub mod http;

// The server core
pub mod server;

// Re-export commonly used items for convenience
pub use http::{parse_request, HttpRequest, HttpVersion, Method, ParseError};
pub use server::{Error, HttpResponse, HttpServer, ListenHandle, Router, ServerConfig, StatusCode};
