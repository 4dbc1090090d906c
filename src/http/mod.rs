//! Minimal HTTP/1.1 request parsing.
//!
//! Only what the service needs to route a request: the request line and the
//! header section. Malformed traffic is rejected here, below the routing
//! layer, so handlers only ever see well-formed requests.

mod error;
mod request;
mod tests;

// Re-export public items
pub use error::ParseError;
pub use request::{parse_request, HttpRequest, HttpVersion, Method};
