//! HTTP service core.
//!
//! Configuration, response types, explicit routing, and the listener loop,
//! built on tokio: one accept loop, one spawned task per connection.

mod config;
mod error;
mod http_server;
mod response;
mod router;

// Re-export public items
pub use config::ServerConfig;
pub use error::Error;
pub use http_server::{handle_connection, HttpServer, ListenHandle};
pub use response::{HttpResponse, StatusCode};
pub use router::{Dispatch, Handler, HandlerFuture, Router};
