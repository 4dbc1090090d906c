//! The greeting route table.

use crate::http::Method;
use crate::server::{HttpResponse, Router, StatusCode};

/// The greeting served on the root path. Exact bytes, no trailing newline.
pub const GREETING: &str = "Hello World from Darede!";

/// Build the route table for the greeter service.
///
/// One registered route: `GET /` answers the greeting as plain text.
/// Everything else falls through to the router's not-found handling.
pub fn router() -> Router {
    Router::new().route(Method::GET, "/", |_req| async {
        HttpResponse::new(StatusCode::Ok)
            .with_content_type("text/plain; charset=utf-8")
            .with_body_string(GREETING)
    })
}
