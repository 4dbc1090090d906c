//! Request routing.
//!
//! Routing is an explicit total function: [`Router::resolve`] maps every
//! (method, path) pair to a dispatch decision, with the not-found fallback
//! as an ordinary arm of that function rather than implicit framework
//! behavior.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::http::{HttpRequest, Method};
use crate::server::response::{HttpResponse, StatusCode};

/// Type alias for a boxed future returned by a handler.
pub type HandlerFuture = Pin<Box<dyn Future<Output = HttpResponse> + Send>>;

/// Type alias for a request handler.
///
/// Handlers are infallible: everything that can go wrong with a request is
/// decided before a handler runs.
pub type Handler = Arc<dyn Fn(HttpRequest) -> HandlerFuture + Send + Sync>;

struct Route {
    method: Method,
    path: String,
    handler: Handler,
}

/// An immutable route table with an explicit not-found fallback.
///
/// Built once before the listener starts; shared read-only across
/// connection tasks.
pub struct Router {
    routes: Vec<Route>,
    not_found: Handler,
}

/// The dispatch decision for a single request.
pub enum Dispatch {
    /// A registered route matched both method and path.
    Matched(Handler),
    /// The path is registered, but not for this method.
    MethodNotAllowed {
        /// The methods registered for the path.
        allowed: Vec<Method>,
    },
    /// No route knows the path; the fallback handler answers.
    NotFound(Handler),
}

impl Router {
    /// Create an empty router with the default not-found fallback.
    pub fn new() -> Self {
        Self {
            routes: Vec::new(),
            not_found: default_not_found(),
        }
    }

    /// Register a handler for an exact (method, path) pair.
    pub fn route<F, Fut>(mut self, method: Method, path: impl Into<String>, handler: F) -> Self
    where
        F: Fn(HttpRequest) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = HttpResponse> + Send + 'static,
    {
        let handler: Handler =
            Arc::new(move |req: HttpRequest| -> HandlerFuture { Box::pin(handler(req)) });
        self.routes.push(Route {
            method,
            path: path.into(),
            handler,
        });
        self
    }

    /// Decide how to answer `method` and `path`.
    ///
    /// Total: every input maps to a decision. Paths match exactly after the
    /// query string is stripped.
    pub fn resolve(&self, method: Method, path: &str) -> Dispatch {
        let path = strip_query(path);
        let on_path: Vec<&Route> = self.routes.iter().filter(|r| r.path == path).collect();

        if on_path.is_empty() {
            return Dispatch::NotFound(self.not_found.clone());
        }

        match on_path.iter().find(|r| r.method == method) {
            Some(route) => Dispatch::Matched(route.handler.clone()),
            None => Dispatch::MethodNotAllowed {
                allowed: on_path.iter().map(|r| r.method).collect(),
            },
        }
    }

    /// The registered (method, path) pairs, for startup logging.
    pub fn endpoints(&self) -> impl Iterator<Item = (Method, &str)> {
        self.routes.iter().map(|r| (r.method, r.path.as_str()))
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

/// Routes match on the path alone; the query string is ignored.
fn strip_query(path: &str) -> &str {
    path.split_once('?').map_or(path, |(p, _)| p)
}

fn default_not_found() -> Handler {
    Arc::new(|req: HttpRequest| -> HandlerFuture {
        Box::pin(async move {
            HttpResponse::new(StatusCode::NotFound)
                .with_content_type("text/plain; charset=utf-8")
                .with_body_string(format!("Not found: {path}", path = req.path))
        })
    })
}
