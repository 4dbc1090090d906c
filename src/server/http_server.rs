//! Listener setup and the accept loop.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use log::{error, info, warn};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::net::TcpListener;

use crate::http::parse_request;
use crate::server::config::ServerConfig;
use crate::server::error::Error;
use crate::server::response::{HttpResponse, StatusCode};
use crate::server::router::{Dispatch, Router};

/// An HTTP server: a bind target plus the route table it will serve.
pub struct HttpServer {
    config: ServerConfig,
    router: Arc<Router>,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration and routes.
    pub fn new(config: ServerConfig, router: Router) -> Self {
        Self {
            config,
            router: Arc::new(router),
        }
    }

    /// Bind the TCP listener.
    ///
    /// Bind failure is fatal: the error is returned to the caller, never
    /// retried against a fallback port. On success the startup
    /// confirmation is printed to stdout and the running-server handle is
    /// returned.
    pub async fn bind(self) -> Result<ListenHandle, Error> {
        let addr = self.config.addr();
        let listener = TcpListener::bind(&addr)
            .await
            .map_err(|source| Error::Bind { addr, source })?;
        let local_addr = listener.local_addr()?;

        println!("App running on port {port}", port = local_addr.port());
        info!("Listening on http://{local_addr}");
        for (method, path) in self.router.endpoints() {
            info!("  {method} {path}");
        }

        Ok(ListenHandle {
            listener,
            router: self.router,
            read_buffer_size: self.config.read_buffer_size,
            local_addr,
        })
    }

    /// Bind and serve until the process is terminated.
    pub async fn start(self) -> Result<(), Error> {
        self.bind().await?.serve().await
    }
}

/// A bound, running-ready server. Dropping the handle closes the listener.
pub struct ListenHandle {
    listener: TcpListener,
    router: Arc<Router>,
    read_buffer_size: usize,
    local_addr: SocketAddr,
}

impl std::fmt::Debug for ListenHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenHandle")
            .field("read_buffer_size", &self.read_buffer_size)
            .field("local_addr", &self.local_addr)
            .finish_non_exhaustive()
    }
}

impl ListenHandle {
    /// The address the listener actually bound (resolves port 0).
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Accept connections forever, one task per connection.
    ///
    /// Per-connection failures are logged and never tear down the listener.
    pub async fn serve(self) -> Result<(), Error> {
        loop {
            let (mut socket, peer) = match self.listener.accept().await {
                Ok(conn) => conn,
                Err(e) => {
                    warn!("Error accepting connection: {e}");
                    tokio::time::sleep(Duration::from_millis(100)).await;
                    continue;
                }
            };

            let router = self.router.clone();
            let read_buffer_size = self.read_buffer_size;

            tokio::spawn(async move {
                if let Err(e) = handle_connection(&mut socket, &router, read_buffer_size).await {
                    error!("Error handling connection from {peer}: {e}");
                }
            });
        }
    }
}

/// Handle a single connection: read, parse, dispatch, respond.
///
/// Each request is handled independently and statelessly; nothing here
/// outlives the connection.
pub async fn handle_connection(
    socket: &mut (impl AsyncRead + AsyncWrite + Unpin),
    router: &Router,
    read_buffer_size: usize,
) -> Result<(), Error> {
    let mut buf = vec![0; read_buffer_size];

    let n = socket.read(&mut buf).await?;
    if n == 0 {
        return Ok(()); // connection closed before sending anything
    }

    // Malformed requests are rejected here with 400; they never reach a
    // handler.
    let request = match parse_request(&buf[..n]) {
        Ok(req) => req,
        Err(e) => {
            let response = HttpResponse::new(StatusCode::BadRequest)
                .with_content_type("text/plain; charset=utf-8")
                .with_body_string(format!("Error parsing request: {e}"));
            socket.write_all(&response.to_bytes()).await?;
            return Err(Error::Parse(e));
        }
    };

    let response = match router.resolve(request.method, &request.path) {
        Dispatch::Matched(handler) => (handler)(request).await,
        Dispatch::NotFound(handler) => (handler)(request).await,
        Dispatch::MethodNotAllowed { allowed } => {
            let allowed = allowed
                .iter()
                .map(|m| m.to_string())
                .collect::<Vec<String>>()
                .join(", ");

            HttpResponse::new(StatusCode::MethodNotAllowed)
                .with_header("Allow", allowed.clone())
                .with_content_type("text/plain; charset=utf-8")
                .with_body_string(format!(
                    "Method {method} not allowed for path: {path}. Allowed methods: {allowed}",
                    method = request.method,
                    path = request.path,
                ))
        }
    };

    socket.write_all(&response.to_bytes()).await?;

    Ok(())
}
