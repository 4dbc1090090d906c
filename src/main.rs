//! Process entry for the greeter service.
//!
//! Binds the fixed host and port, serves until externally terminated, and
//! exits non-zero if the listener cannot be established.

use log::error;

use darede_greeter::{greeter, HttpServer, ServerConfig};

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;

#[tokio::main]
async fn main() {
    env_logger::init();

    let config = ServerConfig {
        host: HOST.to_string(),
        port: PORT,
        ..ServerConfig::default()
    };

    let server = HttpServer::new(config, greeter::router());
    if let Err(e) = server.start().await {
        error!("{e}");
        std::process::exit(1);
    }
}
