//! WebSocket echo and broadcast relay server.
//!
//! Echoes every message back to its sender and relays it to all other connected clients.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin yamabiko-server
//! cargo run --bin yamabiko-server -- --host 127.0.0.1 --port 3000
//! ```

use std::sync::Arc;

use clap::Parser;
use yamabiko_server::{
    config::{DEFAULT_HOST, DEFAULT_PORT, ServerConfig},
    infrastructure::registry::InMemoryConnectionRegistry,
    ui::Server,
    usecase::{ConnectUseCase, DisconnectUseCase, ListConnectionsUseCase, RelayMessageUseCase},
};
use yamabiko_shared::{logger::setup_logger, time::SystemClock};

#[derive(Parser, Debug)]
#[command(name = "yamabiko-server")]
#[command(about = "WebSocket relay that echoes and broadcasts every message", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, env = "YAMABIKO_HOST", default_value = DEFAULT_HOST)]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, env = "YAMABIKO_PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Banner reported in the `server` field of echo replies
    #[arg(short = 'b', long, env = "YAMABIKO_BANNER")]
    banner: Option<String>,
}

impl From<Args> for ServerConfig {
    fn from(args: Args) -> Self {
        Self {
            host: args.host,
            port: args.port,
            banner: args.banner.unwrap_or_else(ServerConfig::default_banner),
        }
    }
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "debug");

    let config = ServerConfig::from(Args::parse());

    // Initialize dependencies in order:
    // 1. Registry
    // 2. UseCases
    // 3. Server

    // 1. Create Registry (in-memory set of live connections)
    let registry = Arc::new(InMemoryConnectionRegistry::new());
    let clock = Arc::new(SystemClock);

    // 2. Create UseCases
    let connect_usecase = Arc::new(ConnectUseCase::new(registry.clone(), clock.clone()));
    let disconnect_usecase = Arc::new(DisconnectUseCase::new(registry.clone()));
    let relay_message_usecase = Arc::new(RelayMessageUseCase::new(
        registry.clone(),
        clock,
        config.banner.clone(),
    ));
    let list_connections_usecase = Arc::new(ListConnectionsUseCase::new(registry));

    // 3. Create and run the server
    let server = Server::new(
        connect_usecase,
        disconnect_usecase,
        relay_message_usecase,
        list_connections_usecase,
    );
    tracing::info!("Starting {}", config.banner);
    if let Err(e) = server.run(&config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
