//! Test client for the Yamabiko WebSocket relay.
//!
//! Sends a script of test messages or lines typed at a prompt, and prints
//! every echo and broadcast the server sends back.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin yamabiko-client
//! cargo run --bin yamabiko-client -- --mode auto
//! cargo run --bin yamabiko-client -- -u ws://127.0.0.1:3000 -m manual
//! ```

use clap::Parser;

use yamabiko_client::{Mode, run_client};
use yamabiko_shared::logger::setup_logger;

#[derive(Parser, Debug)]
#[command(name = "yamabiko-client")]
#[command(about = "Test client for the WebSocket echo and broadcast relay", long_about = None)]
struct Args {
    /// WebSocket server URL
    #[arg(short = 'u', long, env = "YAMABIKO_URL", default_value = "ws://127.0.0.1:8765")]
    url: String,

    /// Sending mode; asked interactively when omitted
    #[arg(short = 'm', long, value_enum)]
    mode: Option<Mode>,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), "info");

    let args = Args::parse();

    if let Err(e) = run_client(args.url, args.mode).await {
        tracing::error!("Client error: {}", e);
        std::process::exit(1);
    }
}
