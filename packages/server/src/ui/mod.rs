//! UI layer: axum server, WebSocket sessions and HTTP diagnostics.

mod handler;
mod server;
mod signal;
pub mod state;

pub use server::Server;
pub use signal::shutdown_signal;
