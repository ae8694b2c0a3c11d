//! WebSocket echo and broadcast relay.
//!
//! Every text message a client sends is echoed back to it and relayed to
//! every other connected client.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

pub mod config;
