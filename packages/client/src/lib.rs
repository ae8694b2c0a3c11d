//! Test client for the Yamabiko WebSocket relay.
//!
//! Connects to the relay, prints every echo and broadcast it receives, and
//! sends either a built-in script of test messages or lines typed by the user.

pub mod error;
pub mod formatter;
pub mod message;
pub mod script;
pub mod session;
mod ui;

pub use session::{Mode, run_client};
