//! Shared utilities for the Yamabiko server and client.

pub mod logger;
pub mod time;
