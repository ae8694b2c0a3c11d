//! Data Transfer Objects (DTOs) for the wire and HTTP formats.

pub mod conversion;
pub mod http;
pub mod websocket;
