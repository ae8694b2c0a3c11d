//! Infrastructure layer: registry storage and wire formats.

pub mod dto;
pub mod registry;
