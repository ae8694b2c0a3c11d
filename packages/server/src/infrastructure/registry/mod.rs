//! ConnectionRegistry の実装
//!
//! - `inmemory`: Mutex で保護した HashMap による実装

pub mod inmemory;

pub use inmemory::InMemoryConnectionRegistry;
