//! Time-related utilities with clock abstraction for testability.

use chrono::{DateTime, FixedOffset, Local};

/// Format used for envelope timestamps (local wall-clock time).
pub const CLOCK_TIME_FORMAT: &str = "%H:%M:%S";

/// Clock trait for dependency injection and testing
pub trait Clock: Send + Sync {
    /// Get the current local time
    fn now(&self) -> DateTime<FixedOffset>;
}

/// System clock implementation (uses actual system time)
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}

/// Fixed clock implementation for testing (returns a fixed time)
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    fixed_time: DateTime<FixedOffset>,
}

impl FixedClock {
    /// Create a new fixed clock with the given time
    pub fn new(fixed_time: DateTime<FixedOffset>) -> Self {
        Self { fixed_time }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.fixed_time
    }
}

/// Format a time as `HH:MM:SS`
pub fn format_clock_time(time: &DateTime<FixedOffset>) -> String {
    time.format(CLOCK_TIME_FORMAT).to_string()
}
