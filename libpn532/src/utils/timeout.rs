//! Timing helpers used across the crate.
//!
//! The chip needs a fixed processing window between a bus write and the
//! next read. These helpers centralize that default and the small
//! conversion used by configuration code.

use std::time::Duration;

/// Default settling delay in milliseconds between bus operations.
pub const DEFAULT_SETTLE_DELAY_MS: u64 = 100;

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

/// Convenience: default settling delay as Duration.
pub fn default_settle_delay() -> Duration {
    ms(DEFAULT_SETTLE_DELAY_MS)
}

/// Block the calling thread for `delay`. A zero delay returns immediately.
pub fn settle(delay: Duration) {
    if !delay.is_zero() {
        std::thread::sleep(delay);
    }
}
