//! Timeout helpers used across the crate.
//!
//! Timeouts are carried as milliseconds in configuration and converted to
//! `Duration` at the transport edge.

use std::time::Duration;

/// Per-read timeout used when a caller doesn't provide one. Matches the
/// reader's slowest command (a card request with nothing in the field).
pub const DEFAULT_READ_TIMEOUT_MS: u64 = 5000;

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

/// Convenience: default read timeout as Duration.
pub fn default_read_timeout() -> Duration {
    ms(DEFAULT_READ_TIMEOUT_MS)
}

/// Upper bound on how long one response can take to arrive: every attempt
/// may block for the full per-read timeout.
pub fn exchange_budget(read_timeout_ms: u64, max_attempts: usize) -> Duration {
    ms(read_timeout_ms.saturating_mul(max_attempts as u64))
}
