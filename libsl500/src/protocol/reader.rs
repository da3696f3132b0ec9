// libsl500/libsl500/src/protocol/reader.rs

//! Blocking reassembly of one response frame from a serial byte stream.

use std::time::Duration;

use log::{trace, warn};

use crate::constants::{DEFAULT_MAX_ATTEMPTS, READ_CHUNK_SIZE};
use crate::protocol::Frame;
use crate::transport::Transport;
use crate::utils::{DEFAULT_READ_TIMEOUT_MS, exchange_budget};
use crate::{Error, Result};

/// Settings of the read loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReaderConfig {
    /// Timeout of a single transport read
    pub read_timeout_ms: u64,
    /// Reads attempted before giving up on a response
    pub max_attempts: usize,
    /// Bytes requested per read
    pub chunk_size: usize,
}

impl ReaderConfig {
    /// Longest a single response may take with these settings.
    pub fn exchange_budget(&self) -> Duration {
        exchange_budget(self.read_timeout_ms, self.max_attempts)
    }
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            read_timeout_ms: DEFAULT_READ_TIMEOUT_MS,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            chunk_size: READ_CHUNK_SIZE,
        }
    }
}

/// Read from `transport` until a complete frame has been buffered and
/// return the raw, still stuffed bytes.
///
/// The serial line delivers data in arbitrary pieces, so the expected size
/// is recomputed after every read: it grows with each escape seen. Fails with
/// `ReadTimeout` after `max_attempts` reads; transport errors are returned
/// immediately.
pub fn read_frame(transport: &mut dyn Transport, config: &ReaderConfig) -> Result<Vec<u8>> {
    let mut buf = Vec::with_capacity(config.chunk_size);
    let mut chunk = vec![0u8; config.chunk_size.max(1)];

    for attempt in 1..=config.max_attempts {
        let n = transport.read(&mut chunk, config.read_timeout_ms)?;
        buf.extend_from_slice(&chunk[..n]);
        trace!(
            "sl500[{}]: read {} bytes (attempt {}, {} buffered)",
            transport.name(),
            n,
            attempt,
            buf.len()
        );

        if let Some(total) = Frame::expected_len(&buf) {
            if buf.len() >= total {
                if buf.len() > total {
                    warn!(
                        "sl500[{}]: {} bytes past the end of the frame",
                        transport.name(),
                        buf.len() - total
                    );
                }
                return Ok(buf);
            }
        }
    }

    warn!(
        "sl500[{}]: no complete frame within {:?} ({} bytes buffered)",
        transport.name(),
        config.exchange_budget(),
        buf.len()
    );
    Err(Error::ReadTimeout {
        attempts: config.max_attempts,
    })
}
