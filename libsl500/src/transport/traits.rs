// libsl500/libsl500/src/transport/traits.rs

use crate::Result;

/// Transport trait abstracts the serial line away from protocol logic.
///
/// A transport is owned by exactly one `Connection` and used for one
/// request/response exchange at a time.
pub trait Transport: Send {
    /// Write a complete frame to the device
    fn write(&mut self, data: &[u8]) -> Result<()>;

    /// Read up to `buf.len()` bytes, blocking for at most `timeout_ms`.
    ///
    /// A read that times out without data returns `Ok(0)`; errors are
    /// reserved for failures of the line itself.
    fn read(&mut self, buf: &mut [u8], timeout_ms: u64) -> Result<usize>;

    /// Release the underlying device. Reads and writes after `close` fail.
    fn close(&mut self) -> Result<()> {
        Ok(())
    }

    /// Human readable name used in traces (the port path for serial lines)
    fn name(&self) -> &str {
        "sl500"
    }
}

/// Produces transports for a `Connection`. Each call to `connect` acquires
/// the device anew, so a closed connection can be opened again.
pub trait Connector: Send {
    fn connect(&mut self) -> Result<Box<dyn Transport>>;
}

impl<F> Connector for F
where
    F: FnMut() -> Result<Box<dyn Transport>> + Send,
{
    fn connect(&mut self) -> Result<Box<dyn Transport>> {
        self()
    }
}
