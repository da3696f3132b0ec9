#![cfg(feature = "serial")]

//! Helpers for tests against a real reader.
//!
//! The port comes from the `SL500_PORT` environment variable (for example
//! `/dev/ttyUSB0` or `COM3`). Without it the helpers return `Ok(None)` so the
//! tests pass on machines without a reader.

use libsl500::{BaudRate, Connection, Result};

pub fn port_from_env() -> Option<String> {
    std::env::var("SL500_PORT").ok().filter(|p| !p.is_empty())
}

/// Open the reader named by `SL500_PORT` at its factory rate.
pub fn open_reader() -> Result<Option<Connection>> {
    let _ = env_logger::builder().is_test(true).try_init();
    match port_from_env() {
        Some(port) => Connection::open_serial(&port, BaudRate::default()).map(Some),
        None => Ok(None),
    }
}
