// libsl500/libsl500/src/device/builder.rs

use crate::device::Connection;
use crate::protocol::reader::ReaderConfig;
use crate::transport::Connector;
use crate::{Error, Result};

/// Helper to construct a Connection with optional configuration.
#[derive(Default)]
pub struct ConnectionBuilder {
    connector: Option<Box<dyn Connector>>,
    config: ReaderConfig,
}

impl ConnectionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Provide the connector used by `open` (e.g. a MockConnector)
    pub fn connector(mut self, connector: impl Connector + 'static) -> Self {
        self.connector = Some(Box::new(connector));
        self
    }

    /// Connect to a serial port at the given rate.
    #[cfg(feature = "serial")]
    pub fn serial(self, path: impl Into<String>, baud: crate::types::BaudRate) -> Self {
        self.connector(crate::transport::SerialConnector::new(path, baud))
    }

    pub fn config(mut self, config: ReaderConfig) -> Self {
        self.config = config;
        self
    }

    pub fn read_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.config.read_timeout_ms = timeout_ms;
        self
    }

    pub fn max_attempts(mut self, attempts: usize) -> Self {
        self.config.max_attempts = attempts;
        self
    }

    pub fn chunk_size(mut self, size: usize) -> Self {
        self.config.chunk_size = size;
        self
    }

    /// Consume the builder and return a closed Connection.
    /// Requires a connector and a usable read configuration.
    pub fn build(self) -> Result<Connection> {
        let connector = self
            .connector
            .ok_or_else(|| Error::InvalidParameter("no connector configured".into()))?;
        if self.config.max_attempts == 0 {
            return Err(Error::InvalidParameter(
                "max_attempts must be at least 1".into(),
            ));
        }
        if self.config.chunk_size == 0 {
            return Err(Error::InvalidParameter("chunk_size must be at least 1".into()));
        }
        Ok(Connection::from_boxed(connector, self.config))
    }

    /// Build and open in one step.
    pub fn open(self) -> Result<Connection> {
        let conn = self.build()?;
        conn.open()?;
        Ok(conn)
    }
}
