// libsl500/libsl500/src/transport/serial.rs

use std::io::{ErrorKind, Read, Write};

use log::debug;

use crate::transport::traits::{Connector, Transport};
use crate::types::BaudRate;
use crate::utils::{DEFAULT_READ_TIMEOUT_MS, default_read_timeout, ms};
use crate::{Error, Result};

/// Serial line transport backed by the `serialport` crate.
pub struct SerialTransport {
    port: Option<Box<dyn serialport::SerialPort>>,
    name: String,
    timeout_ms: u64,
}

impl SerialTransport {
    /// Open `path` at the given rate. 8N1 without flow control, which is
    /// what the reader speaks.
    pub fn open(path: &str, baud: BaudRate) -> Result<Self> {
        let port = serialport::new(path, baud.bits_per_second())
            .data_bits(serialport::DataBits::Eight)
            .parity(serialport::Parity::None)
            .stop_bits(serialport::StopBits::One)
            .flow_control(serialport::FlowControl::None)
            .timeout(default_read_timeout())
            .open()?;
        debug!("sl500[{}]: opened at {} baud", path, baud.bits_per_second());

        Ok(Self {
            port: Some(port),
            name: path.to_string(),
            timeout_ms: DEFAULT_READ_TIMEOUT_MS,
        })
    }

    fn port_mut(&mut self) -> Result<&mut Box<dyn serialport::SerialPort>> {
        match self.port.as_mut() {
            Some(port) => Ok(port),
            None => Err(Error::Transport(format!("port {} is closed", self.name))),
        }
    }
}

impl Transport for SerialTransport {
    fn write(&mut self, data: &[u8]) -> Result<()> {
        let port = self.port_mut()?;
        port.write_all(data)?;
        port.flush()?;
        Ok(())
    }

    fn read(&mut self, buf: &mut [u8], timeout_ms: u64) -> Result<usize> {
        if timeout_ms != self.timeout_ms {
            self.port_mut()?.set_timeout(ms(timeout_ms))?;
            self.timeout_ms = timeout_ms;
        }
        match self.port_mut()?.read(buf) {
            Ok(n) => Ok(n),
            Err(e) if e.kind() == ErrorKind::TimedOut || e.kind() == ErrorKind::Interrupted => {
                Ok(0)
            }
            Err(e) => Err(Error::Io(e)),
        }
    }

    fn close(&mut self) -> Result<()> {
        // Dropping the handle releases the device.
        match self.port.take() {
            Some(_) => {
                debug!("sl500[{}]: closed", self.name);
                Ok(())
            }
            None => Ok(()),
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Opens `SerialTransport`s for a fixed port path and rate.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SerialConnector {
    pub path: String,
    pub baud: BaudRate,
}

impl SerialConnector {
    pub fn new(path: impl Into<String>, baud: BaudRate) -> Self {
        Self {
            path: path.into(),
            baud,
        }
    }
}

impl Connector for SerialConnector {
    fn connect(&mut self) -> Result<Box<dyn Transport>> {
        Ok(Box::new(SerialTransport::open(&self.path, self.baud)?))
    }
}
