// libsl500/libsl500/src/error.rs

use thiserror::Error;

/// Crate-wide error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("connection is not open")]
    NotOpen,

    #[error("connection is already open")]
    AlreadyOpen,

    #[error("transport error: {0}")]
    Transport(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "serial")]
    #[error("serial port error: {0}")]
    Serial(#[from] serialport::Error),

    #[error("read timed out: frame incomplete after {attempts} attempts")]
    ReadTimeout { attempts: usize },

    #[error("invalid preamble: got {:#04x} {:#04x}", .actual[0], .actual[1])]
    InvalidPreamble { actual: [u8; 2] },

    #[error("checksum mismatch: expected {expected:#04x}, got {actual:#04x}")]
    InvalidChecksum { expected: u8, actual: u8 },

    #[error("device reported failure: status={status:#04x}")]
    DeviceStatus { status: u8 },

    #[error("frame too large: length {length} does not fit the length byte")]
    FrameTooLarge { length: usize },

    #[error("invalid packet length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

impl Error {
    /// True for failures of the underlying byte transport (as opposed to
    /// framing, checksum or device-reported errors).
    pub fn is_transport(&self) -> bool {
        match self {
            Error::Transport(_) | Error::Io(_) => true,
            #[cfg(feature = "serial")]
            Error::Serial(_) => true,
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
