// libsl500/libsl500/src/prelude.rs

pub use crate::card::Card;
pub use crate::device::{Connection, ConnectionBuilder, ReaderConfig};
pub use crate::protocol::{Command, Frame, ResponseFrame};
pub use crate::transport::{Connector, Transport};
pub use crate::{
    AntennaState, Atqa, AuthMode, BaudRate, BlockData, CommandCode, Error, Key, LedColor,
    RequestMode, Result, Uid, WorkType,
};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, ms, parse_hex};
