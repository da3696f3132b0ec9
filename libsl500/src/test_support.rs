//! Test support helpers intended for use by unit and integration tests.
//!
//! They play the reader's side of the protocol: replies carry a status byte
//! in front of the payload and are escape-stuffed the way the firmware does
//! it, which the host encoder never does.
#![allow(dead_code)]

use crate::constants::{RESERVED, SL500_PREAMBLE, STATUS_OK};
use crate::device::{Connection, ConnectionBuilder, ReaderConfig};
use crate::protocol::checksum::xor;
use crate::protocol::stuffing::stuff;
use crate::transport::{MockConnector, MockTransport};
use crate::types::CommandCode;
use crate::Result;

/// Build a reply frame as sent by the reader.
#[doc(hidden)]
pub fn reply_frame(command: CommandCode, status: u8, payload: &[u8]) -> Vec<u8> {
    let mut logical = vec![RESERVED, 0x00, 0x00];
    logical.extend_from_slice(&command.to_be_bytes());
    logical.push(status);
    logical.extend_from_slice(payload);
    let checksum = xor(&logical);

    let mut out = SL500_PREAMBLE.to_vec();
    out.push(logical.len() as u8);
    out.extend_from_slice(&stuff(&logical));
    out.push(checksum);
    out
}

/// Successful reply carrying `payload`.
#[doc(hidden)]
pub fn ok_reply(command: CommandCode, payload: &[u8]) -> Vec<u8> {
    reply_frame(command, STATUS_OK, payload)
}

/// Read loop settings that keep failing tests fast.
#[doc(hidden)]
pub fn fast_config() -> ReaderConfig {
    ReaderConfig {
        read_timeout_ms: 1,
        max_attempts: 8,
        ..ReaderConfig::default()
    }
}

/// Open a Connection backed by a MockTransport pre-seeded with `replies`
/// (one chunk each). The returned mock shares state with the one inside the
/// connection.
#[doc(hidden)]
pub fn open_mock_connection(replies: Vec<Vec<u8>>) -> Result<(Connection, MockTransport)> {
    let mock = MockTransport::new();
    for reply in replies {
        mock.push_chunk(reply);
    }
    let conn = ConnectionBuilder::new()
        .config(fast_config())
        .connector(MockConnector::new(mock.clone()))
        .open()?;
    Ok((conn, mock))
}
