// libsl500/libsl500/src/protocol/responses.rs

//! Typed views of response payloads. The frame decoder has already removed
//! the envelope and the status byte; these only check the payload shape.

use crate::Result;
use crate::protocol::parser::{be_u16_at, byte_at, le_i32_at, slice_at};
use crate::types::{Atqa, BlockData, Uid};

/// Device id reply (0x0301): two bytes, big-endian.
pub fn decode_device_id(payload: &[u8]) -> Result<u16> {
    be_u16_at(payload, 0)
}

/// Model reply (0x0401): ASCII identification, possibly NUL padded.
pub fn decode_model(payload: &[u8]) -> String {
    let end = payload
        .iter()
        .rposition(|&b| b != 0x00)
        .map_or(0, |i| i + 1);
    String::from_utf8_lossy(&payload[..end]).into_owned()
}

/// Request reply (0x0102): two byte card type.
pub fn decode_atqa(payload: &[u8]) -> Result<Atqa> {
    let s = slice_at(payload, 0, 2)?;
    Ok(Atqa::from_bytes([s[0], s[1]]))
}

/// Anticollision reply (0x0202): four byte serial number.
pub fn decode_uid(payload: &[u8]) -> Result<Uid> {
    Uid::try_from(slice_at(payload, 0, 4)?)
}

/// Select reply (0x0302): first byte is the card's capacity/SAK.
pub fn decode_sak(payload: &[u8]) -> Result<u8> {
    byte_at(payload, 0)
}

/// Read reply (0x0802): one 16 byte block.
pub fn decode_block(payload: &[u8]) -> Result<BlockData> {
    BlockData::try_from(slice_at(payload, 0, 16)?)
}

/// Read value reply (0x0B02): little-endian 32-bit amount.
pub fn decode_value(payload: &[u8]) -> Result<i32> {
    le_i32_at(payload, 0)
}
