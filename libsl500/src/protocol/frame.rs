// libsl500/libsl500/src/protocol/frame.rs

use crate::constants::{
    CHECKSUM_START, FRAME_OVERHEAD, HEADER_LEN, HOST_DEVICE_ID, MAX_FRAME_LENGTH,
    MIN_RESPONSE_FRAME_LEN, RESERVED, SL500_PREAMBLE, STATUS_OFFSET, STATUS_OK,
};
use crate::protocol::checksum::xor;
use crate::protocol::parser::{be_u16_at, ensure_len};
use crate::protocol::stuffing::{destuff, stuffed_byte_count};
use crate::types::CommandCode;
use crate::{Error, Result};

/// Offset of the device id in a raw frame. Everything before it (preamble,
/// length, reserved) is dropped before the checksum is verified.
const BODY_START: usize = 4;

/// device id(2) + command code(2) + status(1), counted from `BODY_START`
const RESPONSE_HEADER_LEN: usize = 5;

/// A decoded reply with the envelope fields the reader echoed back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseFrame {
    pub device_id: u16,
    pub command: CommandCode,
    pub payload: Vec<u8>,
}

/// SL500 frame helper. Provides encode/decode of the wire frame
/// Format: [Preamble(2)] [Len(1)] [Reserved(1)] [DeviceId(2)] [Command(2)] [Payload(n)] [Checksum(1)]
/// Preamble: 0xAA 0xBB
/// Len: 5 + n, checksum: XOR of Reserved..Payload
pub struct Frame;

impl Frame {
    /// Encode a command and its payload segments into a request frame.
    ///
    /// Segments are concatenated in order. Outbound frames are never
    /// stuffed.
    pub fn encode<S: AsRef<[u8]>>(command: CommandCode, segments: &[S]) -> Result<Vec<u8>> {
        let payload_len: usize = segments.iter().map(|s| s.as_ref().len()).sum();
        let length = HEADER_LEN + payload_len;
        if length > MAX_FRAME_LENGTH {
            return Err(Error::FrameTooLarge { length });
        }

        let mut out = Vec::with_capacity(FRAME_OVERHEAD + length);
        out.extend_from_slice(&SL500_PREAMBLE);
        out.push(length as u8);
        out.push(RESERVED);
        out.extend_from_slice(&HOST_DEVICE_ID.to_be_bytes());
        out.extend_from_slice(&command.to_be_bytes());
        for segment in segments {
            out.extend_from_slice(segment.as_ref());
        }
        let checksum = xor(&out[CHECKSUM_START..]);
        out.push(checksum);
        Ok(out)
    }

    /// Total wire size the frame in `buf` will have once complete, or `None`
    /// while the length byte has not arrived yet.
    ///
    /// Depends on the bytes already received, since every escape adds one
    /// byte the length field does not count.
    pub fn expected_len(buf: &[u8]) -> Option<usize> {
        let len = *buf.get(2)? as usize;
        Some(len + FRAME_OVERHEAD + stuffed_byte_count(buf))
    }

    /// True once `buf` holds at least the bytes announced by its header.
    pub fn is_complete(buf: &[u8]) -> bool {
        matches!(Self::expected_len(buf), Some(total) if buf.len() >= total)
    }

    /// Decode a raw (still stuffed) response frame and return its payload.
    pub fn decode(raw: &[u8]) -> Result<Vec<u8>> {
        Ok(Self::decode_response(raw)?.payload)
    }

    /// Decode a raw response frame, keeping the echoed device id and command.
    ///
    /// The preamble is checked first, so bytes that do not start a frame are
    /// reported as such however short they are. Status is then read at its
    /// fixed raw offset; the checksum is verified on the stuffed bytes and the
    /// escapes are removed afterwards.
    pub fn decode_response(raw: &[u8]) -> Result<ResponseFrame> {
        ensure_len(raw, SL500_PREAMBLE.len())?;
        if raw[..2] != SL500_PREAMBLE {
            return Err(Error::InvalidPreamble {
                actual: [raw[0], raw[1]],
            });
        }

        ensure_len(raw, MIN_RESPONSE_FRAME_LEN)?;

        let status = raw[STATUS_OFFSET];
        if status != STATUS_OK {
            return Err(Error::DeviceStatus { status });
        }

        let body = &raw[BODY_START..];
        let (checksum, covered) = match body.split_last() {
            Some((last, rest)) => (*last, rest),
            None => {
                return Err(Error::InvalidLength {
                    expected: MIN_RESPONSE_FRAME_LEN,
                    actual: raw.len(),
                });
            }
        };
        let expected = xor(covered);
        if expected != checksum {
            return Err(Error::InvalidChecksum {
                expected,
                actual: checksum,
            });
        }

        let logical = destuff(body);
        ensure_len(&logical, RESPONSE_HEADER_LEN + 1)?;

        let device_id = be_u16_at(&logical, 0)?;
        let command = CommandCode::new(be_u16_at(&logical, 2)?);
        let payload = logical[RESPONSE_HEADER_LEN..logical.len() - 1].to_vec();

        Ok(ResponseFrame {
            device_id,
            command,
            payload,
        })
    }
}
