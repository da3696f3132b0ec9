// libsl500/libsl500/src/protocol/stuffing.rs

//! Byte stuffing: a literal `0xAA` after the preamble travels as `0xAA 0x00`.
//!
//! The host never stuffs outbound frames (see `Frame::encode`); `stuff` exists
//! for the device side of the exchange, i.e. to build replies in mocks and
//! tests.

use crate::constants::{ESCAPE_BYTE, ESCAPE_FILLER};

/// Offset from which `0xAA` bytes are counted as escapes while a frame is
/// still arriving. Only the first preamble byte is excluded from the count.
const STUFF_COUNT_START: usize = 2;

/// Number of `0xAA` bytes at offset 2 or later.
///
/// Every such byte is assumed to be the head of an escape pair, which
/// over-counts when the length byte or checksum is itself `0xAA`. The reader
/// firmware behaves the same way, so this rule is kept as is.
pub fn stuffed_byte_count(buf: &[u8]) -> usize {
    buf.iter()
        .skip(STUFF_COUNT_START)
        .filter(|&&b| b == ESCAPE_BYTE)
        .count()
}

/// Remove the filler from every `0xAA 0x00` pair.
///
/// The preceding byte is looked up in the input, not the output, so
/// `AA 00 00` collapses to `AA 00`.
pub fn destuff(buf: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(buf.len());
    for (i, &b) in buf.iter().enumerate() {
        if i > 0 && buf[i - 1] == ESCAPE_BYTE && b == ESCAPE_FILLER {
            continue;
        }
        out.push(b);
    }
    out
}

/// Insert a filler after every `0xAA`.
pub fn stuff(bytes: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(bytes.len() + stuffed_byte_count(bytes));
    for &b in bytes {
        out.push(b);
        if b == ESCAPE_BYTE {
            out.push(ESCAPE_FILLER);
        }
    }
    out
}
