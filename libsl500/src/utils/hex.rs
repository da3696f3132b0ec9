//! Hexadecimal helpers used for frame traces and test fixtures.
//!
//! Output is uppercase to match the way frames are written in reader
//! documentation (`AA BB 06 00 ...`).

use crate::{Error, Result};

/// Convert a byte slice to an uppercase hex string without separators.
///
/// Example: `&[0xde, 0xad]` -> `"DEAD"`
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    hex::encode_upper(bytes)
}

/// Convert a byte slice to an uppercase hex string with a single space
/// between each byte.
///
/// Example: `&[0xaa, 0xbb]` -> `"AA BB"`
pub fn bytes_to_hex_spaced(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| hex::encode_upper([*b]))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse a hex string into bytes. ASCII whitespace between digits is
/// ignored, so frames can be written the way they are logged.
pub fn parse_hex(s: &str) -> Result<Vec<u8>> {
    let cleaned: String = s.chars().filter(|c| !c.is_whitespace()).collect();
    hex::decode(&cleaned).map_err(|e| Error::InvalidParameter(format!("invalid hex '{}': {}", s, e)))
}
