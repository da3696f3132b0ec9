// libsl500/libsl500/src/protocol/commands/mifare.rs

//! Mifare Classic block and value operations. The block number always
//! travels as its own segment, ahead of any data.

use crate::types::{AuthMode, BlockData, Key};

/// Authenticate a sector (0x0702): `[mode, block]` followed by the key.
pub fn encode_authenticate(mode: AuthMode, block: u8, key: Key) -> Vec<Vec<u8>> {
    vec![vec![mode as u8, block], key.as_bytes().to_vec()]
}

/// Commands that only take a block number (read, read value, restore,
/// transfer).
pub fn encode_block(block: u8) -> Vec<Vec<u8>> {
    vec![vec![block]]
}

pub fn encode_write(block: u8, data: BlockData) -> Vec<Vec<u8>> {
    vec![vec![block], data.as_bytes().to_vec()]
}

/// Value block operations (init, increment, decrement). The amount is a
/// little-endian 32-bit integer, as stored on the card.
pub fn encode_value(block: u8, value: i32) -> Vec<Vec<u8>> {
    vec![vec![block], value.to_le_bytes().to_vec()]
}
