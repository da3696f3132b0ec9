// libsl500/libsl500/src/protocol/commands/iso14443a.rs

//! Card activation: request, anticollision, select, halt.

use crate::types::{RequestMode, Uid};

pub fn encode_request(mode: RequestMode) -> Vec<Vec<u8>> {
    vec![vec![mode as u8]]
}

/// Select the card with serial number `uid` (0x0302).
pub fn encode_select(uid: Uid) -> Vec<Vec<u8>> {
    vec![uid.as_bytes().to_vec()]
}
