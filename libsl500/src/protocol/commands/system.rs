// libsl500/libsl500/src/protocol/commands/system.rs

//! Reader housekeeping commands: line setup, identity, LED and buzzer.

use crate::types::{AntennaState, BaudRate, LedColor, WorkType};

/// Init communication (0x0101): switch the line to `baud`.
pub fn encode_init_com(baud: BaudRate) -> Vec<Vec<u8>> {
    vec![vec![baud.code()]]
}

/// Store a new device id (0x0201), big-endian.
pub fn encode_set_device_id(device_id: u16) -> Vec<Vec<u8>> {
    vec![device_id.to_be_bytes().to_vec()]
}

pub fn encode_beep(duration: u8) -> Vec<Vec<u8>> {
    vec![vec![duration]]
}

pub fn encode_light(color: LedColor) -> Vec<Vec<u8>> {
    vec![vec![color as u8]]
}

pub fn encode_init_type(work_type: WorkType) -> Vec<Vec<u8>> {
    vec![vec![work_type as u8]]
}

pub fn encode_antenna(state: AntennaState) -> Vec<Vec<u8>> {
    vec![vec![state as u8]]
}
