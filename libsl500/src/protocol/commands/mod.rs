// libsl500/libsl500/src/protocol/commands/mod.rs

pub mod iso14443a;
pub mod mifare;
pub mod system;

pub use iso14443a::{encode_request, encode_select};
pub use mifare::{encode_authenticate, encode_block, encode_value, encode_write};
pub use system::{
    encode_antenna, encode_beep, encode_init_com, encode_init_type, encode_light,
    encode_set_device_id,
};

use crate::Result;
use crate::protocol::Frame;
use crate::types::{
    AntennaState, AuthMode, BaudRate, BlockData, CommandCode, Key, LedColor, RequestMode, Uid,
    WorkType,
};

/// High-level Command enum covering every operation of the reader. New
/// commands should be added here and their segment encoder placed in
/// `protocol::commands::<group>.rs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    InitCom {
        baud: BaudRate,
    },
    SetDeviceId {
        device_id: u16,
    },
    GetDeviceId,
    GetModel,
    /// Sound the buzzer for `duration` × 10 ms
    Beep {
        duration: u8,
    },
    Light {
        color: LedColor,
    },
    InitType {
        work_type: WorkType,
    },
    Antenna {
        state: AntennaState,
    },
    Request {
        mode: RequestMode,
    },
    Anticollision,
    Select {
        uid: Uid,
    },
    Halt,
    Authenticate {
        mode: AuthMode,
        block: u8,
        key: Key,
    },
    Read {
        block: u8,
    },
    Write {
        block: u8,
        data: BlockData,
    },
    InitValue {
        block: u8,
        value: i32,
    },
    ReadValue {
        block: u8,
    },
    Decrement {
        block: u8,
        value: i32,
    },
    Increment {
        block: u8,
        value: i32,
    },
    Restore {
        block: u8,
    },
    Transfer {
        block: u8,
    },
}

impl Command {
    pub fn command_code(&self) -> CommandCode {
        match self {
            Self::InitCom { .. } => CommandCode::INIT_COM,
            Self::SetDeviceId { .. } => CommandCode::SET_DEVICE_ID,
            Self::GetDeviceId => CommandCode::GET_DEVICE_ID,
            Self::GetModel => CommandCode::GET_MODEL,
            Self::Beep { .. } => CommandCode::BEEP,
            Self::Light { .. } => CommandCode::LIGHT,
            Self::InitType { .. } => CommandCode::INIT_TYPE,
            Self::Antenna { .. } => CommandCode::ANTENNA,
            Self::Request { .. } => CommandCode::REQUEST,
            Self::Anticollision => CommandCode::ANTICOLLISION,
            Self::Select { .. } => CommandCode::SELECT,
            Self::Halt => CommandCode::HALT,
            Self::Authenticate { .. } => CommandCode::MIFARE_AUTHENTICATE,
            Self::Read { .. } => CommandCode::MIFARE_READ,
            Self::Write { .. } => CommandCode::MIFARE_WRITE,
            Self::InitValue { .. } => CommandCode::MIFARE_INIT_VALUE,
            Self::ReadValue { .. } => CommandCode::MIFARE_READ_VALUE,
            Self::Decrement { .. } => CommandCode::MIFARE_DECREMENT,
            Self::Increment { .. } => CommandCode::MIFARE_INCREMENT,
            Self::Restore { .. } => CommandCode::MIFARE_RESTORE,
            Self::Transfer { .. } => CommandCode::MIFARE_TRANSFER,
        }
    }

    /// Payload segments in wire order.
    pub fn segments(&self) -> Vec<Vec<u8>> {
        match self {
            Self::InitCom { baud } => encode_init_com(*baud),
            Self::SetDeviceId { device_id } => encode_set_device_id(*device_id),
            Self::GetDeviceId | Self::GetModel | Self::Anticollision | Self::Halt => Vec::new(),
            Self::Beep { duration } => encode_beep(*duration),
            Self::Light { color } => encode_light(*color),
            Self::InitType { work_type } => encode_init_type(*work_type),
            Self::Antenna { state } => encode_antenna(*state),
            Self::Request { mode } => encode_request(*mode),
            Self::Select { uid } => encode_select(*uid),
            Self::Authenticate { mode, block, key } => encode_authenticate(*mode, *block, *key),
            Self::Read { block }
            | Self::ReadValue { block }
            | Self::Restore { block }
            | Self::Transfer { block } => encode_block(*block),
            Self::Write { block, data } => encode_write(*block, *data),
            Self::InitValue { block, value }
            | Self::Decrement { block, value }
            | Self::Increment { block, value } => encode_value(*block, *value),
        }
    }

    /// Encode the command into a complete request frame.
    pub fn encode(&self) -> Result<Vec<u8>> {
        Frame::encode(self.command_code(), &self.segments())
    }
}
