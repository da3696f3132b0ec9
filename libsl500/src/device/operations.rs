// libsl500/libsl500/src/device/operations.rs

//! Typed wrappers over `Connection::execute`, one per reader command.

use log::debug;

use crate::Result;
use crate::card::Card;
use crate::device::Connection;
use crate::protocol::commands::Command;
use crate::protocol::responses::{
    decode_atqa, decode_block, decode_device_id, decode_model, decode_sak, decode_uid,
    decode_value,
};
use crate::types::{
    AntennaState, Atqa, AuthMode, BaudRate, BlockData, Key, LedColor, RequestMode, Uid, WorkType,
};

impl Connection {
    /// Tell the reader which line rate to use from now on. The host side of
    /// the line must be reopened at the new rate afterwards.
    pub fn init_com(&self, baud: BaudRate) -> Result<()> {
        self.execute(&Command::InitCom { baud }).map(drop)
    }

    pub fn set_device_id(&self, device_id: u16) -> Result<()> {
        self.execute(&Command::SetDeviceId { device_id }).map(drop)
    }

    pub fn device_id(&self) -> Result<u16> {
        decode_device_id(&self.execute(&Command::GetDeviceId)?)
    }

    /// Firmware identification string
    pub fn model(&self) -> Result<String> {
        Ok(decode_model(&self.execute(&Command::GetModel)?))
    }

    /// Sound the buzzer for `duration` × 10 ms.
    pub fn beep(&self, duration: u8) -> Result<()> {
        self.execute(&Command::Beep { duration }).map(drop)
    }

    pub fn light(&self, color: LedColor) -> Result<()> {
        self.execute(&Command::Light { color }).map(drop)
    }

    pub fn init_type(&self, work_type: WorkType) -> Result<()> {
        self.execute(&Command::InitType { work_type }).map(drop)
    }

    pub fn set_antenna(&self, state: AntennaState) -> Result<()> {
        self.execute(&Command::Antenna { state }).map(drop)
    }

    pub fn request(&self, mode: RequestMode) -> Result<Atqa> {
        decode_atqa(&self.execute(&Command::Request { mode })?)
    }

    pub fn anticollision(&self) -> Result<Uid> {
        decode_uid(&self.execute(&Command::Anticollision)?)
    }

    /// Select the card with `uid`; returns its SAK byte.
    pub fn select(&self, uid: Uid) -> Result<u8> {
        decode_sak(&self.execute(&Command::Select { uid })?)
    }

    pub fn halt(&self) -> Result<()> {
        self.execute(&Command::Halt).map(drop)
    }

    pub fn mifare_authenticate(&self, mode: AuthMode, block: u8, key: Key) -> Result<()> {
        self.execute(&Command::Authenticate { mode, block, key })
            .map(drop)
    }

    pub fn mifare_read(&self, block: u8) -> Result<BlockData> {
        decode_block(&self.execute(&Command::Read { block })?)
    }

    pub fn mifare_write(&self, block: u8, data: BlockData) -> Result<()> {
        self.execute(&Command::Write { block, data }).map(drop)
    }

    /// Format `block` as a value block holding `value`.
    pub fn mifare_init_value(&self, block: u8, value: i32) -> Result<()> {
        self.execute(&Command::InitValue { block, value }).map(drop)
    }

    pub fn mifare_read_value(&self, block: u8) -> Result<i32> {
        decode_value(&self.execute(&Command::ReadValue { block })?)
    }

    pub fn mifare_decrement(&self, block: u8, value: i32) -> Result<()> {
        self.execute(&Command::Decrement { block, value }).map(drop)
    }

    pub fn mifare_increment(&self, block: u8, value: i32) -> Result<()> {
        self.execute(&Command::Increment { block, value }).map(drop)
    }

    pub fn mifare_restore(&self, block: u8) -> Result<()> {
        self.execute(&Command::Restore { block }).map(drop)
    }

    /// Commit the card's internal value register to `block`.
    pub fn mifare_transfer(&self, block: u8) -> Result<()> {
        self.execute(&Command::Transfer { block }).map(drop)
    }

    /// Request, anticollision and select in one go.
    pub fn detect_card(&self, mode: RequestMode) -> Result<Card> {
        let atqa = self.request(mode)?;
        let uid = self.anticollision()?;
        let sak = self.select(uid)?;
        debug!(
            "sl500: card {} selected (atqa {:#06x}, sak {:#04x})",
            uid.to_hex(),
            atqa.as_u16(),
            sak
        );
        Ok(Card::new(uid, atqa, sak))
    }
}
