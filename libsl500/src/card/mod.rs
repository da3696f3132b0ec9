// libsl500/libsl500/src/card/mod.rs

use crate::Result;
use crate::device::Connection;
use crate::types::{Atqa, AuthMode, BlockData, Key, Uid};

/// A Mifare card selected by `Connection::detect_card`.
///
/// The card only remembers what the reader reported during selection;
/// every operation is a command sent through the connection it is handed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    uid: Uid,
    atqa: Atqa,
    sak: u8,
}

impl Card {
    pub fn new(uid: Uid, atqa: Atqa, sak: u8) -> Self {
        Self { uid, atqa, sak }
    }

    pub fn uid(&self) -> &Uid {
        &self.uid
    }
    pub fn atqa(&self) -> &Atqa {
        &self.atqa
    }
    pub fn sak(&self) -> u8 {
        self.sak
    }

    /// Authenticate the sector containing `block`.
    pub fn authenticate(
        &self,
        conn: &Connection,
        mode: AuthMode,
        block: u8,
        key: Key,
    ) -> Result<()> {
        conn.mifare_authenticate(mode, block, key)
    }

    pub fn read_block(&self, conn: &Connection, block: u8) -> Result<BlockData> {
        conn.mifare_read(block)
    }

    pub fn write_block(&self, conn: &Connection, block: u8, data: BlockData) -> Result<()> {
        conn.mifare_write(block, data)
    }

    pub fn read_value(&self, conn: &Connection, block: u8) -> Result<i32> {
        conn.mifare_read_value(block)
    }

    /// Put the card to sleep; it then only answers `RequestMode::All`.
    pub fn halt(&self, conn: &Connection) -> Result<()> {
        conn.halt()
    }
}
