// libsl500/libsl500/src/types.rs

use crate::Error;
use std::convert::TryFrom;

/// Command code carried big-endian at offset 6 of every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[display(fmt = "{:#06x}", _0)]
pub struct CommandCode(u16);

impl CommandCode {
    // system
    pub const INIT_COM: Self = Self(0x0101);
    pub const SET_DEVICE_ID: Self = Self(0x0201);
    pub const GET_DEVICE_ID: Self = Self(0x0301);
    pub const GET_MODEL: Self = Self(0x0401);
    pub const BEEP: Self = Self(0x0601);
    pub const LIGHT: Self = Self(0x0701);
    pub const INIT_TYPE: Self = Self(0x0801);
    pub const ANTENNA: Self = Self(0x0C01);

    // ISO14443A
    pub const REQUEST: Self = Self(0x0102);
    pub const ANTICOLLISION: Self = Self(0x0202);
    pub const SELECT: Self = Self(0x0302);
    pub const HALT: Self = Self(0x0402);

    // Mifare Classic
    pub const MIFARE_AUTHENTICATE: Self = Self(0x0702);
    pub const MIFARE_READ: Self = Self(0x0802);
    pub const MIFARE_WRITE: Self = Self(0x0902);
    pub const MIFARE_INIT_VALUE: Self = Self(0x0A02);
    pub const MIFARE_READ_VALUE: Self = Self(0x0B02);
    pub const MIFARE_DECREMENT: Self = Self(0x0C02);
    pub const MIFARE_INCREMENT: Self = Self(0x0D02);
    pub const MIFARE_RESTORE: Self = Self(0x0E02);
    pub const MIFARE_TRANSFER: Self = Self(0x0F02);

    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    pub fn to_be_bytes(&self) -> [u8; 2] {
        self.0.to_be_bytes()
    }
}

impl From<u16> for CommandCode {
    fn from(code: u16) -> Self {
        Self(code)
    }
}

/// Serial line rates understood by the reader, with the index byte the
/// init-communication command expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BaudRate {
    B4800,
    B9600,
    B14400,
    B19200,
    B28800,
    B38400,
    B57600,
    B115200,
}

impl BaudRate {
    /// All rates in device index order.
    pub const ALL: [BaudRate; 8] = [
        BaudRate::B4800,
        BaudRate::B9600,
        BaudRate::B14400,
        BaudRate::B19200,
        BaudRate::B28800,
        BaudRate::B38400,
        BaudRate::B57600,
        BaudRate::B115200,
    ];

    /// Index byte sent with the init-communication command.
    pub const fn code(self) -> u8 {
        self as u8
    }

    pub const fn bits_per_second(self) -> u32 {
        match self {
            BaudRate::B4800 => 4800,
            BaudRate::B9600 => 9600,
            BaudRate::B14400 => 14400,
            BaudRate::B19200 => 19200,
            BaudRate::B28800 => 28800,
            BaudRate::B38400 => 38400,
            BaudRate::B57600 => 57600,
            BaudRate::B115200 => 115200,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.get(code as usize).copied()
    }

    pub fn from_bits_per_second(bps: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.bits_per_second() == bps)
    }
}

impl Default for BaudRate {
    fn default() -> Self {
        // Factory setting of the reader.
        BaudRate::B19200
    }
}

/// RF field state
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AntennaState {
    Off = 0x00,
    On = 0x01,
}

/// Colour of the status LED
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedColor {
    Off = 0x00,
    Red = 0x01,
    Green = 0x02,
    Yellow = 0x03,
}

/// Which cards answer a request: only idle ones, or halted ones as well
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestMode {
    Idle = 0x26,
    All = 0x52,
}

/// Mifare key slot used for authentication
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    KeyA = 0x60,
    KeyB = 0x61,
}

/// Card protocol the reader's RF front end is configured for
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkType {
    TypeA = 0x0A,
    TypeB = 0x0B,
    Iso15693 = 0x01,
}

/// Mifare sector key (6 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::From)]
pub struct Key([u8; 6]);

impl Key {
    /// Transport key of blank cards
    pub const DEFAULT: Self = Self([0xFF; 6]);

    pub fn from_bytes(bytes: [u8; 6]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 6] {
        &self.0
    }
}

/// Card serial number returned by anticollision (4 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::From)]
pub struct Uid([u8; 4]);

impl Uid {
    pub fn from_bytes(bytes: [u8; 4]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for Uid {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != 4 {
            return Err(Error::InvalidLength {
                expected: 4,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 4];
        arr.copy_from_slice(bytes);
        Ok(Self(arr))
    }
}

/// Answer to request: card type reported by the request command
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::From)]
pub struct Atqa([u8; 2]);

impl Atqa {
    pub fn from_bytes(bytes: [u8; 2]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 2] {
        &self.0
    }

    /// Mifare Classic 1K answers 0x0004, 4K answers 0x0002.
    pub fn as_u16(&self) -> u16 {
        u16::from_le_bytes(self.0)
    }
}

/// One Mifare block (16 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::From)]
pub struct BlockData([u8; 16]);

impl BlockData {
    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex_spaced(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for BlockData {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != 16 {
            return Err(Error::InvalidLength {
                expected: 16,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 16];
        arr.copy_from_slice(bytes);
        Ok(Self(arr))
    }
}
