// libsl500/libsl500/src/constants.rs
//! Wire-level constants of the SL500 serial frame protocol

/// Frame preamble: 0xAA 0xBB
pub const SL500_PREAMBLE: [u8; 2] = [0xAA, 0xBB];

/// Byte that is escaped on the wire as `0xAA 0x00` when it occurs after the
/// preamble.
pub const ESCAPE_BYTE: u8 = 0xAA;

/// Filler byte that follows an escaped `ESCAPE_BYTE`.
pub const ESCAPE_FILLER: u8 = 0x00;

/// Reserved byte at offset 3, always zero
pub const RESERVED: u8 = 0x00;

/// Device id sent by the host. The reader answers on any id.
pub const HOST_DEVICE_ID: u16 = 0x0000;

/// Bytes counted by the length field before the payload:
/// reserved(1) + device id(2) + command code(2)
pub const HEADER_LEN: usize = 5;

/// Bytes on the wire that the length field does not count:
/// preamble(2) + length(1) + checksum(1)
pub const FRAME_OVERHEAD: usize = 4;

/// Offset at which checksummed bytes start (the reserved byte)
pub const CHECKSUM_START: usize = 3;

/// Offset of the status byte in a raw response frame
pub const STATUS_OFFSET: usize = 8;

/// Status byte reported by the reader on success
pub const STATUS_OK: u8 = 0x00;

/// Smallest complete response frame: overhead + header + status
pub const MIN_RESPONSE_FRAME_LEN: usize = FRAME_OVERHEAD + HEADER_LEN + 1;

/// Largest value representable by the length byte
pub const MAX_FRAME_LENGTH: usize = 255;

/// Size of a single transport read in the reassembly loop
pub const READ_CHUNK_SIZE: usize = 128;

/// Number of reads attempted before a response is declared timed out
pub const DEFAULT_MAX_ATTEMPTS: usize = 50;
