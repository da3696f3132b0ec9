// libsl500/libsl500/src/protocol/checksum.rs

/// XOR-fold used as the SL500 frame checksum.
///
/// Covers every byte from the reserved byte through the last payload byte.
/// Escape fillers are `0x00`, so the result is the same whether computed
/// over the stuffed or the unstuffed form.
pub fn xor(bytes: &[u8]) -> u8 {
    bytes.iter().fold(0u8, |acc, &b| acc ^ b)
}
