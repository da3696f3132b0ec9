// libsl500/libsl500/src/protocol/codec.rs

use log::{debug, warn};

use crate::Result;
use crate::protocol::Frame;
use crate::protocol::commands::Command;
use crate::protocol::reader::{ReaderConfig, read_frame};
use crate::transport::Transport;
use crate::types::CommandCode;
use crate::utils::bytes_to_hex_spaced;

/// Encode a Command into a full wire frame.
pub fn encode_command_frame(cmd: &Command) -> Result<Vec<u8>> {
    cmd.encode()
}

/// Decode a raw response frame into the command payload.
pub fn decode_response_frame(raw: &[u8]) -> Result<Vec<u8>> {
    Frame::decode(raw)
}

/// One request/response exchange: write the request frame, reassemble the
/// reply and return its payload.
///
/// The caller must hold exclusive access to `transport` for the duration of
/// the call; the protocol has no request ids to match replies with.
pub fn exchange<S: AsRef<[u8]>>(
    transport: &mut dyn Transport,
    command: CommandCode,
    segments: &[S],
    config: &ReaderConfig,
) -> Result<Vec<u8>> {
    let request = Frame::encode(command, segments)?;
    debug!(
        "sl500[{}]: -> {}",
        transport.name(),
        bytes_to_hex_spaced(&request)
    );
    transport.write(&request)?;

    let raw = read_frame(transport, config)?;
    let response = Frame::decode_response(&raw).inspect_err(|e| {
        warn!(
            "sl500[{}]: command {} failed: {} (raw {})",
            transport.name(),
            command,
            e,
            bytes_to_hex_spaced(&raw)
        );
    })?;
    if response.command != command {
        debug!(
            "sl500[{}]: reply echoes command {} for request {}",
            transport.name(),
            response.command,
            command
        );
    }
    debug!(
        "sl500[{}]: <- {}",
        transport.name(),
        bytes_to_hex_spaced(&response.payload)
    );
    Ok(response.payload)
}
