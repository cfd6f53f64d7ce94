// libpn532/src/protocol/codec.rs

use crate::constants::PN532_HOST_TO_CHIP;
use crate::Result;

use super::Frame;
use super::commands::Command;
use super::responses::Response;

/// Encode a Command into a full host->chip wire frame.
pub fn encode_command_frame(cmd: &Command) -> Result<Vec<u8>> {
    Frame::encode(PN532_HOST_TO_CHIP, &cmd.encode())
}

/// Decode a raw response buffer and check that it echoes `opcode + 1`.
pub fn decode_response_frame(opcode: u8, raw: &[u8]) -> Result<Response> {
    let frame = Frame::decode(raw)?;
    Response::from_frame(opcode.wrapping_add(1), frame)
}
