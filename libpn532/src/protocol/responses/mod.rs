// libpn532/src/protocol/responses/mod.rs

pub mod dep;
pub mod exchange;
pub mod target;
pub mod version;

pub use dep::{DepOutcome, PeerTarget, decode_jump_for_dep};
pub use exchange::{decode_exchange_read, decode_exchange_status};
pub use target::decode_in_list_passive_target;
pub use version::decode_firmware_version;

use crate::constants::PN532_CHIP_TO_HOST;
use crate::protocol::Frame;
use crate::protocol::parser;
use crate::{Error, Result};

/// A validated chip reply: the echoed response code and the
/// command-specific fields that follow it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub code: u8,
    pub data: Vec<u8>,
}

impl Response {
    /// Validate a decoded frame as the reply to a command whose echoed
    /// code is `expected_code`.
    pub fn from_frame(expected_code: u8, frame: Frame) -> Result<Self> {
        if frame.is_error_frame() {
            return Err(Error::ApplicationError);
        }
        if frame.direction != PN532_CHIP_TO_HOST {
            return Err(Error::Malformed(format!(
                "unexpected direction byte {:#04x}",
                frame.direction
            )));
        }
        parser::expect_response_code(&frame.payload, expected_code)?;

        let mut data = frame.payload;
        data.remove(0);
        Ok(Self {
            code: expected_code,
            data,
        })
    }

    /// First field after the response code. InDataExchange and
    /// InJumpForDEP put their status byte here.
    pub fn status(&self) -> Result<u8> {
        parser::byte_at(&self.data, 0)
    }
}
