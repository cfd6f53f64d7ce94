// libpn532/src/protocol/frame.rs

use crate::constants::{
    PN532_ACK, PN532_ERROR_FRAME_CODE, PN532_MAX_PAYLOAD_LEN, PN532_MIN_FRAME_LEN, PN532_NACK,
    PN532_POSTAMBLE, PN532_PREAMBLE,
};
use crate::protocol::checksum::{dcs, lcs};
use crate::{Error, Result};

/// PN532 normal information frame.
///
/// Format: [Preamble+Start(3)] [Len(1)] [LCS(1)] [TFI(1)] [Payload(n)] [DCS(1)] [Postamble(1)]
///
/// `Len` counts the TFI (direction) byte plus the payload. Decoding is
/// pure so every structural rule can be checked against literal byte
/// arrays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub direction: u8,
    pub payload: Vec<u8>,
}

impl Frame {
    pub fn new(direction: u8, payload: Vec<u8>) -> Self {
        Self { direction, payload }
    }

    /// Encode a direction byte and payload into a full wire frame.
    pub fn encode(direction: u8, payload: &[u8]) -> Result<Vec<u8>> {
        if payload.len() > PN532_MAX_PAYLOAD_LEN {
            return Err(Error::PayloadTooLarge {
                max: PN532_MAX_PAYLOAD_LEN,
                actual: payload.len(),
            });
        }

        let len = payload.len() as u8 + 1;
        let mut out = Vec::with_capacity(PN532_MIN_FRAME_LEN + payload.len());
        out.extend_from_slice(&PN532_PREAMBLE);
        out.push(len);
        out.push(lcs(len));
        out.push(direction);
        out.extend_from_slice(payload);
        out.push(dcs(direction, payload));
        out.push(PN532_POSTAMBLE);
        Ok(out)
    }

    /// Decode one frame from the start of `raw`. Bytes after the postamble
    /// are ignored: bus reads return a fixed, command-declared count.
    ///
    /// Checks run in order: minimum length, preamble, LCS, declared length
    /// fits, DCS, postamble.
    pub fn decode(raw: &[u8]) -> Result<Frame> {
        if raw.len() < PN532_MIN_FRAME_LEN {
            return Err(Error::Malformed(format!(
                "frame too short: {} < {}",
                raw.len(),
                PN532_MIN_FRAME_LEN
            )));
        }

        if raw[..3] != PN532_PREAMBLE {
            return Err(Error::Malformed("invalid preamble".into()));
        }

        let len = raw[3];
        let lcs_expected = lcs(len);
        if raw[4] != lcs_expected {
            return Err(Error::ChecksumMismatch {
                expected: lcs_expected,
                actual: raw[4],
            });
        }
        if len == 0 {
            return Err(Error::Malformed("zero-length information frame".into()));
        }

        let required = PN532_MIN_FRAME_LEN - 1 + len as usize;
        if raw.len() < required {
            return Err(Error::Malformed(format!(
                "truncated frame: need {} bytes, got {}",
                required,
                raw.len()
            )));
        }

        let direction = raw[5];
        let payload_end = 5 + len as usize;
        let payload = &raw[6..payload_end];

        let dcs_expected = dcs(direction, payload);
        if raw[payload_end] != dcs_expected {
            return Err(Error::ChecksumMismatch {
                expected: dcs_expected,
                actual: raw[payload_end],
            });
        }

        if raw[payload_end + 1] != PN532_POSTAMBLE {
            return Err(Error::Malformed("invalid postamble".into()));
        }

        Ok(Frame::new(direction, payload.to_vec()))
    }

    /// True for the chip's syntax-error frame (00 00 FF 01 FF 7F 81 00).
    pub fn is_error_frame(&self) -> bool {
        self.direction == PN532_ERROR_FRAME_CODE && self.payload.is_empty()
    }

    /// Number of bytes this frame occupies on the wire.
    pub fn wire_len(&self) -> usize {
        PN532_MIN_FRAME_LEN + self.payload.len()
    }
}

/// Exact match against the ACK constant. Anything else, including a
/// truncated ACK, is simply not an ACK.
pub fn is_ack(raw: &[u8]) -> bool {
    raw == PN532_ACK
}

/// Exact match against the NACK constant.
pub fn is_nack(raw: &[u8]) -> bool {
    raw == PN532_NACK
}
