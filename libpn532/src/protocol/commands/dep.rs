// libpn532/src/protocol/commands/dep.rs

//! InJumpForDEP request. Only the active-mode, 424 kbps combination is
//! supported.

/// Active communication mode (ActPass).
pub const DEP_MODE_ACTIVE: u8 = 0x01;
/// 424 kbps (BR).
pub const DEP_BAUD_424: u8 = 0x02;
/// Next byte announcing the initiator data block.
pub const DEP_NEXT: u8 = 0x01;

/// Initiator data sent when the caller does not provide any:
/// identifier bytes followed by a two-byte general-bytes block.
pub const DEFAULT_INITIATOR_DATA: [u8; 12] = [
    0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF, 0x00, 0x11, 0x22, 0x02, 0x00, 0xFF,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepRequest {
    pub initiator_data: Vec<u8>,
}

impl DepRequest {
    pub fn new(initiator_data: Vec<u8>) -> Self {
        Self { initiator_data }
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut v = Vec::with_capacity(3 + self.initiator_data.len());
        v.extend_from_slice(&[DEP_MODE_ACTIVE, DEP_BAUD_424, DEP_NEXT]);
        v.extend_from_slice(&self.initiator_data);
        v
    }
}

impl Default for DepRequest {
    fn default() -> Self {
        Self::new(DEFAULT_INITIATOR_DATA.to_vec())
    }
}
