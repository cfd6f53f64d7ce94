// libpn532/src/types.rs

use crate::Error;
use crate::constants::{MIFARE_BLOCK_LEN, MIFARE_CMD_AUTH_A, MIFARE_CMD_AUTH_B};
use derive_more::Display;
use std::convert::TryFrom;

/// Card identifier (NFCID1 / IDm / PUPI). 4 to 10 bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Uid(Vec<u8>);

impl Uid {
    pub const MIN_LEN: usize = 4;
    pub const MAX_LEN: usize = 10;

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(&self.0)
    }
}

impl TryFrom<&[u8]> for Uid {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if !(Self::MIN_LEN..=Self::MAX_LEN).contains(&bytes.len()) {
            return Err(Error::Malformed(format!(
                "identifier length {} outside {}..={}",
                bytes.len(),
                Self::MIN_LEN,
                Self::MAX_LEN
            )));
        }
        Ok(Self(bytes.to_vec()))
    }
}

/// Mifare Classic sector key (6 bytes). Supplied per call, never stored
/// by the driver beyond a card session.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Key([u8; 6]);

impl Key {
    /// Factory default transport key.
    pub const DEFAULT: Self = Self([0xFF; 6]);

    pub const fn new(bytes: [u8; 6]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 6] {
        &self.0
    }
}

// Key bytes stay out of logs.
impl std::fmt::Debug for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Key(******)")
    }
}

/// Which sector key to authenticate with.
#[repr(u8)]
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KeyType {
    #[display(fmt = "A")]
    A = MIFARE_CMD_AUTH_A,
    #[display(fmt = "B")]
    B = MIFARE_CMD_AUTH_B,
}

impl KeyType {
    pub fn auth_command(self) -> u8 {
        self as u8
    }
}

/// BlockData (16 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlockData([u8; MIFARE_BLOCK_LEN]);

impl BlockData {
    pub fn from_bytes(bytes: [u8; MIFARE_BLOCK_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; MIFARE_BLOCK_LEN] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex_spaced(self.as_bytes())
    }

    pub fn to_ascii_safe(&self) -> String {
        self.0
            .iter()
            .map(|&b| {
                if b.is_ascii_graphic() || b == b' ' {
                    b as char
                } else {
                    '.'
                }
            })
            .collect()
    }
}

impl TryFrom<&[u8]> for BlockData {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let arr: [u8; MIFARE_BLOCK_LEN] = bytes.try_into().map_err(|_| {
            Error::InvalidArgument(format!(
                "block data must be {} bytes, got {}",
                MIFARE_BLOCK_LEN,
                bytes.len()
            ))
        })?;
        Ok(Self(arr))
    }
}

/// Modulation / bit rate for passive target detection (BrTy).
#[repr(u8)]
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BaudRate {
    #[default]
    #[display(fmt = "ISO14443A 106 kbps")]
    Iso14443A106 = 0x00,
    #[display(fmt = "FeliCa 212 kbps")]
    Felica212 = 0x01,
    #[display(fmt = "FeliCa 424 kbps")]
    Felica424 = 0x02,
    #[display(fmt = "ISO14443B 106 kbps")]
    Iso14443B106 = 0x03,
    #[display(fmt = "Jewel 106 kbps")]
    Jewel106 = 0x04,
}

impl BaudRate {
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

/// SAMConfiguration mode byte.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SamMode {
    /// SAM not used (plain reader/writer).
    #[default]
    Normal = 0x01,
    VirtualCard = 0x02,
    WiredCard = 0x03,
    DualCard = 0x04,
}

/// Outcome of SAMConfiguration.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum SamStatus {
    #[display(fmt = "configured")]
    Configured,
    #[display(fmt = "configuration failed")]
    ConfigFailed,
}

/// Firmware report returned by GetFirmwareVersion.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[display(fmt = "PN5{:X} firmware {}.{}", family, major, minor)]
pub struct FirmwareVersion {
    /// IC family byte, 0x32 for PN532.
    pub family: u8,
    pub major: u8,
    pub minor: u8,
    /// Supported modulation bitmask.
    pub support: u8,
}

impl FirmwareVersion {
    /// Packed form `family << 24 | major << 16 | minor << 8 | support`.
    pub fn as_u32(&self) -> u32 {
        u32::from_be_bytes([self.family, self.major, self.minor, self.support])
    }
}
