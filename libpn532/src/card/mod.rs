// libpn532/src/card/mod.rs

//! Targets and the card-level operations run against them.

use crate::Error;
use crate::types::{BaudRate, Uid};

pub mod operations;
pub mod peer;
pub mod session;

pub use peer::{NegotiationState, PeerSession};
pub use session::CardSession;

/// A passive target reported by InListPassiveTarget.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Target {
    /// Logical target number assigned by the chip (Tg).
    pub number: u8,
    pub baud_rate: BaudRate,
    pub uid: Uid,
    /// ISO14443A / Jewel only.
    pub sens_res: Option<[u8; 2]>,
    /// ISO14443A only.
    pub sel_res: Option<u8>,
}

impl Target {
    /// Mifare Classic 1K/4K per the SAK byte.
    pub fn is_mifare_classic(&self) -> bool {
        matches!(self.sel_res, Some(0x08 | 0x18 | 0x09 | 0x88))
    }
}

/// Why the card side refused an operation.
#[derive(Debug)]
pub enum Denial {
    /// Non-zero InDataExchange status byte.
    Status(u8),
    /// The reply could not be used (missing ACK, bad checksum, wrong echo,
    /// application error frame).
    Protocol(Error),
}

impl std::fmt::Display for Denial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Denial::Status(s) => write!(f, "card status {:#04x}", s),
            Denial::Protocol(e) => write!(f, "{}", e),
        }
    }
}

/// Result of a Mifare operation that reached the chip.
#[derive(Debug)]
pub enum Access<T> {
    Granted(T),
    Denied(Denial),
}

impl<T> Access<T> {
    pub fn is_granted(&self) -> bool {
        matches!(self, Access::Granted(_))
    }

    pub fn granted(self) -> Option<T> {
        match self {
            Access::Granted(v) => Some(v),
            Access::Denied(_) => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Access<U> {
        match self {
            Access::Granted(v) => Access::Granted(f(v)),
            Access::Denied(d) => Access::Denied(d),
        }
    }
}
