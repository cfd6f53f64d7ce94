// libpn532/src/prelude.rs

pub use crate::card::{Access, CardSession, Denial, NegotiationState, PeerSession, Target};
pub use crate::device::{Pn532, Pn532Builder, Pn532Config, SharedPn532};
pub use crate::protocol::{Command, DepOutcome, DepRequest, PeerTarget, Response};
pub use crate::transport::{MockTransport, Transport};
pub use crate::{
    BaudRate, BlockData, Error, FirmwareVersion, Key, KeyType, Result, SamMode, SamStatus, Uid,
};

#[cfg(feature = "i2c")]
pub use crate::transport::I2cTransport;

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, default_settle_delay, ms, parse_hex};
