// libpn532/src/lib.rs

//! libpn532
//!
//! Pure Rust driver for the NXP PN532 NFC controller: frame codec,
//! command/ACK/response handshake, and the Mifare Classic and
//! peer-to-peer operations built on top of it.
#![warn(missing_docs)]

pub mod card;
pub mod constants;
pub mod device;
pub mod error;
pub mod prelude;
pub mod protocol;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the value types in `types` are available for consumers.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
