//! Utilities for libpn532: small, reusable helpers used across the crate.
//!
//! Hex rendering for frame logging and the settling-delay helpers.

pub mod hex;
pub mod timeout;

pub use hex::*;
pub use timeout::*;
