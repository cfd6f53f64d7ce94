// libpn532/src/test_support.rs

//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common MockTransport setup so tests across the
//! crate and tests/ directory can reuse the same logic.
#![allow(dead_code)]

use std::time::Duration;

use crate::constants::PN532_CHIP_TO_HOST;
use crate::device::{Pn532, Pn532Config};
use crate::protocol::Frame;
use crate::transport::MockTransport;

/// Encode `payload` as a chip-to-host frame. Panics on oversize payloads.
#[doc(hidden)]
pub fn response_frame(payload: &[u8]) -> Vec<u8> {
    match Frame::encode(PN532_CHIP_TO_HOST, payload) {
        Ok(f) => f,
        Err(e) => panic!("test frame: {}", e),
    }
}

/// Configuration without settling delays.
#[doc(hidden)]
pub fn fast_config() -> Pn532Config {
    Pn532Config::default().with_settle_delay(Duration::ZERO)
}

/// Driver backed by a clone of `mock`; the caller keeps its handle to
/// script responses and inspect traffic.
#[doc(hidden)]
pub fn mock_device(mock: &MockTransport) -> Pn532 {
    Pn532::new(Box::new(mock.clone()), fast_config())
}

/// MockTransport pre-seeded with an ACK and a response frame for each
/// payload in `replies`.
#[doc(hidden)]
pub fn mock_with_replies(replies: &[&[u8]]) -> MockTransport {
    let mock = MockTransport::new();
    for payload in replies {
        mock.push_ack();
        mock.push_response(response_frame(payload));
    }
    mock
}
