// libpn532/src/device/config.rs

use std::time::Duration;

use crate::constants::PN532_I2C_ADDRESS;
use crate::utils::default_settle_delay;

/// Per-instance driver configuration. Passed into the constructor; the
/// driver keeps no process-wide state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pn532Config {
    /// 7-bit bus address of the chip.
    pub address: u8,
    /// Wait between a write and the following read, and between the ACK
    /// and the response.
    pub settle_delay: Duration,
}

impl Pn532Config {
    pub fn new(address: u8) -> Self {
        Self {
            address,
            ..Self::default()
        }
    }

    pub fn with_settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay = delay;
        self
    }
}

impl Default for Pn532Config {
    fn default() -> Self {
        Self {
            address: PN532_I2C_ADDRESS,
            settle_delay: default_settle_delay(),
        }
    }
}
