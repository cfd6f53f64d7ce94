// libpn532/src/device/builder.rs

use std::time::Duration;

use crate::device::config::Pn532Config;
use crate::device::handle::Pn532;
use crate::transport::Transport;
use crate::{Error, Result};

/// Helper to construct a driver with optional configuration.
#[derive(Default)]
pub struct Pn532Builder {
    transport: Option<Box<dyn Transport + Send>>,
    config: Pn532Config,
}

impl Pn532Builder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Provide an already-created transport (e.g. MockTransport).
    pub fn with_transport<T: Transport + Send + 'static>(mut self, transport: T) -> Self {
        self.transport = Some(Box::new(transport));
        self
    }

    pub fn address(mut self, address: u8) -> Self {
        self.config.address = address;
        self
    }

    pub fn settle_delay(mut self, delay: Duration) -> Self {
        self.config.settle_delay = delay;
        self
    }

    pub fn config(mut self, config: Pn532Config) -> Self {
        self.config = config;
        self
    }

    /// Consume the builder. A transport is required.
    pub fn build(self) -> Result<Pn532> {
        match self.transport {
            Some(t) => Ok(Pn532::new(t, self.config)),
            None => Err(Error::InvalidArgument("no transport configured".into())),
        }
    }
}
