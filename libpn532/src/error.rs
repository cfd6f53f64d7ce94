// libpn532/src/error.rs

use std::io;

use thiserror::Error;

/// Infrastructure errors: bus failures and frames the driver could not
/// accept. Expected command outcomes (no card, denied access) are not
/// represented here.
#[derive(Error, Debug)]
pub enum Error {
    #[error("bus write failed: {0}")]
    TransportWrite(#[source] io::Error),

    #[error("bus read failed: {0}")]
    TransportRead(#[source] io::Error),

    #[error("no ACK received after settling delay")]
    AckTimeout,

    #[error("malformed frame: {0}")]
    Malformed(String),

    #[error("checksum mismatch: expected {expected:#04x}, got {actual:#04x}")]
    ChecksumMismatch { expected: u8, actual: u8 },

    #[error("unexpected response code: expected {expected:#04x}, got {actual:#04x}")]
    UnexpectedOpcode { expected: u8, actual: u8 },

    #[error("payload too large: max {max}, got {actual}")]
    PayloadTooLarge { max: usize, actual: usize },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("chip reported an application-level error frame")]
    ApplicationError,
}

impl Error {
    /// True for failures that originate on the bus itself rather than in
    /// the content of a frame.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::TransportWrite(_) | Error::TransportRead(_))
    }

    /// Errors caused by the caller's input, raised before anything that
    /// depends on the chip's answer.
    pub fn is_caller(&self) -> bool {
        matches!(self, Error::InvalidArgument(_) | Error::PayloadTooLarge { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
