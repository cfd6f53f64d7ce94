// libpn532/src/device/handshake.rs

//! Command / ACK / response exchange.
//!
//! One `Handshake` drives exactly one exchange and is dropped afterwards:
//! no retries, no state carried between calls. A write that reached the
//! chip cannot be withdrawn, so there is no cancellation point between
//! `Sent` and `Complete`.

use crate::constants::ACK_READ_LEN;
use crate::device::config::Pn532Config;
use crate::protocol::{Command, Response, codec, is_ack, is_nack};
use crate::transport::Transport;
use crate::utils::{bytes_to_hex_spaced, settle};
use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandshakeState {
    Idle,
    Sent,
    AwaitingAck,
    AckReceived,
    AwaitingResponse,
    Complete,
    Failed,
}

pub struct Handshake<'a> {
    transport: &'a mut dyn Transport,
    config: &'a Pn532Config,
    state: HandshakeState,
}

impl<'a> Handshake<'a> {
    pub fn new(transport: &'a mut dyn Transport, config: &'a Pn532Config) -> Self {
        Self {
            transport,
            config,
            state: HandshakeState::Idle,
        }
    }

    /// Pick up an exchange whose command was already ACKed by an earlier
    /// call; only the response remains to be read.
    pub fn resume(transport: &'a mut dyn Transport, config: &'a Pn532Config) -> Self {
        Self {
            transport,
            config,
            state: HandshakeState::AckReceived,
        }
    }

    pub fn state(&self) -> HandshakeState {
        self.state
    }

    fn advance(&mut self, next: HandshakeState) {
        log::trace!("handshake {:?} -> {:?}", self.state, next);
        self.state = next;
    }

    fn fail<T>(&mut self, err: Error) -> Result<T> {
        log::debug!("handshake failed in {:?}: {}", self.state, err);
        self.advance(HandshakeState::Failed);
        Err(err)
    }

    /// Full exchange: write, ACK, response.
    pub fn execute(&mut self, cmd: &Command, expected_len: usize) -> Result<Response> {
        self.send(cmd)?;
        self.receive(cmd.opcode(), expected_len)
    }

    /// `Idle -> Sent -> AwaitingAck -> AckReceived`
    pub fn send(&mut self, cmd: &Command) -> Result<()> {
        let frame = match codec::encode_command_frame(cmd) {
            Ok(f) => f,
            Err(e) => return self.fail(e),
        };

        log::debug!("-> {}", bytes_to_hex_spaced(&frame));
        if let Err(e) = self.transport.write(self.config.address, &frame) {
            return self.fail(Error::TransportWrite(e));
        }
        self.advance(HandshakeState::Sent);

        settle(self.config.settle_delay);
        self.advance(HandshakeState::AwaitingAck);

        let ack = match self.transport.read(self.config.address, ACK_READ_LEN) {
            Ok(b) => b,
            Err(e) => return self.fail(Error::TransportRead(e)),
        };
        if !is_ack(&ack) {
            if is_nack(&ack) {
                log::debug!("<- NACK");
            } else {
                log::debug!("<- {} (not an ACK)", bytes_to_hex_spaced(&ack));
            }
            return self.fail(Error::AckTimeout);
        }
        self.advance(HandshakeState::AckReceived);
        Ok(())
    }

    /// `AckReceived -> AwaitingResponse -> Complete`
    pub fn receive(&mut self, opcode: u8, expected_len: usize) -> Result<Response> {
        settle(self.config.settle_delay);
        self.advance(HandshakeState::AwaitingResponse);

        let raw = match self.transport.read(self.config.address, expected_len) {
            Ok(b) => b,
            Err(e) => return self.fail(Error::TransportRead(e)),
        };
        log::debug!("<- {}", bytes_to_hex_spaced(&raw));

        match codec::decode_response_frame(opcode, &raw) {
            Ok(resp) => {
                self.advance(HandshakeState::Complete);
                Ok(resp)
            }
            Err(e) => self.fail(e),
        }
    }
}
