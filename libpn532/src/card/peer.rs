// libpn532/src/card/peer.rs

//! Peer-to-peer activation as a resumable two-phase exchange.
//!
//! The chip ACKs InJumpForDEP quickly but may take a while to find a
//! peer. `PeerSession::poll` splits the exchange so the caller can come
//! back for the response later instead of blocking on one long read.

use crate::device::Pn532;
use crate::protocol::{Command, DepOutcome, DepRequest, responses};
use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NegotiationState {
    #[default]
    NotSent,
    /// Command written and ACKed; response still outstanding.
    Sent,
}

#[derive(Debug, Clone)]
pub struct PeerSession {
    request: DepRequest,
    state: NegotiationState,
}

impl Default for PeerSession {
    fn default() -> Self {
        Self::new(DepRequest::default())
    }
}

impl PeerSession {
    pub fn new(request: DepRequest) -> Self {
        Self {
            request,
            state: NegotiationState::NotSent,
        }
    }

    pub fn state(&self) -> NegotiationState {
        self.state
    }

    /// Drop an outstanding negotiation; the next poll sends again.
    pub fn reset(&mut self) {
        self.state = NegotiationState::NotSent;
    }

    /// Advance the negotiation by one step.
    ///
    /// Sends the command if it has not been ACKed yet, then tries to read
    /// the response. `Ok(None)` means nothing usable arrived; the session
    /// keeps its state so a later poll resumes where this one stopped.
    /// Any decoded outcome, success or failure, returns the session to
    /// `NotSent`.
    pub fn poll(&mut self, dev: &mut Pn532) -> Result<Option<DepOutcome>> {
        let cmd = Command::InJumpForDep(self.request.clone());

        if self.state == NegotiationState::NotSent {
            if let Err(e) = dev.send_command(&cmd) {
                return soft_fail(e);
            }
            log::debug!("peer negotiation sent");
            self.state = NegotiationState::Sent;
        }

        let resp = match dev.read_response(&cmd) {
            Ok(resp) => resp,
            Err(e) => return soft_fail(e),
        };
        let outcome = match responses::decode_jump_for_dep(&resp.data) {
            Ok(o) => o,
            Err(e) => return soft_fail(e),
        };

        self.state = NegotiationState::NotSent;
        match &outcome {
            DepOutcome::Activated(peer) => log::info!("peer {} activated", peer.number),
            DepOutcome::Failed { status } => {
                log::warn!("peer activation failed with status {:#04x}", status)
            }
        }
        Ok(Some(outcome))
    }
}

fn soft_fail<T>(err: Error) -> Result<Option<T>> {
    if err.is_transport() || err.is_caller() {
        return Err(err);
    }
    log::warn!("peer negotiation incomplete: {}", err);
    Ok(None)
}
