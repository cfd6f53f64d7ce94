// libpn532/src/card/operations/mod.rs

//! Mifare Classic operations carried by InDataExchange.

pub mod auth;
pub mod read;
pub mod write;

pub use auth::authenticate;
pub use read::read_block;
pub use write::write_block;

use crate::card::{Access, Denial};
use crate::device::Pn532;
use crate::protocol::{Command, MifareCommand, Response};
use crate::{Error, Result};
use crate::constants::PN532_TARGET_NUMBER;

/// Run one InDataExchange. Bus failures and caller errors propagate;
/// anything the chip or card answered wrongly becomes a denial.
pub(crate) fn exchange(dev: &mut Pn532, request: MifareCommand) -> Result<Access<Response>> {
    let block = request.block();
    let cmd = Command::InDataExchange {
        target: PN532_TARGET_NUMBER,
        request,
    };
    match dev.execute(&cmd, cmd.response_len()) {
        Ok(resp) => Ok(Access::Granted(resp)),
        Err(e) => deny(block, e),
    }
}

pub(crate) fn deny<T>(block: u8, err: Error) -> Result<Access<T>> {
    if err.is_transport() || err.is_caller() {
        return Err(err);
    }
    log::warn!("block {} data exchange refused: {}", block, err);
    Ok(Access::Denied(Denial::Protocol(err)))
}

/// Map an InDataExchange status byte onto the access outcome.
pub(crate) fn check_status(block: u8, status: u8) -> Access<()> {
    if status == 0 {
        Access::Granted(())
    } else {
        log::warn!("block {} denied with status {:#04x}", block, status);
        Access::Denied(Denial::Status(status))
    }
}
