// libpn532/src/card/operations/read.rs

use super::{deny, exchange};
use crate::card::{Access, Denial};
use crate::device::Pn532;
use crate::protocol::{MifareCommand, responses};
use crate::types::BlockData;
use crate::Result;

/// Read one 16-byte block. The sector must already be authenticated.
pub fn read_block(dev: &mut Pn532, block: u8) -> Result<Access<BlockData>> {
    let resp = match exchange(dev, MifareCommand::Read { block })? {
        Access::Granted(resp) => resp,
        Access::Denied(d) => return Ok(Access::Denied(d)),
    };
    match responses::decode_exchange_read(&resp.data) {
        Ok((_, Some(data))) => {
            log::debug!("block {}: {}", block, data.to_hex());
            Ok(Access::Granted(data))
        }
        Ok((status, None)) => {
            log::warn!("block {} denied with status {:#04x}", block, status);
            Ok(Access::Denied(Denial::Status(status)))
        }
        Err(e) => deny(block, e),
    }
}
