// libpn532/src/card/operations/write.rs

use super::{check_status, deny, exchange};
use crate::card::Access;
use crate::device::Pn532;
use crate::protocol::{MifareCommand, responses};
use crate::types::BlockData;
use crate::Result;

/// Write one block. `data` is validated before anything is sent.
pub fn write_block(dev: &mut Pn532, block: u8, data: &[u8]) -> Result<Access<()>> {
    let data = BlockData::try_from(data)?;
    let resp = match exchange(dev, MifareCommand::Write { block, data })? {
        Access::Granted(resp) => resp,
        Access::Denied(d) => return Ok(Access::Denied(d)),
    };
    match responses::decode_exchange_status(&resp.data) {
        Ok(status) => Ok(check_status(block, status)),
        Err(e) => deny(block, e),
    }
}
