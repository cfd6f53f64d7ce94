// libpn532/src/card/operations/auth.rs

use super::{check_status, deny, exchange};
use crate::card::{Access, Target};
use crate::device::Pn532;
use crate::protocol::{MifareCommand, responses};
use crate::types::{Key, KeyType};
use crate::Result;

/// Authenticate `block` with `key`. The target UID is part of the
/// request, so `target` must come from a detection on this chip.
pub fn authenticate(
    dev: &mut Pn532,
    block: u8,
    target: &Target,
    key: &Key,
    key_type: KeyType,
) -> Result<Access<()>> {
    log::debug!(
        "authenticating block {} of {} with key {}",
        block,
        target.uid.to_hex(),
        key_type
    );
    let request = MifareCommand::Authenticate {
        key_type,
        block,
        key: *key,
        uid: target.uid.clone(),
    };
    let resp = match exchange(dev, request)? {
        Access::Granted(resp) => resp,
        Access::Denied(d) => return Ok(Access::Denied(d)),
    };
    match responses::decode_exchange_status(&resp.data) {
        Ok(status) => Ok(check_status(block, status)),
        Err(e) => deny(block, e),
    }
}
