// libpn532/src/protocol/responses/dep.rs

use crate::protocol::parser::{byte_at, slice_at};
use crate::Result;

/// Target found by InJumpForDEP.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeerTarget {
    pub number: u8,
    pub nfcid3t: [u8; 10],
    /// DIDt, BSt, BRt, TO, PPt
    pub params: [u8; 5],
    pub general_bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DepOutcome {
    Activated(PeerTarget),
    Failed { status: u8 },
}

/// Decode InJumpForDEP fields: Status Tg NFCID3t(10) DIDt BSt BRt TO PPt [Gt]
pub fn decode_jump_for_dep(data: &[u8]) -> Result<DepOutcome> {
    let status = byte_at(data, 0)?;
    if status != 0 {
        return Ok(DepOutcome::Failed { status });
    }

    let number = byte_at(data, 1)?;
    let mut nfcid3t = [0u8; 10];
    nfcid3t.copy_from_slice(slice_at(data, 2, 10)?);
    let mut params = [0u8; 5];
    params.copy_from_slice(slice_at(data, 12, 5)?);

    Ok(DepOutcome::Activated(PeerTarget {
        number,
        nfcid3t,
        params,
        general_bytes: data[17..].to_vec(),
    }))
}
