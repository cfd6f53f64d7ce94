// libpn532/src/protocol/responses/exchange.rs

use crate::constants::MIFARE_BLOCK_LEN;
use crate::protocol::parser::{byte_at, slice_at};
use crate::types::BlockData;
use crate::Result;

/// Status byte of an InDataExchange reply. Zero means the card accepted
/// the request.
pub fn decode_exchange_status(data: &[u8]) -> Result<u8> {
    byte_at(data, 0)
}

/// Decode a Mifare read reply: status followed by one 16-byte block.
/// Returns the status and, when it is zero, the block.
pub fn decode_exchange_read(data: &[u8]) -> Result<(u8, Option<BlockData>)> {
    let status = byte_at(data, 0)?;
    if status != 0 {
        return Ok((status, None));
    }
    let block = BlockData::try_from(slice_at(data, 1, MIFARE_BLOCK_LEN)?)?;
    Ok((status, Some(block)))
}
