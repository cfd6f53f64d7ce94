// libpn532/src/protocol/responses/version.rs

use crate::protocol::parser::slice_at;
use crate::types::FirmwareVersion;
use crate::Result;

/// Decode GetFirmwareVersion fields: IC, Ver, Rev, Support.
pub fn decode_firmware_version(data: &[u8]) -> Result<FirmwareVersion> {
    let f = slice_at(data, 0, 4)?;
    Ok(FirmwareVersion {
        family: f[0],
        major: f[1],
        minor: f[2],
        support: f[3],
    })
}
