// libpn532/src/protocol/responses/target.rs

use crate::card::Target;
use crate::protocol::parser::{byte_at, length_prefixed_at, slice_at};
use crate::types::{BaudRate, Uid};
use crate::{Error, Result};

/// Length byte, response code, IDm and PMm.
const FELICA_POL_RES_MIN_LEN: usize = 18;

/// Decode InListPassiveTarget fields (after the 0x4B code).
///
/// Returns `Ok(None)` unless exactly one target is reported. A target
/// section whose declared lengths run past the reply is `Malformed`.
pub fn decode_in_list_passive_target(data: &[u8], baud_rate: BaudRate) -> Result<Option<Target>> {
    let count = byte_at(data, 0)?;
    if count != 1 {
        return Ok(None);
    }

    let number = byte_at(data, 1)?;
    let body = &data[2..];

    let target = match baud_rate {
        // SENS_RES(2) SEL_RES(1) NFCIDLength(1) NFCID1(n) [ATS]
        BaudRate::Iso14443A106 => {
            let sens_res = slice_at(body, 0, 2)?;
            let sel_res = byte_at(body, 2)?;
            let uid = Uid::try_from(length_prefixed_at(body, 3)?)?;
            Target {
                number,
                baud_rate,
                uid,
                sens_res: Some([sens_res[0], sens_res[1]]),
                sel_res: Some(sel_res),
            }
        }
        // POL_RES length(1) 0x01 IDm(8) PMm(8) [SYST(2)]; the length byte
        // counts itself.
        BaudRate::Felica212 | BaudRate::Felica424 => {
            let len = byte_at(body, 0)? as usize;
            if len < FELICA_POL_RES_MIN_LEN {
                return Err(Error::Malformed(format!(
                    "POL_RES length {} below {}",
                    len, FELICA_POL_RES_MIN_LEN
                )));
            }
            let pol_res = slice_at(body, 1, len - 1)?;
            let uid = Uid::try_from(slice_at(pol_res, 1, 8)?)?;
            Target {
                number,
                baud_rate,
                uid,
                sens_res: None,
                sel_res: None,
            }
        }
        // ATQB(12) ATTRIB_RES length(1) ATTRIB_RES; PUPI is ATQB[1..5]
        BaudRate::Iso14443B106 => {
            let atqb = slice_at(body, 0, 12)?;
            let uid = Uid::try_from(&atqb[1..5])?;
            Target {
                number,
                baud_rate,
                uid,
                sens_res: None,
                sel_res: None,
            }
        }
        // SENS_RES(2) JEWELID(4)
        BaudRate::Jewel106 => {
            let sens_res = slice_at(body, 0, 2)?;
            let uid = Uid::try_from(slice_at(body, 2, 4)?)?;
            Target {
                number,
                baud_rate,
                uid,
                sens_res: Some([sens_res[0], sens_res[1]]),
                sel_res: None,
            }
        }
    };

    Ok(Some(target))
}
