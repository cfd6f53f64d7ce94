// libpn532/src/protocol/commands/mod.rs

pub mod dep;
pub mod mifare;

pub use dep::DepRequest;
pub use mifare::MifareCommand;

use crate::constants::*;
use crate::types::{BaudRate, SamMode};

/// Chip commands issued by the driver. Each variant knows its opcode,
/// parameter layout and the response size it declares.
#[derive(Debug, Clone)]
pub enum Command {
    GetFirmwareVersion,
    SamConfiguration {
        mode: SamMode,
        /// Virtual-card timeout in 50 ms units.
        timeout: u8,
        use_irq: bool,
    },
    InListPassiveTarget {
        max_targets: u8,
        baud_rate: BaudRate,
    },
    InDataExchange {
        target: u8,
        request: MifareCommand,
    },
    InJumpForDep(DepRequest),
}

impl Command {
    /// Chip opcode of this command.
    pub fn opcode(&self) -> u8 {
        match self {
            Self::GetFirmwareVersion => PN532_CMD_GET_FIRMWARE_VERSION,
            Self::SamConfiguration { .. } => PN532_CMD_SAM_CONFIGURATION,
            Self::InListPassiveTarget { .. } => PN532_CMD_INLIST_PASSIVE_TARGET,
            Self::InDataExchange { .. } => PN532_CMD_IN_DATA_EXCHANGE,
            Self::InJumpForDep(_) => PN532_CMD_IN_JUMP_FOR_DEP,
        }
    }

    /// Response code the chip echoes back (opcode + 1).
    pub fn response_code(&self) -> u8 {
        self.opcode().wrapping_add(1)
    }

    /// Encode opcode + parameters. The direction byte is added by the
    /// frame layer.
    pub fn encode(&self) -> Vec<u8> {
        let mut out = vec![self.opcode()];
        match self {
            Self::GetFirmwareVersion => {}
            Self::SamConfiguration {
                mode,
                timeout,
                use_irq,
            } => {
                out.extend_from_slice(&[*mode as u8, *timeout, u8::from(*use_irq)]);
            }
            Self::InListPassiveTarget {
                max_targets,
                baud_rate,
            } => {
                out.extend_from_slice(&[*max_targets, baud_rate.as_u8()]);
                out.extend_from_slice(initiator_data(*baud_rate));
            }
            Self::InDataExchange { target, request } => {
                out.push(*target);
                out.extend_from_slice(&request.encode());
            }
            Self::InJumpForDep(req) => out.extend_from_slice(&req.encode()),
        }
        out
    }

    /// Read size (full wire frame) declared for the response.
    pub fn response_len(&self) -> usize {
        match self {
            Self::GetFirmwareVersion => VERSION_RESPONSE_LEN,
            Self::SamConfiguration { .. } => SAM_RESPONSE_LEN,
            Self::InListPassiveTarget { .. } => INLIST_RESPONSE_LEN,
            Self::InDataExchange { request, .. } => request.response_len(),
            Self::InJumpForDep(_) => DEP_RESPONSE_LEN,
        }
    }
}

/// Modulation-specific InitiatorData of InListPassiveTarget. Type A and
/// Jewel take none.
fn initiator_data(baud_rate: BaudRate) -> &'static [u8] {
    match baud_rate {
        BaudRate::Felica212 | BaudRate::Felica424 => &FELICA_POLLING_REQUEST,
        BaudRate::Iso14443B106 => &[ISO14443B_AFI_ALL],
        BaudRate::Iso14443A106 | BaudRate::Jewel106 => &[],
    }
}
