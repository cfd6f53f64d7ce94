// libpn532/src/protocol/commands/mifare.rs

use crate::constants::{
    EXCHANGE_READ_RESPONSE_LEN, EXCHANGE_STATUS_RESPONSE_LEN, MIFARE_CMD_READ, MIFARE_CMD_WRITE,
};
use crate::types::{BlockData, Key, KeyType, Uid};

/// Mifare Classic request carried inside InDataExchange.
#[derive(Debug, Clone)]
pub enum MifareCommand {
    Authenticate {
        key_type: KeyType,
        block: u8,
        key: Key,
        uid: Uid,
    },
    Read {
        block: u8,
    },
    Write {
        block: u8,
        data: BlockData,
    },
}

impl MifareCommand {
    /// Encode sub-command, block number and operands.
    ///
    /// Authenticate: `[60|61] [block] [key(6)] [uid(n)]`
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Self::Authenticate {
                key_type,
                block,
                key,
                uid,
            } => {
                let mut v = Vec::with_capacity(2 + 6 + uid.len());
                v.push(key_type.auth_command());
                v.push(*block);
                v.extend_from_slice(key.as_bytes());
                v.extend_from_slice(uid.as_bytes());
                v
            }
            Self::Read { block } => vec![MIFARE_CMD_READ, *block],
            Self::Write { block, data } => {
                let mut v = Vec::with_capacity(2 + 16);
                v.push(MIFARE_CMD_WRITE);
                v.push(*block);
                v.extend_from_slice(data.as_bytes());
                v
            }
        }
    }

    pub fn block(&self) -> u8 {
        match self {
            Self::Authenticate { block, .. } | Self::Read { block } | Self::Write { block, .. } => {
                *block
            }
        }
    }

    pub fn response_len(&self) -> usize {
        match self {
            Self::Read { .. } => EXCHANGE_READ_RESPONSE_LEN,
            _ => EXCHANGE_STATUS_RESPONSE_LEN,
        }
    }
}
