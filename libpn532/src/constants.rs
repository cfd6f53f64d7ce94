// libpn532/src/constants.rs
//! Common protocol constants used across the crate

/// Wire frame preamble and start code: 0x00 0x00 0xFF
pub const PN532_PREAMBLE: [u8; 3] = [0x00, 0x00, 0xFF];

/// Wire frame postamble: 0x00
pub const PN532_POSTAMBLE: u8 = 0x00;

/// Minimal information frame length in bytes (one direction byte, no data)
pub const PN532_MIN_FRAME_LEN: usize = 8;

/// Maximum payload (excluding the direction byte) of a normal information frame
pub const PN532_MAX_PAYLOAD_LEN: usize = 254;

/// ACK frame: command accepted
pub const PN532_ACK: [u8; 6] = [0x00, 0x00, 0xFF, 0x00, 0xFF, 0x00];

/// NACK frame: host asks the chip to resend its last frame
pub const PN532_NACK: [u8; 6] = [0x00, 0x00, 0xFF, 0xFF, 0x00, 0x00];

/// TFI of the application-level error frame (00 00 FF 01 FF 7F 81 00)
pub const PN532_ERROR_FRAME_CODE: u8 = 0x7F;

/// Host->chip prefix (D4) and chip->host prefix (D5)
pub const PN532_HOST_TO_CHIP: u8 = 0xD4;
pub const PN532_CHIP_TO_HOST: u8 = 0xD5;

/// Default 7-bit bus address of the chip
pub const PN532_I2C_ADDRESS: u8 = 0x24;

/// Chip command codes
pub const PN532_CMD_GET_FIRMWARE_VERSION: u8 = 0x02;
pub const PN532_CMD_SAM_CONFIGURATION: u8 = 0x14;
pub const PN532_CMD_IN_DATA_EXCHANGE: u8 = 0x40;
pub const PN532_CMD_INLIST_PASSIVE_TARGET: u8 = 0x4A;
pub const PN532_CMD_IN_JUMP_FOR_DEP: u8 = 0x56;

/// Mifare Classic sub-commands carried by InDataExchange
pub const MIFARE_CMD_AUTH_A: u8 = 0x60;
pub const MIFARE_CMD_AUTH_B: u8 = 0x61;
pub const MIFARE_CMD_READ: u8 = 0x30;
pub const MIFARE_CMD_WRITE: u8 = 0xA0;

/// InListPassiveTarget initiator data. FeliCa needs a polling request
/// (opcode, system code FFFF = any, request code 01 = return system code,
/// one time slot); ISO14443B needs an AFI byte (00 = all families).
pub const FELICA_POLLING_REQUEST: [u8; 5] = [0x00, 0xFF, 0xFF, 0x01, 0x00];
pub const ISO14443B_AFI_ALL: u8 = 0x00;

/// Mifare block size in bytes
pub const MIFARE_BLOCK_LEN: usize = 16;

/// Logical target number used for all card operations (single-target polling)
pub const PN532_TARGET_NUMBER: u8 = 0x01;

/// Expected response sizes (full wire frames) per command
pub const ACK_READ_LEN: usize = 6;
pub const VERSION_RESPONSE_LEN: usize = 13;
pub const SAM_RESPONSE_LEN: usize = 9;
pub const INLIST_RESPONSE_LEN: usize = 40;
pub const EXCHANGE_STATUS_RESPONSE_LEN: usize = 10;
pub const EXCHANGE_READ_RESPONSE_LEN: usize = 26;
pub const DEP_RESPONSE_LEN: usize = 32;
