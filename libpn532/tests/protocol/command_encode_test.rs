#[path = "../common/mod.rs"]
mod common;

use libpn532::protocol::codec::encode_command_frame;
use libpn532::protocol::{Command, DepRequest, MifareCommand};
use libpn532::{BaudRate, BlockData, Key, KeyType, SamMode, Uid};

#[test]
fn get_firmware_version_frame() {
    let raw = encode_command_frame(&Command::GetFirmwareVersion).unwrap();
    assert_eq!(
        raw,
        common::fixtures::frame_hex("00 00 FF 02 FE D4 02 2A 00")
    );
}

#[test]
fn sam_configuration_frame() {
    let cmd = Command::SamConfiguration {
        mode: SamMode::Normal,
        timeout: 0x14,
        use_irq: true,
    };
    let raw = encode_command_frame(&cmd).unwrap();
    assert_eq!(&raw[3..5], &[0x05, 0xFB]);
    assert_eq!(&raw[5..10], &[0xD4, 0x14, 0x01, 0x14, 0x01]);
}

#[test]
fn in_list_passive_target_frame() {
    let cmd = Command::InListPassiveTarget {
        max_targets: 1,
        baud_rate: BaudRate::Felica212,
    };
    let raw = encode_command_frame(&cmd).unwrap();
    assert_eq!(
        raw,
        common::fixtures::frame_hex("00 00 FF 09 F7 D4 4A 01 01 00 FF FF 01 00 E1 00")
    );
}

#[test]
fn in_list_passive_target_type_b_carries_afi() {
    let cmd = Command::InListPassiveTarget {
        max_targets: 1,
        baud_rate: BaudRate::Iso14443B106,
    };
    let raw = encode_command_frame(&cmd).unwrap();
    assert_eq!(raw[3], 0x05);
    assert_eq!(&raw[5..10], &[0xD4, 0x4A, 0x01, 0x03, 0x00]);
}

#[test]
fn authenticate_frame_carries_key_and_uid() {
    let cmd = Command::InDataExchange {
        target: 1,
        request: MifareCommand::Authenticate {
            key_type: KeyType::A,
            block: 4,
            key: Key::DEFAULT,
            uid: Uid::try_from(&common::fixtures::sample_uid_bytes()[..]).unwrap(),
        },
    };
    let raw = encode_command_frame(&cmd).unwrap();
    let mut expected = vec![0xD4, 0x40, 0x01, 0x60, 0x04];
    expected.extend_from_slice(&[0xFF; 6]);
    expected.extend_from_slice(&common::fixtures::sample_uid_bytes());
    assert_eq!(raw[3] as usize, expected.len());
    assert_eq!(&raw[5..5 + expected.len()], &expected[..]);
}

#[test]
fn write_frame_carries_block() {
    let cmd = Command::InDataExchange {
        target: 1,
        request: MifareCommand::Write {
            block: 6,
            data: BlockData::try_from(&[0xAB; 16][..]).unwrap(),
        },
    };
    let raw = encode_command_frame(&cmd).unwrap();
    assert_eq!(&raw[5..10], &[0xD4, 0x40, 0x01, 0xA0, 0x06]);
    assert_eq!(&raw[10..26], &[0xAB; 16]);
}

#[test]
fn jump_for_dep_frame() {
    let raw = encode_command_frame(&Command::InJumpForDep(DepRequest::default())).unwrap();
    assert_eq!(&raw[5..9], &[0xD4, 0x56, 0x01, 0x02]);
}
