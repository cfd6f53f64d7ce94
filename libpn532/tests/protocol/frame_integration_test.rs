#[path = "../common/mod.rs"]
mod common;

use libpn532::Error;
use libpn532::protocol::{Frame, dcs, is_ack, is_nack, lcs};
use proptest::prelude::*;

#[test]
fn version_fixture_decodes() {
    let frame = Frame::decode(&common::fixtures::version_reply()).expect("frame decode");
    assert_eq!(frame.direction, 0xD5);
    assert_eq!(frame.payload, vec![0x03, 0x32, 0x01, 0x06, 0x07]);
}

#[test]
fn ack_and_nack_fixtures() {
    assert!(is_ack(&common::fixtures::ack()));
    assert!(!is_nack(&common::fixtures::ack()));
    assert!(is_nack(&common::fixtures::nack()));
    assert!(!is_ack(&common::fixtures::nack()));
}

#[test]
fn error_frame_is_recognised() {
    let frame = Frame::decode(&common::fixtures::frame_hex("00 00 FF 01 FF 7F 81 00")).unwrap();
    assert!(frame.is_error_frame());
}

#[test]
fn corrupted_length_checksum() {
    let mut raw = common::fixtures::version_reply();
    raw[4] ^= 0x01;
    assert!(matches!(
        Frame::decode(&raw),
        Err(Error::ChecksumMismatch { .. })
    ));
}

#[test]
fn short_buffer_is_malformed() {
    assert!(matches!(
        Frame::decode(&[0x00, 0x00, 0xFF, 0x02]),
        Err(Error::Malformed(_))
    ));
}

#[test]
fn oversize_payload_rejected_on_encode() {
    let payload = vec![0u8; 255];
    assert!(matches!(
        Frame::encode(0xD4, &payload),
        Err(Error::PayloadTooLarge { max: 254, actual: 255 })
    ));
}

proptest! {
    #[test]
    fn encoded_frames_satisfy_checksums(payload in proptest::collection::vec(any::<u8>(), 0..=64)) {
        let raw = Frame::encode(0xD4, &payload).unwrap();
        let len = raw[3];
        prop_assert_eq!(len as usize, payload.len() + 1);
        prop_assert_eq!(len.wrapping_add(raw[4]), 0);
        prop_assert_eq!(raw[4], lcs(len));

        let body_sum = raw[5..5 + len as usize]
            .iter()
            .fold(0u8, |acc, b| acc.wrapping_add(*b));
        prop_assert_eq!(body_sum.wrapping_add(raw[5 + len as usize]), 0);
        prop_assert_eq!(raw[5 + len as usize], dcs(0xD4, &payload));
        prop_assert_eq!(*raw.last().unwrap(), 0x00);
    }

    #[test]
    fn single_byte_corruption_in_body_is_caught(
        payload in proptest::collection::vec(any::<u8>(), 1..=32),
        idx in any::<prop::sample::Index>(),
        flip in 1u8..=255,
    ) {
        let mut raw = Frame::encode(0xD5, &payload).unwrap();
        let i = 6 + idx.index(payload.len());
        raw[i] ^= flip;
        let rejected = matches!(Frame::decode(&raw), Err(Error::ChecksumMismatch { .. }));
        prop_assert!(rejected);
    }
}
