#[path = "../common/mod.rs"]
mod common;

use libpn532::prelude::*;

fn authed_mock() -> MockTransport {
    let mock = MockTransport::new();
    mock.push_ack();
    mock.push_response(common::fixtures::exchange_status_reply(0x00));
    mock
}

#[test]
fn authenticate_then_read() {
    let mock = authed_mock();
    mock.push_ack();
    mock.push_response(common::fixtures::exchange_read_reply(&[0x5A; 16]));
    let mut dev = common::device(&mock);
    let target = common::fixtures::sample_target();

    assert!(dev
        .authenticate(4, &target, &Key::DEFAULT, KeyType::A)
        .unwrap()
        .is_granted());
    let block = dev.read_block(4).unwrap().granted().expect("block");
    assert_eq!(block.as_bytes(), &[0x5A; 16]);

    let writes = mock.writes();
    assert_eq!(&writes[1][5..10], &[0xD4, 0x40, 0x01, 0x30, 0x04]);
    assert_eq!(mock.reads()[3].1, 26);
}

#[test]
fn wrong_key_is_denied_with_status() {
    let mock = MockTransport::new();
    mock.push_ack();
    mock.push_response(common::fixtures::exchange_status_reply(0x14));
    let mut dev = common::device(&mock);

    let access = dev
        .authenticate(4, &common::fixtures::sample_target(), &Key::new([0; 6]), KeyType::B)
        .unwrap();
    assert!(matches!(access, Access::Denied(Denial::Status(0x14))));
}

#[test]
fn read_denied_status() {
    let mock = MockTransport::new();
    mock.push_ack();
    mock.push_response(common::fixtures::reply(&[0x41, 0x14]));
    let mut dev = common::device(&mock);

    assert!(matches!(
        dev.read_block(8).unwrap(),
        Access::Denied(Denial::Status(0x14))
    ));
}

#[test]
fn write_block_accepted() {
    let mock = authed_mock();
    mock.push_ack();
    mock.push_response(common::fixtures::exchange_status_reply(0x00));
    let mut dev = common::device(&mock);
    let target = common::fixtures::sample_target();

    dev.authenticate(5, &target, &Key::DEFAULT, KeyType::A).unwrap();
    assert!(dev.write_block(5, &[0x11; 16]).unwrap().is_granted());
    let frame = &mock.writes()[1];
    assert_eq!(&frame[8..10], &[0xA0, 0x05]);
    assert_eq!(&frame[10..26], &[0x11; 16]);
}

#[test]
fn write_block_wrong_length_sends_nothing() {
    let mock = MockTransport::new();
    let mut dev = common::device(&mock);

    for len in [0usize, 15, 17] {
        let data = vec![0u8; len];
        assert!(matches!(
            dev.write_block(1, &data),
            Err(Error::InvalidArgument(_))
        ));
    }
    assert_eq!(mock.call_count(), 0);
}

#[test]
fn error_frame_is_protocol_denial() {
    let mock = MockTransport::new();
    mock.push_ack();
    mock.push_response(common::fixtures::frame_hex("00 00 FF 01 FF 7F 81 00"));
    let mut dev = common::device(&mock);

    assert!(matches!(
        dev.read_block(1).unwrap(),
        Access::Denied(Denial::Protocol(Error::ApplicationError))
    ));
}

#[test]
fn authenticate_before_detection_is_refused_by_chip() {
    // Without a prior InListPassiveTarget the chip has no target 1 and
    // answers with a non-zero status.
    let mock = MockTransport::new();
    mock.push_ack();
    mock.push_response(common::fixtures::exchange_status_reply(0x27));
    let mut dev = common::device(&mock);

    let access = dev
        .authenticate(0, &common::fixtures::sample_target(), &Key::DEFAULT, KeyType::A)
        .unwrap();
    assert!(matches!(access, Access::Denied(Denial::Status(0x27))));
}

#[test]
fn read_bus_failure_propagates() {
    let mock = MockTransport::new();
    mock.push_ack();
    let mut dev = common::device(&mock);

    // ACK arrives, then the response read finds nothing on the bus.
    assert!(matches!(dev.read_block(1), Err(Error::TransportRead(_))));
}

#[test]
fn session_reads_whole_sector_with_one_authentication() {
    let mock = authed_mock();
    for fill in 0..4u8 {
        mock.push_ack();
        mock.push_response(common::fixtures::exchange_read_reply(&[fill; 16]));
    }
    let mut dev = common::device(&mock);
    let mut session = CardSession::new(common::fixtures::sample_target(), Key::DEFAULT, KeyType::A);

    for block in 4..8u8 {
        let data = session.read_block(&mut dev, block).unwrap().granted().unwrap();
        assert_eq!(data.as_bytes()[0], block - 4);
    }
    assert_eq!(mock.writes().len(), 5);
}
