#[path = "../common/mod.rs"]
mod common;

use libpn532::Error;
use libpn532::device::{Handshake, HandshakeState, Pn532Config};
use libpn532::protocol::Command;
use libpn532::transport::MockTransport;
use std::time::Duration;

fn config() -> Pn532Config {
    Pn532Config::default().with_settle_delay(Duration::ZERO)
}

#[test]
fn reads_ack_then_declared_response_length() {
    let mut mock = MockTransport::new();
    mock.push_ack();
    mock.push_response(common::fixtures::version_reply());
    let cfg = config();

    let cmd = Command::GetFirmwareVersion;
    let resp = Handshake::new(&mut mock, &cfg)
        .execute(&cmd, cmd.response_len())
        .unwrap();
    assert_eq!(resp.data, vec![0x32, 0x01, 0x06, 0x07]);
    assert_eq!(mock.reads(), vec![(0x24, 6), (0x24, 13)]);
}

#[test]
fn nack_ends_in_ack_timeout() {
    let mut mock = MockTransport::new();
    mock.push_response(common::fixtures::nack());
    let cfg = config();

    let mut hs = Handshake::new(&mut mock, &cfg);
    assert!(matches!(
        hs.execute(&Command::GetFirmwareVersion, 13),
        Err(Error::AckTimeout)
    ));
    assert_eq!(hs.state(), HandshakeState::Failed);
    drop(hs);
    // No response read after a missing ACK.
    assert_eq!(mock.reads().len(), 1);
}

#[test]
fn read_failure_is_transport_error() {
    let mut mock = MockTransport::new();
    mock.fail_next_reads(1);
    let cfg = config();

    let err = Handshake::new(&mut mock, &cfg)
        .execute(&Command::GetFirmwareVersion, 13)
        .unwrap_err();
    assert!(err.is_transport());
}

#[test]
fn split_send_and_resume() {
    let mut mock = MockTransport::new();
    mock.push_ack();
    let cfg = config();

    let cmd = Command::GetFirmwareVersion;
    let mut first = Handshake::new(&mut mock, &cfg);
    first.send(&cmd).unwrap();
    assert_eq!(first.state(), HandshakeState::AckReceived);
    drop(first);

    mock.push_response(common::fixtures::version_reply());
    let mut second = Handshake::resume(&mut mock, &cfg);
    let resp = second.receive(cmd.opcode(), cmd.response_len()).unwrap();
    assert_eq!(resp.code, 0x03);
    assert_eq!(second.state(), HandshakeState::Complete);
    drop(second);
    assert_eq!(mock.writes().len(), 1);
}
