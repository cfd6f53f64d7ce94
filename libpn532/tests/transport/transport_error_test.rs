#[path = "../common/mod.rs"]
mod common;

use libpn532::prelude::*;
use std::error::Error as _;

#[test]
fn write_failure_keeps_io_source() {
    let mock = MockTransport::new();
    mock.fail_next_writes(1);
    let mut dev = common::device(&mock);

    let cmd = Command::GetFirmwareVersion;
    let err = dev.execute(&cmd, cmd.response_len()).unwrap_err();
    assert!(err.is_transport());
    let source = err.source().expect("io source");
    assert!(source.to_string().contains("simulated write failure"));
    // Nothing read after a failed write.
    assert!(mock.reads().is_empty());
}

#[test]
fn empty_bus_read_is_transport_error() {
    let mock = MockTransport::new();
    let mut dev = common::device(&mock);

    let cmd = Command::GetFirmwareVersion;
    assert!(matches!(
        dev.execute(&cmd, cmd.response_len()),
        Err(Error::TransportRead(_))
    ));
}

#[test]
fn failure_is_not_sticky() {
    let mock = MockTransport::new();
    mock.fail_next_writes(1);
    mock.push_ack();
    mock.push_response(common::fixtures::version_reply());
    let mut dev = common::device(&mock);

    assert!(dev.get_version().is_none());
    assert!(dev.get_version().is_some());
}
