use libpn532::protocol::{dcs, lcs};

#[test]
fn length_checksum_examples() {
    assert_eq!(lcs(0x02), 0xFE);
    assert_eq!(lcs(0x06), 0xFA);
    assert_eq!(lcs(0x00), 0x00);
}

#[test]
fn data_checksum_for_version_request() {
    // D4 02 -> 2A
    assert_eq!(dcs(0xD4, &[0x02]), 0x2A);
}

#[test]
fn data_checksum_for_version_reply() {
    assert_eq!(dcs(0xD5, &[0x03, 0x32, 0x01, 0x06, 0x07]), 0xE8);
}
