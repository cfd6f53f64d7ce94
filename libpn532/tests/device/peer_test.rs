#[path = "../common/mod.rs"]
mod common;

use libpn532::prelude::*;

fn activation_payload() -> Vec<u8> {
    let mut p = vec![0x57, 0x00, 0x01];
    p.extend_from_slice(&[0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0A]);
    p.extend_from_slice(&[0x00, 0x00, 0x02, 0x0E, 0x32]);
    p.extend_from_slice(&[0x46, 0x66, 0x6D]);
    p
}

#[test]
fn jump_for_dep_activates_peer() {
    let mock = MockTransport::new();
    mock.push_ack();
    mock.push_response(common::fixtures::reply(&activation_payload()));
    let mut dev = common::device(&mock);

    match dev.in_jump_for_dep(&DepRequest::default()).unwrap() {
        DepOutcome::Activated(peer) => {
            assert_eq!(peer.number, 1);
            assert_eq!(peer.nfcid3t[9], 0x0A);
            assert_eq!(peer.general_bytes, vec![0x46, 0x66, 0x6D]);
        }
        other => panic!("unexpected: {:?}", other),
    }
}

#[test]
fn custom_initiator_data_is_sent() {
    let mock = MockTransport::new();
    mock.push_ack();
    mock.push_response(common::fixtures::reply(&[0x57, 0x01]));
    let mut dev = common::device(&mock);

    let request = DepRequest::new(vec![0x01, 0x02]);
    dev.in_jump_for_dep(&request).unwrap();
    let frame = &mock.writes()[0];
    assert_eq!(&frame[5..11], &[0xD4, 0x56, 0x01, 0x02, 0x01, 0x01]);
    assert_eq!(frame[11], 0x02);
}

#[test]
fn negotiation_resumes_after_early_poll() {
    let mock = MockTransport::new();
    mock.push_ack();
    // Peer not answered yet: the chip still returns a not-ready buffer.
    mock.push_response(vec![0x00; 32]);
    let mut dev = common::device(&mock);
    let mut session = PeerSession::default();

    assert!(session.poll(&mut dev).unwrap().is_none());
    assert_eq!(session.state(), NegotiationState::Sent);

    mock.push_response(common::fixtures::reply(&activation_payload()));
    let outcome = session.poll(&mut dev).unwrap();
    assert!(matches!(outcome, Some(DepOutcome::Activated(_))));
    assert_eq!(session.state(), NegotiationState::NotSent);
    // Only one command write across both polls.
    assert_eq!(mock.writes().len(), 1);
}

#[test]
fn reset_forces_resend() {
    let mock = MockTransport::new();
    mock.push_ack();
    mock.push_response(vec![0x00; 32]);
    let mut dev = common::device(&mock);
    let mut session = PeerSession::default();

    session.poll(&mut dev).unwrap();
    session.reset();
    mock.push_ack();
    mock.push_response(common::fixtures::reply(&[0x57, 0x01]));

    assert_eq!(
        session.poll(&mut dev).unwrap(),
        Some(DepOutcome::Failed { status: 0x01 })
    );
    assert_eq!(mock.writes().len(), 2);
}
