#[path = "../common/mod.rs"]
mod common;

use libsl500::types::{AuthMode, Key, LedColor, RequestMode};
use libsl500::Error;

#[test]
fn read_block_like_the_desk_reader_demo() {
    let (conn, mock) = common::mock_connection(vec![
        libsl500::test_support::ok_reply(libsl500::CommandCode::LIGHT, &[]),
        common::fixtures::request_reply(),
        common::fixtures::anticollision_reply(),
        common::fixtures::select_reply(),
        libsl500::test_support::ok_reply(libsl500::CommandCode::MIFARE_AUTHENTICATE, &[]),
        common::fixtures::read_block_reply(),
    ])
    .unwrap();

    conn.light(LedColor::Yellow).unwrap();
    let card = conn.detect_card(RequestMode::All).unwrap();
    assert_eq!(*card.uid(), common::fixtures::sample_uid());
    assert_eq!(card.sak(), 0x08);

    card.authenticate(&conn, AuthMode::KeyA, 0, Key::DEFAULT)
        .unwrap();
    let block = card.read_block(&conn, 0).unwrap();
    assert_eq!(block, common::fixtures::sample_block());

    let written = mock.written();
    assert_eq!(written.len(), 6);
    // select carries the uid exactly as received, without escapes
    assert_eq!(&written[3][8..12], &[0xAA, 0x01, 0x02, 0x04]);
}

#[test]
fn empty_field_reports_device_status() {
    let (conn, _mock) =
        common::mock_connection(vec![common::fixtures::request_no_card_reply()]).unwrap();
    match conn.detect_card(RequestMode::Idle) {
        Err(Error::DeviceStatus { status }) => assert_eq!(status, 0x14),
        other => panic!("expected DeviceStatus, got {:?}", other),
    }
}

#[test]
fn read_value_block() {
    let (conn, _mock) =
        common::mock_connection(vec![common::fixtures::read_value_reply()]).unwrap();
    assert_eq!(conn.mifare_read_value(4).unwrap(), 1000);
}
