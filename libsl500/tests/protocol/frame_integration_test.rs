#[path = "../common/mod.rs"]
mod common;

use libsl500::protocol::Frame;
use libsl500::types::CommandCode;
use libsl500::Error;

#[test]
fn encode_matches_captured_request() {
    let frame = Frame::encode(CommandCode::INIT_COM, &[[0x03u8]]).unwrap();
    assert_eq!(frame, common::fixtures::init_com_request());
}

#[test]
fn decode_captured_replies() {
    let model = Frame::decode_response(&common::fixtures::model_reply()).unwrap();
    assert_eq!(model.device_id, 0x0000);
    assert_eq!(model.command, CommandCode::GET_MODEL);
    assert_eq!(model.payload, b"SL500".to_vec());

    let uid = Frame::decode(&common::fixtures::anticollision_reply()).unwrap();
    assert_eq!(uid, vec![0xAA, 0x01, 0x02, 0x04]);

    let block = Frame::decode(&common::fixtures::read_block_reply()).unwrap();
    assert_eq!(&block[..], common::fixtures::sample_block().as_bytes());
}

#[test]
fn escaped_frames_report_their_stuffed_size() {
    let raw = common::fixtures::anticollision_reply();
    assert_eq!(Frame::expected_len(&raw), Some(raw.len()));
    assert!(Frame::is_complete(&raw));
    assert!(!Frame::is_complete(&raw[..raw.len() - 1]));
    assert_eq!(Frame::expected_len(&raw[..2]), None);
}

#[test]
fn device_status_wins_over_bad_checksum() {
    let mut raw = common::fixtures::request_no_card_reply();
    let last = raw.len() - 1;
    raw[last] ^= 0xFF;
    assert!(matches!(
        Frame::decode(&raw),
        Err(Error::DeviceStatus { status: 0x14 })
    ));
}

#[test]
fn corrupted_payload_fails_checksum() {
    let mut raw = common::fixtures::model_reply();
    raw[10] ^= 0x01;
    match Frame::decode(&raw) {
        Err(Error::InvalidChecksum { expected, actual }) => {
            assert_eq!(actual, 0x2F);
            assert_ne!(expected, actual);
        }
        other => panic!("expected InvalidChecksum, got {:?}", other),
    }
}

#[test]
fn garbage_before_preamble_is_rejected() {
    let mut raw = vec![0x00];
    raw.extend_from_slice(&common::fixtures::select_reply());
    assert!(matches!(
        Frame::decode(&raw),
        Err(Error::InvalidPreamble {
            actual: [0x00, 0xAA]
        })
    ));
}
