#[path = "../common/mod.rs"]
mod common;

use libsl500::protocol::Command;
use libsl500::types::*;

#[test]
fn init_com_is_the_reference_frame() {
    let frame = Command::InitCom {
        baud: BaudRate::B19200,
    }
    .encode()
    .unwrap();
    assert_eq!(frame, common::fixtures::init_com_request());
}

#[test]
fn request_all_frame() {
    let frame = Command::Request {
        mode: RequestMode::All,
    }
    .encode()
    .unwrap();
    assert_eq!(
        frame,
        vec![0xAA, 0xBB, 0x06, 0x00, 0x00, 0x00, 0x01, 0x02, 0x52, 0x51]
    );
}

#[test]
fn select_sends_uid_unescaped() {
    let frame = Command::Select {
        uid: common::fixtures::sample_uid(),
    }
    .encode()
    .unwrap();
    assert_eq!(frame[2], 0x09);
    assert_eq!(&frame[8..12], &[0xAA, 0x01, 0x02, 0x04]);
    assert_eq!(frame.len(), 13);
}

#[test]
fn increment_amount_is_little_endian() {
    let frame = Command::Increment {
        block: 6,
        value: 0x0102_0304,
    }
    .encode()
    .unwrap();
    assert_eq!(&frame[6..8], &[0x0D, 0x02]);
    assert_eq!(&frame[8..13], &[6, 0x04, 0x03, 0x02, 0x01]);
}
