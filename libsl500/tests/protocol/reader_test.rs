#[path = "../common/mod.rs"]
mod common;

use libsl500::protocol::read_frame;
use libsl500::transport::MockTransport;
use libsl500::Error;

#[test]
fn reassembles_escaped_frame_from_small_chunks() {
    let raw = common::fixtures::read_block_reply();
    let mut mock = MockTransport::new();
    mock.push_chunked(&raw, 3);
    let got = read_frame(&mut mock, &common::quick_config()).unwrap_err();
    // 27 bytes in 3 byte chunks need 9 reads, more than the 4 allowed
    assert!(matches!(got, Error::ReadTimeout { attempts: 4 }));

    let mut mock = MockTransport::new();
    mock.push_chunked(&raw, 7);
    assert_eq!(read_frame(&mut mock, &common::quick_config()).unwrap(), raw);
    assert_eq!(mock.reads(), 4);
}

#[test]
fn error_reply_is_read_to_the_end() {
    let raw = common::fixtures::request_no_card_reply();
    let mut mock = MockTransport::new();
    mock.push_chunk(raw.clone());
    assert_eq!(read_frame(&mut mock, &common::quick_config()).unwrap(), raw);
}

#[test]
fn desynchronised_line_reports_bad_preamble() {
    let mut mock = MockTransport::new();
    mock.push_chunk(vec![0x00, 0x11, 0x00, 0x00]);
    let raw = read_frame(&mut mock, &common::quick_config()).unwrap();
    assert_eq!(raw.len(), 4);
    assert!(matches!(
        libsl500::protocol::Frame::decode(&raw),
        Err(Error::InvalidPreamble {
            actual: [0x00, 0x11]
        })
    ));
}
