use libsl500::protocol::checksum::xor;
use libsl500::protocol::stuffing::{destuff, stuff};

#[test]
fn xor_of_reference_request_body() {
    // bytes 3..=8 of the 19200 baud init request
    assert_eq!(xor(&[0x00, 0x00, 0x00, 0x01, 0x01, 0x03]), 0x03);
}

#[test]
fn fillers_do_not_change_the_checksum() {
    let logical = [0x00, 0x02, 0x02, 0x00, 0xAA, 0x01, 0xAA];
    assert_eq!(xor(&stuff(&logical)), xor(&logical));
}

#[test]
fn stuff_then_destuff() {
    let logical = vec![0xAA, 0x00, 0x01, 0xAA];
    let stuffed = stuff(&logical);
    assert_eq!(stuffed, vec![0xAA, 0x00, 0x00, 0x01, 0xAA, 0x00]);
    assert_eq!(destuff(&stuffed), logical);
}
