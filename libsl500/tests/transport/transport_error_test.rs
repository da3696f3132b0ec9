use libsl500::transport::{MockTransport, Transport};

#[test]
fn read_failure_and_recovery() {
    let mut m = MockTransport::new();
    m.push_chunk(vec![0xAA]);
    m.set_read_failures(1);

    let mut buf = [0u8; 4];
    // First read should fail (simulated)
    assert!(m.read(&mut buf, 10).unwrap_err().is_transport());

    // Second read should return the queued chunk
    assert_eq!(m.read(&mut buf, 10).unwrap(), 1);
    assert_eq!(buf[0], 0xAA);
}

#[test]
fn empty_queue_reads_like_a_timeout() {
    let mut m = MockTransport::new();
    let mut buf = [0u8; 4];
    assert_eq!(m.read(&mut buf, 10).unwrap(), 0);
}
