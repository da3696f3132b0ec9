use libsl500::transport::{Connector, MockConnector, MockTransport, Transport};

#[test]
fn connector_hands_out_shared_transport() {
    let mock = MockTransport::new();
    let mut connector = MockConnector::new(mock.clone());
    let mut t = connector.connect().unwrap();
    assert_eq!(t.name(), "mock");

    t.write(&[0xAA, 0xBB]).unwrap();
    assert_eq!(mock.last_written(), Some(vec![0xAA, 0xBB]));

    mock.push_chunk(vec![0x01, 0x02]);
    let mut buf = [0u8; 8];
    assert_eq!(t.read(&mut buf, 10).unwrap(), 2);
    assert_eq!(&buf[..2], &[0x01, 0x02]);
}

#[test]
fn reconnect_after_close() {
    let mock = MockTransport::new();
    let mut connector = MockConnector::new(mock.clone());
    let mut t = connector.connect().unwrap();
    t.close().unwrap();
    assert!(mock.is_closed());
    assert!(t.write(&[0x00]).is_err());

    let mut t = connector.connect().unwrap();
    t.write(&[0x00]).unwrap();
    assert_eq!(mock.connects(), 2);
}
