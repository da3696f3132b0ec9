#[path = "../common/mod.rs"]
mod common;

use libsl500::transport::{MockConnector, MockTransport};
use libsl500::{Connection, Error};

#[test]
fn lifecycle_closed_open_closed() {
    let mock = MockTransport::new();
    let conn = Connection::new(MockConnector::new(mock.clone()), common::quick_config());
    assert!(matches!(conn.model(), Err(Error::NotOpen)));

    conn.open().unwrap();
    assert!(matches!(conn.open(), Err(Error::AlreadyOpen)));

    mock.push_chunk(common::fixtures::model_reply());
    assert_eq!(conn.model().unwrap(), "SL500");

    conn.close().unwrap();
    assert!(mock.is_closed());
    assert!(matches!(conn.halt(), Err(Error::NotOpen)));
    assert_eq!(mock.written().len(), 1);
}

#[test]
fn write_failure_is_a_transport_error() {
    let (conn, mock) = common::mock_connection(vec![common::fixtures::model_reply()]).unwrap();
    mock.set_write_failures(1);
    assert!(conn.model().unwrap_err().is_transport());
    // the queued reply is still there for the retry
    assert_eq!(conn.model().unwrap(), "SL500");
}

#[test]
fn silent_reader_times_out() {
    let (conn, mock) = common::mock_connection(vec![]).unwrap();
    assert!(matches!(
        conn.device_id(),
        Err(Error::ReadTimeout { attempts: 4 })
    ));
    assert_eq!(mock.reads(), 4);
    assert!(conn.is_open());
}
