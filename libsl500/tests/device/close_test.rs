use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::thread;
use std::time::{Duration, Instant};

use libsl500::transport::Transport;
use libsl500::{Command, Connection, Error, ReaderConfig, Result};

/// A line that never answers: every read blocks for its full timeout.
struct SilentLine {
    reads: Arc<AtomicUsize>,
    closed: Arc<AtomicBool>,
}

impl Transport for SilentLine {
    fn write(&mut self, _data: &[u8]) -> Result<()> {
        Ok(())
    }

    fn read(&mut self, _buf: &mut [u8], timeout_ms: u64) -> Result<usize> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        thread::sleep(Duration::from_millis(timeout_ms));
        Ok(0)
    }

    fn close(&mut self) -> Result<()> {
        self.closed.store(true, Ordering::SeqCst);
        Ok(())
    }
}

fn silent_connection() -> (Arc<Connection>, Arc<AtomicUsize>, Arc<AtomicBool>) {
    let reads = Arc::new(AtomicUsize::new(0));
    let closed = Arc::new(AtomicBool::new(false));
    let (r, c) = (Arc::clone(&reads), Arc::clone(&closed));
    let connector = move || -> Result<Box<dyn Transport>> {
        c.store(false, Ordering::SeqCst);
        Ok(Box::new(SilentLine {
            reads: Arc::clone(&r),
            closed: Arc::clone(&c),
        }))
    };
    let config = ReaderConfig {
        read_timeout_ms: 200,
        max_attempts: 10,
        chunk_size: 128,
    };
    (Arc::new(Connection::new(connector, config)), reads, closed)
}

#[test]
fn close_cancels_exchange_in_flight() {
    let (conn, reads, line_closed) = silent_connection();
    conn.open().unwrap();

    let worker = {
        let conn = Arc::clone(&conn);
        thread::spawn(move || {
            let start = Instant::now();
            let res = conn.execute(&Command::GetModel);
            (res, start.elapsed())
        })
    };
    while reads.load(Ordering::SeqCst) == 0 {
        thread::sleep(Duration::from_millis(5));
    }

    let start = Instant::now();
    conn.close().unwrap();
    assert!(start.elapsed() < Duration::from_millis(50));
    assert!(!conn.is_open());

    let (res, took) = worker.join().unwrap();
    assert!(res.unwrap_err().is_transport());
    // far below the 2 s the read loop would otherwise spend
    assert!(took < Duration::from_millis(1000));
    assert!(line_closed.load(Ordering::SeqCst));
    assert!(reads.load(Ordering::SeqCst) <= 2);
}

#[test]
fn commands_after_close_fail_and_reopen_works() {
    let (conn, _reads, line_closed) = silent_connection();
    conn.open().unwrap();
    conn.close().unwrap();
    assert!(line_closed.load(Ordering::SeqCst));
    assert!(matches!(conn.execute(&Command::Halt), Err(Error::NotOpen)));
    assert!(matches!(conn.close(), Err(Error::NotOpen)));

    conn.open().unwrap();
    assert!(conn.is_open());
    assert!(!line_closed.load(Ordering::SeqCst));
}
