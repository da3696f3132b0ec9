// libsl500/libsl500/src/transport/mock.rs

use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::transport::traits::{Connector, Transport};
use crate::{Error, Result};

#[derive(Debug, Default)]
struct MockState {
    written: Vec<Vec<u8>>,
    chunks: VecDeque<Vec<u8>>,
    reads: usize,
    read_failures: usize,
    write_failures: usize,
    connect_failures: usize,
    connects: usize,
    closed: bool,
}

/// Mock transport for tests. It records written frames and hands out queued
/// inbound chunks, one chunk per read.
///
/// Clones share state, so a test can keep a handle after the transport has
/// been moved into a `Connection`.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    state: Arc<Mutex<MockState>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue bytes returned by a single read. An empty chunk simulates a
    /// read that timed out.
    pub fn push_chunk(&self, chunk: Vec<u8>) {
        self.state.lock().chunks.push_back(chunk);
    }

    /// Queue a frame split into reads of at most `chunk_size` bytes.
    pub fn push_chunked(&self, frame: &[u8], chunk_size: usize) {
        let mut state = self.state.lock();
        for chunk in frame.chunks(chunk_size.max(1)) {
            state.chunks.push_back(chunk.to_vec());
        }
    }

    /// Number of subsequent reads that fail with a transport error.
    pub fn set_read_failures(&self, n: usize) {
        self.state.lock().read_failures = n;
    }

    /// Number of subsequent writes that fail with a transport error.
    pub fn set_write_failures(&self, n: usize) {
        self.state.lock().write_failures = n;
    }

    /// Number of subsequent `MockConnector::connect` calls that fail.
    pub fn set_connect_failures(&self, n: usize) {
        self.state.lock().connect_failures = n;
    }

    pub fn written(&self) -> Vec<Vec<u8>> {
        self.state.lock().written.clone()
    }

    pub fn last_written(&self) -> Option<Vec<u8>> {
        self.state.lock().written.last().cloned()
    }

    /// Total reads performed, including empty ones.
    pub fn reads(&self) -> usize {
        self.state.lock().reads
    }

    pub fn pending_chunks(&self) -> usize {
        self.state.lock().chunks.len()
    }

    pub fn connects(&self) -> usize {
        self.state.lock().connects
    }

    pub fn is_closed(&self) -> bool {
        self.state.lock().closed
    }
}

impl Transport for MockTransport {
    fn write(&mut self, data: &[u8]) -> Result<()> {
        let mut state = self.state.lock();
        if state.closed {
            return Err(Error::Transport("mock port closed".into()));
        }
        if state.write_failures > 0 {
            state.write_failures -= 1;
            return Err(Error::Transport("simulated write failure".into()));
        }
        state.written.push(data.to_vec());
        Ok(())
    }

    fn read(&mut self, buf: &mut [u8], _timeout_ms: u64) -> Result<usize> {
        let mut state = self.state.lock();
        if state.closed {
            return Err(Error::Transport("mock port closed".into()));
        }
        state.reads += 1;
        if state.read_failures > 0 {
            state.read_failures -= 1;
            return Err(Error::Transport("simulated read failure".into()));
        }

        let Some(mut chunk) = state.chunks.pop_front() else {
            return Ok(0);
        };
        if chunk.len() > buf.len() {
            // Whatever does not fit stays queued for the next read.
            let rest = chunk.split_off(buf.len());
            state.chunks.push_front(rest);
        }
        buf[..chunk.len()].copy_from_slice(&chunk);
        Ok(chunk.len())
    }

    fn close(&mut self) -> Result<()> {
        self.state.lock().closed = true;
        Ok(())
    }

    fn name(&self) -> &str {
        "mock"
    }
}

/// Connector handing out clones of one `MockTransport`.
#[derive(Debug, Clone, Default)]
pub struct MockConnector {
    transport: MockTransport,
}

impl MockConnector {
    pub fn new(transport: MockTransport) -> Self {
        Self { transport }
    }
}

impl Connector for MockConnector {
    fn connect(&mut self) -> Result<Box<dyn Transport>> {
        {
            let mut state = self.transport.state.lock();
            if state.connect_failures > 0 {
                state.connect_failures -= 1;
                return Err(Error::Transport("simulated open failure".into()));
            }
            state.connects += 1;
            state.closed = false;
        }
        Ok(Box::new(self.transport.clone()))
    }
}
