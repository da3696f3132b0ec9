// libsl500/libsl500/src/device/connection.rs

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use log::{debug, info, warn};
use parking_lot::Mutex;

use crate::protocol::codec::exchange;
use crate::protocol::commands::Command;
use crate::protocol::reader::ReaderConfig;
use crate::transport::{Connector, Transport};
use crate::types::CommandCode;
use crate::{Error, Result};

/// Whether a `Connection` currently holds an open transport.
pub enum ConnectionState {
    Closed,
    Open(Box<dyn Transport>),
}

impl ConnectionState {
    pub fn is_open(&self) -> bool {
        matches!(self, ConnectionState::Open(_))
    }
}

impl std::fmt::Debug for ConnectionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConnectionState::Closed => f.write_str("Closed"),
            ConnectionState::Open(t) => write!(f, "Open({})", t.name()),
        }
    }
}

struct Inner {
    connector: Box<dyn Connector>,
    state: ConnectionState,
    /// Close flag of the current session, shared with `Connection::session`
    closed: Arc<AtomicBool>,
}

/// Transport view used for one exchange. Every read and write fails once the
/// session has been closed, including a read that was already blocking when
/// `close` was called.
struct Cancellable<'a> {
    transport: &'a mut dyn Transport,
    closed: &'a AtomicBool,
}

impl Cancellable<'_> {
    fn check(&self) -> Result<()> {
        if self.closed.load(Ordering::SeqCst) {
            return Err(Error::Transport(format!(
                "{} closed during exchange",
                self.transport.name()
            )));
        }
        Ok(())
    }
}

impl Transport for Cancellable<'_> {
    fn write(&mut self, data: &[u8]) -> Result<()> {
        self.check()?;
        self.transport.write(data)
    }

    fn read(&mut self, buf: &mut [u8], timeout_ms: u64) -> Result<usize> {
        self.check()?;
        let n = self.transport.read(buf, timeout_ms)?;
        self.check()?;
        Ok(n)
    }

    fn name(&self) -> &str {
        self.transport.name()
    }
}

/// Handle to one SL500 reader.
///
/// A connection starts closed. `open` acquires a transport through the
/// connector, `close` releases it, and the pair may be repeated. Every
/// command is a write followed by a blocking read of the reply; the exchange
/// lock is held for the whole of it so concurrent callers never interleave
/// on the line.
///
/// `close` does not wait for that lock. It marks the session closed at once:
/// an exchange in flight fails with a transport error as soon as its current
/// read returns, and releases the transport itself.
pub struct Connection {
    inner: Mutex<Inner>,
    session: Mutex<Option<Arc<AtomicBool>>>,
    config: ReaderConfig,
}

impl Connection {
    /// Create a closed connection.
    pub fn new(connector: impl Connector + 'static, config: ReaderConfig) -> Self {
        Self::from_boxed(Box::new(connector), config)
    }

    pub(crate) fn from_boxed(connector: Box<dyn Connector>, config: ReaderConfig) -> Self {
        Self {
            inner: Mutex::new(Inner {
                connector,
                state: ConnectionState::Closed,
                closed: Arc::new(AtomicBool::new(true)),
            }),
            session: Mutex::new(None),
            config,
        }
    }

    /// Open a serial port and return a ready connection with the default
    /// read settings.
    #[cfg(feature = "serial")]
    pub fn open_serial(path: &str, baud: crate::types::BaudRate) -> Result<Self> {
        let conn = Self::new(
            crate::transport::SerialConnector::new(path, baud),
            ReaderConfig::default(),
        );
        conn.open()?;
        Ok(conn)
    }

    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    pub fn is_open(&self) -> bool {
        self.session.lock().is_some()
    }

    /// Acquire the transport. Fails with `AlreadyOpen` on an open connection.
    pub fn open(&self) -> Result<()> {
        let mut guard = self.inner.lock();
        let inner = &mut *guard;
        if inner.state.is_open() {
            if !inner.closed.load(Ordering::SeqCst) {
                return Err(Error::AlreadyOpen);
            }
            // closed while an exchange held the line; finish the release
            release(&mut inner.state);
        }
        let transport = inner.connector.connect().inspect_err(|e| {
            warn!("sl500: open failed: {}", e);
        })?;
        info!("sl500[{}]: opened", transport.name());
        inner.state = ConnectionState::Open(transport);
        inner.closed = Arc::new(AtomicBool::new(false));
        *self.session.lock() = Some(Arc::clone(&inner.closed));
        Ok(())
    }

    /// Close the connection and release the transport.
    ///
    /// Returns without waiting for an exchange in progress; that exchange
    /// fails with a transport error and releases the transport when its
    /// current read returns.
    pub fn close(&self) -> Result<()> {
        let closed = self.session.lock().take().ok_or(Error::NotOpen)?;
        closed.store(true, Ordering::SeqCst);

        match self.inner.try_lock() {
            Some(mut inner) => close_transport(&mut inner.state),
            None => {
                debug!("sl500: close during exchange, release deferred");
                Ok(())
            }
        }
    }

    /// Send `command` with the given payload segments and return the
    /// payload of the reply.
    pub fn send_command<S: AsRef<[u8]>>(
        &self,
        command: CommandCode,
        segments: &[S],
    ) -> Result<Vec<u8>> {
        let mut guard = self.inner.lock();
        let inner = &mut *guard;
        let result = match &mut inner.state {
            ConnectionState::Open(transport) if !inner.closed.load(Ordering::SeqCst) => {
                let mut line = Cancellable {
                    transport: transport.as_mut(),
                    closed: &inner.closed,
                };
                Some(exchange(&mut line, command, segments, &self.config))
            }
            _ => None,
        };

        let closed = Arc::clone(&inner.closed);
        if closed.load(Ordering::SeqCst) {
            release(&mut inner.state);
        }
        drop(guard);

        // A close that raced with the check above found the lock held and
        // left the release to us.
        if closed.load(Ordering::SeqCst) {
            if let Some(mut inner) = self.inner.try_lock() {
                if Arc::ptr_eq(&inner.closed, &closed) {
                    release(&mut inner.state);
                }
            }
        }

        result.unwrap_or_else(|| {
            debug!("sl500: command {} on closed connection", command);
            Err(Error::NotOpen)
        })
    }

    /// Send a typed command.
    pub fn execute(&self, command: &Command) -> Result<Vec<u8>> {
        self.send_command(command.command_code(), &command.segments())
    }
}

/// Move to `Closed` and close the transport it held, if any.
fn close_transport(state: &mut ConnectionState) -> Result<()> {
    match std::mem::replace(state, ConnectionState::Closed) {
        ConnectionState::Closed => Ok(()),
        ConnectionState::Open(mut transport) => {
            info!("sl500[{}]: closed", transport.name());
            transport.close()
        }
    }
}

/// `close_transport` for paths that have no caller to report to.
fn release(state: &mut ConnectionState) {
    if let Err(e) = close_transport(state) {
        warn!("sl500: closing transport failed: {}", e);
    }
}

impl std::fmt::Debug for Connection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Connection")
            .field("open", &self.is_open())
            .field("config", &self.config)
            .finish()
    }
}
