// libsl500/libsl500/src/transport/mod.rs

pub mod mock;
#[cfg(feature = "serial")]
pub mod serial;
pub mod traits;

pub use mock::{MockConnector, MockTransport};
#[cfg(feature = "serial")]
pub use serial::{SerialConnector, SerialTransport};
pub use traits::{Connector, Transport};
