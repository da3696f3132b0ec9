// libsl500/libsl500/src/device/mod.rs

pub mod builder;
pub mod connection;
mod operations;

pub use builder::ConnectionBuilder;
pub use connection::{Connection, ConnectionState};
pub use crate::protocol::reader::ReaderConfig;
