// libsl500/libsl500/src/protocol/mod.rs

pub mod checksum;
pub mod codec;
pub mod commands;
pub mod frame;
pub mod parser;
pub mod reader;
pub mod responses;
pub mod stuffing;

pub use checksum::xor;
pub use commands::Command;
pub use frame::{Frame, ResponseFrame};
pub use reader::{ReaderConfig, read_frame};
pub use responses::*;
