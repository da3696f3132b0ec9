//! Utilities for libsl500: hex formatting for frame traces and timeout
//! arithmetic.

pub mod hex;
pub mod timeout;

pub use self::hex::*;
pub use timeout::*;
