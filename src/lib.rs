#![no_std]

#[macro_use]
mod log;

pub mod code;
mod error;
pub mod record;

pub use crate::code::{ErrorCode, InvalidErrorCode, Subsystem};
pub use crate::error::{Error, Result, ResultExt};
pub use crate::record::FaultRecord;
