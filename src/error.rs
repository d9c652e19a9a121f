//! Error handling for compression operations
//!
//! This module re-exports the error type used throughout the crate. It uses
//! thiserror for ergonomic error handling and keeps every failure recoverable:
//! nothing in the library terminates the process.

pub use crate::common::LzwError;
pub use crate::common::Result;
