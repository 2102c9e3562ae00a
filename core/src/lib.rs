//! FROST Core Types
//!
//! This crate provides the foundational types used throughout FROST:
//! - Member types (Key, Value, Members)
//! - Error types (EnumError, ErrorKind, Severity)

mod error;
mod key;
mod value;

pub use error::*;
pub use key::*;
pub use value::*;
