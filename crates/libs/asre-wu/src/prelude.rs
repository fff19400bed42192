//! Common types and utilities.

/// Work unit error type.
pub use crate::error::Error;

/// Work unit result type.
pub type Result<T> = core::result::Result<T, Error>;
