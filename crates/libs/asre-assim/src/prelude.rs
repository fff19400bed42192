//! Common types and utilities.

/// Router error type.
pub use crate::error::Error;

/// Router result type.
pub type Result<T> = core::result::Result<T, Error>;
