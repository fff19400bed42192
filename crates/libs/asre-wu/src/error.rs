//! Work unit error types.

/// Work unit name errors.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The name does not carry the `_r<replica>_c<cycle>` fields.
    #[error("work unit name does not fit the replica pattern")]
    NameFormat,

    /// The replica name pattern failed to compile.
    #[error("replica name pattern is unavailable")]
    Pattern,
}
