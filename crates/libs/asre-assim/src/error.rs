//! Router error types.

/// Result routing errors.
///
/// Copy, directory and marker failures are absorbed by the router and
/// recorded through the error log instead of surfacing here.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The error log could not be opened for append.
    #[error("failed to open error log")]
    LogOpen(#[source] std::io::Error),
}
