//! Errors reported for input coming from the host.

/// Errors returned by this crate.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The fill color string could not be parsed.
    #[error("invalid fill color {0:?}")]
    InvalidFillColor(String),
}

/// Result type using this crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
