//! Error types for encoder configuration.

use thiserror::Error;

/// Errors raised when an encoder is configured with an unusable window.
///
/// Encoding itself is total for well-formed configuration, so these only
/// surface at construction time.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("minimum substring length must be at least 1")]
    ZeroMinLength,
    #[error("invalid substring window: min_len {min_len} > max_len {max_len}")]
    InvalidWindow { min_len: usize, max_len: usize },
    #[error("round limit must be at least 1")]
    ZeroRoundLimit,
}

pub type Result<T> = std::result::Result<T, Error>;
