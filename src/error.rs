//! Error types for radiotap header decoding

use thiserror::Error;

/// Errors produced when reading a radiotap base header from a buffer
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RadiotapError {
    #[error("buffer too short for radiotap header: need {needed} bytes, got {got}")]
    Truncated { needed: usize, got: usize },
}

/// Result type alias for radiotap operations
pub type Result<T> = std::result::Result<T, RadiotapError>;
