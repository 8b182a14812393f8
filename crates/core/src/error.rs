//! Error types for the huewheel core.

use thiserror::Error;

/// Errors produced by color generation and plot rendering.
#[derive(Debug, Error, PartialEq)]
pub enum ColorError {
    /// A count, saturation, lightness, size or color string was rejected.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Writing rendered output failed.
    #[error("I/O error: {0}")]
    Io(String),
}
