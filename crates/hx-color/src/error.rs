//! Errors produced while parsing user-supplied colors.

use thiserror::Error;

/// Input that could not be turned into a [`Color`](crate::Color).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// Not exactly six hex digits.
    #[error("invalid hex {0:?}: expected 6 hex digits, e.g. FF0000")]
    InvalidFormat(String),

    /// Not a non-negative decimal integer.
    #[error("invalid index {0:?}: expected a number from 0 to 16777215")]
    InvalidNumber(String),
}
