use std::str::Utf8Error;

use thiserror::Error;

/// Errors that can occur when decoding a URI query string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// A `;` appeared in a segment; only `&` separates pairs.
    #[error("invalid semicolon separator in query")]
    Semicolon,

    /// A `%` was not followed by two hexadecimal digits.
    #[error("invalid percent escape: {0:?}")]
    InvalidEscape(String),

    /// A decoded key or value is not valid UTF-8.
    #[error("invalid utf-8 in decoded component: {0}")]
    InvalidUtf8(#[from] Utf8Error),
}
