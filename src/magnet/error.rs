use std::num::ParseIntError;

use thiserror::Error;

use crate::query::QueryError;

/// Errors that can occur when parsing a magnet URI.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidMagnet {
    /// The input does not start with `magnet:?`.
    #[error("missing magnet URI prefix")]
    MissingPrefix,

    /// The query string is malformed.
    #[error("failed to parse magnet URI: {0}")]
    MalformedQuery(#[from] QueryError),

    /// The `xl` value is not a base-10 unsigned 64-bit integer.
    ///
    /// `source` is absent when the text parses as a number but is not made
    /// of digits only, such as `+5`.
    #[error("invalid exact length {value:?}")]
    InvalidLength {
        value: String,
        #[source]
        source: Option<ParseIntError>,
    },

    /// More than one `xl` parameter was given.
    #[error("expected at most one exact length, got {0}")]
    DuplicateLength(usize),
}
