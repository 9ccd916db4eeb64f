//! URI query-string decoding and encoding.
//!
//! Magnet URIs carry all their data in the query component, so the codec in
//! [`crate::magnet`] sits on top of this module. It provides:
//!
//! - [`decode`] - strict `key=value&...` parsing into a [`QueryValues`]
//! - [`encode`] - `application/x-www-form-urlencoded` serialization of ordered pairs
//!
//! # Decoding rules
//!
//! | Input | Result |
//! |-------|--------|
//! | `a=1&a=2` | `a` → `["1", "2"]` |
//! | `a+b=c%20d` | `a b` → `["c d"]` |
//! | `flag` | `flag` → `[""]` |
//! | `a=1&&b=2` | empty segment skipped |
//! | `a=1;b=2` | [`QueryError::Semicolon`] |
//! | `a=%GG` | [`QueryError::InvalidEscape`] |
//! | `a=%FF` | [`QueryError::InvalidUtf8`] |
//!
//! Unlike lenient form decoders, malformed escapes are errors rather than
//! being passed through literally.
//!
//! # Examples
//!
//! ```
//! use rmagnet::query::{decode, encode};
//!
//! let values = decode("tr=udp%3A%2F%2Fa%3A1&tr=udp%3A%2F%2Fb%3A2&dn=two+words").unwrap();
//! assert_eq!(values.get("tr").unwrap(), ["udp://a:1", "udp://b:2"]);
//! assert_eq!(values.first("dn"), Some("two words"));
//!
//! assert_eq!(encode([("dn", "two words"), ("tr", "udp://a:1")]), "dn=two+words&tr=udp%3A%2F%2Fa%3A1");
//! ```

mod decode;
mod encode;
mod error;
mod values;

pub use decode::decode;
pub use encode::encode;
pub use error::QueryError;
pub use values::QueryValues;

#[cfg(test)]
mod tests;
