//! rmagnet - Magnet URI parsing and serialization
//!
//! This library converts between the textual `magnet:?` URI form and a
//! structured [`Magnet`] value. The two directions are inverse operations:
//! parsing the output of [`Magnet::to_uri`] yields an equal value.
//!
//! # Modules
//!
//! - [`magnet`] - Magnet descriptor, parsing and serialization
//! - [`query`] - Strict URI query-string decoding and form encoding
//! - [`constants`] - URI prefix and reserved parameter keys
//!
//! # Example
//!
//! ```
//! use rmagnet::Magnet;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let magnet: Magnet = "magnet:?xt=urn:btih:c12fe1c06bba254a9dc9f519b335aa7c1367a88a&dn=Example".parse()?;
//! assert_eq!(magnet.display_names, ["Example"]);
//! assert_eq!(magnet.to_uri(), "magnet:?xt=urn%3Abtih%3Ac12fe1c06bba254a9dc9f519b335aa7c1367a88a&dn=Example");
//! # Ok(())
//! # }
//! ```

pub mod constants;
pub mod magnet;
pub mod query;

pub use magnet::{InvalidMagnet, Magnet};
pub use query::{QueryError, QueryValues};
