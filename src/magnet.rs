//! Magnet URI descriptors.
//!
//! A magnet URI describes content by a set of well-known query parameters
//! instead of by location. [`Magnet`] holds the parsed parameters and converts
//! in both directions:
//!
//! - [`Magnet::parse`] - `magnet:?...` text to a [`Magnet`]
//! - [`Magnet::to_uri`] - a [`Magnet`] back to text
//!
//! Parsing the output of `to_uri` always yields an equal value.
//!
//! # Reserved Parameters
//!
//! | Key | Field | Cardinality |
//! |-----|-------|-------------|
//! | `xt` | [`exact_topics`](Magnet::exact_topics) | 0..N |
//! | `dn` | [`display_names`](Magnet::display_names) | 0..N |
//! | `xl` | [`exact_length`](Magnet::exact_length) | 0 or 1 |
//! | `tr` | [`address_trackers`](Magnet::address_trackers) | 0..N |
//! | `ws` | [`web_seeds`](Magnet::web_seeds) | 0..N |
//! | `as` | [`acceptable_sources`](Magnet::acceptable_sources) | 0..N |
//! | `xs` | [`exact_sources`](Magnet::exact_sources) | 0..N |
//! | `kt` | [`keyword_topics`](Magnet::keyword_topics) | 0..N |
//! | `mt` | [`manifest_topics`](Magnet::manifest_topics) | 0..N |
//! | `so` | [`select_only`](Magnet::select_only) | 0..N |
//! | `x.pe` | [`peers`](Magnet::peers) | 0..N |
//!
//! Any other key is ignored, including indexed topics such as `xt.1`.
//! Values are kept verbatim after percent-decoding: no trimming, case folding
//! or deduplication, and no validation of hashes or addresses.
//!
//! # Examples
//!
//! ```
//! use rmagnet::Magnet;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let magnet = Magnet::parse(
//!     "magnet:?xt=urn:btih:c12fe1c06bba254a9dc9f519b335aa7c1367a88a\
//!      &dn=Example%20File&xl=1024&tr=http%3A%2F%2Ftracker.example.com%2Fannounce"
//! )?;
//!
//! assert_eq!(magnet.exact_topics, ["urn:btih:c12fe1c06bba254a9dc9f519b335aa7c1367a88a"]);
//! assert_eq!(magnet.display_names, ["Example File"]);
//! assert_eq!(magnet.exact_length, 1024);
//! assert_eq!(magnet.address_trackers, ["http://tracker.example.com/announce"]);
//!
//! let again = Magnet::parse(&magnet.to_uri())?;
//! assert_eq!(again, magnet);
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! Parsing fails with one of the [`InvalidMagnet`] kinds:
//!
//! - [`InvalidMagnet::MissingPrefix`] - Input does not start with `magnet:?`
//! - [`InvalidMagnet::MalformedQuery`] - Query string could not be decoded
//! - [`InvalidMagnet::InvalidLength`] - `xl` is not a base-10 `u64`
//! - [`InvalidMagnet::DuplicateLength`] - `xl` appears more than once
//!
//! Serialization cannot fail.

mod error;
mod link;

pub use error::InvalidMagnet;
pub use link::Magnet;
