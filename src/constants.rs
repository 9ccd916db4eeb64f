//! Magnet URI protocol constants.
//!
//! The URI prefix and the reserved parameter keys recognised by
//! [`Magnet::parse`](crate::Magnet::parse). Any other key in a magnet URI is
//! ignored when parsing.

// ============================================================================
// URI framing
// ============================================================================

/// Literal prefix every magnet URI starts with, query marker included.
pub const MAGNET_PREFIX: &str = "magnet:?";

// ============================================================================
// Reserved parameter keys
// ============================================================================

/// Exact topic, usually a namespaced content hash (`urn:btih:...`).
pub const EXACT_TOPIC: &str = "xt";

/// Display name suggested for the content.
pub const DISPLAY_NAME: &str = "dn";

/// Exact length of the content in bytes.
pub const EXACT_LENGTH: &str = "xl";

/// Address tracker.
pub const ADDRESS_TRACKER: &str = "tr";

/// Web seed (BEP-19).
pub const WEB_SEED: &str = "ws";

/// Acceptable source, a direct download fallback.
pub const ACCEPTABLE_SOURCE: &str = "as";

/// Exact source, a reference to a descriptor such as a `.torrent` file.
pub const EXACT_SOURCE: &str = "xs";

/// Keyword topic used for searching.
pub const KEYWORD_TOPIC: &str = "kt";

/// Manifest topic, a link to a list of further magnet URIs.
pub const MANIFEST_TOPIC: &str = "mt";

/// Select-only file indices (BEP-53).
pub const SELECT_ONLY: &str = "so";

/// Peer address (BEP-9).
pub const PEER: &str = "x.pe";
