use std::fmt;
use std::str::FromStr;

use tracing::{debug, trace};

use super::error::InvalidMagnet;
use crate::constants::{
    ACCEPTABLE_SOURCE, ADDRESS_TRACKER, DISPLAY_NAME, EXACT_LENGTH, EXACT_SOURCE, EXACT_TOPIC,
    KEYWORD_TOPIC, MAGNET_PREFIX, MANIFEST_TOPIC, PEER, SELECT_ONLY, WEB_SEED,
};
use crate::query;

/// A parsed magnet URI.
///
/// Every repeatable parameter is stored in the order it appeared in the URI.
/// An absent parameter is an empty list, and an absent `xl` is `0`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Magnet {
    /// `xt`
    pub exact_topics: Vec<String>,
    /// `dn`
    pub display_names: Vec<String>,
    /// `xl`; zero means unknown and is never serialized.
    pub exact_length: u64,
    /// `tr`
    pub address_trackers: Vec<String>,
    /// `ws`
    pub web_seeds: Vec<String>,
    /// `as`
    pub acceptable_sources: Vec<String>,
    /// `xs`
    pub exact_sources: Vec<String>,
    /// `kt`
    pub keyword_topics: Vec<String>,
    /// `mt`
    pub manifest_topics: Vec<String>,
    /// `so`
    pub select_only: Vec<String>,
    /// `x.pe`
    pub peers: Vec<String>,
}

impl Magnet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a `magnet:?` URI.
    ///
    /// Unrecognised parameters are skipped. No partial result is returned on
    /// failure.
    pub fn parse(uri: &str) -> Result<Self, InvalidMagnet> {
        let result = parse_magnet(uri);
        if let Err(ref e) = result {
            debug!(error = %e, "rejected magnet URI");
        }
        result
    }

    /// Serializes to a `magnet:?` URI.
    ///
    /// Parameters are written in a fixed order (`xt`, `dn`, `xl`, `tr`, `ws`,
    /// `as`, `xs`, `kt`, `mt`, `so`, `x.pe`), one pair per value.
    pub fn to_uri(&self) -> String {
        let length = (self.exact_length != 0).then(|| self.exact_length.to_string());

        let pairs = repeated(EXACT_TOPIC, &self.exact_topics)
            .chain(repeated(DISPLAY_NAME, &self.display_names))
            .chain(length.as_deref().map(|l| (EXACT_LENGTH, l)))
            .chain(repeated(ADDRESS_TRACKER, &self.address_trackers))
            .chain(repeated(WEB_SEED, &self.web_seeds))
            .chain(repeated(ACCEPTABLE_SOURCE, &self.acceptable_sources))
            .chain(repeated(EXACT_SOURCE, &self.exact_sources))
            .chain(repeated(KEYWORD_TOPIC, &self.keyword_topics))
            .chain(repeated(MANIFEST_TOPIC, &self.manifest_topics))
            .chain(repeated(SELECT_ONLY, &self.select_only))
            .chain(repeated(PEER, &self.peers));

        format!("{}{}", MAGNET_PREFIX, query::encode(pairs))
    }

    /// Returns true if no parameter is set.
    pub fn is_empty(&self) -> bool {
        self.exact_length == 0
            && self.exact_topics.is_empty()
            && self.display_names.is_empty()
            && self.address_trackers.is_empty()
            && self.web_seeds.is_empty()
            && self.acceptable_sources.is_empty()
            && self.exact_sources.is_empty()
            && self.keyword_topics.is_empty()
            && self.manifest_topics.is_empty()
            && self.select_only.is_empty()
            && self.peers.is_empty()
    }
}

impl fmt::Display for Magnet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_uri())
    }
}

impl FromStr for Magnet {
    type Err = InvalidMagnet;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Magnet {
    type Error = InvalidMagnet;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

fn parse_magnet(uri: &str) -> Result<Magnet, InvalidMagnet> {
    let rest = uri
        .strip_prefix(MAGNET_PREFIX)
        .ok_or(InvalidMagnet::MissingPrefix)?;

    let mut params = query::decode(rest)?;
    let exact_length = parse_exact_length(params.take(EXACT_LENGTH))?;

    // Indexed topics (xt.1, xt.2, ...) are not collected.
    let magnet = Magnet {
        exact_topics: params.take(EXACT_TOPIC).unwrap_or_default(),
        display_names: params.take(DISPLAY_NAME).unwrap_or_default(),
        exact_length,
        address_trackers: params.take(ADDRESS_TRACKER).unwrap_or_default(),
        web_seeds: params.take(WEB_SEED).unwrap_or_default(),
        acceptable_sources: params.take(ACCEPTABLE_SOURCE).unwrap_or_default(),
        exact_sources: params.take(EXACT_SOURCE).unwrap_or_default(),
        keyword_topics: params.take(KEYWORD_TOPIC).unwrap_or_default(),
        manifest_topics: params.take(MANIFEST_TOPIC).unwrap_or_default(),
        select_only: params.take(SELECT_ONLY).unwrap_or_default(),
        peers: params.take(PEER).unwrap_or_default(),
    };

    for key in params.keys() {
        trace!(key, "ignoring unrecognised magnet parameter");
    }

    Ok(magnet)
}

fn parse_exact_length(values: Option<Vec<String>>) -> Result<u64, InvalidMagnet> {
    match values.as_deref() {
        None | Some([]) => Ok(0),
        // u64::from_str accepts a leading '+', which is not a plain digit string.
        Some([value]) => match value.parse::<u64>() {
            Ok(length) if value.bytes().all(|b| b.is_ascii_digit()) => Ok(length),
            Ok(_) => Err(InvalidMagnet::InvalidLength {
                value: value.clone(),
                source: None,
            }),
            Err(source) => Err(InvalidMagnet::InvalidLength {
                value: value.clone(),
                source: Some(source),
            }),
        },
        Some(values) => Err(InvalidMagnet::DuplicateLength(values.len())),
    }
}

fn repeated<'a>(key: &'a str, values: &'a [String]) -> impl Iterator<Item = (&'a str, &'a str)> {
    values.iter().map(move |v| (key, v.as_str()))
}
