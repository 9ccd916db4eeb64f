use std::borrow::Cow;

use percent_encoding::percent_decode_str;

use super::error::QueryError;
use super::values::QueryValues;

/// Decodes a URI query string (without the leading `?`) into ordered values.
///
/// Pairs are separated by `&` and split at the first `=`. A segment without
/// `=` is a key with an empty value, and empty segments are skipped. Decoding
/// stops at the first malformed segment.
pub fn decode(query: &str) -> Result<QueryValues, QueryError> {
    let mut values = QueryValues::new();

    for segment in query.split('&') {
        if segment.is_empty() {
            continue;
        }
        if segment.contains(';') {
            return Err(QueryError::Semicolon);
        }

        let (key, value) = segment.split_once('=').unwrap_or((segment, ""));
        values.append(unescape(key)?, unescape(value)?);
    }

    Ok(values)
}

fn unescape(component: &str) -> Result<String, QueryError> {
    let mut rest = component;
    while let Some(pos) = rest.find('%') {
        let escape = rest.as_bytes().get(pos + 1..pos + 3);
        if !matches!(escape, Some([hi, lo]) if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit()) {
            let text = rest[pos..].chars().take(3).collect();
            return Err(QueryError::InvalidEscape(text));
        }
        rest = &rest[pos + 3..];
    }

    let spaced = component.replace('+', " ");
    let decoded = percent_decode_str(&spaced).decode_utf8()?;
    Ok(Cow::into_owned(decoded))
}
