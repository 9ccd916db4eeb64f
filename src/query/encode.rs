use url::form_urlencoded::Serializer;

/// Encodes key/value pairs as an `application/x-www-form-urlencoded` string.
///
/// Pairs are emitted in iteration order and joined with `&`. Spaces become
/// `+`; everything except ASCII alphanumerics and `*-._` is percent-encoded.
/// This includes `~`, which is written as `%7E`; [`decode`](super::decode)
/// accepts either form.
pub fn encode<'a, I>(pairs: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut serializer = Serializer::new(String::new());
    serializer.extend_pairs(pairs);
    serializer.finish()
}
