use super::*;

#[test]
fn test_decode_pairs() {
    let values = decode("a=1&b=2").unwrap();
    assert_eq!(values.len(), 2);
    assert_eq!(values.first("a"), Some("1"));
    assert_eq!(values.first("b"), Some("2"));
    assert_eq!(values.keys().collect::<Vec<_>>(), ["a", "b"]);
}

#[test]
fn test_decode_repeated_keys_keep_order() {
    let values = decode("tr=3&xt=x&tr=1&tr=2").unwrap();
    assert_eq!(values.get("tr").unwrap(), ["3", "1", "2"]);
    assert_eq!(values.keys().collect::<Vec<_>>(), ["tr", "xt"]);
}

#[test]
fn test_decode_escapes() {
    let values = decode("dn=Big+Buck%20Bunny&tr=udp%3A%2F%2Fa%3A1&k%3Dy=%c3%bc").unwrap();
    assert_eq!(values.first("dn"), Some("Big Buck Bunny"));
    assert_eq!(values.first("tr"), Some("udp://a:1"));
    assert_eq!(values.first("k=y"), Some("ü"));
}

#[test]
fn test_decode_literal_plus() {
    let values = decode("a=1%2B1").unwrap();
    assert_eq!(values.first("a"), Some("1+1"));
}

#[test]
fn test_decode_missing_equals() {
    let values = decode("flag&a=").unwrap();
    assert_eq!(values.get("flag").unwrap(), [""]);
    assert_eq!(values.get("a").unwrap(), [""]);
}

#[test]
fn test_decode_value_with_equals() {
    let values = decode("a=b=c").unwrap();
    assert_eq!(values.first("a"), Some("b=c"));
}

#[test]
fn test_decode_empty_segments() {
    assert!(decode("").unwrap().is_empty());

    let values = decode("&a=1&&b=2&").unwrap();
    assert_eq!(values.len(), 2);
}

#[test]
fn test_decode_semicolon() {
    assert_eq!(decode("a=1;b=2"), Err(QueryError::Semicolon));
    assert_eq!(decode("a=1&b;=2"), Err(QueryError::Semicolon));
}

#[test]
fn test_decode_invalid_escape() {
    assert_eq!(
        decode("fail=%GG"),
        Err(QueryError::InvalidEscape("%GG".into()))
    );
    assert_eq!(decode("a=%4"), Err(QueryError::InvalidEscape("%4".into())));
    assert_eq!(decode("a=%"), Err(QueryError::InvalidEscape("%".into())));
    assert_eq!(
        decode("%zz=1"),
        Err(QueryError::InvalidEscape("%zz".into()))
    );
}

#[test]
fn test_decode_invalid_escape_before_multibyte() {
    assert_eq!(decode("a=%é"), Err(QueryError::InvalidEscape("%é".into())));
}

#[test]
fn test_decode_invalid_utf8() {
    assert!(matches!(decode("a=%FF"), Err(QueryError::InvalidUtf8(_))));
}

#[test]
fn test_encode_pairs() {
    assert_eq!(encode([("a", "1"), ("b", "2")]), "a=1&b=2");
    assert_eq!(encode(std::iter::empty()), "");
}

#[test]
fn test_encode_escapes() {
    assert_eq!(encode([("dn", "two words")]), "dn=two+words");
    assert_eq!(encode([("tr", "udp://a:1")]), "tr=udp%3A%2F%2Fa%3A1");
    assert_eq!(encode([("q", "a&b=c+d")]), "q=a%26b%3Dc%2Bd");
    assert_eq!(encode([("dn", "ü")]), "dn=%C3%BC");
    assert_eq!(encode([("x.pe", "-_.*")]), "x.pe=-_.*");
    assert_eq!(encode([("dn", "~")]), "dn=%7E");
}

#[test]
fn test_values_append_get_take() {
    let mut values = QueryValues::new();
    values.append("xl", "1");
    values.append("dn", "a");
    values.append("xl", "2");

    assert!(values.contains_key("xl"));
    assert_eq!(values.get("xl").unwrap(), ["1", "2"]);
    assert_eq!(values.take("xl"), Some(vec!["1".to_string(), "2".to_string()]));
    assert!(!values.contains_key("xl"));
    assert_eq!(values.take("xl"), None);
    assert_eq!(values.get("missing"), None);
    assert_eq!(values.first("missing"), None);
    assert_eq!(values.len(), 1);
}

#[test]
fn test_values_take_keeps_order() {
    let mut values: QueryValues = [("a", "1"), ("b", "2"), ("c", "3"), ("d", "4")]
        .into_iter()
        .collect();
    values.take("b");
    assert_eq!(values.keys().collect::<Vec<_>>(), ["a", "c", "d"]);
    assert_eq!(values.encode(), "a=1&c=3&d=4");
}

#[test]
fn test_decode_many_distinct_keys() {
    let query = (0..50_000)
        .map(|i| format!("k{}=v", i))
        .collect::<Vec<_>>()
        .join("&");
    let values = decode(&query).unwrap();
    assert_eq!(values.len(), 50_000);
    assert_eq!(values.keys().nth(49_999), Some("k49999"));
}

#[test]
fn test_values_encode_groups_by_key() {
    let values: QueryValues = [("tr", "b"), ("dn", "x y"), ("tr", "a")].into_iter().collect();
    assert_eq!(values.encode(), "tr=b&tr=a&dn=x+y");
}

#[test]
fn test_values_roundtrip() {
    let values: QueryValues = [("a", "1 & 2"), ("a", ""), ("b;c", "%")].into_iter().collect();
    assert_eq!(decode(&values.encode()).unwrap(), values);
}
