use hyperheaders::{HeaderError, HeaderValue, Headers, StandardHeader};
use indexmap::IndexMap;
use pretty_assertions::assert_eq;
use test_case::test_case;

#[test_case("X-Request-Id" ; "canonical")]
#[test_case("x-request-id" ; "all lowercase")]
#[test_case("X-REQUEST-ID" ; "all caps")]
#[test_case("x-Request-iD" ; "mixed")]
fn lookups_are_case_insensitive(name: &str) {
    let mut headers = Headers::new();
    headers.add_header("x-request-id", "abc");
    assert!(headers.has_header(name));
    assert_eq!(headers.get_header(name), ["abc"]);
    assert_eq!(headers.get_header_line(name).as_deref(), Some("abc"));
}

#[test]
fn add_twice_appends_for_regular_headers() {
    let mut headers = Headers::new();
    headers.add_header("Accept", "text/html");
    headers.add_header("Accept", "application/json");
    assert_eq!(headers.get_header("Accept"), ["text/html", "application/json"]);
}

#[test_case("Content-Type" ; "content type")]
#[test_case("Location" ; "location")]
fn add_twice_keeps_latest_for_single_value_headers(name: &str) {
    let mut headers = Headers::new();
    headers.add_header(name, "first");
    headers.add_header(name, "second");
    assert_eq!(headers.get_header(name), ["second"]);
}

#[test]
fn empty_value_never_duplicates() {
    let mut headers = Headers::new();
    for _ in 0..5 {
        headers.add_header("X-Empty", "");
    }
    assert!(headers.has_header("X-Empty"));
    assert_eq!(headers.get_header("X-Empty"), [""]);
}

#[test]
fn set_cookie_is_emitted_on_separate_lines() {
    let mut headers = Headers::new();
    headers.add_header(StandardHeader::SetCookie, "a=1; Path=/");
    headers.add_header("set-cookie", "b=2");
    headers.add_header("Vary", vec!["Accept", "Origin"]);
    headers.add_header("X-Empty", "");

    assert_eq!(
        headers.to_raw_headers(),
        vec![
            "Set-Cookie: a=1; Path=/",
            "Set-Cookie: b=2",
            "Vary: Accept, Origin",
            "X-Empty:",
        ]
    );
    assert_eq!(
        headers.to_string(),
        "Set-Cookie: a=1; Path=/\r\nSet-Cookie: b=2\r\nVary: Accept, Origin\r\nX-Empty:\r\n"
    );
}

#[test]
fn flattened_and_array_views() {
    let mut headers = Headers::new();
    headers.add_header("Accept", vec!["a", "b"]);
    headers.add_header("Host", "example.com");

    let mut flattened = IndexMap::new();
    flattened.insert("Accept".to_string(), "a, b".to_string());
    flattened.insert("Host".to_string(), "example.com".to_string());
    assert_eq!(headers.to_flattened_array(), flattened);

    let array = headers.to_array();
    assert_eq!(array["Accept"], vec!["a", "b"]);
    assert_eq!(array.keys().collect::<Vec<_>>(), vec!["Accept", "Host"]);
}

#[test]
fn removed_header_disappears_from_every_view() {
    let mut headers = Headers::new();
    headers.add_header("X-Gone", "1");
    headers.add_header("X-Kept", "2");
    headers.remove_header("x-gone");

    assert!(!headers.has_header("X-Gone"));
    assert!(headers.get_header("X-Gone").is_empty());
    assert_eq!(headers.get_header_line("X-Gone"), None);
    assert_eq!(headers.to_raw_headers(), vec!["X-Kept: 2"]);
    assert!(!headers.to_flattened_array().contains_key("X-Gone"));
    assert!(!headers.to_array().contains_key("X-Gone"));
    assert_eq!(headers.iter().map(|(name, _)| name).collect::<Vec<_>>(), vec!["X-Kept"]);

    headers.add_header("X-Gone", "3");
    assert_eq!(headers.get_header("X-Gone"), ["3"]);
}

#[test]
fn merge_appends_onto_a_copy() {
    let mut left = Headers::new();
    left.add_header("Accept", "text/html");
    left.add_header("Content-Type", "text/plain");

    let mut right = Headers::new();
    right.add_header("Accept", "application/json");
    right.add_header("Content-Type", "application/json");
    right.add_header("X-Extra", vec!["1", "2"]);

    let merged = left.to_merged_headers(&right);
    assert_eq!(merged.get_header("Accept"), ["text/html", "application/json"]);
    assert_eq!(merged.get_header("Content-Type"), ["application/json"]);
    assert_eq!(merged.get_header("X-Extra"), ["1", "2"]);

    assert_eq!(left.get_header("Accept"), ["text/html"]);
    assert!(!left.has_header("X-Extra"));
}

#[test]
fn add_headers_merges_in_place() {
    let mut target = Headers::new();
    target.add_header("Set-Cookie", "a=1");
    let source: Headers = [("Set-Cookie", "b=2"), ("Host", "example.com")].into_iter().collect();

    target.add_headers(&source);
    assert_eq!(target.get_header("Set-Cookie"), ["a=1", "b=2"]);
    assert_eq!(target.get_header("Host"), ["example.com"]);
}

#[test]
fn clones_are_deep() {
    let mut original = Headers::new();
    original.add_header("Accept", "a");
    let mut copy = original.clone();
    copy.add_header("Accept", "b");
    copy.remove_header("Accept");
    assert_eq!(original.get_header("Accept"), ["a"]);
}

#[test]
fn builds_from_name_value_pairs() {
    let headers = Headers::from_name_value_pairs(vec![
        vec![HeaderValue::from("x-count"), HeaderValue::from(3u8)],
        vec![HeaderValue::from("x-flag"), HeaderValue::from(false)],
        vec![HeaderValue::from("x-none")],
        vec![HeaderValue::from("x-count"), HeaderValue::from(4u8)],
    ])
    .unwrap();

    assert_eq!(headers.get_header("X-Count"), ["3", "4"]);
    assert_eq!(headers.get_header("X-Flag"), ["false"]);
    assert_eq!(headers.get_header("X-None"), [""]);
    assert_eq!(headers.names().collect::<Vec<_>>(), vec!["X-Count", "X-Flag", "X-None"]);
}

#[test]
fn pairs_without_name_fail() {
    let err = Headers::from_name_value_pairs(vec![vec!["Host", "example.com"], vec![]]).unwrap_err();
    assert_eq!(err, HeaderError::InvalidPairStructure { index: 1 });

    let err = Headers::from_name_value_pairs(vec![vec![None, Some("value")]]).unwrap_err();
    assert_eq!(err, HeaderError::InvalidPairStructure { index: 0 });
}

#[test]
fn iteration_follows_insertion_order() {
    let mut headers = Headers::new();
    headers.add_header("Host", "example.com");
    headers.add_header("Accept", "a");
    headers.add_header("Accept", "b");
    headers.add_header("Cookie", "c=1");

    let seen: Vec<(String, Vec<String>)> = headers
        .iter()
        .map(|(name, values)| (name.to_string(), values.to_vec()))
        .collect();
    assert_eq!(
        seen,
        vec![
            ("Host".to_string(), vec!["example.com".to_string()]),
            ("Accept".to_string(), vec!["a".to_string(), "b".to_string()]),
            ("Cookie".to_string(), vec!["c=1".to_string()]),
        ]
    );
}
