//! Tests for suggestion request construction

use super::*;
use proptest::prelude::*;

const BASE: &str = "http://127.0.0.1:5000";

fn query_param(url: &str, name: &str) -> Option<String> {
    let (_, query) = url.split_once('?')?;
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_string())
}

#[test]
fn test_prepare_query_rejects_short_input() {
    assert_eq!(prepare_query(""), None);
    assert_eq!(prepare_query("a"), None);
    assert_eq!(prepare_query("   b   "), None);
}

#[test]
fn test_prepare_query_trims() {
    assert_eq!(prepare_query("  Lost "), Some("Lost"));
    assert_eq!(prepare_query("ab"), Some("ab"));
}

#[test]
fn test_prepare_query_counts_characters_not_bytes() {
    // One two-byte character is still a single character
    assert_eq!(prepare_query("é"), None);
    assert_eq!(prepare_query("éé"), Some("éé"));
}

#[test]
fn test_build_url_basic() {
    let url = build_suggest_url(BASE, "shows", "Lost", None);
    assert_eq!(url, "http://127.0.0.1:5000/autocomplete/shows?q=Lost");
}

#[test]
fn test_build_url_encodes_query() {
    let url = build_suggest_url(BASE, "shows", "Breaking Bad & Co", None);
    assert_eq!(
        url,
        "http://127.0.0.1:5000/autocomplete/shows?q=Breaking%20Bad%20%26%20Co"
    );
}

#[test]
fn test_build_url_encodes_everything_outside_unreserved_set() {
    let url = build_suggest_url(BASE, "shows", "Grey's (2005)! *~", None);
    assert_eq!(
        url,
        "http://127.0.0.1:5000/autocomplete/shows?q=Grey%27s%20%282005%29%21%20%2A~"
    );
}

#[test]
fn test_build_url_encodes_utf8_bytes() {
    let url = build_suggest_url(BASE, "shows", "Amélie", None);
    assert_eq!(url, "http://127.0.0.1:5000/autocomplete/shows?q=Am%C3%A9lie");
}

#[test]
fn test_build_url_strips_trailing_slash_from_base() {
    let url = build_suggest_url("http://host/", "shows", "ab", None);
    assert_eq!(url, "http://host/autocomplete/shows?q=ab");
}

#[test]
fn test_build_url_with_context() {
    let url = build_suggest_url(BASE, "characters", "wal", Some("Breaking Bad"));
    assert_eq!(
        url,
        "http://127.0.0.1:5000/autocomplete/characters?q=wal&context=Breaking%20Bad"
    );
}

#[test]
fn test_build_url_omits_empty_context() {
    let url = build_suggest_url(BASE, "characters", "wal", Some(""));
    assert!(query_param(&url, "context").is_none());

    let url = build_suggest_url(BASE, "characters", "wal", Some("   "));
    assert!(query_param(&url, "context").is_none());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // The q parameter is always the component encoding of the trimmed input
    #[test]
    fn prop_q_is_encoded_trimmed_query(raw in "\\PC{0,20}") {
        match prepare_query(&raw) {
            Some(query) => {
                prop_assert!(query.chars().count() >= MIN_QUERY_CHARS);
                let url = build_suggest_url(BASE, "shows", query, None);
                let q = query_param(&url, "q").unwrap();
                prop_assert_eq!(q, urlencoding::encode(raw.trim()).into_owned());
                prop_assert!(query_param(&url, "context").is_none());
            }
            None => prop_assert!(raw.trim().chars().count() < MIN_QUERY_CHARS),
        }
    }

    #[test]
    fn prop_context_present_only_when_non_blank(context in "[ a-zA-Z&=]{0,12}") {
        let url = build_suggest_url(BASE, "characters", "ab", Some(&context));
        let param = query_param(&url, "context");
        if context.trim().is_empty() {
            prop_assert!(param.is_none());
        } else {
            prop_assert_eq!(param, Some(urlencoding::encode(context.trim()).into_owned()));
        }
    }
}
