//! Suggestion request construction
//!
//! Turns the raw input value into the query that is sent to
//! `GET {base}/autocomplete/{endpoint}?q={query}[&context={context}]`.

/// Trimmed input shorter than this never reaches the server
pub const MIN_QUERY_CHARS: usize = 2;

/// Trim the raw input and return it if it is long enough to query
pub fn prepare_query(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    if trimmed.chars().count() < MIN_QUERY_CHARS {
        return None;
    }
    Some(trimmed)
}

/// Build the suggestion URL for an endpoint
///
/// `q` and `context` are percent-encoded as URI components. The `context`
/// parameter is omitted when absent or blank.
pub fn build_suggest_url(
    base_url: &str,
    endpoint: &str,
    query: &str,
    context: Option<&str>,
) -> String {
    let mut url = format!(
        "{}/autocomplete/{}?q={}",
        base_url.trim_end_matches('/'),
        endpoint,
        urlencoding::encode(query)
    );

    if let Some(context) = context.map(str::trim).filter(|c| !c.is_empty()) {
        url.push_str("&context=");
        url.push_str(&urlencoding::encode(context));
    }

    url
}

#[cfg(test)]
#[path = "request_tests.rs"]
mod request_tests;
