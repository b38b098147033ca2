//! Path and query normalization.
//!
//! Paths and route patterns go through the same normalization so that their
//! segment counts line up: one trailing `/` and one leading `/` are dropped,
//! the query string is cut off and the remainder is percent-decoded.

use std::borrow::Cow;

use tracing::debug;

use crate::params::Params;

/// Normalizes a path (or route pattern) for structural comparison.
///
/// # Example
///
/// ```
/// use oxide_pathmatch::normalize_path;
///
/// assert_eq!(normalize_path("/admin/post/"), "admin/post");
/// assert_eq!(normalize_path("/post?id=123"), "post");
/// assert_eq!(normalize_path("/"), "");
/// assert_eq!(normalize_path("%C2%A35"), "£5");
/// ```
pub fn normalize_path(path: &str) -> Cow<'_, str> {
    let mut path = path;

    if path.len() > 1 {
        path = path.strip_suffix('/').unwrap_or(path);
    }
    path = path.strip_prefix('/').unwrap_or(path);
    if let Some((before, _)) = path.split_once('?') {
        path = before;
    }

    percent_decode(path)
}

/// Parses the query string of `path` into a map.
///
/// Tokens without `=` are skipped, values may be empty and later duplicate
/// keys overwrite earlier ones. Keys and values are kept as written.
///
/// # Example
///
/// ```
/// use oxide_pathmatch::extract_query;
///
/// let query = extract_query("/post?id=123&type&");
/// assert_eq!(query.get("id"), Some("123"));
/// assert_eq!(query.get("type"), None);
/// ```
pub fn extract_query(path: &str) -> Params {
    let Some((_, query)) = path.split_once('?') else {
        return Params::new();
    };

    query
        .split('&')
        .filter_map(|token| token.split_once('='))
        .collect()
}

/// Splits a normalized path into its `/`-delimited segments.
///
/// The empty path yields a single empty segment.
pub fn split_segments(normalized: &str) -> Vec<&str> {
    normalized.split('/').collect()
}

/// Decodes `%XX` escapes as UTF-8, keeping the raw text when the decoded
/// bytes are not valid UTF-8.
fn percent_decode(input: &str) -> Cow<'_, str> {
    urlencoding::decode(input).unwrap_or_else(|err| {
        debug!(input, error = %err, "percent-decoding failed, keeping raw text");
        Cow::Borrowed(input)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_slashes() {
        assert_eq!(normalize_path("/admin"), "admin");
        assert_eq!(normalize_path("/admin/"), "admin");
        assert_eq!(normalize_path("admin/post"), "admin/post");
        assert_eq!(normalize_path("/"), "");
        assert_eq!(normalize_path(""), "");
    }

    #[test]
    fn test_normalize_strips_single_slash_only() {
        assert_eq!(normalize_path("//"), "");
        assert_eq!(normalize_path("/admin//"), "admin/");
        assert_eq!(normalize_path("//admin"), "/admin");
    }

    #[test]
    fn test_normalize_strips_query() {
        assert_eq!(normalize_path("/post?id=123"), "post");
        assert_eq!(normalize_path("/post?a=1?b=2"), "post");
        // The trailing slash is trimmed before the query is cut off.
        assert_eq!(normalize_path("/post/?id=1"), "post/");
    }

    #[test]
    fn test_normalize_decodes_utf8() {
        assert_eq!(normalize_path("%C2%A35"), "£5");
        assert_eq!(normalize_path("/hello%20world"), "hello world");
        assert_eq!(normalize_path("/£5"), "£5");
    }

    #[test]
    fn test_normalize_invalid_utf8_keeps_raw() {
        assert_eq!(normalize_path("/bad%FF"), "bad%FF");
    }

    #[test]
    fn test_normalize_borrows_when_unchanged() {
        assert!(matches!(normalize_path("/about"), Cow::Borrowed("about")));
    }

    #[test]
    fn test_extract_query() {
        let query = extract_query("/post?id=123&type=html");
        assert_eq!(query.get("id"), Some("123"));
        assert_eq!(query.get("type"), Some("html"));
        assert_eq!(query.len(), 2);
    }

    #[test]
    fn test_extract_query_blank_values() {
        let query = extract_query("/post?id=&type=");
        assert_eq!(query.get("id"), Some(""));
        assert_eq!(query.get("type"), Some(""));
    }

    #[test]
    fn test_extract_query_skips_broken_tokens() {
        let query = extract_query("/post?id=123&type&");
        assert_eq!(query.get("id"), Some("123"));
        assert!(!query.contains("type"));
        assert_eq!(query.len(), 1);
    }

    #[test]
    fn test_extract_query_no_query() {
        assert!(extract_query("/post").is_empty());
        assert!(extract_query("/post?").is_empty());
        assert!(extract_query("").is_empty());
    }

    #[test]
    fn test_extract_query_splits_on_first_separators() {
        let query = extract_query("/a?x=1=2&y=b?c");
        assert_eq!(query.get("x"), Some("1=2"));
        assert_eq!(query.get("y"), Some("b?c"));
    }

    #[test]
    fn test_extract_query_later_duplicates_win() {
        let query = extract_query("/a?k=first&k=second");
        assert_eq!(query.get("k"), Some("second"));
    }

    #[test]
    fn test_extract_query_is_not_decoded() {
        let query = extract_query("/a?name=John%20Doe");
        assert_eq!(query.get("name"), Some("John%20Doe"));
    }

    #[test]
    fn test_split_segments() {
        assert_eq!(split_segments("admin/post"), vec!["admin", "post"]);
        assert_eq!(split_segments(""), vec![""]);
    }
}
