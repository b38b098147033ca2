#![allow(dead_code)]

use oxide_pathmatch::{match_routes, MatchResult, RoutePattern};

pub fn routes(patterns: &[&str]) -> Vec<RoutePattern> {
    patterns.iter().copied().map(RoutePattern::from).collect()
}

pub fn run<'r>(routes: &'r [RoutePattern], path: &str) -> MatchResult<'r> {
    match_routes(routes, path)
}

pub fn matched_pattern(patterns: &[&str], path: &str) -> Option<String> {
    let routes = routes(patterns);
    match_routes(&routes, path).pattern().map(str::to_string)
}

pub fn assert_matches(patterns: &[&str], path: &str, expected: &str) {
    let actual = matched_pattern(patterns, path);
    assert_eq!(
        actual.as_deref(),
        Some(expected),
        "path {path:?} against {patterns:?}"
    );
}
