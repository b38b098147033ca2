//! The route matching algorithm.
//!
//! Routes are tried in the order given and the first one that accepts wins.
//! Each route is first compared with the path as a whole; routes with
//! parameters, wildcards or optional segments are then scanned segment by
//! segment from the last segment to the first. Reaching the first segment
//! without a rejection means every segment after it already matched.

use tracing::{debug, trace};

use crate::params::Params;
use crate::path::{extract_query, normalize_path, split_segments};
use crate::result::MatchResult;
use crate::route::RoutePattern;
use crate::segment::{is_dynamic_pattern, parse_segments, PatternSegment, SegmentKind};

/// Outcome of examining one pattern segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    /// The route matches; stop scanning.
    Accept,
    /// The route cannot match; move on to the next route.
    Reject,
    /// This segment is satisfied; examine the one to its left.
    ContinueLeft,
}

/// Finds the first route in `routes` that matches `path`.
///
/// Never fails: a miss yields a result without a route, still carrying the
/// parsed query and the normalized path.
///
/// # Example
///
/// ```
/// use oxide_pathmatch::{match_routes, RoutePattern};
///
/// let routes = [
///     RoutePattern::from("/admin"),
///     RoutePattern::from("/admin/:username"),
///     RoutePattern::from("*"),
/// ];
///
/// let result = match_routes(&routes, "/admin/silverlight513?tab=posts");
/// assert_eq!(result.pattern(), Some("/admin/:username"));
/// assert_eq!(result.params.get("username"), Some("silverlight513"));
/// assert_eq!(result.query.get("tab"), Some("posts"));
/// ```
pub fn match_routes<'r, T>(routes: &'r [RoutePattern<T>], path: &str) -> MatchResult<'r, T> {
    let query = extract_query(path);
    let normalized = normalize_path(path);
    let path_segments = split_segments(&normalized);

    let found = routes.iter().find_map(|route| {
        match_route(route, &normalized, &path_segments).map(|params| (route, params))
    });

    let (route, params) = match found {
        Some((route, params)) => {
            debug!(path, pattern = route.pattern(), "route matched");
            (Some(route), params)
        }
        None => {
            debug!(path, "no route matched");
            (None, Params::new())
        }
    };

    MatchResult {
        route,
        params,
        query,
        pathname: path.to_string(),
        path: normalized.to_string(),
    }
}

/// Tests a single route, returning the bound parameters on a match.
fn match_route<T>(
    route: &RoutePattern<T>,
    normalized_path: &str,
    path_segments: &[&str],
) -> Option<Params> {
    let pattern = normalize_path(route.pattern());

    if pattern == normalized_path {
        return Some(Params::new());
    }

    if !is_dynamic_pattern(route.pattern()) {
        return None;
    }

    let segments = parse_segments(&pattern);
    let mut params = Params::new();
    let mut cursor = segments.len();

    while let Some(index) = cursor.checked_sub(1) {
        let outcome = step(&segments, index, path_segments, &mut params);
        trace!(pattern = route.pattern(), index, ?outcome, "segment examined");

        match outcome {
            Step::Accept => return Some(params),
            Step::Reject => break,
            Step::ContinueLeft => cursor = index,
        }
    }

    trace!(pattern = route.pattern(), "route rejected");
    None
}

/// Examines the pattern segment at `index` against the path segment at the
/// same position.
fn step(
    segments: &[PatternSegment<'_>],
    index: usize,
    path: &[&str],
    params: &mut Params,
) -> Step {
    let segment = segments[index];
    let value = path.get(index).copied();
    let first = index == 0;

    if segment.optional {
        return match segment.kind {
            SegmentKind::Param(name) => {
                bind(params, name, value);
                Step::ContinueLeft
            }
            SegmentKind::Wildcard => Step::ContinueLeft,
            // The optional segment is the one missing from the path.
            SegmentKind::Literal(_) if segments.len() == path.len() + 1 => Step::ContinueLeft,
            SegmentKind::Literal(text) if segments.len() == path.len() && value == Some(text) => {
                Step::ContinueLeft
            }
            SegmentKind::Literal(_) => Step::Reject,
        };
    }

    match segment.kind {
        SegmentKind::Param(name) => {
            bind(params, name, value);
            if first {
                Step::Accept
            } else {
                Step::ContinueLeft
            }
        }
        SegmentKind::Wildcard if first => Step::Accept,
        SegmentKind::Wildcard => Step::ContinueLeft,
        SegmentKind::Literal(text) if value != Some(text) => Step::Reject,
        SegmentKind::Literal(_) if first => Step::Accept,
        SegmentKind::Literal(_) => Step::ContinueLeft,
    }
}

/// Binds `name` to the path segment, if the path reaches that far.
fn bind(params: &mut Params, name: &str, value: Option<&str>) {
    if let Some(value) = value {
        params.insert(name, value);
    }
}
