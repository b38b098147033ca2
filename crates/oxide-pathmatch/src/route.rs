//! Route patterns and their payloads.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RouterError};
use crate::params::Params;
use crate::path::normalize_path;
use crate::segment::{PatternSegment, SegmentKind};

/// A route pattern together with an opaque caller payload.
///
/// The payload (a view, a handler id, a page title, ...) is never inspected
/// by the matcher; it is handed back unchanged on a match. With serde the
/// payload's fields sit next to `route`:
///
/// ```
/// use oxide_pathmatch::RoutePattern;
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Page {
///     title: String,
/// }
///
/// let route: RoutePattern<Page> =
///     serde_json::from_str(r#"{"route": "/about", "title": "About"}"#).unwrap();
/// assert_eq!(route.pattern(), "/about");
/// assert_eq!(route.payload().title, "About");
/// ```
///
/// A serialized [`MatchResult`](crate::MatchResult) flattens the route into
/// the same object as `params`, `query`, `pathname` and `path`, so payload
/// fields with those names would be written twice. Keep payloads clear of
/// them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutePattern<T = ()> {
    route: String,
    #[serde(flatten)]
    payload: T,
}

impl<T> RoutePattern<T> {
    /// Creates a route pattern carrying `payload`.
    pub fn new(pattern: impl Into<String>, payload: T) -> Self {
        Self {
            route: pattern.into(),
            payload,
        }
    }

    /// Returns the pattern string as written.
    pub fn pattern(&self) -> &str {
        &self.route
    }

    /// Returns the payload.
    pub fn payload(&self) -> &T {
        &self.payload
    }

    /// Consumes the route, returning its payload.
    pub fn into_payload(self) -> T {
        self.payload
    }

    /// Checks that the pattern can match something other than its own text.
    ///
    /// Matching never rejects a pattern outright; a pattern that fails here
    /// simply never matches the paths its author probably intended.
    pub fn validate(&self) -> Result<()> {
        let normalized = normalize_path(&self.route);
        let raw_segments: Vec<&str> = normalized.split('/').collect();
        let last = raw_segments.len() - 1;
        let mut names = HashSet::new();

        for (index, raw) in raw_segments.iter().enumerate() {
            if *raw == "()" {
                return Err(self.invalid("empty optional group"));
            }

            let segment = PatternSegment::parse(raw);
            if segment.optional && index == 0 {
                return Err(self.invalid("the first segment cannot be optional"));
            }

            match segment.kind {
                SegmentKind::Param("") => {
                    return Err(self.invalid("empty parameter name"));
                }
                SegmentKind::Param(name) => {
                    if !names.insert(name) {
                        return Err(self.invalid(&format!("duplicate parameter ':{name}'")));
                    }
                }
                SegmentKind::Wildcard if !segment.optional && index != last => {
                    return Err(self.invalid("a wildcard must be the final segment"));
                }
                SegmentKind::Wildcard | SegmentKind::Literal(_) => {}
            }
        }

        Ok(())
    }

    /// Builds a concrete path from parameters.
    ///
    /// Optional parameters are left out when absent, optional literals are
    /// always written and optional wildcards are dropped.
    ///
    /// # Example
    ///
    /// ```
    /// use oxide_pathmatch::{Params, RoutePattern};
    ///
    /// let route = RoutePattern::from("/post/:id/(edit)");
    /// let params: Params = [("id", "42")].into_iter().collect();
    /// assert_eq!(route.to_path(&params).unwrap(), "/post/42/edit");
    /// ```
    pub fn to_path(&self, params: &Params) -> Result<String> {
        let normalized = normalize_path(&self.route);
        let mut parts = Vec::new();

        for segment in normalized.split('/').map(PatternSegment::parse) {
            match segment.kind {
                SegmentKind::Literal(text) => parts.push(text),
                SegmentKind::Param(name) => match params.get(name) {
                    Some(value) => parts.push(value),
                    None if segment.optional => {}
                    None => {
                        return Err(RouterError::MissingParam {
                            pattern: self.route.clone(),
                            name: name.to_string(),
                        });
                    }
                },
                SegmentKind::Wildcard if segment.optional => {}
                SegmentKind::Wildcard => {
                    return Err(RouterError::WildcardNotReversible {
                        pattern: self.route.clone(),
                    });
                }
            }
        }

        Ok(format!("/{}", parts.join("/")))
    }

    fn invalid(&self, reason: &str) -> RouterError {
        RouterError::InvalidPattern {
            pattern: self.route.clone(),
            reason: reason.to_string(),
        }
    }
}

impl From<&str> for RoutePattern {
    fn from(pattern: &str) -> Self {
        Self::new(pattern, ())
    }
}

impl From<String> for RoutePattern {
    fn from(pattern: String) -> Self {
        Self::new(pattern, ())
    }
}
