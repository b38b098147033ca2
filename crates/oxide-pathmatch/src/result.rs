//! Match results.

use serde::Serialize;

use crate::error::{Result, RouterError};
use crate::params::Params;
use crate::route::RoutePattern;

/// The outcome of matching a path against a route table.
///
/// A miss is not an error: `route` is `None` and the query, path and
/// pathname are still filled in.
#[derive(Debug, Serialize)]
pub struct MatchResult<'r, T = ()> {
    /// The first route that matched, if any.
    #[serde(flatten)]
    pub route: Option<&'r RoutePattern<T>>,
    /// Parameters bound by the matched route.
    pub params: Params,
    /// Parsed query string.
    pub query: Params,
    /// The path exactly as given.
    pub pathname: String,
    /// The normalized path used for matching.
    pub path: String,
}

impl<'r, T> MatchResult<'r, T> {
    /// Returns true if a route matched.
    pub fn is_match(&self) -> bool {
        self.route.is_some()
    }

    /// Returns the matched pattern string.
    pub fn pattern(&self) -> Option<&'r str> {
        self.route.map(RoutePattern::pattern)
    }

    /// Returns the payload of the matched route.
    pub fn payload(&self) -> Option<&'r T> {
        self.route.map(RoutePattern::payload)
    }

    /// Returns the matched route, or `RouterError::NotFound`.
    pub fn require(&self) -> Result<&'r RoutePattern<T>> {
        self.route.ok_or_else(|| RouterError::NotFound {
            path: self.pathname.clone(),
        })
    }
}

impl<T> Clone for MatchResult<'_, T> {
    fn clone(&self) -> Self {
        Self {
            route: self.route,
            params: self.params.clone(),
            query: self.query.clone(),
            pathname: self.pathname.clone(),
            path: self.path.clone(),
        }
    }
}
