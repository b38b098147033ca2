//! An owned, ordered route table.

use crate::error::Result;
use crate::matcher::match_routes;
use crate::result::MatchResult;
use crate::route::RoutePattern;

/// An ordered route table.
///
/// Routes are matched in the order they were added and the first match
/// wins, so more specific routes belong before catch-alls.
#[derive(Debug, Clone)]
pub struct Router<T = ()> {
    /// Registered routes, in precedence order.
    routes: Vec<RoutePattern<T>>,
}

impl<T> Default for Router<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Router<T> {
    /// Creates a new empty router.
    pub fn new() -> Self {
        Self { routes: Vec::new() }
    }

    /// Adds a route with its payload.
    #[must_use]
    pub fn route(mut self, pattern: &str, payload: T) -> Self {
        self.routes.push(RoutePattern::new(pattern, payload));
        self
    }

    /// Adds an already built route.
    #[must_use]
    pub fn with_route(mut self, route: RoutePattern<T>) -> Self {
        self.routes.push(route);
        self
    }

    /// Appends a route.
    pub fn push(&mut self, route: RoutePattern<T>) {
        self.routes.push(route);
    }

    /// Returns the routes in precedence order.
    pub fn routes(&self) -> &[RoutePattern<T>] {
        &self.routes
    }

    /// Number of routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Returns true if no routes are registered.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Validates every pattern, returning the first problem found.
    pub fn validate(&self) -> Result<()> {
        self.routes.iter().try_for_each(RoutePattern::validate)
    }

    /// Matches a path against the routes.
    pub fn match_path(&self, path: &str) -> MatchResult<'_, T> {
        match_routes(&self.routes, path)
    }
}

impl<T> FromIterator<RoutePattern<T>> for Router<T> {
    fn from_iter<I: IntoIterator<Item = RoutePattern<T>>>(iter: I) -> Self {
        Self {
            routes: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RouterError;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum View {
        Home,
        User,
        NotFound,
    }

    fn router() -> Router<View> {
        Router::new()
            .route("/", View::Home)
            .route("/users/:id", View::User)
            .route("*", View::NotFound)
    }

    #[test]
    fn test_basic_routing() {
        let router = router();
        assert_eq!(router.match_path("/").payload(), Some(&View::Home));
        assert_eq!(router.len(), 3);
    }

    #[test]
    fn test_path_params() {
        let router = router();
        let result = router.match_path("/users/123");
        assert_eq!(result.payload(), Some(&View::User));
        assert_eq!(result.params.parse::<u32>("id"), Some(123));
    }

    #[test]
    fn test_catch_all() {
        let router = router();
        assert_eq!(router.match_path("/nonexistent/page").payload(), Some(&View::NotFound));
    }

    #[test]
    fn test_not_found() {
        let router = Router::new().route("/", View::Home);
        let result = router.match_path("/nonexistent");
        assert!(!result.is_match());
        assert_eq!(
            result.require().unwrap_err(),
            RouterError::NotFound {
                path: "/nonexistent".to_string()
            }
        );
    }

    #[test]
    fn test_validate() {
        assert!(router().validate().is_ok());

        let router = router().with_route(RoutePattern::new("/files/*/raw", View::NotFound));
        assert!(matches!(
            router.validate(),
            Err(RouterError::InvalidPattern { .. })
        ));
    }

    #[test]
    fn test_from_iterator_keeps_order() {
        let router: Router = ["/a", "/b", "*"].into_iter().map(RoutePattern::from).collect();
        let patterns: Vec<&str> = router.routes().iter().map(RoutePattern::pattern).collect();
        assert_eq!(patterns, vec!["/a", "/b", "*"]);
    }

    #[test]
    fn test_push() {
        let mut router = Router::default();
        assert!(router.is_empty());
        router.push(RoutePattern::new("/about", View::Home));
        assert_eq!(router.match_path("/about/").payload(), Some(&View::Home));
    }
}
