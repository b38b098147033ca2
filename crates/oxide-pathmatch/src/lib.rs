//! # oxide-pathmatch
//!
//! Client-side route matching: given an ordered list of route patterns and
//! a path, find the first pattern that matches, bind its named parameters
//! and parse the query string.
//!
//! This crate provides:
//! - Literal, parameter, optional and wildcard segments
//! - First-match-wins precedence in caller order
//! - Query string parsing and percent-decoding of paths
//! - Arbitrary payloads attached to routes and returned on a match
//!
//! ## Quick Start
//!
//! ```
//! use oxide_pathmatch::Router;
//!
//! #[derive(Debug, PartialEq)]
//! enum Page {
//!     Admin,
//!     Profile,
//!     NotFound,
//! }
//!
//! let router = Router::new()
//!     .route("/admin", Page::Admin)
//!     .route("/admin/:username", Page::Profile)
//!     .route("*", Page::NotFound);
//!
//! let result = router.match_path("/admin/silverlight513");
//! assert_eq!(result.payload(), Some(&Page::Profile));
//! assert_eq!(result.params.get("username"), Some("silverlight513"));
//! ```
//!
//! ## Pattern Syntax
//!
//! | Segment  | Matches                                             |
//! |----------|-----------------------------------------------------|
//! | `admin`  | exactly `admin`                                     |
//! | `:id`    | any segment, bound to `id`                          |
//! | `(new)`  | `new`, or nothing when it is the missing segment    |
//! | `(:id)`  | any segment bound to `id`, or nothing               |
//! | `*`      | the rest of the path; alone, every path             |
//! | `(*)`    | the rest of the path, or nothing                    |
//!
//! ## Precedence
//!
//! Routes are tried strictly in order. A route listed earlier wins even if
//! a later one is more specific:
//!
//! ```
//! use oxide_pathmatch::{match_routes, RoutePattern};
//!
//! let routes = [RoutePattern::from("/admin/:id"), RoutePattern::from("/admin/post")];
//! assert_eq!(match_routes(&routes, "/admin/post").pattern(), Some("/admin/:id"));
//! ```
//!
//! ## Query Strings
//!
//! ```
//! use oxide_pathmatch::{match_routes, RoutePattern};
//!
//! let routes = [RoutePattern::from("/post")];
//! let result = match_routes(&routes, "/post?id=123&type");
//! assert_eq!(result.pattern(), Some("/post"));
//! assert_eq!(result.query.get("id"), Some("123"));
//! assert_eq!(result.query.get("type"), None);
//! ```

mod error;
mod matcher;
mod params;
mod path;
mod result;
mod route;
mod router;
mod segment;

pub use error::{Result, RouterError};
pub use matcher::match_routes;
pub use params::Params;
pub use path::{extract_query, normalize_path, split_segments};
pub use result::MatchResult;
pub use route::RoutePattern;
pub use router::Router;
pub use segment::{is_dynamic_pattern, parse_segments, PatternSegment, SegmentKind};
