//! Route pattern segments.
//!
//! Pattern syntax, one `/`-delimited segment at a time:
//! - `admin` - literal text
//! - `:id` - named parameter
//! - `*` - wildcard
//! - `(new)`, `(:id)`, `(*)` - any of the above, optional

/// What a single pattern segment matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind<'a> {
    /// A literal segment, compared byte for byte.
    Literal(&'a str),
    /// A parameter segment (e.g., `:id`), bound by name.
    Param(&'a str),
    /// A wildcard segment.
    Wildcard,
}

impl<'a> SegmentKind<'a> {
    fn parse(text: &'a str) -> Self {
        if text == "*" {
            Self::Wildcard
        } else if let Some(name) = text.strip_prefix(':') {
            Self::Param(name)
        } else {
            Self::Literal(text)
        }
    }
}

/// A parsed pattern segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternSegment<'a> {
    /// What the segment matches.
    pub kind: SegmentKind<'a>,
    /// Whether the segment was wrapped in parentheses.
    pub optional: bool,
}

impl<'a> PatternSegment<'a> {
    /// Parses one segment of a normalized pattern.
    ///
    /// # Example
    ///
    /// ```
    /// use oxide_pathmatch::{PatternSegment, SegmentKind};
    ///
    /// let segment = PatternSegment::parse("(:id)");
    /// assert_eq!(segment.kind, SegmentKind::Param("id"));
    /// assert!(segment.optional);
    /// ```
    pub fn parse(segment: &'a str) -> Self {
        match optional_inner(segment) {
            Some(inner) => Self {
                kind: SegmentKind::parse(inner),
                optional: true,
            },
            None => Self {
                kind: SegmentKind::parse(segment),
                optional: false,
            },
        }
    }
}

/// Parses every segment of a normalized pattern, in order.
pub fn parse_segments(normalized: &str) -> Vec<PatternSegment<'_>> {
    normalized.split('/').map(PatternSegment::parse).collect()
}

/// Returns true if a raw pattern has any parameter, wildcard or optional
/// segment. Patterns without any can only match their exact text.
pub fn is_dynamic_pattern(pattern: &str) -> bool {
    pattern.contains(':')
        || pattern.contains('*')
        || pattern.split('/').any(|s| optional_inner(s).is_some())
}

fn optional_inner(segment: &str) -> Option<&str> {
    segment
        .strip_prefix('(')?
        .strip_suffix(')')
        .filter(|inner| !inner.is_empty())
}
