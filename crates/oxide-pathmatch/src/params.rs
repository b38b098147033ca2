//! Parameter maps shared by path parameters and query parameters.

use std::collections::HashMap;

use serde::Serialize;

/// Named string values: the bindings of a matched route, or a parsed query.
///
/// Each key appears once; a later insert under the same key wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Params {
    values: HashMap<String, String>,
}

impl Params {
    /// An empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` under `key`, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Looks up the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Whether `key` was bound.
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Like [`get`](Self::get), but a missing key becomes a message naming it.
    pub fn require(&self, key: &str) -> Result<&str, String> {
        self.get(key).ok_or_else(|| format!("Missing parameter: {key}"))
    }

    /// Converts the value under `key` with [`FromStr`](std::str::FromStr).
    /// Missing keys and unparsable values both yield `None`.
    pub fn parse<T: std::str::FromStr>(&self, key: &str) -> Option<T> {
        self.get(key)?.parse().ok()
    }

    /// Key/value pairs, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params() {
        let mut params = Params::new();
        params.insert("id", "123");
        params.insert("name", "test");

        assert_eq!(params.get("id"), Some("123"));
        assert_eq!(params.parse::<i64>("id"), Some(123));
        assert_eq!(params.parse::<i64>("name"), None);
        assert_eq!(params.get("missing"), None);
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn test_require() {
        let params: Params = [("id", "7")].into_iter().collect();
        assert_eq!(params.require("id"), Ok("7"));
        assert_eq!(
            params.require("slug"),
            Err("Missing parameter: slug".to_string())
        );
    }

    #[test]
    fn test_insert_replaces() {
        let params: Params = [("k", "a"), ("k", "b")].into_iter().collect();
        assert_eq!(params.get("k"), Some("b"));
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn test_serializes_as_map() {
        let params: Params = [("id", "1")].into_iter().collect();
        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(json, serde_json::json!({"id": "1"}));
    }
}
