//! Request DTOs for the item catalog API
//!
//! Defines the raw query-string map received by the listing, export and
//! cache endpoints.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The full raw query-parameter map of a request.
///
/// Keys are kept sorted so two requests carrying the same parameters in a
/// different order compare equal. A repeated key keeps its last value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawParams(BTreeMap<String, String>);

impl RawParams {
    /// Creates an empty parameter map
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a parameter, returning the map for chaining.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Returns the raw value of a parameter, blank or not.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Returns the trimmed value of a parameter if it is present and not blank.
    pub fn filled(&self, key: &str) -> Option<&str> {
        self.get(key).map(str::trim).filter(|v| !v.is_empty())
    }

    /// Iterates parameters in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RawParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filled_ignores_blank_values() {
        let params = RawParams::new()
            .with("category", "  ")
            .with("search", "")
            .with("price", " 10 ");

        assert_eq!(params.filled("category"), None);
        assert_eq!(params.filled("search"), None);
        assert_eq!(params.filled("price"), Some("10"));
        assert_eq!(params.filled("missing"), None);
        assert_eq!(params.get("search"), Some(""));
    }

    #[test]
    fn test_order_normalized() {
        let a: RawParams = vec![("b", "2"), ("a", "1")].into_iter().collect();
        let b: RawParams = vec![("a", "1"), ("b", "2")].into_iter().collect();
        assert_eq!(a, b);
        assert_eq!(a.iter().next(), Some(("a", "1")));
    }

    #[test]
    fn test_deserialize_from_json_map() {
        let params: RawParams = serde_json::from_str(r#"{"page": "2", "category": "Tools"}"#).unwrap();
        assert_eq!(params.len(), 2);
        assert_eq!(params.get("page"), Some("2"));
    }
}
