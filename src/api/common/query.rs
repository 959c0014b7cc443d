//
//  tableau-rest
//  api/common/query.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Query-string parameters.
//!
//! The Server accepts filters, sorts, field lists and paging as plain query
//! fragments. Callers hand those fragments over verbatim (`filter=name:eq:Sales`)
//! keyed by a name used only for replacement; the endpoint builder joins the
//! fragments with `&` and prefixes `?`.
//!
//! ```rust
//! use tableau_rest::api::common::QueryParams;
//!
//! let mut params = QueryParams::new();
//! params.insert("filter", "filter=name:eq:Superstore");
//! params.page(2, 50);
//!
//! assert_eq!(
//!     params.to_query_string(),
//!     "?filter=name:eq:Superstore&pageNumber=2&pageSize=50"
//! );
//! ```

use std::fmt::Display;

/// Ordered map of query-string fragments.
///
/// Insertion order is kept so generated URLs are deterministic. Inserting an
/// existing key replaces its fragment in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    entries: Vec<(String, String)>,
}

impl QueryParams {
    /// Creates an empty parameter map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a verbatim `key=value` fragment under `key`.
    pub fn insert(&mut self, key: impl Into<String>, fragment: impl Into<String>) {
        let key = key.into();
        let fragment = fragment.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = fragment,
            None => self.entries.push((key, fragment)),
        }
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, key: impl Into<String>, fragment: impl Into<String>) -> Self {
        self.insert(key, fragment);
        self
    }

    /// Inserts `key=value`, formatting the value with `Display`.
    pub fn set(&mut self, key: &str, value: impl Display) {
        self.insert(key, format!("{}={}", key, value));
    }

    /// Inserts a boolean flag as lowercase `true`/`false`.
    pub fn flag(&mut self, key: &str, value: bool) {
        self.set(key, value);
    }

    /// Sets `pageNumber` and `pageSize`.
    pub fn page(&mut self, number: u32, size: u32) {
        self.set("pageNumber", number);
        self.set("pageSize", size);
    }

    /// Sets the `filter` expression (e.g. `name:eq:Sales`).
    pub fn filter(&mut self, expression: &str) {
        self.set("filter", expression);
    }

    /// Returns the fragment stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, fragment)| fragment.as_str())
    }

    /// Removes the fragment stored under `key`.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        let index = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(index).1)
    }

    /// Returns `true` if no fragment is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of stored fragments.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Copies every fragment of `other` into `self`, replacing equal keys.
    pub fn extend_from(&mut self, other: &QueryParams) {
        for (key, fragment) in &other.entries {
            self.insert(key.clone(), fragment.clone());
        }
    }

    /// Renders the map as a URL suffix: empty, or `?` followed by the
    /// fragments joined with `&`.
    pub fn to_query_string(&self) -> String {
        if self.entries.is_empty() {
            return String::new();
        }
        let joined = self
            .entries
            .iter()
            .map(|(_, fragment)| fragment.as_str())
            .collect::<Vec<_>>()
            .join("&");
        format!("?{}", joined)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (key, fragment) in iter {
            params.insert(key, fragment);
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_renders_nothing() {
        assert_eq!(QueryParams::new().to_query_string(), "");
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut params = QueryParams::new();
        params.page(1, 100);
        params.insert("fields", "fields=_all_");
        params.set("pageNumber", 3);
        assert_eq!(
            params.to_query_string(),
            "?pageNumber=3&pageSize=100&fields=_all_"
        );
    }

    #[test]
    fn test_from_iterator_and_remove() {
        let mut params: QueryParams = [("sort", "sort=name:asc"), ("filter", "filter=ownerName:eq:Ann")]
            .into_iter()
            .collect();
        assert_eq!(params.remove("sort").as_deref(), Some("sort=name:asc"));
        assert_eq!(params.to_query_string(), "?filter=ownerName:eq:Ann");
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn test_flag_is_lowercase() {
        let mut params = QueryParams::new();
        params.flag("overwrite", true);
        params.flag("asJob", false);
        assert_eq!(params.to_query_string(), "?overwrite=true&asJob=false");
    }
}
