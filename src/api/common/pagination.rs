//
//  tableau-rest
//  api/common/pagination.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Pagination driver for Tableau list responses.
//!
//! Every list endpoint of the Server answers with the same two-level shape:
//!
//! ```json
//! {
//!   "pagination": {"pageNumber": "1", "pageSize": "100", "totalAvailable": "3"},
//!   "workbooks": {"workbook": [{"id": "..."}, {"id": "..."}, {"id": "..."}]}
//! }
//! ```
//!
//! [`extract_pages`] walks `pageNumber` from a start page until the Server
//! reports no more items (or a caller limit is reached) and flattens the inner
//! lists into one ordered `Vec`.
//!
//! # Example
//!
//! ```rust,no_run
//! use tableau_rest::api::common::{extract_pages, PageOptions};
//! use tableau_rest::api::TableauClient;
//!
//! # async fn example(client: &TableauClient) -> tableau_rest::api::common::Result<()> {
//! let options = PageOptions::new().with_page_size(100).with_limit(250);
//! let projects = extract_pages(
//!     |params| async move { client.query_projects(&params).await },
//!     options,
//! )
//! .await?;
//! assert!(projects.len() <= 250);
//! # Ok(())
//! # }
//! ```

use std::future::Future;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::{ApiError, QueryParams, Result};
use crate::api::response::ApiResponse;

/// Default number of items requested per page.
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// The pagination block of a list response.
///
/// The Server encodes these numbers as strings in JSON; both strings and
/// numbers are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Pagination {
    /// Page number of this response (1-indexed).
    #[serde(rename = "pageNumber", deserialize_with = "number_or_string")]
    pub page_number: u64,

    /// Page size used for this response.
    #[serde(rename = "pageSize", deserialize_with = "number_or_string")]
    pub page_size: u64,

    /// Total items available across all pages.
    #[serde(rename = "totalAvailable", deserialize_with = "number_or_string")]
    pub total_available: u64,
}

fn number_or_string<'de, D>(deserializer: D) -> std::result::Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(u64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(n),
        Raw::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

/// Options for one logical list traversal.
///
/// # Fields
///
/// | Field | Default | Description |
/// |-------|---------|-------------|
/// | `start_page` | `1` | First page requested |
/// | `page_size` | `100` | Items per page |
/// | `limit` | `None` | Stop once this many items are collected |
/// | `params` | empty | Extra query fragments (filters, sorts, fields) |
#[derive(Debug, Clone)]
pub struct PageOptions {
    pub start_page: u32,
    pub page_size: u32,
    pub limit: Option<usize>,
    pub params: QueryParams,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            start_page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            limit: None,
            params: QueryParams::new(),
        }
    }
}

impl PageOptions {
    /// Creates options with the defaults listed on [`PageOptions`].
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(mut self, page: u32) -> Self {
        self.start_page = page;
        self
    }

    pub fn with_page_size(mut self, size: u32) -> Self {
        self.page_size = size;
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_params(mut self, params: QueryParams) -> Self {
        self.params = params;
        self
    }
}

/// State of one traversal: the page to request next and what has been
/// collected so far.
///
/// Invariant: `items.len()` never exceeds the Server's `totalAvailable`, nor
/// the caller's limit when one is set.
#[derive(Debug, Clone)]
pub struct PageCursor {
    page_number: u32,
    page_size: u32,
    limit: Option<usize>,
    total_available: Option<u64>,
    params: QueryParams,
    items: Vec<Value>,
}

impl PageCursor {
    /// Starts a traversal from `options`.
    pub fn new(options: &PageOptions) -> Result<Self> {
        if options.page_size == 0 {
            return Err(ApiError::invalid("page size must be at least 1"));
        }
        if options.start_page == 0 {
            return Err(ApiError::invalid("page numbers start at 1"));
        }

        Ok(Self {
            page_number: options.start_page,
            page_size: options.page_size,
            limit: options.limit,
            total_available: None,
            params: options.params.clone(),
            items: Vec::new(),
        })
    }

    /// Query parameters for the next request, with paging applied.
    pub fn next_params(&self) -> QueryParams {
        let mut params = self.params.clone();
        params.page(self.page_number, self.page_size);
        params
    }

    /// Page number the next request asks for.
    pub fn page_number(&self) -> u32 {
        self.page_number
    }

    /// Total reported by the Server, once a page has been absorbed.
    pub fn total_available(&self) -> Option<u64> {
        self.total_available
    }

    /// Items collected so far.
    pub fn items(&self) -> &[Value] {
        &self.items
    }

    /// Folds one response body into the cursor.
    ///
    /// # Returns
    ///
    /// - `Ok(true)` - Another page must be requested
    /// - `Ok(false)` - The traversal is complete
    pub fn absorb(&mut self, body: &Value) -> Result<bool> {
        let (pagination, page_items) = split_page(body)?;
        self.total_available = Some(pagination.total_available);

        if pagination.total_available == 0 {
            self.items.clear();
            return Ok(false);
        }

        self.items.extend(page_items);

        let total = usize::try_from(pagination.total_available).unwrap_or(usize::MAX);
        let ceiling = self.limit.map_or(total, |limit| limit.min(total));
        if self.items.len() >= ceiling {
            self.items.truncate(ceiling);
            return Ok(false);
        }

        let fetched = u64::from(self.page_number) * u64::from(self.page_size);
        if fetched >= pagination.total_available {
            return Ok(false);
        }

        self.page_number += 1;
        Ok(true)
    }

    /// Consumes the cursor, returning the collected items.
    pub fn into_items(self) -> Vec<Value> {
        self.items
    }
}

/// Splits a list response into its pagination block and its item list.
///
/// The item list lives under the single non-pagination key, inside its single
/// inner key: `{"projects": {"project": [...]}}`. A lone object in place of
/// the inner list is treated as a one-item list.
///
/// # Errors
///
/// - [`ApiError::PaginationError`] - No `pagination` block
/// - [`ApiError::ContentNotFound`] - A non-empty total but no inner list
pub fn split_page(body: &Value) -> Result<(Pagination, Vec<Value>)> {
    let object = body
        .as_object()
        .ok_or_else(|| ApiError::PaginationError("response body is not a JSON object".into()))?;

    let pagination_value = object
        .get("pagination")
        .ok_or_else(|| ApiError::PaginationError("response has no pagination block".into()))?;
    let pagination: Pagination = serde_json::from_value(pagination_value.clone())
        .map_err(|e| ApiError::PaginationError(format!("malformed pagination block: {}", e)))?;

    if pagination.total_available == 0 {
        return Ok((pagination, Vec::new()));
    }

    let mut outer = object.iter().filter(|(key, _)| key.as_str() != "pagination");
    let (outer_key, container) = match (outer.next(), outer.next()) {
        (Some(entry), None) => entry,
        (None, _) => {
            return Err(ApiError::ContentNotFound(
                "paginated response carries no content container".into(),
            ))
        }
        (Some(_), Some(_)) => {
            return Err(ApiError::PaginationError(
                "paginated response carries more than one content container".into(),
            ))
        }
    };

    let inner = container
        .as_object()
        .and_then(|map| {
            let mut values = map.values();
            match (values.next(), values.next()) {
                (Some(value), None) => Some(value),
                _ => None,
            }
        })
        .ok_or_else(|| {
            ApiError::ContentNotFound(format!("'{}' holds no content list", outer_key))
        })?;

    let items = match inner {
        Value::Array(items) => items.clone(),
        Value::Object(_) => vec![inner.clone()],
        _ => {
            return Err(ApiError::ContentNotFound(format!(
                "'{}' holds an unexpected value",
                outer_key
            )))
        }
    };

    Ok((pagination, items))
}

/// Runs a list operation page by page and returns the concatenated items.
///
/// `fetch` receives the query parameters for each page (caller parameters plus
/// `pageNumber`/`pageSize`) and issues the request. Pages are fetched strictly
/// in order. Calling this again restarts from `options.start_page`.
pub async fn extract_pages<F, Fut>(mut fetch: F, options: PageOptions) -> Result<Vec<Value>>
where
    F: FnMut(QueryParams) -> Fut,
    Fut: Future<Output = Result<ApiResponse>>,
{
    let mut cursor = PageCursor::new(&options)?;

    loop {
        let params = cursor.next_params();
        tracing::debug!("Fetching page {}", cursor.page_number());
        let body = fetch(params).await?.json_value()?;
        if !cursor.absorb(&body)? {
            break;
        }
    }

    Ok(cursor.into_items())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn page(number: u32, size: u32, total: u32, count: usize) -> Value {
        let items: Vec<Value> = (0..count)
            .map(|i| json!({"id": format!("p{}-{}", number, i)}))
            .collect();
        json!({
            "pagination": {
                "pageNumber": number.to_string(),
                "pageSize": size.to_string(),
                "totalAvailable": total.to_string()
            },
            "projects": {"project": items}
        })
    }

    #[test]
    fn test_pagination_accepts_strings_and_numbers() {
        let from_strings: Pagination = serde_json::from_value(
            json!({"pageNumber": "2", "pageSize": "10", "totalAvailable": "31"}),
        )
        .unwrap();
        let from_numbers: Pagination =
            serde_json::from_value(json!({"pageNumber": 2, "pageSize": 10, "totalAvailable": 31}))
                .unwrap();
        assert_eq!(from_strings, from_numbers);
    }

    #[test]
    fn test_split_page_missing_block() {
        let err = split_page(&json!({"projects": {"project": []}})).unwrap_err();
        assert!(matches!(err, ApiError::PaginationError(_)));
    }

    #[test]
    fn test_split_page_empty_container() {
        let body = json!({
            "pagination": {"pageNumber": "1", "pageSize": "100", "totalAvailable": "4"},
            "projects": {}
        });
        assert!(matches!(
            split_page(&body).unwrap_err(),
            ApiError::ContentNotFound(_)
        ));
    }

    #[test]
    fn test_split_page_zero_total_is_empty() {
        let body = json!({
            "pagination": {"pageNumber": "1", "pageSize": "100", "totalAvailable": "0"},
            "projects": {}
        });
        let (pagination, items) = split_page(&body).unwrap();
        assert_eq!(pagination.total_available, 0);
        assert!(items.is_empty());
    }

    #[test]
    fn test_cursor_stops_at_limit() {
        let options = PageOptions::new().with_page_size(100).with_limit(250);
        let mut cursor = PageCursor::new(&options).unwrap();

        assert!(cursor.absorb(&page(1, 100, 1000, 100)).unwrap());
        assert!(cursor.absorb(&page(2, 100, 1000, 100)).unwrap());
        assert!(!cursor.absorb(&page(3, 100, 1000, 100)).unwrap());
        assert_eq!(cursor.into_items().len(), 250);
    }

    #[test]
    fn test_cursor_stops_at_total() {
        let options = PageOptions::new().with_page_size(10);
        let mut cursor = PageCursor::new(&options).unwrap();

        assert!(cursor.absorb(&page(1, 10, 15, 10)).unwrap());
        assert_eq!(cursor.next_params().get("pageNumber"), Some("pageNumber=2"));
        assert!(!cursor.absorb(&page(2, 10, 15, 5)).unwrap());
        assert_eq!(cursor.total_available(), Some(15));
        assert_eq!(cursor.items().len(), 15);
    }

    #[test]
    fn test_cursor_rejects_zero_page_size() {
        let options = PageOptions::new().with_page_size(0);
        assert!(matches!(
            PageCursor::new(&options).unwrap_err(),
            ApiError::InvalidParameter(_)
        ));
    }
}
