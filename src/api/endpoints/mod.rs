//
//  tableau-rest
//  api/endpoints/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Endpoint Builders
//!
//! One enum per resource family. Each variant names a single operation
//! target and carries the IDs it needs, so conflicting selections cannot be
//! expressed. Turning a variant into a URL:
//!
//! 1. checks that every ID it carries is non-empty
//! 2. substitutes the IDs into the family's template
//! 3. appends the variant's default query fragments, then the caller's
//!
//! ## URL Layout
//!
//! | Scope | Prefix |
//! |-------|--------|
//! | Server | `{server}/api/{version}` |
//! | Site | `{server}/api/{version}/sites/{site-id}` |
//! | Metadata | `{server}/api/metadata/graphql` |
//!
//! ## Example
//!
//! ```rust
//! use tableau_rest::api::common::QueryParams;
//! use tableau_rest::api::endpoints::{Endpoint, UrlBase, WorkbookEndpoint};
//! use tableau_rest::api::version::ApiVersion;
//!
//! let base = UrlBase::new("https://tableau.example.com", ApiVersion::new(3, 19), Some("site-1"));
//! let url = WorkbookEndpoint::Connections("wb-1")
//!     .url(&base, &QueryParams::new())
//!     .unwrap();
//! assert_eq!(
//!     url,
//!     "https://tableau.example.com/api/3.19/sites/site-1/workbooks/wb-1/connections"
//! );
//! ```

mod auth;
mod datasources;
mod encryption;
mod favorites;
mod flows;
mod groups;
mod jobs;
mod metadata;
mod permissions;
mod projects;
mod schedules;
mod sites;
mod subscriptions;
mod tasks;
mod uploads;
mod users;
mod views;
mod webhooks;
mod workbooks;

pub use auth::*;
pub use datasources::*;
pub use encryption::*;
pub use favorites::*;
pub use flows::*;
pub use groups::*;
pub use jobs::*;
pub use metadata::*;
pub use permissions::*;
pub use projects::*;
pub use schedules::*;
pub use sites::*;
pub use subscriptions::*;
pub use tasks::*;
pub use uploads::*;
pub use users::*;
pub use views::*;
pub use webhooks::*;
pub use workbooks::*;

use std::borrow::Cow;

use crate::api::common::{ApiError, QueryParams, Result};
use crate::api::version::ApiVersion;

/// The server, API version and (once signed in) site every URL hangs off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlBase {
    server: String,
    version: ApiVersion,
    site_id: Option<String>,
}

impl UrlBase {
    /// Creates a base. `server` should carry no trailing slash.
    pub fn new(server: &str, version: ApiVersion, site_id: Option<&str>) -> Self {
        Self {
            server: server.trim_end_matches('/').to_string(),
            version,
            site_id: site_id.map(str::to_string),
        }
    }

    pub fn version(&self) -> ApiVersion {
        self.version
    }

    /// `{server}/api/{version}`
    pub fn api(&self) -> String {
        format!("{}/api/{}", self.server, self.version)
    }

    /// `{server}/api/{version}/sites/{site-id}`
    ///
    /// # Errors
    ///
    /// [`ApiError::NotSignedIn`] when no site ID is known yet.
    pub fn site(&self) -> Result<String> {
        let site_id = self.site_id.as_deref().ok_or(ApiError::NotSignedIn)?;
        Ok(format!("{}/sites/{}", self.api(), site_id))
    }

    /// `{server}/api/metadata/graphql`
    pub fn graphql(&self) -> String {
        format!("{}/api/metadata/graphql", self.server)
    }
}

/// A resolvable operation target.
pub trait Endpoint {
    /// The URL without a query string.
    fn path(&self, base: &UrlBase) -> Result<String>;

    /// Query fragments the operation always sends. Caller fragments with the
    /// same key win.
    fn defaults(&self) -> QueryParams {
        QueryParams::new()
    }

    /// The full URL: path, then defaults merged with `params`.
    fn url(&self, base: &UrlBase, params: &QueryParams) -> Result<String> {
        let mut query = self.defaults();
        query.extend_from(params);
        Ok(format!("{}{}", self.path(base)?, query.to_query_string()))
    }
}

/// Checks that an ID, tag or name is present and percent-encodes it as one
/// path segment. IDs are opaque; numeric IDs pass as strings.
pub(crate) fn id<'a>(value: &'a str, name: &str) -> Result<Cow<'a, str>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ApiError::invalid(format!("{} is required", name)));
    }
    Ok(urlencoding::encode(trimmed))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> UrlBase {
        UrlBase::new("https://tableau.example.com/", ApiVersion::new(3, 19), Some("site-1"))
    }

    #[test]
    fn test_base_prefixes() {
        let base = base();
        assert_eq!(base.api(), "https://tableau.example.com/api/3.19");
        assert_eq!(
            base.site().unwrap(),
            "https://tableau.example.com/api/3.19/sites/site-1"
        );
        assert_eq!(base.graphql(), "https://tableau.example.com/api/metadata/graphql");
    }

    #[test]
    fn test_site_requires_session() {
        let base = UrlBase::new("https://t", ApiVersion::new(3, 0), None);
        assert!(matches!(base.site(), Err(ApiError::NotSignedIn)));
    }

    #[test]
    fn test_id_rejects_blank() {
        assert!(matches!(id("  ", "workbook id"), Err(ApiError::InvalidParameter(_))));
        assert_eq!(id("42", "revision").unwrap(), "42");
        assert_eq!(id("Q1 sales", "tag").unwrap(), "Q1%20sales");
    }

    #[test]
    fn test_id_stays_in_its_segment() {
        assert_eq!(id("wb/../users", "workbook id").unwrap(), "wb%2F..%2Fusers");
        assert_eq!(id("a?b#c", "workbook id").unwrap(), "a%3Fb%23c");
        assert_eq!(
            WorkbookEndpoint::Item("wb-1/../../users")
                .url(&base(), &QueryParams::new())
                .unwrap(),
            "https://tableau.example.com/api/3.19/sites/site-1/workbooks/wb-1%2F..%2F..%2Fusers"
        );
    }
}
