//
//  tableau-rest
//  api/endpoints/sites.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Site endpoints.
//!
//! Sites are addressed by ID, or by name / content URL with a `key` query
//! parameter telling the Server which one was given.

use super::{id, Endpoint, UrlBase};
use crate::api::common::{QueryParams, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiteEndpoint<'a> {
    /// `/sites`
    Collection,
    /// `/sites/{id}`
    ById(&'a str),
    /// `/sites/{name}?key=name`
    ByName(&'a str),
    /// `/sites/{content-url}?key=contentUrl`
    ByContentUrl(&'a str),
    /// `/sites/{site}/views`, optionally with usage statistics.
    Views { include_usage: bool },
}

impl Endpoint for SiteEndpoint<'_> {
    fn path(&self, base: &UrlBase) -> Result<String> {
        let root = format!("{}/sites", base.api());
        Ok(match self {
            Self::Collection => root,
            Self::ById(site_id) => format!("{}/{}", root, id(site_id, "site id")?),
            Self::ByName(name) => format!("{}/{}", root, id(name, "site name")?),
            Self::ByContentUrl(url) => format!("{}/{}", root, id(url, "site content URL")?),
            Self::Views { .. } => format!("{}/views", base.site()?),
        })
    }

    fn defaults(&self) -> QueryParams {
        let mut params = QueryParams::new();
        match self {
            Self::ByName(_) => params.set("key", "name"),
            Self::ByContentUrl(_) => params.set("key", "contentUrl"),
            Self::Views { include_usage: true } => params.flag("includeUsageStatistics", true),
            _ => {}
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::common::ApiError;
    use crate::api::version::ApiVersion;

    fn base() -> UrlBase {
        UrlBase::new("https://t", ApiVersion::new(3, 19), Some("s1"))
    }

    #[test]
    fn test_site_lookups() {
        let params = QueryParams::new();
        assert_eq!(SiteEndpoint::Collection.url(&base(), &params).unwrap(), "https://t/api/3.19/sites");
        assert_eq!(
            SiteEndpoint::ByName("Finance EU").url(&base(), &params).unwrap(),
            "https://t/api/3.19/sites/Finance%20EU?key=name"
        );
        assert_eq!(
            SiteEndpoint::ByContentUrl("finance").url(&base(), &params).unwrap(),
            "https://t/api/3.19/sites/finance?key=contentUrl"
        );
        assert!(matches!(
            SiteEndpoint::ById("").url(&base(), &params),
            Err(ApiError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_site_views_usage_flag() {
        let params = QueryParams::new().with("pageSize", "pageSize=10");
        assert_eq!(
            SiteEndpoint::Views { include_usage: true }.url(&base(), &params).unwrap(),
            "https://t/api/3.19/sites/s1/views?includeUsageStatistics=true&pageSize=10"
        );
        assert_eq!(
            SiteEndpoint::Views { include_usage: false }.url(&base(), &QueryParams::new()).unwrap(),
            "https://t/api/3.19/sites/s1/views"
        );
    }
}
