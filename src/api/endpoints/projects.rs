//
//  tableau-rest
//  api/endpoints/projects.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Project endpoints.

use super::{id, Endpoint, UrlBase};
use crate::api::common::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectEndpoint<'a> {
    Collection,
    Item(&'a str),
}

impl Endpoint for ProjectEndpoint<'_> {
    fn path(&self, base: &UrlBase) -> Result<String> {
        let root = format!("{}/projects", base.site()?);
        Ok(match self {
            Self::Collection => root,
            Self::Item(project) => format!("{}/{}", root, id(project, "project id")?),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::common::QueryParams;
    use crate::api::version::ApiVersion;

    #[test]
    fn test_project_urls() {
        let base = UrlBase::new("https://t", ApiVersion::new(3, 19), Some("s1"));
        let mut params = QueryParams::new();
        params.page(2, 50);
        assert_eq!(
            ProjectEndpoint::Collection.url(&base, &params).unwrap(),
            "https://t/api/3.19/sites/s1/projects?pageNumber=2&pageSize=50"
        );
        assert_eq!(
            ProjectEndpoint::Item("p-9").url(&base, &QueryParams::new()).unwrap(),
            "https://t/api/3.19/sites/s1/projects/p-9"
        );
    }
}
