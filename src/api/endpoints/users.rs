//
//  tableau-rest
//  api/endpoints/users.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! User endpoints.

use super::{id, Endpoint, UrlBase};
use crate::api::common::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserEndpoint<'a> {
    /// `/users`
    Collection,
    /// `/users/{id}`
    Item(&'a str),
    /// `/users/{id}/groups`
    Groups(&'a str),
    /// `/users/{id}/workbooks`
    Workbooks(&'a str),
}

impl Endpoint for UserEndpoint<'_> {
    fn path(&self, base: &UrlBase) -> Result<String> {
        let root = format!("{}/users", base.site()?);
        Ok(match self {
            Self::Collection => root,
            Self::Item(user) => format!("{}/{}", root, id(user, "user id")?),
            Self::Groups(user) => format!("{}/{}/groups", root, id(user, "user id")?),
            Self::Workbooks(user) => format!("{}/{}/workbooks", root, id(user, "user id")?),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::common::QueryParams;
    use crate::api::version::ApiVersion;

    #[test]
    fn test_user_urls() {
        let base = UrlBase::new("https://t", ApiVersion::new(3, 19), Some("s1"));
        let params = QueryParams::new().with("filter", "filter=siteRole:eq:Creator");
        assert_eq!(
            UserEndpoint::Collection.url(&base, &params).unwrap(),
            "https://t/api/3.19/sites/s1/users?filter=siteRole:eq:Creator"
        );
        assert_eq!(
            UserEndpoint::Groups("u-1").url(&base, &QueryParams::new()).unwrap(),
            "https://t/api/3.19/sites/s1/users/u-1/groups"
        );
        assert!(UserEndpoint::Workbooks(" ").url(&base, &QueryParams::new()).is_err());
    }
}
