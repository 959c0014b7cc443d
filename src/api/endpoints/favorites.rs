//
//  tableau-rest
//  api/endpoints/favorites.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Favorite endpoints. Favorites are listed and added per user and deleted
//! by content kind and ID.

use super::{id, Endpoint, UrlBase};
use crate::api::common::Result;
use crate::api::requests::FavoriteKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteEndpoint<'a> {
    /// `/favorites/{user}`
    ForUser(&'a str),
    /// `/favorites/{user}/{kinds}/{id}`
    Item {
        user: &'a str,
        kind: FavoriteKind,
        id: &'a str,
    },
}

impl Endpoint for FavoriteEndpoint<'_> {
    fn path(&self, base: &UrlBase) -> Result<String> {
        let root = format!("{}/favorites", base.site()?);
        Ok(match *self {
            Self::ForUser(user) => format!("{}/{}", root, id(user, "user id")?),
            Self::Item { user, kind, id: content } => format!(
                "{}/{}/{}/{}",
                root,
                id(user, "user id")?,
                kind.collection(),
                id(content, "content id")?
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::common::QueryParams;
    use crate::api::version::ApiVersion;

    #[test]
    fn test_favorite_urls() {
        let base = UrlBase::new("https://t", ApiVersion::new(3, 19), Some("s1"));
        let params = QueryParams::new();
        assert_eq!(
            FavoriteEndpoint::ForUser("u-1").url(&base, &params).unwrap(),
            "https://t/api/3.19/sites/s1/favorites/u-1"
        );
        assert_eq!(
            FavoriteEndpoint::Item { user: "u-1", kind: FavoriteKind::Datasource, id: "ds-1" }
                .url(&base, &params)
                .unwrap(),
            "https://t/api/3.19/sites/s1/favorites/u-1/datasources/ds-1"
        );
    }
}
