//
//  tableau-rest
//  api/endpoints/groups.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Group endpoints.

use super::{id, Endpoint, UrlBase};
use crate::api::common::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupEndpoint<'a> {
    /// `/groups`
    Collection,
    /// `/groups/{id}`
    Item(&'a str),
    /// `/groups/{id}/users`
    Users(&'a str),
    /// `/groups/{id}/users/{user}`
    User { group: &'a str, user: &'a str },
}

impl Endpoint for GroupEndpoint<'_> {
    fn path(&self, base: &UrlBase) -> Result<String> {
        let root = format!("{}/groups", base.site()?);
        Ok(match self {
            Self::Collection => root,
            Self::Item(group) => format!("{}/{}", root, id(group, "group id")?),
            Self::Users(group) => format!("{}/{}/users", root, id(group, "group id")?),
            Self::User { group, user } => format!(
                "{}/{}/users/{}",
                root,
                id(group, "group id")?,
                id(user, "user id")?
            ),
        })
    }
}
