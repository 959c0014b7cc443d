//
//  tableau-rest
//  api/endpoints/subscriptions.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use super::{id, Endpoint, UrlBase};
use crate::api::common::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscriptionEndpoint<'a> {
    Collection,
    Item(&'a str),
}

impl Endpoint for SubscriptionEndpoint<'_> {
    fn path(&self, base: &UrlBase) -> Result<String> {
        let root = format!("{}/subscriptions", base.site()?);
        Ok(match self {
            Self::Collection => root,
            Self::Item(subscription) => {
                format!("{}/{}", root, id(subscription, "subscription id")?)
            }
        })
    }
}
