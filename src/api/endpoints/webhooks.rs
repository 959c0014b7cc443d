//
//  tableau-rest
//  api/endpoints/webhooks.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Webhook endpoints.

use super::{id, Endpoint, UrlBase};
use crate::api::common::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WebhookEndpoint<'a> {
    Collection,
    Item(&'a str),
    /// `/webhooks/{id}/test`
    Test(&'a str),
}

impl Endpoint for WebhookEndpoint<'_> {
    fn path(&self, base: &UrlBase) -> Result<String> {
        let root = format!("{}/webhooks", base.site()?);
        Ok(match self {
            Self::Collection => root,
            Self::Item(webhook) => format!("{}/{}", root, id(webhook, "webhook id")?),
            Self::Test(webhook) => format!("{}/{}/test", root, id(webhook, "webhook id")?),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::common::QueryParams;
    use crate::api::version::ApiVersion;

    #[test]
    fn test_webhook_urls() {
        let base = UrlBase::new("https://t", ApiVersion::new(3, 19), Some("s1"));
        assert_eq!(
            WebhookEndpoint::Test("wh-1").url(&base, &QueryParams::new()).unwrap(),
            "https://t/api/3.19/sites/s1/webhooks/wh-1/test"
        );
    }
}
