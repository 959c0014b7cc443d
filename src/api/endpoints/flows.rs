//
//  tableau-rest
//  api/endpoints/flows.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Flow endpoints.

use super::{id, Endpoint, UrlBase};
use crate::api::common::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowEndpoint<'a> {
    /// `/flows`
    Collection,
    /// `/users/{id}/flows`
    ForUser(&'a str),
    /// `/flows/{id}`
    Item(&'a str),
    Connections(&'a str),
    Connection { flow: &'a str, connection: &'a str },
    Content(&'a str),
    /// `/flows/{id}/run`
    Run(&'a str),
}

impl Endpoint for FlowEndpoint<'_> {
    fn path(&self, base: &UrlBase) -> Result<String> {
        let site = base.site()?;
        let item = |flow: &str| -> Result<String> {
            Ok(format!("{}/flows/{}", site, id(flow, "flow id")?))
        };
        Ok(match *self {
            Self::Collection => format!("{}/flows", site),
            Self::ForUser(user) => format!("{}/users/{}/flows", site, id(user, "user id")?),
            Self::Item(flow) => item(flow)?,
            Self::Connections(flow) => format!("{}/connections", item(flow)?),
            Self::Connection { flow, connection } => format!(
                "{}/connections/{}",
                item(flow)?,
                id(connection, "connection id")?
            ),
            Self::Content(flow) => format!("{}/content", item(flow)?),
            Self::Run(flow) => format!("{}/run", item(flow)?),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::common::QueryParams;
    use crate::api::version::ApiVersion;

    #[test]
    fn test_flow_urls() {
        let base = UrlBase::new("https://t", ApiVersion::new(3, 19), Some("s1"));
        let params = QueryParams::new();
        assert_eq!(
            FlowEndpoint::ForUser("u-1").url(&base, &params).unwrap(),
            "https://t/api/3.19/sites/s1/users/u-1/flows"
        );
        assert_eq!(
            FlowEndpoint::Run("f-1").url(&base, &params).unwrap(),
            "https://t/api/3.19/sites/s1/flows/f-1/run"
        );
        assert!(FlowEndpoint::Connection { flow: "f-1", connection: "" }
            .url(&base, &params)
            .is_err());
    }
}
