//
//  tableau-rest
//  api/endpoints/datasources.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Datasource endpoints.

use super::{id, Endpoint, UrlBase};
use crate::api::common::{QueryParams, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasourceEndpoint<'a> {
    Collection,
    Item(&'a str),
    Connections(&'a str),
    Connection { datasource: &'a str, connection: &'a str },
    Content(&'a str),
    Revisions(&'a str),
    Revision { datasource: &'a str, revision: u32 },
    RevisionContent { datasource: &'a str, revision: u32 },
    Tags(&'a str),
    Tag { datasource: &'a str, tag: &'a str },
    Refresh(&'a str),
    CreateExtract { datasource: &'a str, encrypt: bool },
    DeleteExtract(&'a str),
}

impl Endpoint for DatasourceEndpoint<'_> {
    fn path(&self, base: &UrlBase) -> Result<String> {
        let root = format!("{}/datasources", base.site()?);
        let item = |datasource: &str| -> Result<String> {
            Ok(format!("{}/{}", root, id(datasource, "datasource id")?))
        };
        Ok(match *self {
            Self::Collection => root.clone(),
            Self::Item(datasource) => item(datasource)?,
            Self::Connections(datasource) => format!("{}/connections", item(datasource)?),
            Self::Connection { datasource, connection } => format!(
                "{}/connections/{}",
                item(datasource)?,
                id(connection, "connection id")?
            ),
            Self::Content(datasource) => format!("{}/content", item(datasource)?),
            Self::Revisions(datasource) => format!("{}/revisions", item(datasource)?),
            Self::Revision { datasource, revision } => {
                format!("{}/revisions/{}", item(datasource)?, revision)
            }
            Self::RevisionContent { datasource, revision } => {
                format!("{}/revisions/{}/content", item(datasource)?, revision)
            }
            Self::Tags(datasource) => format!("{}/tags", item(datasource)?),
            Self::Tag { datasource, tag } => {
                format!("{}/tags/{}", item(datasource)?, id(tag, "tag")?)
            }
            Self::Refresh(datasource) => format!("{}/refresh", item(datasource)?),
            Self::CreateExtract { datasource, .. } => {
                format!("{}/createExtract", item(datasource)?)
            }
            Self::DeleteExtract(datasource) => format!("{}/deleteExtract", item(datasource)?),
        })
    }

    fn defaults(&self) -> QueryParams {
        let mut params = QueryParams::new();
        if let Self::CreateExtract { encrypt: true, .. } = self {
            params.flag("encrypt", true);
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::version::ApiVersion;

    #[test]
    fn test_datasource_urls() {
        let base = UrlBase::new("https://t", ApiVersion::new(3, 19), Some("s1"));
        let params = QueryParams::new();
        assert_eq!(
            DatasourceEndpoint::Revision { datasource: "ds", revision: 7 }
                .url(&base, &params)
                .unwrap(),
            "https://t/api/3.19/sites/s1/datasources/ds/revisions/7"
        );
        assert_eq!(
            DatasourceEndpoint::CreateExtract { datasource: "ds", encrypt: true }
                .url(&base, &params)
                .unwrap(),
            "https://t/api/3.19/sites/s1/datasources/ds/createExtract?encrypt=true"
        );
        let publish = QueryParams::new().with("overwrite", "overwrite=true");
        assert_eq!(
            DatasourceEndpoint::Collection.url(&base, &publish).unwrap(),
            "https://t/api/3.19/sites/s1/datasources?overwrite=true"
        );
    }

    #[test]
    fn test_requires_site() {
        let base = UrlBase::new("https://t", ApiVersion::new(3, 19), None);
        assert!(DatasourceEndpoint::Collection.url(&base, &QueryParams::new()).is_err());
    }
}
