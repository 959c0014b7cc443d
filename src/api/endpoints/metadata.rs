//
//  tableau-rest
//  api/endpoints/metadata.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Metadata endpoints: the GraphQL entry point and the REST resources for
//! databases, tables, columns and data-quality warnings.

use super::{id, Endpoint, UrlBase};
use crate::api::common::Result;
use crate::api::requests::WarningContent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetadataEndpoint<'a> {
    /// `{server}/api/metadata/graphql`
    GraphQl,
    Databases,
    Database(&'a str),
    Tables,
    Table(&'a str),
    /// `/tables/{id}/columns`
    Columns(&'a str),
    Column { table: &'a str, column: &'a str },
    /// `/dataQualityWarnings/{content-type}/{content-id}`
    QualityWarnings { content: WarningContent, id: &'a str },
    /// `/dataQualityWarnings/{warning-id}`
    QualityWarning(&'a str),
}

impl Endpoint for MetadataEndpoint<'_> {
    fn path(&self, base: &UrlBase) -> Result<String> {
        let site = || base.site();
        Ok(match *self {
            Self::GraphQl => base.graphql(),
            Self::Databases => format!("{}/databases", site()?),
            Self::Database(database) => {
                format!("{}/databases/{}", site()?, id(database, "database id")?)
            }
            Self::Tables => format!("{}/tables", site()?),
            Self::Table(table) => format!("{}/tables/{}", site()?, id(table, "table id")?),
            Self::Columns(table) => format!("{}/tables/{}/columns", site()?, id(table, "table id")?),
            Self::Column { table, column } => format!(
                "{}/tables/{}/columns/{}",
                site()?,
                id(table, "table id")?,
                id(column, "column id")?
            ),
            Self::QualityWarnings { content, id: content_id } => format!(
                "{}/dataQualityWarnings/{}/{}",
                site()?,
                content.as_str(),
                id(content_id, "content id")?
            ),
            Self::QualityWarning(warning) => format!(
                "{}/dataQualityWarnings/{}",
                site()?,
                id(warning, "data quality warning id")?
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
    fn test_graphql_needs_no_site() {
        let base = UrlBase::new("https://t", ApiVersion::new(3, 19), None);
        assert_eq!(
            MetadataEndpoint::GraphQl.url(&base, &QueryParams::new()).unwrap(),
            "https://t/api/metadata/graphql"
        );
    }

    #[test]
    fn test_metadata_urls() {
        let base = UrlBase::new("https://t", ApiVersion::new(3, 19), Some("s1"));
        let params = QueryParams::new();
        assert_eq!(
            MetadataEndpoint::Column { table: "t-1", column: "c-1" }.url(&base, &params).unwrap(),
            "https://t/api/3.19/sites/s1/tables/t-1/columns/c-1"
        );
        assert_eq!(
            MetadataEndpoint::QualityWarnings { content: WarningContent::Datasource, id: "ds-1" }
                .url(&base, &params)
                .unwrap(),
            "https://t/api/3.19/sites/s1/dataQualityWarnings/datasource/ds-1"
        );
    }
}
