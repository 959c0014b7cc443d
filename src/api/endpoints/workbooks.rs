//
//  tableau-rest
//  api/endpoints/workbooks.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Workbook endpoints.
//!
//! Publishing posts to [`WorkbookEndpoint::Collection`] with the publish
//! flags as query fragments.

use super::{id, Endpoint, UrlBase};
use crate::api::common::{QueryParams, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkbookEndpoint<'a> {
    /// `/workbooks`
    Collection,
    /// `/workbooks/{id}`
    Item(&'a str),
    /// `/workbooks/{id}/connections`
    Connections(&'a str),
    /// `/workbooks/{id}/connections/{connection}`
    Connection { workbook: &'a str, connection: &'a str },
    /// `/workbooks/{id}/views`
    Views(&'a str),
    /// `/workbooks/{id}/content`
    Content(&'a str),
    /// `/workbooks/{id}/previewImage`
    PreviewImage(&'a str),
    /// `/workbooks/{id}/views/{view}/previewImage`
    ViewPreviewImage { workbook: &'a str, view: &'a str },
    /// `/workbooks/{id}/pdf`
    Pdf(&'a str),
    /// `/workbooks/{id}/revisions`
    Revisions(&'a str),
    /// `/workbooks/{id}/revisions/{n}`
    Revision { workbook: &'a str, revision: u32 },
    /// `/workbooks/{id}/revisions/{n}/content`
    RevisionContent { workbook: &'a str, revision: u32 },
    /// `/workbooks/{id}/tags`
    Tags(&'a str),
    /// `/workbooks/{id}/tags/{tag}`
    Tag { workbook: &'a str, tag: &'a str },
    /// `/workbooks/{id}/refresh`
    Refresh(&'a str),
    /// `/workbooks/{id}/createExtract`, with `encrypt=true` when asked.
    CreateExtract { workbook: &'a str, encrypt: bool },
    /// `/workbooks/{id}/deleteExtract`
    DeleteExtract(&'a str),
    /// `/workbooks/{id}/downGradeInfo?productVersion={version}`
    DowngradeInfo { workbook: &'a str, product_version: &'a str },
}

impl Endpoint for WorkbookEndpoint<'_> {
    fn path(&self, base: &UrlBase) -> Result<String> {
        let root = format!("{}/workbooks", base.site()?);
        let item = |workbook: &str| -> Result<String> {
            Ok(format!("{}/{}", root, id(workbook, "workbook id")?))
        };
        Ok(match *self {
            Self::Collection => root.clone(),
            Self::Item(workbook) => item(workbook)?,
            Self::Connections(workbook) => format!("{}/connections", item(workbook)?),
            Self::Connection { workbook, connection } => format!(
                "{}/connections/{}",
                item(workbook)?,
                id(connection, "connection id")?
            ),
            Self::Views(workbook) => format!("{}/views", item(workbook)?),
            Self::Content(workbook) => format!("{}/content", item(workbook)?),
            Self::PreviewImage(workbook) => format!("{}/previewImage", item(workbook)?),
            Self::ViewPreviewImage { workbook, view } => format!(
                "{}/views/{}/previewImage",
                item(workbook)?,
                id(view, "view id")?
            ),
            Self::Pdf(workbook) => format!("{}/pdf", item(workbook)?),
            Self::Revisions(workbook) => format!("{}/revisions", item(workbook)?),
            Self::Revision { workbook, revision } => {
                format!("{}/revisions/{}", item(workbook)?, revision)
            }
            Self::RevisionContent { workbook, revision } => {
                format!("{}/revisions/{}/content", item(workbook)?, revision)
            }
            Self::Tags(workbook) => format!("{}/tags", item(workbook)?),
            Self::Tag { workbook, tag } => {
                format!("{}/tags/{}", item(workbook)?, id(tag, "tag")?)
            }
            Self::Refresh(workbook) => format!("{}/refresh", item(workbook)?),
            Self::CreateExtract { workbook, .. } => format!("{}/createExtract", item(workbook)?),
            Self::DeleteExtract(workbook) => format!("{}/deleteExtract", item(workbook)?),
            Self::DowngradeInfo { workbook, product_version } => {
                id(product_version, "product version")?;
                format!("{}/downGradeInfo", item(workbook)?)
            }
        })
    }

    fn defaults(&self) -> QueryParams {
        let mut params = QueryParams::new();
        match self {
            Self::CreateExtract { encrypt: true, .. } => params.flag("encrypt", true),
            Self::DowngradeInfo { product_version, .. } => {
                params.set("productVersion", product_version.trim())
            }
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

    fn url(endpoint: WorkbookEndpoint<'_>) -> String {
        endpoint.url(&base(), &QueryParams::new()).unwrap()
    }

    #[test]
    fn test_nested_urls() {
        assert_eq!(
            url(WorkbookEndpoint::Connection { workbook: "wb", connection: "c1" }),
            "https://t/api/3.19/sites/s1/workbooks/wb/connections/c1"
        );
        assert_eq!(
            url(WorkbookEndpoint::ViewPreviewImage { workbook: "wb", view: "v1" }),
            "https://t/api/3.19/sites/s1/workbooks/wb/views/v1/previewImage"
        );
        assert_eq!(
            url(WorkbookEndpoint::RevisionContent { workbook: "wb", revision: 3 }),
            "https://t/api/3.19/sites/s1/workbooks/wb/revisions/3/content"
        );
        assert_eq!(
            url(WorkbookEndpoint::Tag { workbook: "wb", tag: "year end" }),
            "https://t/api/3.19/sites/s1/workbooks/wb/tags/year%20end"
        );
    }

    #[test]
    fn test_default_fragments() {
        assert_eq!(
            url(WorkbookEndpoint::CreateExtract { workbook: "wb", encrypt: true }),
            "https://t/api/3.19/sites/s1/workbooks/wb/createExtract?encrypt=true"
        );
        assert_eq!(
            url(WorkbookEndpoint::CreateExtract { workbook: "wb", encrypt: false }),
            "https://t/api/3.19/sites/s1/workbooks/wb/createExtract"
        );
        assert_eq!(
            url(WorkbookEndpoint::DowngradeInfo { workbook: "wb", product_version: "2023.1" }),
            "https://t/api/3.19/sites/s1/workbooks/wb/downGradeInfo?productVersion=2023.1"
        );
    }

    #[test]
    fn test_caller_params_follow_defaults() {
        let params = QueryParams::new().with("includeExtract", "includeExtract=false");
        assert_eq!(
            WorkbookEndpoint::Content("wb").url(&base(), &params).unwrap(),
            "https://t/api/3.19/sites/s1/workbooks/wb/content?includeExtract=false"
        );
    }

    #[test]
    fn test_missing_ids() {
        assert!(matches!(
            WorkbookEndpoint::Item("").url(&base(), &QueryParams::new()),
            Err(ApiError::InvalidParameter(_))
        ));
        assert!(WorkbookEndpoint::DowngradeInfo { workbook: "wb", product_version: "" }
            .url(&base(), &QueryParams::new())
            .is_err());
    }
}
