//
//  tableau-rest
//  api/methods/workbooks.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Workbook operations. Publishing lives in the `publish` module.

use super::since;
use crate::api::client::TableauClient;
use crate::api::common::{QueryParams, Result};
use crate::api::endpoints::WorkbookEndpoint;
use crate::api::requests::{tags_body, UpdateConnectionRequest, UpdateWorkbookRequest};
use crate::api::response::ApiResponse;

impl TableauClient {
    /// Lists one page of the workbooks on the site.
    ///
    /// # Arguments
    ///
    /// * `params` - Filter, sort, field and paging fragments, passed through as-is
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use tableau_rest::api::common::QueryParams;
    /// use tableau_rest::api::TableauClient;
    ///
    /// # async fn example(client: &TableauClient) -> tableau_rest::api::common::Result<()> {
    /// let mut params = QueryParams::new();
    /// params.filter("projectName:eq:Finance");
    /// params.page(1, 50);
    /// let page = client.query_workbooks(&params).await?;
    /// println!("{}", page.json_value()?["pagination"]["totalAvailable"]);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn query_workbooks(&self, params: &QueryParams) -> Result<ApiResponse> {
        self.fetch("query_workbooks", since(2, 3), WorkbookEndpoint::Collection, params)
            .await
    }

    /// Fetches one workbook with its project, owner and tags.
    pub async fn get_workbook(&self, workbook_id: &str) -> Result<ApiResponse> {
        self.fetch(
            "get_workbook",
            since(2, 0),
            WorkbookEndpoint::Item(workbook_id),
            &QueryParams::new(),
        )
        .await
    }

    /// Lists the data connections embedded in a workbook.
    pub async fn query_workbook_connections(&self, workbook_id: &str) -> Result<ApiResponse> {
        self.fetch(
            "query_workbook_connections",
            since(2, 0),
            WorkbookEndpoint::Connections(workbook_id),
            &QueryParams::new(),
        )
        .await
    }

    /// Changes server address, port, credentials or embed flag of one workbook
    /// connection. Only the fields set on `request` are sent.
    pub async fn update_workbook_connection(
        &self,
        workbook_id: &str,
        connection_id: &str,
        request: &UpdateConnectionRequest,
    ) -> Result<ApiResponse> {
        self.amend(
            "update_workbook_connection",
            since(2, 3),
            WorkbookEndpoint::Connection {
                workbook: workbook_id,
                connection: connection_id,
            },
            || request.build(),
        )
        .await
    }

    /// Lists the views (sheets and dashboards) of a workbook.
    pub async fn query_views_for_workbook(
        &self,
        workbook_id: &str,
        params: &QueryParams,
    ) -> Result<ApiResponse> {
        self.fetch(
            "query_views_for_workbook",
            since(2, 0),
            WorkbookEndpoint::Views(workbook_id),
            params,
        )
        .await
    }

    /// Downloads the workbook file. `include_extract = Some(false)` leaves
    /// extracts out of packaged workbooks.
    pub async fn download_workbook(
        &self,
        workbook_id: &str,
        include_extract: Option<bool>,
    ) -> Result<ApiResponse> {
        let mut params = QueryParams::new();
        if let Some(include) = include_extract {
            params.flag("includeExtract", include);
        }
        self.fetch(
            "download_workbook",
            since(2, 0),
            WorkbookEndpoint::Content(workbook_id),
            &params,
        )
        .await
    }

    /// Downloads the workbook's thumbnail as PNG bytes.
    pub async fn query_workbook_preview_image(&self, workbook_id: &str) -> Result<ApiResponse> {
        self.fetch(
            "query_workbook_preview_image",
            since(2, 0),
            WorkbookEndpoint::PreviewImage(workbook_id),
            &QueryParams::new(),
        )
        .await
    }

    /// Downloads the thumbnail of one view inside a workbook.
    pub async fn query_view_preview_image(
        &self,
        workbook_id: &str,
        view_id: &str,
    ) -> Result<ApiResponse> {
        self.fetch(
            "query_view_preview_image",
            since(2, 0),
            WorkbookEndpoint::ViewPreviewImage {
                workbook: workbook_id,
                view: view_id,
            },
            &QueryParams::new(),
        )
        .await
    }

    /// PDF of the whole workbook. `params` carries `type`, `orientation`
    /// and `maxAge` fragments.
    pub async fn download_workbook_pdf(
        &self,
        workbook_id: &str,
        params: &QueryParams,
    ) -> Result<ApiResponse> {
        self.fetch(
            "download_workbook_pdf",
            since(3, 4),
            WorkbookEndpoint::Pdf(workbook_id),
            params,
        )
        .await
    }

    /// Lists the stored revisions of a workbook.
    pub async fn query_workbook_revisions(
        &self,
        workbook_id: &str,
        params: &QueryParams,
    ) -> Result<ApiResponse> {
        self.fetch(
            "query_workbook_revisions",
            since(2, 3),
            WorkbookEndpoint::Revisions(workbook_id),
            params,
        )
        .await
    }

    /// Downloads the content of one revision.
    ///
    /// # Errors
    ///
    /// [`ApiError::ServerError`](crate::api::common::ApiError::ServerError)
    /// when revision history is off or the revision was removed.
    pub async fn download_workbook_revision(
        &self,
        workbook_id: &str,
        revision: u32,
    ) -> Result<ApiResponse> {
        self.fetch(
            "download_workbook_revision",
            since(2, 3),
            WorkbookEndpoint::RevisionContent {
                workbook: workbook_id,
                revision,
            },
            &QueryParams::new(),
        )
        .await
    }

    /// Deletes one stored revision; the current version is unaffected.
    pub async fn remove_workbook_revision(
        &self,
        workbook_id: &str,
        revision: u32,
    ) -> Result<ApiResponse> {
        self.remove(
            "remove_workbook_revision",
            since(2, 3),
            WorkbookEndpoint::Revision {
                workbook: workbook_id,
                revision,
            },
        )
        .await
    }

    /// Renames, moves, re-owns or toggles tab display for a workbook.
    ///
    /// # Errors
    ///
    /// [`ApiError::InvalidParameter`](crate::api::common::ApiError::InvalidParameter)
    /// when a project or owner ID is set but blank.
    pub async fn update_workbook(
        &self,
        workbook_id: &str,
        request: &UpdateWorkbookRequest,
    ) -> Result<ApiResponse> {
        self.amend(
            "update_workbook",
            since(2, 0),
            WorkbookEndpoint::Item(workbook_id),
            || request.build(),
        )
        .await
    }

    /// Deletes a workbook and its views.
    pub async fn delete_workbook(&self, workbook_id: &str) -> Result<ApiResponse> {
        self.remove("delete_workbook", since(2, 0), WorkbookEndpoint::Item(workbook_id))
            .await
    }

    /// Adds tags to a workbook; existing tags are kept.
    pub async fn add_tags_to_workbook<S: AsRef<str>>(
        &self,
        workbook_id: &str,
        tags: &[S],
    ) -> Result<ApiResponse> {
        self.amend(
            "add_tags_to_workbook",
            since(2, 0),
            WorkbookEndpoint::Tags(workbook_id),
            || tags_body(tags),
        )
        .await
    }

    pub async fn delete_tag_from_workbook(
        &self,
        workbook_id: &str,
        tag: &str,
    ) -> Result<ApiResponse> {
        self.remove(
            "delete_tag_from_workbook",
            since(2, 0),
            WorkbookEndpoint::Tag {
                workbook: workbook_id,
                tag,
            },
        )
        .await
    }

    /// Starts an extract refresh now; the Server answers with a job.
    pub async fn refresh_workbook(&self, workbook_id: &str) -> Result<ApiResponse> {
        self.trigger(
            "refresh_workbook",
            since(2, 8),
            WorkbookEndpoint::Refresh(workbook_id),
            &QueryParams::new(),
        )
        .await
    }

    /// Converts the workbook's live connections to extracts, optionally encrypted.
    pub async fn create_workbook_extract(
        &self,
        workbook_id: &str,
        encrypt: bool,
    ) -> Result<ApiResponse> {
        self.trigger(
            "create_workbook_extract",
            since(3, 5),
            WorkbookEndpoint::CreateExtract {
                workbook: workbook_id,
                encrypt,
            },
            &QueryParams::new(),
        )
        .await
    }

    /// Drops the workbook's extracts and goes back to live connections.
    pub async fn delete_workbook_extract(&self, workbook_id: &str) -> Result<ApiResponse> {
        self.trigger(
            "delete_workbook_extract",
            since(3, 5),
            WorkbookEndpoint::DeleteExtract(workbook_id),
            &QueryParams::new(),
        )
        .await
    }

    /// What would be lost by downgrading to `product_version`, e.g. `2022.1`.
    pub async fn get_workbook_downgrade_info(
        &self,
        workbook_id: &str,
        product_version: &str,
    ) -> Result<ApiResponse> {
        self.fetch(
            "get_workbook_downgrade_info",
            since(3, 4),
            WorkbookEndpoint::DowngradeInfo {
                workbook: workbook_id,
                product_version,
            },
            &QueryParams::new(),
        )
        .await
    }
}
