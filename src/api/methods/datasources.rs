//
//  tableau-rest
//  api/methods/datasources.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Datasource operations. Publishing lives in the `publish` module.

use super::since;
use crate::api::client::TableauClient;
use crate::api::common::{QueryParams, Result};
use crate::api::endpoints::DatasourceEndpoint;
use crate::api::requests::{tags_body, UpdateConnectionRequest, UpdateDatasourceRequest};
use crate::api::response::ApiResponse;

impl TableauClient {
    /// Lists one page of the published data sources on the site.
    pub async fn query_datasources(&self, params: &QueryParams) -> Result<ApiResponse> {
        self.fetch("query_datasources", since(2, 0), DatasourceEndpoint::Collection, params)
            .await
    }

    /// Fetches one published data source.
    pub async fn get_datasource(&self, datasource_id: &str) -> Result<ApiResponse> {
        self.fetch(
            "get_datasource",
            since(2, 0),
            DatasourceEndpoint::Item(datasource_id),
            &QueryParams::new(),
        )
        .await
    }

    /// Lists the connections of a published data source.
    pub async fn query_datasource_connections(&self, datasource_id: &str) -> Result<ApiResponse> {
        self.fetch(
            "query_datasource_connections",
            since(2, 3),
            DatasourceEndpoint::Connections(datasource_id),
            &QueryParams::new(),
        )
        .await
    }

    /// Same as [`update_workbook_connection`](Self::update_workbook_connection), for a data source.
    pub async fn update_datasource_connection(
        &self,
        datasource_id: &str,
        connection_id: &str,
        request: &UpdateConnectionRequest,
    ) -> Result<ApiResponse> {
        self.amend(
            "update_datasource_connection",
            since(2, 3),
            DatasourceEndpoint::Connection {
                datasource: datasource_id,
                connection: connection_id,
            },
            || request.build(),
        )
        .await
    }

    /// Downloads a data source as `.tds`/`.tdsx`.
    ///
    /// # Arguments
    ///
    /// * `datasource_id` - Data source LUID
    /// * `include_extract` - `Some(false)` to leave the extract out of a `.tdsx`;
    ///   `None` lets the Server decide
    ///
    /// Write the result to disk with [`ApiResponse::save_to`].
    pub async fn download_datasource(
        &self,
        datasource_id: &str,
        include_extract: Option<bool>,
    ) -> Result<ApiResponse> {
        let mut params = QueryParams::new();
        if let Some(include) = include_extract {
            params.flag("includeExtract", include);
        }
        self.fetch(
            "download_datasource",
            since(2, 0),
            DatasourceEndpoint::Content(datasource_id),
            &params,
        )
        .await
    }

    /// Lists the stored revisions of a data source.
    pub async fn query_datasource_revisions(
        &self,
        datasource_id: &str,
        params: &QueryParams,
    ) -> Result<ApiResponse> {
        self.fetch(
            "query_datasource_revisions",
            since(2, 3),
            DatasourceEndpoint::Revisions(datasource_id),
            params,
        )
        .await
    }

    /// Downloads the content of one data source revision.
    pub async fn download_datasource_revision(
        &self,
        datasource_id: &str,
        revision: u32,
    ) -> Result<ApiResponse> {
        self.fetch(
            "download_datasource_revision",
            since(2, 3),
            DatasourceEndpoint::RevisionContent {
                datasource: datasource_id,
                revision,
            },
            &QueryParams::new(),
        )
        .await
    }

    /// Deletes one stored data source revision.
    pub async fn remove_datasource_revision(
        &self,
        datasource_id: &str,
        revision: u32,
    ) -> Result<ApiResponse> {
        self.remove(
            "remove_datasource_revision",
            since(2, 3),
            DatasourceEndpoint::Revision {
                datasource: datasource_id,
                revision,
            },
        )
        .await
    }

    /// Renames, moves, re-owns or certifies a data source.
    pub async fn update_datasource(
        &self,
        datasource_id: &str,
        request: &UpdateDatasourceRequest,
    ) -> Result<ApiResponse> {
        self.amend(
            "update_datasource",
            since(2, 0),
            DatasourceEndpoint::Item(datasource_id),
            || request.build(),
        )
        .await
    }

    /// Deletes a published data source.
    pub async fn delete_datasource(&self, datasource_id: &str) -> Result<ApiResponse> {
        self.remove(
            "delete_datasource",
            since(2, 0),
            DatasourceEndpoint::Item(datasource_id),
        )
        .await
    }

    /// Adds tags to a data source; existing tags are kept.
    pub async fn add_tags_to_datasource<S: AsRef<str>>(
        &self,
        datasource_id: &str,
        tags: &[S],
    ) -> Result<ApiResponse> {
        self.amend(
            "add_tags_to_datasource",
            since(2, 0),
            DatasourceEndpoint::Tags(datasource_id),
            || tags_body(tags),
        )
        .await
    }

    pub async fn delete_tag_from_datasource(
        &self,
        datasource_id: &str,
        tag: &str,
    ) -> Result<ApiResponse> {
        self.remove(
            "delete_tag_from_datasource",
            since(2, 0),
            DatasourceEndpoint::Tag {
                datasource: datasource_id,
                tag,
            },
        )
        .await
    }

    /// Starts an extract refresh now. The response carries the job.
    pub async fn refresh_datasource(&self, datasource_id: &str) -> Result<ApiResponse> {
        self.trigger(
            "refresh_datasource",
            since(2, 8),
            DatasourceEndpoint::Refresh(datasource_id),
            &QueryParams::new(),
        )
        .await
    }

    /// Converts a live data source to an extract, optionally encrypted.
    pub async fn create_datasource_extract(
        &self,
        datasource_id: &str,
        encrypt: bool,
    ) -> Result<ApiResponse> {
        self.trigger(
            "create_datasource_extract",
            since(3, 5),
            DatasourceEndpoint::CreateExtract {
                datasource: datasource_id,
                encrypt,
            },
            &QueryParams::new(),
        )
        .await
    }

    /// Drops the extract and goes back to a live connection.
    pub async fn delete_datasource_extract(&self, datasource_id: &str) -> Result<ApiResponse> {
        self.trigger(
            "delete_datasource_extract",
            since(3, 5),
            DatasourceEndpoint::DeleteExtract(datasource_id),
            &QueryParams::new(),
        )
        .await
    }
}
