//
//  tableau-rest
//  api/methods/metadata.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Metadata operations: GraphQL plus the REST resources for databases,
//! tables, columns and data-quality warnings. All need REST API 3.5.

use super::since;
use crate::api::client::TableauClient;
use crate::api::common::{QueryParams, Result};
use crate::api::endpoints::MetadataEndpoint;
use crate::api::requests::{
    column_description_body, GraphQlRequest, QualityWarningRequest, UpdateAssetRequest,
    WarningContent,
};
use crate::api::response::ApiResponse;
use crate::api::version::ApiVersion;

const METADATA: ApiVersion = since(3, 5);

impl TableauClient {
    /// Posts a query to the metadata GraphQL endpoint. The schema is not
    /// interpreted; the answer is returned as-is.
    pub async fn graphql(&self, request: &GraphQlRequest) -> Result<ApiResponse> {
        self.submit(
            "graphql",
            METADATA,
            MetadataEndpoint::GraphQl,
            &QueryParams::new(),
            || request.build(),
        )
        .await
    }

    /// Lists databases known to the catalog.
    pub async fn query_databases(&self, params: &QueryParams) -> Result<ApiResponse> {
        self.fetch("query_databases", METADATA, MetadataEndpoint::Databases, params)
            .await
    }

    /// Fetches one catalog database.
    pub async fn get_database(&self, database_id: &str) -> Result<ApiResponse> {
        self.fetch(
            "get_database",
            METADATA,
            MetadataEndpoint::Database(database_id),
            &QueryParams::new(),
        )
        .await
    }

    /// Updates a database's description, certification or contact.
    pub async fn update_database(
        &self,
        database_id: &str,
        request: &UpdateAssetRequest,
    ) -> Result<ApiResponse> {
        self.amend(
            "update_database",
            METADATA,
            MetadataEndpoint::Database(database_id),
            || request.build_database(),
        )
        .await
    }

    /// Removes a database from the catalog.
    pub async fn delete_database(&self, database_id: &str) -> Result<ApiResponse> {
        self.remove("delete_database", METADATA, MetadataEndpoint::Database(database_id))
            .await
    }

    /// Lists tables known to the catalog.
    pub async fn query_tables(&self, params: &QueryParams) -> Result<ApiResponse> {
        self.fetch("query_tables", METADATA, MetadataEndpoint::Tables, params)
            .await
    }

    /// Fetches one catalog table.
    pub async fn get_table(&self, table_id: &str) -> Result<ApiResponse> {
        self.fetch(
            "get_table",
            METADATA,
            MetadataEndpoint::Table(table_id),
            &QueryParams::new(),
        )
        .await
    }

    /// Updates a table's description, certification or contact.
    pub async fn update_table(
        &self,
        table_id: &str,
        request: &UpdateAssetRequest,
    ) -> Result<ApiResponse> {
        self.amend("update_table", METADATA, MetadataEndpoint::Table(table_id), || {
            request.build_table()
        })
        .await
    }

    pub async fn delete_table(&self, table_id: &str) -> Result<ApiResponse> {
        self.remove("delete_table", METADATA, MetadataEndpoint::Table(table_id))
            .await
    }

    /// Lists the columns of one catalog table.
    pub async fn query_columns(&self, table_id: &str, params: &QueryParams) -> Result<ApiResponse> {
        self.fetch("query_columns", METADATA, MetadataEndpoint::Columns(table_id), params)
            .await
    }

    /// Fetches one column of a catalog table.
    pub async fn get_column(&self, table_id: &str, column_id: &str) -> Result<ApiResponse> {
        self.fetch(
            "get_column",
            METADATA,
            MetadataEndpoint::Column {
                table: table_id,
                column: column_id,
            },
            &QueryParams::new(),
        )
        .await
    }

    /// Only the description of a column can be changed.
    pub async fn update_column(
        &self,
        table_id: &str,
        column_id: &str,
        description: &str,
    ) -> Result<ApiResponse> {
        self.amend(
            "update_column",
            METADATA,
            MetadataEndpoint::Column {
                table: table_id,
                column: column_id,
            },
            || Ok(column_description_body(description)),
        )
        .await
    }

    pub async fn delete_column(&self, table_id: &str, column_id: &str) -> Result<ApiResponse> {
        self.remove(
            "delete_column",
            METADATA,
            MetadataEndpoint::Column {
                table: table_id,
                column: column_id,
            },
        )
        .await
    }

    /// Attaches a data-quality warning to a database, table, data source or flow.
    ///
    /// # Arguments
    ///
    /// * `content` - Kind of asset the warning is attached to
    /// * `content_id` - LUID of that asset
    /// * `request` - Warning type, message, active and severity flags
    ///
    /// # Errors
    ///
    /// [`ApiError::InvalidParameter`](crate::api::common::ApiError::InvalidParameter)
    /// for a warning type outside the Server's set.
    pub async fn add_quality_warning(
        &self,
        content: WarningContent,
        content_id: &str,
        request: &QualityWarningRequest,
    ) -> Result<ApiResponse> {
        self.submit(
            "add_quality_warning",
            METADATA,
            MetadataEndpoint::QualityWarnings {
                content,
                id: content_id,
            },
            &QueryParams::new(),
            || request.build_create(),
        )
        .await
    }

    /// Lists the data-quality warnings on one asset.
    pub async fn query_quality_warnings(
        &self,
        content: WarningContent,
        content_id: &str,
    ) -> Result<ApiResponse> {
        self.fetch(
            "query_quality_warnings",
            METADATA,
            MetadataEndpoint::QualityWarnings {
                content,
                id: content_id,
            },
            &QueryParams::new(),
        )
        .await
    }

    /// Fetches one data-quality warning by its ID.
    pub async fn get_quality_warning(&self, warning_id: &str) -> Result<ApiResponse> {
        self.fetch(
            "get_quality_warning",
            METADATA,
            MetadataEndpoint::QualityWarning(warning_id),
            &QueryParams::new(),
        )
        .await
    }

    /// Changes type, message, active or severity flags of a warning.
    /// Only the fields set on `request` are sent.
    pub async fn update_quality_warning(
        &self,
        warning_id: &str,
        request: &QualityWarningRequest,
    ) -> Result<ApiResponse> {
        self.amend(
            "update_quality_warning",
            METADATA,
            MetadataEndpoint::QualityWarning(warning_id),
            || request.build_update(),
        )
        .await
    }

    /// Removes one data-quality warning.
    pub async fn delete_quality_warning(&self, warning_id: &str) -> Result<ApiResponse> {
        self.remove(
            "delete_quality_warning",
            METADATA,
            MetadataEndpoint::QualityWarning(warning_id),
        )
        .await
    }

    /// Deletes every warning attached to one asset.
    pub async fn delete_quality_warnings_for_content(
        &self,
        content: WarningContent,
        content_id: &str,
    ) -> Result<ApiResponse> {
        self.remove(
            "delete_quality_warnings_for_content",
            METADATA,
            MetadataEndpoint::QualityWarnings {
                content,
                id: content_id,
            },
        )
        .await
    }
}
