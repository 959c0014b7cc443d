//
//  tableau-rest
//  api/methods/publish.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Publishing and File Uploads
//!
//! [`TableauClient::publish`] picks the transfer by file size:
//!
//! | Size | Requests |
//! |------|----------|
//! | up to the threshold | one multipart `POST` with `request_payload` and the file |
//! | above the threshold | one session `POST`, one `PUT` per chunk, one multipart `POST` with `request_payload` only |
//!
//! The threshold and chunk size come from the client's
//! [`UploadPolicy`](crate::api::upload::UploadPolicy).

use std::path::Path;

use reqwest::Method;
use serde_json::json;

use super::since;
use crate::api::client::{Scope, TableauClient};
use crate::api::common::{QueryParams, Result};
use crate::api::endpoints::{
    DatasourceEndpoint, Endpoint, FileUploadEndpoint, FlowEndpoint, UrlBase, WorkbookEndpoint,
};
use crate::api::models::FileUploadResponse;
use crate::api::multipart::{pack, Part};
use crate::api::requests::{
    PublishDatasourceRequest, PublishFlowRequest, PublishWorkbookRequest, Publishable,
};
use crate::api::response::ApiResponse;
use crate::api::upload::{ContentKind, FileChunks, UploadSession};
use crate::api::version::ApiVersion;
use crate::util::format_size;

const REQUEST_PAYLOAD: &str = "request_payload";
const CHUNK_PART: &str = "tableau_file";

fn publish_gate(kind: ContentKind) -> (&'static str, ApiVersion) {
    match kind {
        ContentKind::Workbook => ("publish_workbook", since(2, 0)),
        ContentKind::Datasource => ("publish_datasource", since(2, 0)),
        ContentKind::Flow => ("publish_flow", since(3, 3)),
    }
}

fn publish_url(kind: ContentKind, base: &UrlBase, params: &QueryParams) -> Result<String> {
    match kind {
        ContentKind::Workbook => WorkbookEndpoint::Collection.url(base, params),
        ContentKind::Datasource => DatasourceEndpoint::Collection.url(base, params),
        ContentKind::Flow => FlowEndpoint::Collection.url(base, params),
    }
}

impl TableauClient {
    /// Publishes a workbook, datasource or flow.
    ///
    /// The file extension, the payload and the connection credentials are
    /// all checked before the file is opened.
    ///
    /// # Errors
    ///
    /// - [`ApiError::InvalidFileType`](crate::api::common::ApiError::InvalidFileType)
    ///   for an extension the content kind does not accept
    /// - [`ApiError::InvalidParameter`](crate::api::common::ApiError::InvalidParameter)
    ///   for a bad payload
    /// - any error of the initiate, append or publish exchange; a failed
    ///   append abandons the session
    pub async fn publish<R: Publishable>(&self, request: &R) -> Result<ApiResponse> {
        let kind = request.kind();
        let (operation, min) = publish_gate(kind);
        let scope = self.authorize(operation, min)?;
        let extension = request.file_type()?;
        let payload = request.payload()?;
        let params = request.query();
        let path = request.file();

        let size = tokio::fs::metadata(path).await?.len();
        if !self.upload_policy().needs_chunking(size) {
            let filename = path
                .file_name()
                .and_then(|name| name.to_str())
                .map(str::to_string)
                .unwrap_or_else(|| format!("{}.{}", kind.element(), extension));
            let data = tokio::fs::read(path).await?;
            let body = pack(vec![
                Part::json(REQUEST_PAYLOAD, &payload)?,
                Part::file(kind.file_part(), filename, data),
            ])?;
            tracing::debug!("Publishing {} ({}) in one request", path.display(), format_size(size));
            let url = publish_url(kind, &scope.base, &params)?;
            return self.send_multipart(&scope, Method::POST, url, body).await;
        }

        let session = self.upload_file(path, kind).await?;
        self.publish_from_session(&scope, &session, &payload, &params)
            .await
    }

    /// Issues the terminal publish request for a completed upload session.
    async fn publish_from_session(
        &self,
        scope: &Scope,
        session: &UploadSession,
        payload: &serde_json::Value,
        flags: &QueryParams,
    ) -> Result<ApiResponse> {
        let mut params = QueryParams::new();
        params.set("uploadSessionId", &session.session_id);
        params.set(session.kind.type_param(), &session.extension);
        params.extend_from(flags);

        let body = pack(vec![Part::json(REQUEST_PAYLOAD, payload)?])?;
        let url = publish_url(session.kind, &scope.base, &params)?;
        tracing::info!(
            "Publishing {} from upload session {}",
            session.kind,
            session.session_id
        );
        self.send_multipart(scope, Method::POST, url, body).await
    }

    /// Publishes a `.twb` or `.twbx` workbook into a project.
    ///
    /// Files up to the client's upload threshold go out in one multipart request;
    /// larger files are streamed through an upload session first.
    ///
    /// # Arguments
    ///
    /// * `request` - Name, target project, file path and publish flags
    ///   (`overwrite`, `as_job`, `skip_connection_check`, connection credentials)
    ///
    /// # Returns
    ///
    /// The Server's answer: the new workbook, or a job when `as_job` is set.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use std::path::PathBuf;
    /// use tableau_rest::api::requests::PublishWorkbookRequest;
    /// use tableau_rest::api::TableauClient;
    ///
    /// # async fn example(client: &TableauClient) -> tableau_rest::api::common::Result<()> {
    /// let request = PublishWorkbookRequest {
    ///     name: "Sales".into(),
    ///     project_id: "proj-1".into(),
    ///     file: PathBuf::from("Sales.twbx"),
    ///     overwrite: true,
    ///     ..Default::default()
    /// };
    /// let response = client.publish_workbook(&request).await?;
    /// println!("{}", response.json_value()?["workbook"]["id"]);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn publish_workbook(&self, request: &PublishWorkbookRequest) -> Result<ApiResponse> {
        self.publish(request).await
    }

    /// Publishes a `.tds`, `.tdsx`, `.tde`, `.hyper` or `.parquet` file.
    ///
    /// `append` and `overwrite` are mutually exclusive and are checked before
    /// the file is read. See [`publish`](Self::publish) for the error cases.
    pub async fn publish_datasource(
        &self,
        request: &PublishDatasourceRequest,
    ) -> Result<ApiResponse> {
        self.publish(request).await
    }

    /// Publishes a `.tfl` or `.tflx` Prep flow (API 3.3+).
    pub async fn publish_flow(&self, request: &PublishFlowRequest) -> Result<ApiResponse> {
        self.publish(request).await
    }

    /// Opens an upload session. The response carries `fileUpload.uploadSessionId`.
    pub async fn initiate_file_upload(&self) -> Result<ApiResponse> {
        let scope = self.authorize("initiate_file_upload", since(2, 0))?;
        let url = FileUploadEndpoint::Initiate.url(&scope.base, &QueryParams::new())?;
        self.post_empty(&scope, url).await
    }

    /// Appends one block to an open upload session.
    pub async fn append_to_file_upload(
        &self,
        session_id: &str,
        chunk: Vec<u8>,
    ) -> Result<ApiResponse> {
        let scope = self.authorize("append_to_file_upload", since(2, 0))?;
        let url = FileUploadEndpoint::Append(session_id).url(&scope.base, &QueryParams::new())?;
        let body = pack(vec![
            Part::json(REQUEST_PAYLOAD, &json!({}))?,
            Part::file(CHUNK_PART, "file", chunk),
        ])?;
        self.send_multipart(&scope, Method::PUT, url, body).await
    }

    /// Streams `path` into a new upload session, one chunk at a time and
    /// strictly in order, and returns the filled session.
    ///
    /// The session is not published; pass its ID as `uploadSessionId` to a
    /// publish request, or let [`publish`](Self::publish) do both.
    pub async fn upload_file(&self, path: &Path, kind: ContentKind) -> Result<UploadSession> {
        let extension = kind.validate_file(path)?;
        let chunk_size = self.upload_policy().chunk_size;
        let mut chunks = FileChunks::open(path, chunk_size).await?;

        let session_id = self
            .initiate_file_upload()
            .await?
            .json::<FileUploadResponse>()?
            .file_upload
            .upload_session_id;
        let mut session = UploadSession::new(
            session_id,
            path,
            kind,
            extension,
            chunks.total_bytes(),
            chunk_size,
        );
        tracing::info!(
            "Opened upload session {} for {} ({})",
            session.session_id,
            path.display(),
            format_size(session.total_bytes)
        );

        while let Some(chunk) = chunks.next_chunk().await? {
            let len = chunk.len();
            self.append_to_file_upload(&session.session_id, chunk).await?;
            session.record_append(len);
            tracing::debug!(
                "Upload session {}: {} of {} bytes sent",
                session.session_id,
                session.bytes_sent,
                session.total_bytes
            );
        }

        tracing::info!("Upload session {} filled", session.session_id);
        Ok(session)
    }
}
