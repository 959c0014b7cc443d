//
//  tableau-rest
//  api/methods/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Operations
//!
//! One `impl TableauClient` block per resource family. Every operation runs
//! the same pipeline:
//!
//! 1. version gate (the operation's oldest supported REST API version)
//! 2. signed-in check, except for `sign_in` and `server_info`
//! 3. body validation, for operations that send one
//! 4. URL resolution
//! 5. one HTTP exchange, or a sequence for chunked publishes
//!
//! Steps 1 to 4 fail without touching the network. Responses are returned
//! as [`ApiResponse`]; non-2xx answers become
//! [`ApiError::ServerError`](crate::api::common::ApiError::ServerError).
//!
//! List operations take a [`QueryParams`] map and compose with
//! [`extract_pages`](crate::api::common::extract_pages):
//!
//! ```rust,no_run
//! use tableau_rest::api::common::{extract_pages, PageOptions};
//! use tableau_rest::api::TableauClient;
//!
//! # async fn demo(client: &TableauClient) -> tableau_rest::api::common::Result<()> {
//! let projects = extract_pages(
//!     |params| async move { client.query_projects(&params).await },
//!     PageOptions::new().with_limit(250),
//! )
//! .await?;
//! println!("{} projects", projects.len());
//! # Ok(())
//! # }
//! ```

mod auth;
mod datasources;
mod flows;
mod jobs;
mod metadata;
mod permissions;
mod projects;
mod publish;
mod schedules;
mod sites;
mod subscriptions;
mod users;
mod views;
mod workbooks;

use super::client::TableauClient;
use super::common::{QueryParams, Result};
use super::endpoints::Endpoint;
use super::response::ApiResponse;
use super::version::ApiVersion;

const fn since(major: u32, minor: u32) -> ApiVersion {
    ApiVersion::new(major, minor)
}

impl TableauClient {
    /// Guarded `GET` without a body.
    pub(crate) async fn fetch(
        &self,
        operation: &'static str,
        min: ApiVersion,
        endpoint: impl Endpoint,
        params: &QueryParams,
    ) -> Result<ApiResponse> {
        let scope = self.authorize(operation, min)?;
        let url = endpoint.url(&scope.base, params)?;
        self.get(&scope, url).await
    }

    /// Guarded `DELETE`.
    pub(crate) async fn remove(
        &self,
        operation: &'static str,
        min: ApiVersion,
        endpoint: impl Endpoint,
    ) -> Result<ApiResponse> {
        let scope = self.authorize(operation, min)?;
        let url = endpoint.url(&scope.base, &QueryParams::new())?;
        self.delete(&scope, url).await
    }

    /// Guarded `POST` with an empty JSON object, for actions such as run-now.
    pub(crate) async fn trigger(
        &self,
        operation: &'static str,
        min: ApiVersion,
        endpoint: impl Endpoint,
        params: &QueryParams,
    ) -> Result<ApiResponse> {
        let scope = self.authorize(operation, min)?;
        let url = endpoint.url(&scope.base, params)?;
        self.post(&scope, url, serde_json::json!({})).await
    }

    /// Guarded `POST` with a JSON body produced after the gates pass.
    pub(crate) async fn submit(
        &self,
        operation: &'static str,
        min: ApiVersion,
        endpoint: impl Endpoint,
        params: &QueryParams,
        body: impl FnOnce() -> Result<serde_json::Value>,
    ) -> Result<ApiResponse> {
        let scope = self.authorize(operation, min)?;
        let body = body()?;
        let url = endpoint.url(&scope.base, params)?;
        self.post(&scope, url, body).await
    }

    /// Guarded `PUT` with a JSON body produced after the gates pass.
    pub(crate) async fn amend(
        &self,
        operation: &'static str,
        min: ApiVersion,
        endpoint: impl Endpoint,
        body: impl FnOnce() -> Result<serde_json::Value>,
    ) -> Result<ApiResponse> {
        let scope = self.authorize(operation, min)?;
        let body = body()?;
        let url = endpoint.url(&scope.base, &QueryParams::new())?;
        self.put(&scope, url, body).await
    }
}
