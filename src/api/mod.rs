//
//  tableau-rest
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! Everything needed to talk to a Tableau Server over its REST API.
//!
//! ## Architecture
//!
//! - [`client`]: the connection, its session and the HTTP executor
//! - [`methods`]: one operation per Server endpoint, on [`TableauClient`]
//! - [`endpoints`]: URL builders, one enum per resource family
//! - [`requests`]: validated request bodies
//! - [`multipart`]: `multipart/mixed` encoding for publishes and uploads
//! - [`upload`]: chunked-upload policy, file chunks and upload sessions
//! - [`common`]: errors, query parameters and pagination
//! - [`version`]: REST API versions and the capability gate
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tableau_rest::api::common::QueryParams;
//! use tableau_rest::api::TableauClient;
//! use tableau_rest::config::ServerConfig;
//!
//! # async fn demo() -> tableau_rest::api::common::Result<()> {
//! let config = ServerConfig::with_token(
//!     "https://tableau.example.com",
//!     "3.19",
//!     "Finance",
//!     "finance",
//!     "ci-bot",
//!     "secret",
//! );
//! let client = TableauClient::new(config)?;
//! client.sign_in().await?;
//!
//! let projects = client.query_projects(&QueryParams::new()).await?;
//! println!("{}", projects.text());
//!
//! client.sign_out().await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns [`common::Result`]. Argument problems are reported
//! before any request is sent; a non-2xx answer is returned as
//! [`ApiError::ServerError`](common::ApiError::ServerError) with the status
//! and body untouched.

pub mod client;
pub mod common;
pub mod endpoints;
pub mod methods;
pub mod models;
pub mod multipart;
pub mod requests;
pub mod response;
pub mod upload;
pub mod version;

pub use client::{LastRequest, TableauClient};
pub use common::ApiError;
pub use response::ApiResponse;
