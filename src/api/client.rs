//
//  tableau-rest
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Tableau REST Client
//!
//! [`TableauClient`] is the connection to one site of a Tableau Server. It
//! owns the HTTP client, the validated configuration and the session state,
//! and exposes one `async` method per Server operation (see the
//! `api::methods` modules).
//!
//! ## Guards
//!
//! Every operation passes the same checks, in order, before anything is sent:
//!
//! 1. the configuration validated when the client was built
//! 2. the operation's minimum REST API version is not newer than the
//!    configured one, otherwise [`ApiError::UnsupportedApiVersion`]
//! 3. a session token exists when the operation needs one, otherwise
//!    [`ApiError::NotSignedIn`]
//!
//! ## Headers
//!
//! | Request | Headers |
//! |---------|---------|
//! | All | `Content-Type: application/json`, `Accept: application/json` |
//! | Authenticated | `X-Tableau-Auth: <token>` |
//! | Publish / upload | `Content-Type: multipart/mixed; boundary=...` |
//!
//! ## Example
//!
//! ```rust,no_run
//! use tableau_rest::api::TableauClient;
//! use tableau_rest::api::common::QueryParams;
//! use tableau_rest::config::ServerConfig;
//!
//! # async fn run() -> tableau_rest::api::common::Result<()> {
//! let config = ServerConfig::with_token(
//!     "https://tableau.example.com", "3.19", "Finance", "finance", "bot", "secret",
//! );
//! let client = TableauClient::new(config)?;
//! client.sign_in().await?;
//! let projects = client.query_projects(&QueryParams::new()).await?;
//! println!("{}", projects.text());
//! client.sign_out().await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Concurrency
//!
//! Session state sits behind one mutex per client and is never held across
//! an `.await`. Operations on one client are still meant to be issued one at
//! a time; separate clients are independent.

use std::sync::{Mutex, MutexGuard};

use reqwest::header::{HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method};
use serde_json::Value;

use crate::api::common::{ApiError, Result};
use crate::api::endpoints::UrlBase;
use crate::api::multipart::MultipartBody;
use crate::api::response::ApiResponse;
use crate::api::upload::UploadPolicy;
use crate::api::version::{ensure_supported, ApiVersion};
use crate::auth::{Credentials, Session, SessionGrant, AUTH_HEADER};
use crate::config::ServerConfig;

const JSON: &str = "application/json";

/// A request body as sent on the wire.
#[derive(Debug)]
pub(crate) enum Payload {
    Empty,
    Json(Value),
    Multipart(MultipartBody),
}

/// The most recent request issued by a client, kept for diagnostics.
///
/// The session token is never recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LastRequest {
    pub method: String,
    pub url: String,
    pub content_type: String,
    pub authenticated: bool,
    /// JSON bodies verbatim; multipart bodies as a size summary.
    pub body: Option<String>,
}

/// Resolved context of one guarded operation.
#[derive(Debug, Clone)]
pub(crate) struct Scope {
    pub base: UrlBase,
    pub token: Option<String>,
}

/// Connection to a Tableau Server site.
pub struct TableauClient {
    http: Client,
    config: ServerConfig,
    server: String,
    version: ApiVersion,
    credentials: Credentials,
    upload_policy: UploadPolicy,
    session: Mutex<Session>,
    last_request: Mutex<Option<LastRequest>>,
}

impl TableauClient {
    /// Creates a client after validating `config`.
    ///
    /// # Errors
    ///
    /// - [`ApiError::MissingRequiredVariable`] / [`ApiError::InvalidConfiguration`]
    ///   from [`ServerConfig::validate`]
    /// - [`ApiError::Network`] if the HTTP client cannot be built
    pub fn new(config: ServerConfig) -> Result<Self> {
        config.validate()?;
        let server = config.base_url()?;
        let version = config.version()?;
        let credentials = config.credentials()?;

        let http = Client::builder()
            .user_agent(format!("tsc/{}", crate::VERSION))
            .danger_accept_invalid_certs(!config.verify_tls)
            .build()?;

        let session = Session::new(config.site_name(), config.site_url());
        tracing::debug!(
            "Client for {} (API {}, site '{}', {} auth)",
            server,
            version,
            config.site_url(),
            credentials.method()
        );

        Ok(Self {
            http,
            config,
            server,
            version,
            credentials,
            upload_policy: UploadPolicy::default(),
            session: Mutex::new(session),
            last_request: Mutex::new(None),
        })
    }

    /// Replaces the chunked-upload threshold and chunk size.
    pub fn with_upload_policy(mut self, policy: UploadPolicy) -> Self {
        self.upload_policy = policy;
        self
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn api_version(&self) -> ApiVersion {
        self.version
    }

    pub fn upload_policy(&self) -> UploadPolicy {
        self.upload_policy
    }

    pub(crate) fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// A snapshot of the session state.
    pub fn session(&self) -> Session {
        self.lock_session().clone()
    }

    pub fn is_signed_in(&self) -> bool {
        self.lock_session().is_signed_in()
    }

    /// Adopts a session obtained outside this client, e.g. a token handed
    /// over by another process. The grant must carry the site and user the
    /// token was issued for.
    ///
    /// # Errors
    ///
    /// [`ApiError::AlreadySignedIn`] when the client already holds a token.
    pub fn set_token(&self, grant: SessionGrant) -> Result<()> {
        self.lock_session().set_token(grant)
    }

    /// The last request issued, if any.
    pub fn last_request(&self) -> Option<LastRequest> {
        self.last_request
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub(crate) fn lock_session(&self) -> MutexGuard<'_, Session> {
        self.session
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Version gate only; for operations allowed without a session.
    pub(crate) fn gate(&self, operation: &'static str, min: ApiVersion) -> Result<Scope> {
        ensure_supported(operation, min, self.version)?;
        let session = self.lock_session();
        Ok(Scope {
            base: UrlBase::new(&self.server, self.version, session.site_id()),
            token: session.token().map(str::to_string),
        })
    }

    /// Version gate, then the signed-in check.
    pub(crate) fn authorize(&self, operation: &'static str, min: ApiVersion) -> Result<Scope> {
        let scope = self.gate(operation, min)?;
        if scope.token.is_none() {
            tracing::debug!("Refusing {}: not signed in", operation);
            return Err(ApiError::NotSignedIn);
        }
        Ok(scope)
    }

    pub(crate) async fn get(&self, scope: &Scope, url: String) -> Result<ApiResponse> {
        self.send(scope, Method::GET, url, Payload::Empty).await
    }

    pub(crate) async fn delete(&self, scope: &Scope, url: String) -> Result<ApiResponse> {
        self.send(scope, Method::DELETE, url, Payload::Empty).await
    }

    pub(crate) async fn post(&self, scope: &Scope, url: String, body: Value) -> Result<ApiResponse> {
        self.send(scope, Method::POST, url, Payload::Json(body)).await
    }

    pub(crate) async fn post_empty(&self, scope: &Scope, url: String) -> Result<ApiResponse> {
        self.send(scope, Method::POST, url, Payload::Empty).await
    }

    pub(crate) async fn put(&self, scope: &Scope, url: String, body: Value) -> Result<ApiResponse> {
        self.send(scope, Method::PUT, url, Payload::Json(body)).await
    }

    pub(crate) async fn put_empty(&self, scope: &Scope, url: String) -> Result<ApiResponse> {
        self.send(scope, Method::PUT, url, Payload::Empty).await
    }

    pub(crate) async fn send_multipart(
        &self,
        scope: &Scope,
        method: Method,
        url: String,
        body: MultipartBody,
    ) -> Result<ApiResponse> {
        self.send(scope, method, url, Payload::Multipart(body)).await
    }

    /// Issues one request and converts a non-2xx answer into
    /// [`ApiError::ServerError`].
    pub(crate) async fn send(
        &self,
        scope: &Scope,
        method: Method,
        url: String,
        payload: Payload,
    ) -> Result<ApiResponse> {
        let mut request = self.http.request(method.clone(), &url).header(ACCEPT, JSON);
        if let Some(token) = &scope.token {
            request = request.header(AUTH_HEADER, token);
        }
        let (request, content_type, summary) = match payload {
            Payload::Empty => (request, JSON.to_string(), None),
            Payload::Json(value) => {
                let text = value.to_string();
                (request.body(text.clone()), JSON.to_string(), Some(text))
            }
            Payload::Multipart(body) => {
                let content_type = body.content_type().to_string();
                let summary = format!("<{} bytes multipart>", body.payload_len());
                (request.multipart(body.into_form()), content_type, Some(summary))
            }
        };

        // reqwest announces multipart bodies as form-data; the Server only
        // accepts multipart/mixed under the same boundary.
        let mut request = request.build()?;
        let header = HeaderValue::from_str(&content_type).map_err(|e| {
            ApiError::InvalidParameter(format!("invalid content type '{}': {}", content_type, e))
        })?;
        request.headers_mut().insert(CONTENT_TYPE, header);

        *self
            .last_request
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(LastRequest {
            method: method.to_string(),
            url: url.clone(),
            content_type,
            authenticated: scope.token.is_some(),
            body: summary,
        });

        tracing::debug!("{} {}", method, url);
        let response = ApiResponse::read(self.http.execute(request).await?).await?;

        if !(200..300).contains(&response.status()) {
            tracing::warn!("{} {} returned {}", method, url, response.status());
            return Err(ApiError::ServerError {
                status: response.status(),
                body: response.text(),
            });
        }
        Ok(response)
    }
}
