//
//  tableau-rest
//  api/response.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Successful HTTP responses, handed back to the caller as received.
//!
//! Non-2xx responses never reach this type; they become
//! [`ApiError::ServerError`](crate::api::common::ApiError::ServerError).

use std::path::{Path, PathBuf};

use reqwest::header::{HeaderMap, CONTENT_DISPOSITION, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::api::common::Result;

/// A successful response: status, headers and the full body.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    status: u16,
    headers: HeaderMap,
    body: Vec<u8>,
}

impl ApiResponse {
    /// Builds a response from its parts.
    pub fn new(status: u16, headers: HeaderMap, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// Reads the full body of a `reqwest` response.
    pub(crate) async fn read(response: reqwest::Response) -> Result<Self> {
        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response.bytes().await?.to_vec();
        Ok(Self::new(status, headers, body))
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Consumes the response, returning the raw body.
    pub fn into_body(self) -> Vec<u8> {
        self.body
    }

    /// The body decoded as UTF-8 (lossy).
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// The `Content-Type` header, if present.
    pub fn content_type(&self) -> Option<&str> {
        self.headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok())
    }

    /// Deserializes the body into `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_slice(&self.body)?)
    }

    /// The body as a JSON value; an empty body (e.g. `204 No Content`) is `null`.
    pub fn json_value(&self) -> Result<Value> {
        if self.body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }
        self.json()
    }

    /// The filename announced by `Content-Disposition`, if any.
    ///
    /// Downloads of workbooks, datasources and flows carry
    /// `Content-Disposition: name="tableau_workbook"; filename="Sales.twbx"`.
    pub fn filename(&self) -> Option<String> {
        let header = self.headers.get(CONTENT_DISPOSITION)?.to_str().ok()?;
        header
            .split(';')
            .map(str::trim)
            .find_map(|part| part.strip_prefix("filename="))
            .map(|name| name.trim_matches('"').to_string())
            .filter(|name| !name.is_empty())
    }

    /// Writes the body to disk.
    ///
    /// When `target` is an existing directory the file is named after
    /// [`filename`](Self::filename) (falling back to `download`).
    ///
    /// # Returns
    ///
    /// The path that was written.
    pub async fn save_to(&self, target: &Path) -> Result<PathBuf> {
        let path = if tokio::fs::metadata(target)
            .await
            .map(|m| m.is_dir())
            .unwrap_or(false)
        {
            target.join(self.filename().unwrap_or_else(|| "download".to_string()))
        } else {
            target.to_path_buf()
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        tokio::fs::write(&path, &self.body).await?;
        tracing::debug!("Wrote {} bytes to {}", self.body.len(), path.display());
        Ok(path)
    }
}
