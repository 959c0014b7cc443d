//
//  tableau-rest
//  api/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Common API Types for the Tableau REST client
//!
//! This module provides shared types used by every resource family: the
//! error type, the query-string map and the pagination driver.
//!
//! # Overview
//!
//! - [`ApiError`] - Unified error type for all client operations
//! - [`QueryParams`] - Ordered map of verbatim `key=value` query fragments
//! - Pagination types (re-exported from the [`pagination`] submodule)
//!
//! # Example
//!
//! ```rust
//! use tableau_rest::api::common::ApiError;
//!
//! fn handle_result<T>(result: Result<T, ApiError>) {
//!     match result {
//!         Ok(_) => println!("Success!"),
//!         Err(ApiError::NotSignedIn) => println!("Please sign in first"),
//!         Err(ApiError::ServerError { status, .. }) => println!("Server answered {}", status),
//!         Err(e) => println!("Error: {}", e),
//!     }
//! }
//! ```
//!
//! # Notes
//!
//! - Validation errors are always raised before any request is sent
//! - Non-2xx responses are never retried; they surface as [`ApiError::ServerError`]

use thiserror::Error;

mod pagination;
mod query;

pub use pagination::*;
pub use query::*;

/// Unified error type for all Tableau REST client operations.
///
/// The variants fall into two groups. Validation variants are produced
/// synchronously before any I/O happens; transport variants wrap failures
/// of the HTTP exchange itself.
///
/// # Variants
///
/// | Variant | Raised when |
/// |---------|-------------|
/// | `InvalidConfiguration` | Neither or both authentication modes are populated |
/// | `MissingRequiredVariable` | server, api version, site name or site URL is absent |
/// | `InvalidParameter` | Conflicting, missing or out-of-set argument values |
/// | `UnsupportedApiVersion` | The operation needs a newer REST API version |
/// | `NotSignedIn` | The operation requires an authenticated session |
/// | `AlreadySignedIn` | A token would overwrite an existing session |
/// | `InvalidFileType` | A publish file extension is outside the accepted set |
/// | `ContentNotFound` | A paginated container is empty in an unexpected shape |
/// | `PaginationError` | A list response carries no pagination block |
/// | `ServerError` | The Server answered with a non-2xx status |
///
/// # Example
///
/// ```rust
/// use tableau_rest::api::common::ApiError;
///
/// let err = ApiError::UnsupportedApiVersion {
///     operation: "create_webhook",
///     required: "3.6".to_string(),
///     configured: "3.4".to_string(),
/// };
/// assert!(err.to_string().contains("3.6"));
/// ```
#[derive(Error, Debug)]
pub enum ApiError {
    /// The configuration does not resolve to exactly one authentication mode.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A required configuration variable is absent or empty.
    ///
    /// # Parameters
    ///
    /// - `0` - Name of the missing variable
    #[error("Missing required configuration variable: {0}")]
    MissingRequiredVariable(&'static str),

    /// A call argument is missing, conflicting or outside its closed set.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// The configured REST API version is older than the operation needs.
    #[error("{operation} requires REST API version {required} or later (configured: {configured})")]
    UnsupportedApiVersion {
        /// Name of the refused operation
        operation: &'static str,
        /// Minimum version the operation requires
        required: String,
        /// Version from the configuration
        configured: String,
    },

    /// The operation requires a signed-in session.
    #[error("Not signed in: call sign_in before using this operation")]
    NotSignedIn,

    /// A session token already exists and would be silently replaced.
    #[error("Already signed in: sign out before signing in again")]
    AlreadySignedIn,

    /// The file extension is not accepted for this content type.
    #[error("Invalid file type '{extension}' for {content}; expected one of: {expected}")]
    InvalidFileType {
        /// Content family being published
        content: &'static str,
        /// Extension found on the file
        extension: String,
        /// Comma-separated accepted extensions
        expected: String,
    },

    /// A paginated response is shaped as paginated but holds no content list.
    #[error("Content not found: {0}")]
    ContentNotFound(String),

    /// The response lacks the pagination block.
    #[error("Pagination error: {0}")]
    PaginationError(String),

    /// The Server answered with a non-success status.
    ///
    /// The raw body is preserved so callers can inspect the Server's detail.
    #[error("Server error ({status}): {body}")]
    ServerError {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },

    /// A network-level error occurred during the request.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// JSON serialization or deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Local file I/O failed (upload sources, download targets).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The server URL could not be parsed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl ApiError {
    /// Shorthand for building an [`ApiError::InvalidParameter`].
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidParameter(message.into())
    }

    /// Returns the HTTP status for [`ApiError::ServerError`], `None` otherwise.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ServerError { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Check if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ContentNotFound(_)) || self.status() == Some(404)
    }

    /// Check if this is an authentication error.
    ///
    /// A 401 means the session token expired or was revoked; the caller is
    /// expected to re-authenticate.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Self::NotSignedIn) || self.status() == Some(401)
    }

    /// Check if this is a server-side failure (5xx).
    pub fn is_server_error(&self) -> bool {
        matches!(self.status(), Some(status) if status >= 500)
    }

    /// Extracts a human readable message from a Server error body.
    ///
    /// The Server reports failures as:
    /// ```json
    /// {"error": {"summary": "Not Found", "detail": "Workbook not found", "code": "404006"}}
    /// ```
    ///
    /// # Returns
    ///
    /// - `Some(String)` - `"summary: detail (code)"` assembled from whatever is present
    /// - `None` - The error is not a [`ApiError::ServerError`] or the body is not JSON
    pub fn server_message(&self) -> Option<String> {
        let Self::ServerError { body, .. } = self else {
            return None;
        };

        let json: serde_json::Value = serde_json::from_str(body).ok()?;
        let error = json.get("error")?;

        let summary = error.get("summary").and_then(|v| v.as_str());
        let detail = error.get("detail").and_then(|v| v.as_str());
        let code = error.get("code").and_then(|v| v.as_str());

        let mut message = match (summary, detail) {
            (Some(summary), Some(detail)) => format!("{}: {}", summary, detail),
            (Some(text), None) | (None, Some(text)) => text.to_string(),
            (None, None) => return None,
        };
        if let Some(code) = code {
            message.push_str(&format!(" ({})", code));
        }
        Some(message)
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_message_extracts_summary_and_detail() {
        let err = ApiError::ServerError {
            status: 404,
            body: r#"{"error":{"summary":"Not Found","detail":"Workbook 'x' could not be found.","code":"404006"}}"#
                .to_string(),
        };
        assert_eq!(
            err.server_message().unwrap(),
            "Not Found: Workbook 'x' could not be found. (404006)"
        );
        assert!(err.is_not_found());
        assert!(!err.is_server_error());
    }

    #[test]
    fn test_server_message_non_json_body() {
        let err = ApiError::ServerError {
            status: 502,
            body: "<html>bad gateway</html>".to_string(),
        };
        assert!(err.server_message().is_none());
        assert!(err.is_server_error());
    }

    #[test]
    fn test_auth_error_predicates() {
        assert!(ApiError::NotSignedIn.is_auth_error());
        let expired = ApiError::ServerError {
            status: 401,
            body: String::new(),
        };
        assert!(expired.is_auth_error());
        assert!(!ApiError::AlreadySignedIn.is_auth_error());
    }
}
