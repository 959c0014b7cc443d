//
//  tableau-rest
//  api/models.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Typed views of the few responses the client itself needs to read.
//!
//! Everything else is returned to the caller as an
//! [`ApiResponse`](super::ApiResponse).

use serde::{Deserialize, Serialize};

/// Body of a sign-in or site-switch response.
#[derive(Debug, Clone, Deserialize)]
pub struct SignInResponse {
    pub credentials: SignedIn,
}

/// The `credentials` block issued by the Server.
#[derive(Debug, Clone, Deserialize)]
pub struct SignedIn {
    pub token: String,
    pub site: SiteRef,
    pub user: IdRef,
}

/// Site reference inside a credentials block.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteRef {
    pub id: String,

    #[serde(rename = "contentUrl", default)]
    pub content_url: String,

    #[serde(default)]
    pub name: Option<String>,
}

/// An object referenced by ID only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdRef {
    pub id: String,
}

/// Body of `GET /serverinfo`.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerInfoResponse {
    #[serde(rename = "serverInfo")]
    pub server_info: ServerInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerInfo {
    #[serde(rename = "productVersion")]
    pub product_version: ProductVersion,

    #[serde(rename = "restApiVersion")]
    pub rest_api_version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductVersion {
    pub value: String,

    #[serde(default)]
    pub build: Option<String>,
}

/// Body of an upload-session response.
#[derive(Debug, Clone, Deserialize)]
pub struct FileUploadResponse {
    #[serde(rename = "fileUpload")]
    pub file_upload: FileUpload,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FileUpload {
    #[serde(rename = "uploadSessionId")]
    pub upload_session_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sign_in() {
        let body = r#"{"credentials":{"token":"t","site":{"id":"s","contentUrl":"finance"},"user":{"id":"u"}}}"#;
        let parsed: SignInResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.credentials.token, "t");
        assert_eq!(parsed.credentials.site.content_url, "finance");
        assert!(parsed.credentials.site.name.is_none());
        assert_eq!(parsed.credentials.user.id, "u");
    }

    #[test]
    fn test_parse_server_info() {
        let body = r#"{"serverInfo":{"productVersion":{"value":"2023.3.0","build":"20233.23.1017"},"restApiVersion":"3.21"}}"#;
        let parsed: ServerInfoResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.server_info.rest_api_version, "3.21");
        assert_eq!(parsed.server_info.product_version.value, "2023.3.0");
    }
}
