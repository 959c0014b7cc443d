//
//  tableau-rest
//  api/endpoints/uploads.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! File-upload session endpoints.

use super::{id, Endpoint, UrlBase};
use crate::api::common::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileUploadEndpoint<'a> {
    /// `POST /fileUploads`
    Initiate,
    /// `PUT /fileUploads/{session}`
    Append(&'a str),
}

impl Endpoint for FileUploadEndpoint<'_> {
    fn path(&self, base: &UrlBase) -> Result<String> {
        let root = format!("{}/fileUploads", base.site()?);
        Ok(match self {
            Self::Initiate => root,
            Self::Append(session) => format!("{}/{}", root, id(session, "upload session id")?),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::common::QueryParams;
    use crate::api::version::ApiVersion;

    #[test]
    fn test_upload_urls() {
        let base = UrlBase::new("https://t", ApiVersion::new(3, 19), Some("s1"));
        let params = QueryParams::new();
        assert_eq!(
            FileUploadEndpoint::Initiate.url(&base, &params).unwrap(),
            "https://t/api/3.19/sites/s1/fileUploads"
        );
        assert_eq!(
            FileUploadEndpoint::Append("abc:123").url(&base, &params).unwrap(),
            "https://t/api/3.19/sites/s1/fileUploads/abc:123"
        );
        assert!(FileUploadEndpoint::Append("").url(&base, &params).is_err());
    }
}
