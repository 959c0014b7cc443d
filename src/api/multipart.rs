//
//  tableau-rest
//  api/multipart.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! `multipart/mixed` packaging for publish and upload requests.
//!
//! The Server expects publish bodies framed like HTML form data (each part
//! with a `Content-Disposition: form-data` header) but announced as
//! `multipart/mixed`. Parts are encoded by [`reqwest::multipart::Form`];
//! the client then rewrites the outer type, keeping the form's boundary.
//!
//! Three request shapes use it:
//!
//! 1. Single-shot publish: `request_payload` (JSON) + the file octets
//! 2. Chunk append: an empty `request_payload` + one chunk as `tableau_file`
//! 3. Chunked publish: `request_payload` only, referencing the upload session
//!
//! Part names and file names go through the form's percent-encoding, so a
//! file name holding quotes or line breaks cannot add headers to a part.

use reqwest::multipart::{Form, Part as FormPart};
use serde_json::Value;

use crate::api::common::{ApiError, Result};

const MIXED: &str = "multipart/mixed";
const JSON: &str = "application/json";
const OCTET_STREAM: &str = "application/octet-stream";

/// One part of a multipart body.
#[derive(Debug, Clone)]
pub struct Part {
    pub name: String,
    pub filename: Option<String>,
    pub content_type: String,
    pub data: Vec<u8>,
}

impl Part {
    /// A JSON part, e.g. `request_payload`.
    pub fn json(name: impl Into<String>, value: &Value) -> Result<Self> {
        Ok(Self {
            name: name.into(),
            filename: None,
            content_type: JSON.to_string(),
            data: serde_json::to_vec(value)?,
        })
    }

    /// A binary file part sent as `application/octet-stream`.
    pub fn file(name: impl Into<String>, filename: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            filename: Some(filename.into()),
            content_type: OCTET_STREAM.to_string(),
            data,
        }
    }

    fn into_form_part(self) -> Result<FormPart> {
        let part = FormPart::bytes(self.data)
            .mime_str(&self.content_type)
            .map_err(|e| {
                ApiError::InvalidParameter(format!(
                    "invalid content type '{}' for part '{}': {}",
                    self.content_type, self.name, e
                ))
            })?;
        Ok(match self.filename {
            Some(filename) => part.file_name(filename),
            None => part,
        })
    }
}

/// An encoded multipart body and the `Content-Type` it must be sent with.
#[derive(Debug)]
pub struct MultipartBody {
    form: Form,
    content_type: String,
    payload_len: usize,
}

impl MultipartBody {
    /// `multipart/mixed; boundary=...`
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// The boundary the form frames its parts with.
    pub fn boundary(&self) -> &str {
        self.form.boundary()
    }

    /// Total size of the part contents, framing excluded.
    pub fn payload_len(&self) -> usize {
        self.payload_len
    }

    pub(crate) fn into_form(self) -> Form {
        self.form
    }
}

/// Packs `parts` in order under a fresh boundary.
///
/// # Errors
///
/// [`ApiError::InvalidParameter`] when a part carries an unparseable
/// content type.
pub fn pack(parts: Vec<Part>) -> Result<MultipartBody> {
    let mut form = Form::new();
    let mut payload_len = 0;
    for part in parts {
        payload_len += part.data.len();
        let name = part.name.clone();
        form = form.part(name, part.into_form_part()?);
    }

    let content_type = format!("{}; boundary={}", MIXED, form.boundary());
    Ok(MultipartBody {
        form,
        content_type,
        payload_len,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_content_type_is_mixed_with_form_boundary() {
        let body = pack(vec![Part::json("request_payload", &json!({"a": 1})).unwrap()]).unwrap();
        assert!(body.content_type().starts_with("multipart/mixed; boundary="));
        assert!(body.content_type().ends_with(body.boundary()));
        assert!(!body.boundary().is_empty());
    }

    #[test]
    fn test_payload_len_counts_part_contents() {
        let body = pack(vec![
            Part::json("request_payload", &json!({})).unwrap(),
            Part::file("tableau_file", "file", vec![0; 10]),
        ])
        .unwrap();
        assert_eq!(body.payload_len(), 12);
    }

    #[test]
    fn test_boundaries_differ_between_calls() {
        let a = pack(Vec::new()).unwrap();
        let b = pack(Vec::new()).unwrap();
        assert_ne!(a.boundary(), b.boundary());
    }

    #[test]
    fn test_bad_content_type_is_rejected() {
        let mut part = Part::file("tableau_workbook", "Sales.twbx", Vec::new());
        part.content_type = "not a mime type".into();
        assert!(matches!(
            pack(vec![part]),
            Err(ApiError::InvalidParameter(_))
        ));
    }
}
