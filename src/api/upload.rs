//
//  tableau-rest
//  api/upload.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Chunked Uploads
//!
//! Building blocks for publishing workbooks, datasources and flows.
//!
//! ## Overview
//!
//! Files up to [`UploadPolicy::threshold`] are published in a single
//! multipart request. Larger files go through an upload session:
//!
//! 1. `POST /sites/{site}/fileUploads` opens a session and returns its ID
//! 2. The file is read as [`FileChunks`] of [`UploadPolicy::chunk_size`] bytes
//! 3. Each chunk is `PUT` to `/sites/{site}/fileUploads/{session}`, in order
//! 4. The publish request references `uploadSessionId` and the file type
//!    (`workbookType`, `datasourceType` or `flowType`)
//!
//! At most one chunk is held in memory. Nothing is rolled back on failure; an
//! abandoned session expires on the Server.
//!
//! The orchestration itself lives on
//! [`TableauClient`](crate::api::TableauClient); see `publish_workbook` and friends.

use std::fmt;
use std::path::{Path, PathBuf};

use tokio::fs::File;
use tokio::io::AsyncReadExt;

use crate::api::common::{ApiError, Result};
use crate::util::file_extension;

/// Files larger than this are uploaded in chunks (60 MiB).
pub const CHUNKED_UPLOAD_THRESHOLD: u64 = 60 * 1024 * 1024;

/// Size of one appended chunk (5 MiB).
pub const UPLOAD_CHUNK_SIZE: usize = 5 * 1024 * 1024;

/// When to switch to chunked uploads and how large each chunk is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadPolicy {
    pub threshold: u64,
    pub chunk_size: usize,
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self {
            threshold: CHUNKED_UPLOAD_THRESHOLD,
            chunk_size: UPLOAD_CHUNK_SIZE,
        }
    }
}

impl UploadPolicy {
    /// Whether a file of `size` bytes needs an upload session.
    pub fn needs_chunking(&self, size: u64) -> bool {
        size > self.threshold
    }

    /// Number of appends needed for `size` bytes.
    pub fn chunk_count(&self, size: u64) -> u64 {
        let chunk = self.chunk_size.max(1) as u64;
        size.div_ceil(chunk)
    }
}

/// Publishable content and its file conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKind {
    Workbook,
    Datasource,
    Flow,
}

impl ContentKind {
    pub const ALL: [ContentKind; 3] = [Self::Workbook, Self::Datasource, Self::Flow];

    /// Accepted file extensions, lowercase.
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Self::Workbook => &["twb", "twbx"],
            Self::Datasource => &["hyper", "tds", "tdsx", "tde"],
            Self::Flow => &["tfl", "tflx"],
        }
    }

    /// Query parameter naming the file type of a chunked publish.
    pub fn type_param(&self) -> &'static str {
        match self {
            Self::Workbook => "workbookType",
            Self::Datasource => "datasourceType",
            Self::Flow => "flowType",
        }
    }

    /// Multipart part name carrying the file in a single-shot publish.
    pub fn file_part(&self) -> &'static str {
        match self {
            Self::Workbook => "tableau_workbook",
            Self::Datasource => "tableau_datasource",
            Self::Flow => "tableau_flow",
        }
    }

    /// Singular key used in request and response bodies.
    pub fn element(&self) -> &'static str {
        match self {
            Self::Workbook => "workbook",
            Self::Datasource => "datasource",
            Self::Flow => "flow",
        }
    }

    /// Plural URL segment, e.g. `workbooks`.
    pub fn collection(&self) -> &'static str {
        match self {
            Self::Workbook => "workbooks",
            Self::Datasource => "datasources",
            Self::Flow => "flows",
        }
    }

    /// Checks the extension of `path` and returns it lowercased.
    ///
    /// # Errors
    ///
    /// [`ApiError::InvalidFileType`] when the extension is missing or not
    /// accepted for this kind.
    pub fn validate_file(&self, path: &Path) -> Result<String> {
        let extension = file_extension(path).unwrap_or_default();
        if self.extensions().contains(&extension.as_str()) {
            Ok(extension)
        } else {
            Err(ApiError::InvalidFileType {
                content: self.element(),
                extension,
                expected: self.extensions().join(", "),
            })
        }
    }
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.element())
    }
}

impl std::str::FromStr for ContentKind {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| lower == kind.element() || lower == kind.collection())
            .ok_or_else(|| {
                ApiError::invalid(format!(
                    "unknown content kind '{}' (expected workbook, datasource or flow)",
                    s
                ))
            })
    }
}

/// Lazy, non-restartable sequence of fixed-size blocks read from a file.
///
/// The last block may be shorter. Only the current block is held in memory.
pub struct FileChunks {
    file: File,
    chunk_size: usize,
    total_bytes: u64,
    bytes_read: u64,
}

impl FileChunks {
    /// Opens `path` for chunked reading.
    pub async fn open(path: &Path, chunk_size: usize) -> Result<Self> {
        if chunk_size == 0 {
            return Err(ApiError::invalid("chunk size must be greater than zero"));
        }
        let file = File::open(path).await?;
        let total_bytes = file.metadata().await?.len();
        Ok(Self {
            file,
            chunk_size,
            total_bytes,
            bytes_read: 0,
        })
    }

    pub fn total_bytes(&self) -> u64 {
        self.total_bytes
    }

    pub fn bytes_read(&self) -> u64 {
        self.bytes_read
    }

    /// Reads the next block, or `None` at end of file.
    pub async fn next_chunk(&mut self) -> Result<Option<Vec<u8>>> {
        let mut buffer = Vec::with_capacity(self.chunk_size);
        (&mut self.file)
            .take(self.chunk_size as u64)
            .read_to_end(&mut buffer)
            .await?;
        if buffer.is_empty() {
            return Ok(None);
        }
        self.bytes_read += buffer.len() as u64;
        Ok(Some(buffer))
    }
}

/// A Server-side upload session being filled by sequential appends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadSession {
    pub session_id: String,
    pub source: PathBuf,
    pub kind: ContentKind,
    pub extension: String,
    pub total_bytes: u64,
    pub chunk_size: usize,
    pub bytes_sent: u64,
}

impl UploadSession {
    pub fn new(
        session_id: String,
        source: &Path,
        kind: ContentKind,
        extension: String,
        total_bytes: u64,
        chunk_size: usize,
    ) -> Self {
        Self {
            session_id,
            source: source.to_path_buf(),
            kind,
            extension,
            total_bytes,
            chunk_size,
            bytes_sent: 0,
        }
    }

    /// Records a successful append of `len` bytes.
    pub fn record_append(&mut self, len: usize) {
        self.bytes_sent += len as u64;
    }

    pub fn is_complete(&self) -> bool {
        self.bytes_sent >= self.total_bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_policy_threshold_and_count() {
        let policy = UploadPolicy::default();
        assert!(!policy.needs_chunking(60 * 1024 * 1024));
        assert!(policy.needs_chunking(60 * 1024 * 1024 + 1));
        assert_eq!(policy.chunk_count(100 * 1024 * 1024), 20);
        assert_eq!(policy.chunk_count(5 * 1024 * 1024 + 1), 2);
        assert_eq!(policy.chunk_count(0), 0);
    }

    #[test]
    fn test_validate_file_extension() {
        assert_eq!(
            ContentKind::Workbook.validate_file(Path::new("Sales.TWBX")).unwrap(),
            "twbx"
        );
        assert_eq!(
            ContentKind::Datasource.validate_file(Path::new("extract.hyper")).unwrap(),
            "hyper"
        );
        match ContentKind::Flow.validate_file(Path::new("prep.twb")) {
            Err(ApiError::InvalidFileType { extension, expected, .. }) => {
                assert_eq!(extension, "twb");
                assert_eq!(expected, "tfl, tflx");
            }
            other => panic!("unexpected: {other:?}"),
        }
        assert!(ContentKind::Workbook.validate_file(Path::new("noext")).is_err());
    }

    #[test]
    fn test_kind_parse() {
        assert_eq!("Workbooks".parse::<ContentKind>().unwrap(), ContentKind::Workbook);
        assert_eq!("flow".parse::<ContentKind>().unwrap(), ContentKind::Flow);
        assert!("view".parse::<ContentKind>().is_err());
    }

    #[tokio::test]
    async fn test_file_chunks_last_block_shorter() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&vec![7u8; 25]).unwrap();

        let mut chunks = FileChunks::open(file.path(), 10).await.unwrap();
        assert_eq!(chunks.total_bytes(), 25);

        let mut sizes = Vec::new();
        while let Some(chunk) = chunks.next_chunk().await.unwrap() {
            sizes.push(chunk.len());
        }
        assert_eq!(sizes, vec![10, 10, 5]);
        assert_eq!(chunks.bytes_read(), 25);
        assert!(chunks.next_chunk().await.unwrap().is_none());
    }

    #[test]
    fn test_session_progress() {
        let mut session = UploadSession::new(
            "abc".into(),
            Path::new("big.twbx"),
            ContentKind::Workbook,
            "twbx".into(),
            12,
            5,
        );
        session.record_append(5);
        session.record_append(5);
        assert!(!session.is_complete());
        session.record_append(2);
        assert!(session.is_complete());
    }
}
