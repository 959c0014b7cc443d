//
//  tableau-rest
//  util/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Utility Module
//!
//! Small helpers shared by the library and the `tsc` binary.
//!
//! ## Categories
//!
//! - **Files**: [`file_extension`], [`file_stem`]
//! - **Display**: [`format_size`], [`format_timestamp`], [`truncate`]
//!
//! ## Example
//!
//! ```rust
//! use std::path::Path;
//! use tableau_rest::util::{file_extension, format_size};
//!
//! assert_eq!(file_extension(Path::new("Sales.TWBX")).as_deref(), Some("twbx"));
//! assert_eq!(format_size(1536), "1.5 KB");
//! ```

use std::path::Path;

use chrono::{DateTime, Local};

/// Lowercased extension of `path`, without the dot.
///
/// # Returns
///
/// `None` when the file name has no extension.
pub fn file_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .filter(|ext| !ext.is_empty())
}

/// File name of `path` without its extension.
///
/// Used as the default content name when publishing.
pub fn file_stem(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .map(str::to_string)
}

/// Formats a byte count with binary units.
///
/// ```rust
/// use tableau_rest::util::format_size;
///
/// assert_eq!(format_size(500), "500 B");
/// assert_eq!(format_size(1048576), "1.0 MB");
/// ```
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

/// Renders an RFC 3339 timestamp from the Server (`2024-01-01T00:00:00Z`)
/// in local time. Unparseable input is returned unchanged.
pub fn format_timestamp(value: &str) -> String {
    match DateTime::parse_from_rfc3339(value) {
        Ok(dt) => {
            let local: DateTime<Local> = dt.into();
            local.format("%Y-%m-%d %H:%M:%S").to_string()
        }
        Err(_) => value.to_string(),
    }
}

/// Shortens `s` to at most `max_len` characters, ending with `...` when cut.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    if max_len > 3 {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    } else {
        s.chars().take(max_len).collect()
    }
}
