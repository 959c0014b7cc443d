//
//  tableau-rest
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Tableau REST Client Library
//!
//! A client for the Tableau Server REST API, plus the `tsc` command-line
//! tool built on it.
//!
//! ## Overview
//!
//! The library turns typed calls into versioned REST requests: it checks
//! arguments, gates each operation on the configured API version, keeps the
//! signed-in session, publishes large files through chunked upload sessions
//! and walks paginated listings.
//!
//! ## Module Structure
//!
//! - [`api`]: the client, endpoints, request bodies, uploads and pagination
//! - [`auth`]: credentials and the session state
//! - [`config`]: server profiles, `config.toml` and `TABLEAU_*` overrides
//! - [`cli`]: the `tsc` command definitions
//! - [`output`]: table and JSON rendering for the CLI
//! - [`util`]: small formatting and path helpers
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use tableau_rest::api::common::{extract_pages, PageOptions};
//! use tableau_rest::api::TableauClient;
//! use tableau_rest::config::ServerConfig;
//!
//! # async fn demo() -> tableau_rest::api::common::Result<()> {
//! let mut config = ServerConfig::default();
//! config.apply_env();
//!
//! let client = TableauClient::new(config)?;
//! client.sign_in().await?;
//! let client = &client;
//! let workbooks = extract_pages(
//!     |params| async move { client.query_workbooks(&params).await },
//!     PageOptions::new().with_page_size(100),
//! )
//! .await?;
//! println!("{} workbooks", workbooks.len());
//! # Ok(())
//! # }
//! ```

/// Command-line interface definitions.
pub mod cli;

/// REST client, endpoints, request bodies and transfer machinery.
pub mod api;

/// Credentials and session state.
pub mod auth;

/// Server profiles and configuration file management.
///
/// Profiles live in a platform-specific location:
/// - Linux: `~/.config/tsc/config.toml`
/// - macOS: `~/Library/Application Support/tsc/config.toml`
/// - Windows: `%APPDATA%\tsc\config\config.toml`
pub mod config;

/// Output formatting for the CLI: tables, JSON and status lines.
pub mod output;

/// Utility functions and helpers.
pub mod util;

pub use api::{ApiError, ApiResponse, TableauClient};
pub use cli::Cli;
pub use config::{ConfigFile, ServerConfig};

/// Application name, used for the binary and the configuration directory.
pub const APP_NAME: &str = "tsc";

/// Crate version, sent in the `User-Agent` header.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exit codes for the CLI.
///
/// # Exit Code Ranges
///
/// - `0`: Success
/// - `1-3`: General errors and usage issues
/// - `4-7`: Authentication-related issues
/// - `8-15`: Resource-related issues
/// - `16+`: Server-side failures
pub mod exit_codes {
    /// The command completed without errors.
    pub const SUCCESS: i32 = 0;

    /// An unspecified error occurred. Check stderr for details.
    pub const ERROR: i32 = 1;

    /// Invalid arguments or configuration.
    pub const USAGE: i32 = 2;

    /// Not signed in, bad credentials, or the Server answered 401.
    pub const AUTH_ERROR: i32 = 4;

    /// The Server answered 404.
    pub const NOT_FOUND: i32 = 8;

    /// The Server answered with a 5xx status.
    pub const SERVER_ERROR: i32 = 16;
}
