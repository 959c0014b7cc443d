//
//  tableau-rest
//  config/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration Module
//!
//! This module defines the connection configuration record and the profile
//! file used by the `tsc` binary.
//!
//! ## Overview
//!
//! - [`ServerConfig`]: server URL, REST API version, target site and exactly
//!   one authentication mode (username + password, or a personal access token)
//! - [`ConfigFile`]: named profiles stored as TOML in the platform config directory
//!
//! ## Example Configuration File
//!
//! ```toml
//! default_profile = "prod"
//!
//! [profiles.prod]
//! server = "https://tableau.example.com"
//! api_version = "3.19"
//! site_name = "Finance"
//! site_url = "finance"
//! personal_access_token_name = "automation"
//! personal_access_token_secret = "s3cr3t"
//! verify_tls = true
//! ```
//!
//! ## Environment Overrides
//!
//! | Variable | Field |
//! |----------|-------|
//! | `TABLEAU_SERVER` | `server` |
//! | `TABLEAU_API_VERSION` | `api_version` |
//! | `TABLEAU_SITE_NAME` | `site_name` |
//! | `TABLEAU_SITE_URL` | `site_url` |
//! | `TABLEAU_USERNAME` | `username` |
//! | `TABLEAU_PASSWORD` | `password` |
//! | `TABLEAU_TOKEN_NAME` | `personal_access_token_name` |
//! | `TABLEAU_TOKEN_SECRET` | `personal_access_token_secret` |
//! | `TABLEAU_VERIFY_TLS` | `verify_tls` |

mod file;

pub use file::*;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::api::common::{ApiError, Result};
use crate::api::version::ApiVersion;
use crate::auth::Credentials;

/// Configuration for one connection to a Tableau Server site.
///
/// Built by the caller (or loaded from a profile), passed once to
/// [`TableauClient::new`](crate::api::TableauClient::new) and read-only from
/// then on.
///
/// # Fields
///
/// * `server` - Base URL of the Server, e.g. `https://tableau.example.com`
/// * `api_version` - REST API version, e.g. `3.19`
/// * `site_name` - Human-readable site name
/// * `site_url` - Site content URL slug; the Default site uses an empty slug
/// * `username` / `password` - Password authentication
/// * `personal_access_token_name` / `personal_access_token_secret` - Token authentication
/// * `verify_tls` - Verify the Server's TLS certificate (default `true`)
///
/// # Example
///
/// ```rust
/// use tableau_rest::config::ServerConfig;
/// use tableau_rest::auth::Credentials;
///
/// let config = ServerConfig::with_token(
///     "https://tableau.example.com",
///     "3.19",
///     "Finance",
///     "finance",
///     "automation",
///     "s3cr3t",
/// );
/// assert!(config.validate().is_ok());
/// assert!(matches!(config.credentials().unwrap(), Credentials::PersonalAccessToken { .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personal_access_token_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub personal_access_token_secret: Option<String>,

    #[serde(default = "default_verify_tls")]
    pub verify_tls: bool,
}

fn default_verify_tls() -> bool {
    true
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server: None,
            api_version: None,
            site_name: None,
            site_url: None,
            username: None,
            password: None,
            personal_access_token_name: None,
            personal_access_token_secret: None,
            verify_tls: default_verify_tls(),
        }
    }
}

impl ServerConfig {
    /// A configuration authenticating with username and password.
    pub fn with_password(
        server: &str,
        api_version: &str,
        site_name: &str,
        site_url: &str,
        username: &str,
        password: &str,
    ) -> Self {
        Self {
            server: Some(server.to_string()),
            api_version: Some(api_version.to_string()),
            site_name: Some(site_name.to_string()),
            site_url: Some(site_url.to_string()),
            username: Some(username.to_string()),
            password: Some(password.to_string()),
            ..Self::default()
        }
    }

    /// A configuration authenticating with a personal access token.
    pub fn with_token(
        server: &str,
        api_version: &str,
        site_name: &str,
        site_url: &str,
        token_name: &str,
        token_secret: &str,
    ) -> Self {
        Self {
            server: Some(server.to_string()),
            api_version: Some(api_version.to_string()),
            site_name: Some(site_name.to_string()),
            site_url: Some(site_url.to_string()),
            personal_access_token_name: Some(token_name.to_string()),
            personal_access_token_secret: Some(token_secret.to_string()),
            ..Self::default()
        }
    }

    /// Checks the configuration without resolving anything else.
    ///
    /// # Errors
    ///
    /// - [`ApiError::MissingRequiredVariable`] - server, api_version,
    ///   site_name or site_url is absent
    /// - [`ApiError::InvalidConfiguration`] - the server URL or API version is
    ///   malformed, or not exactly one authentication mode is populated
    pub fn validate(&self) -> Result<()> {
        self.base_url()?;
        self.version()?;
        required(&self.site_name, "site_name")?;
        if self.site_url.is_none() {
            return Err(ApiError::MissingRequiredVariable("site_url"));
        }
        self.credentials()?;
        Ok(())
    }

    /// Resolves the authentication mode.
    ///
    /// A mode counts as populated only when both of its fields are present and
    /// non-empty; a half-filled mode is treated as a mix-up and rejected.
    pub fn credentials(&self) -> Result<Credentials> {
        let password_fields = [&self.username, &self.password];
        let token_fields = [
            &self.personal_access_token_name,
            &self.personal_access_token_secret,
        ];

        let populated = |fields: &[&Option<String>]| fields.iter().all(|f| is_set(f));
        let touched = |fields: &[&Option<String>]| fields.iter().any(|f| is_set(f));

        match (populated(&password_fields), populated(&token_fields)) {
            (true, false) if !touched(&token_fields) => Ok(Credentials::Password {
                username: self.username.clone().unwrap_or_default(),
                password: self.password.clone().unwrap_or_default(),
            }),
            (false, true) if !touched(&password_fields) => Ok(Credentials::PersonalAccessToken {
                name: self.personal_access_token_name.clone().unwrap_or_default(),
                secret: self.personal_access_token_secret.clone().unwrap_or_default(),
            }),
            (true, true) => Err(ApiError::InvalidConfiguration(
                "both username/password and personal access token are set; choose one".into(),
            )),
            (false, false) if !touched(&password_fields) && !touched(&token_fields) => {
                Err(ApiError::InvalidConfiguration(
                    "no credentials: set username and password, or a personal access token name and secret"
                        .into(),
                ))
            }
            _ => Err(ApiError::InvalidConfiguration(
                "credentials are incomplete or mix password and token fields".into(),
            )),
        }
    }

    /// The parsed REST API version.
    pub fn version(&self) -> Result<ApiVersion> {
        required(&self.api_version, "api_version")?.parse()
    }

    /// The server URL without a trailing slash.
    pub fn base_url(&self) -> Result<String> {
        let server = required(&self.server, "server")?;
        let parsed = Url::parse(server)
            .map_err(|e| ApiError::InvalidConfiguration(format!("invalid server URL '{}': {}", server, e)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ApiError::InvalidConfiguration(format!(
                "server URL must use http or https, got '{}'",
                parsed.scheme()
            )));
        }
        Ok(server.trim_end_matches('/').to_string())
    }

    /// The configured site name, or an empty string.
    pub fn site_name(&self) -> &str {
        self.site_name.as_deref().unwrap_or_default()
    }

    /// The configured site content URL, or an empty string (Default site).
    pub fn site_url(&self) -> &str {
        self.site_url.as_deref().unwrap_or_default()
    }

    /// Overlays `TABLEAU_*` environment variables onto this configuration.
    pub fn apply_env(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Overlays values from `lookup`, keyed by the `TABLEAU_*` variable names.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let fields: [(&str, &mut Option<String>); 8] = [
            ("TABLEAU_SERVER", &mut self.server),
            ("TABLEAU_API_VERSION", &mut self.api_version),
            ("TABLEAU_SITE_NAME", &mut self.site_name),
            ("TABLEAU_SITE_URL", &mut self.site_url),
            ("TABLEAU_USERNAME", &mut self.username),
            ("TABLEAU_PASSWORD", &mut self.password),
            ("TABLEAU_TOKEN_NAME", &mut self.personal_access_token_name),
            ("TABLEAU_TOKEN_SECRET", &mut self.personal_access_token_secret),
        ];
        for (key, field) in fields {
            if let Some(value) = lookup(key) {
                *field = Some(value);
            }
        }

        if let Some(value) = lookup("TABLEAU_VERIFY_TLS") {
            self.verify_tls = !matches!(value.to_ascii_lowercase().as_str(), "0" | "false" | "no" | "off");
        }
    }
}

fn is_set(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}

fn required<'a>(value: &'a Option<String>, name: &'static str) -> Result<&'a str> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ApiError::MissingRequiredVariable(name)),
    }
}
