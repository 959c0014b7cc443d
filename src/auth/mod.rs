//
//  tableau-rest
//  auth/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Authentication Module
//!
//! Credentials and the session state they produce.
//!
//! ## Supported Authentication Methods
//!
//! - **Username + password**: sent as `name` / `password`
//! - **Personal Access Token (PAT)**: sent as `personalAccessTokenName` /
//!   `personalAccessTokenSecret`
//!
//! Exactly one method is configured per [`ServerConfig`](crate::config::ServerConfig);
//! see [`ServerConfig::credentials`](crate::config::ServerConfig::credentials).
//!
//! ## Module Structure
//!
//! - [`session`]: token, site and user of the signed-in session
//!
//! ## Example
//!
//! ```rust
//! use tableau_rest::auth::Credentials;
//!
//! let credentials = Credentials::PersonalAccessToken {
//!     name: "automation".to_string(),
//!     secret: "s3cr3t".to_string(),
//! };
//! let body = credentials.sign_in_body("finance");
//! assert_eq!(body["credentials"]["site"]["contentUrl"], "finance");
//! ```

mod session;

pub use session::*;

use serde_json::{json, Value};

/// Header carrying the session token on authenticated requests.
pub const AUTH_HEADER: &str = "X-Tableau-Auth";

/// The authentication method used to sign in.
///
/// # Variants
///
/// - `Password`: a Server user name and password
/// - `PersonalAccessToken`: a token name and its secret
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    /// Username and password authentication.
    Password {
        /// The Server user name.
        username: String,
        /// The user's password.
        password: String,
    },
    /// Personal access token authentication.
    PersonalAccessToken {
        /// The token name as created in the user's account settings.
        name: String,
        /// The token secret.
        secret: String,
    },
}

impl Credentials {
    /// Short label for logs and CLI output.
    pub fn method(&self) -> &'static str {
        match self {
            Self::Password { .. } => "password",
            Self::PersonalAccessToken { .. } => "personal access token",
        }
    }

    /// The sign-in request body for the site identified by `site_url`.
    ///
    /// # Returns
    ///
    /// ```json
    /// {"credentials": {"name": "...", "password": "...", "site": {"contentUrl": "..."}}}
    /// ```
    ///
    /// or the token form with `personalAccessTokenName` and
    /// `personalAccessTokenSecret`.
    pub fn sign_in_body(&self, site_url: &str) -> Value {
        let site = json!({ "contentUrl": site_url });
        match self {
            Self::Password { username, password } => json!({
                "credentials": {
                    "name": username,
                    "password": password,
                    "site": site,
                }
            }),
            Self::PersonalAccessToken { name, secret } => json!({
                "credentials": {
                    "personalAccessTokenName": name,
                    "personalAccessTokenSecret": secret,
                    "site": site,
                }
            }),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Password { username, .. } => f
                .debug_struct("Password")
                .field("username", username)
                .field("password", &"***")
                .finish(),
            Self::PersonalAccessToken { name, .. } => f
                .debug_struct("PersonalAccessToken")
                .field("name", name)
                .field("secret", &"***")
                .finish(),
        }
    }
}
