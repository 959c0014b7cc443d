//
//  tableau-rest
//  api/methods/auth.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Session Operations
//!
//! ```text
//!                sign_in
//! Unauthenticated ───────▶ Authenticated ──┐ switch_site
//!        ▲                     │   ▲       │
//!        └──── sign_out ───────┘   └───────┘
//! ```
//!
//! A 401 from any operation leaves the token in place; call
//! [`TableauClient::invalidate_session`] and sign in again.

use serde_json::json;

use super::since;
use crate::api::client::TableauClient;
use crate::api::common::{ApiError, QueryParams, Result};
use crate::api::endpoints::{AuthEndpoint, Endpoint};
use crate::api::models::{ServerInfoResponse, SignInResponse};
use crate::api::response::ApiResponse;
use crate::auth::SessionGrant;

impl TableauClient {
    /// Signs in to the configured site with the configured credentials.
    ///
    /// # Errors
    ///
    /// [`ApiError::AlreadySignedIn`] when a token is held; the request is not
    /// sent.
    pub async fn sign_in(&self) -> Result<ApiResponse> {
        let scope = self.gate("sign_in", since(2, 0))?;
        if scope.token.is_some() {
            return Err(ApiError::AlreadySignedIn);
        }
        let site_url = self.lock_session().site_url().to_string();
        let body = self.credentials().sign_in_body(&site_url);
        let url = AuthEndpoint::SignIn.url(&scope.base, &QueryParams::new())?;

        let response = self.post(&scope, url, body).await?;
        let signed_in = response.json::<SignInResponse>()?.credentials;
        tracing::info!(
            "Signed in to site '{}' using {}",
            signed_in.site.content_url,
            self.credentials().method()
        );
        self.lock_session().establish(SessionGrant {
            token: signed_in.token,
            site_id: signed_in.site.id,
            site_url: signed_in.site.content_url,
            user_id: signed_in.user.id,
            site_name: signed_in.site.name,
        });
        Ok(response)
    }

    /// Signs out and clears the token, site ID and user ID.
    pub async fn sign_out(&self) -> Result<ApiResponse> {
        let scope = self.authorize("sign_out", since(2, 0))?;
        let url = AuthEndpoint::SignOut.url(&scope.base, &QueryParams::new())?;
        let response = self.post_empty(&scope, url).await?;
        self.lock_session().clear();
        tracing::info!("Signed out");
        Ok(response)
    }

    /// Moves the session to the site whose content URL is `content_url`.
    ///
    /// On success the token, site ID, site name, site slug and user ID are
    /// all replaced by the Server's answer.
    pub async fn switch_site(&self, content_url: &str) -> Result<ApiResponse> {
        let scope = self.authorize("switch_site", since(2, 6))?;
        let body = json!({ "site": { "contentUrl": content_url.trim() } });
        let url = AuthEndpoint::SwitchSite.url(&scope.base, &QueryParams::new())?;

        let response = self.post(&scope, url, body).await?;
        let switched = response.json::<SignInResponse>()?.credentials;
        let site_name = switched
            .site
            .name
            .clone()
            .unwrap_or_else(|| content_url.trim().to_string());
        tracing::info!("Switched to site '{}'", switched.site.content_url);
        self.lock_session().establish(SessionGrant {
            token: switched.token,
            site_id: switched.site.id,
            site_url: switched.site.content_url,
            user_id: switched.user.id,
            site_name: Some(site_name),
        });
        Ok(response)
    }

    /// `GET /serverinfo`. Needs no session.
    pub async fn server_info(&self) -> Result<ApiResponse> {
        let scope = self.gate("server_info", since(2, 4))?;
        let url = AuthEndpoint::ServerInfo.url(&scope.base, &QueryParams::new())?;
        self.get(&scope, url).await
    }

    /// Product and REST API version reported by the Server.
    pub async fn server_version(&self) -> Result<ServerInfoResponse> {
        self.server_info().await?.json()
    }

    /// Forgets the local session without contacting the Server, e.g. after
    /// a 401.
    pub fn invalidate_session(&self) {
        self.lock_session().clear();
        tracing::info!("Session invalidated");
    }
}

#[cfg(test)]
mod tests {
    use crate::api::client::TableauClient;
    use crate::api::common::ApiError;
    use crate::auth::SessionGrant;
    use crate::config::ServerConfig;

    fn client() -> TableauClient {
        TableauClient::new(ServerConfig::with_token(
            "https://tableau.example.com",
            "3.19",
            "Finance",
            "finance",
            "bot",
            "secret",
        ))
        .unwrap()
    }

    #[tokio::test]
    async fn test_sign_in_refused_when_token_held() {
        let client = client();
        client
            .set_token(SessionGrant::new("existing", "site-1", "finance", "user-1"))
            .unwrap();
        assert!(matches!(client.sign_in().await, Err(ApiError::AlreadySignedIn)));
        assert!(client.last_request().is_none());
    }

    #[tokio::test]
    async fn test_switch_site_requires_session() {
        let client = client();
        assert!(matches!(
            client.switch_site("other").await,
            Err(ApiError::NotSignedIn)
        ));
        assert!(matches!(client.sign_out().await, Err(ApiError::NotSignedIn)));
    }

    #[test]
    fn test_invalidate_session() {
        let client = client();
        client
            .set_token(SessionGrant::new("t", "site-1", "finance", "user-1"))
            .unwrap();
        client.invalidate_session();
        assert!(!client.is_signed_in());
        assert_eq!(client.session().site_url(), "finance");
    }
}
