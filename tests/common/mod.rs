//! Shared helpers for integration tests
//!
//! Every test runs against its own `mockito` server. The helpers here build a
//! client pointed at it and answer the sign-in exchange.

#![allow(dead_code)]

use mockito::{Matcher, Mock, ServerGuard};
use serde_json::{json, Value};
use tableau_rest::api::TableauClient;
use tableau_rest::config::ServerConfig;

pub const API_VERSION: &str = "3.19";
pub const TOKEN: &str = "tok-1";
pub const SITE_ID: &str = "site-1";
pub const USER_ID: &str = "user-1";
pub const AUTH_HEADER: &str = "x-tableau-auth";

/// `/api/3.19{path}`
pub fn api(path: &str) -> String {
    format!("/api/{}{}", API_VERSION, path)
}

/// `/api/3.19/sites/site-1{path}`
pub fn site(path: &str) -> String {
    format!("/api/{}/sites/{}{}", API_VERSION, SITE_ID, path)
}

/// Token profile for the Finance site on `server_url`.
pub fn config(server_url: &str) -> ServerConfig {
    ServerConfig::with_token(server_url, API_VERSION, "Finance", "finance", "ci-bot", "s3cr3t")
}

pub fn client(server: &ServerGuard) -> TableauClient {
    TableauClient::new(config(&server.url())).unwrap()
}

/// Body the Server returns from sign-in and site switch.
pub fn credentials_body(token: &str, site_id: &str, content_url: &str, user_id: &str) -> Value {
    json!({
        "credentials": {
            "token": token,
            "site": {"id": site_id, "contentUrl": content_url},
            "user": {"id": user_id}
        }
    })
}

/// Answers one token sign-in for the Finance site.
pub async fn mock_sign_in(server: &mut ServerGuard) -> Mock {
    server
        .mock("POST", api("/auth/signin").as_str())
        .match_body(Matcher::PartialJson(json!({
            "credentials": {
                "personalAccessTokenName": "ci-bot",
                "site": {"contentUrl": "finance"}
            }
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(credentials_body(TOKEN, SITE_ID, "finance", USER_ID).to_string())
        .expect(1)
        .create_async()
        .await
}

/// A client that has completed sign-in.
pub async fn signed_in_client(server: &mut ServerGuard) -> TableauClient {
    let sign_in = mock_sign_in(server).await;
    let client = client(server);
    client.sign_in().await.unwrap();
    sign_in.assert_async().await;
    client
}

/// One page of a listing, e.g. `{"pagination": ..., "projects": {"project": [...]}}`.
pub fn page_body(collection: &str, element: &str, page: u32, size: u32, total: u32) -> Value {
    let first = (page - 1) * size;
    let count = size.min(total.saturating_sub(first));
    let items: Vec<Value> = (first..first + count)
        .map(|n| json!({"id": format!("{}-{}", element, n), "name": format!("{} {}", element, n)}))
        .collect();

    json!({
        "pagination": {
            "pageNumber": page.to_string(),
            "pageSize": size.to_string(),
            "totalAvailable": total.to_string()
        },
        collection: {element: items}
    })
}
