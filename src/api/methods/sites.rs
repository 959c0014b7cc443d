//
//  tableau-rest
//  api/methods/sites.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Site and extract-encryption operations.

use super::since;
use crate::api::client::TableauClient;
use crate::api::common::{QueryParams, Result};
use crate::api::endpoints::{EncryptionEndpoint, SiteEndpoint};
use crate::api::requests::{CreateSiteRequest, UpdateSiteRequest};
use crate::api::response::ApiResponse;

impl TableauClient {
    /// Creates a site. Needs a server administrator session.
    ///
    /// # Errors
    ///
    /// [`ApiError::InvalidParameter`](crate::api::common::ApiError::InvalidParameter)
    /// when the name or content URL is blank, a setting is outside its closed
    /// set, or a user quota is combined with `ContentOnly` admin mode.
    pub async fn create_site(&self, request: &CreateSiteRequest) -> Result<ApiResponse> {
        self.submit(
            "create_site",
            since(2, 0),
            SiteEndpoint::Collection,
            &QueryParams::new(),
            || request.build(),
        )
        .await
    }

    /// Lists the sites the signed-in user can reach.
    pub async fn query_sites(&self, params: &QueryParams) -> Result<ApiResponse> {
        self.fetch("query_sites", since(2, 0), SiteEndpoint::Collection, params)
            .await
    }

    /// Fetches a site by its LUID.
    pub async fn get_site(&self, site_id: &str) -> Result<ApiResponse> {
        self.fetch("get_site", since(2, 0), SiteEndpoint::ById(site_id), &QueryParams::new())
            .await
    }

    /// Looks a site up by its display name.
    pub async fn get_site_by_name(&self, name: &str) -> Result<ApiResponse> {
        self.fetch(
            "get_site_by_name",
            since(2, 0),
            SiteEndpoint::ByName(name),
            &QueryParams::new(),
        )
        .await
    }

    /// Looks a site up by its URL slug; `""` is the default site.
    pub async fn get_site_by_content_url(&self, content_url: &str) -> Result<ApiResponse> {
        self.fetch(
            "get_site_by_content_url",
            since(2, 0),
            SiteEndpoint::ByContentUrl(content_url),
            &QueryParams::new(),
        )
        .await
    }

    /// Only the fields set on `request` are sent; `state` is never implied.
    pub async fn update_site(
        &self,
        site_id: &str,
        request: &UpdateSiteRequest,
    ) -> Result<ApiResponse> {
        self.amend("update_site", since(2, 0), SiteEndpoint::ById(site_id), || {
            request.build()
        })
        .await
    }

    /// Deletes a site and all of its content. Needs a server administrator session.
    pub async fn delete_site(&self, site_id: &str) -> Result<ApiResponse> {
        self.remove("delete_site", since(2, 0), SiteEndpoint::ById(site_id))
            .await
    }

    /// Views of the signed-in site, optionally with usage statistics.
    pub async fn query_views_for_site(
        &self,
        include_usage: bool,
        params: &QueryParams,
    ) -> Result<ApiResponse> {
        self.fetch(
            "query_views_for_site",
            since(2, 2),
            SiteEndpoint::Views { include_usage },
            params,
        )
        .await
    }

    /// Encrypts every extract on the site (API 3.5+).
    pub async fn encrypt_extracts(&self) -> Result<ApiResponse> {
        self.trigger(
            "encrypt_extracts",
            since(3, 5),
            EncryptionEndpoint::Encrypt,
            &QueryParams::new(),
        )
        .await
    }

    /// Decrypts every extract on the site (API 3.5+).
    pub async fn decrypt_extracts(&self) -> Result<ApiResponse> {
        self.trigger(
            "decrypt_extracts",
            since(3, 5),
            EncryptionEndpoint::Decrypt,
            &QueryParams::new(),
        )
        .await
    }

    /// Re-encrypts the site's extracts under fresh keys.
    pub async fn reencrypt_extracts(&self) -> Result<ApiResponse> {
        self.trigger(
            "reencrypt_extracts",
            since(3, 5),
            EncryptionEndpoint::Reencrypt,
            &QueryParams::new(),
        )
        .await
    }
}
