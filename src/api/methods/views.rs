//
//  tableau-rest
//  api/methods/views.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! View operations.
//!
//! Rendering operations accept view filters as query fragments, e.g.
//! `vf_Region=West`, alongside `resolution`, `maxAge`, `type` and
//! `orientation`.

use super::since;
use crate::api::client::TableauClient;
use crate::api::common::{QueryParams, Result};
use crate::api::endpoints::ViewEndpoint;
use crate::api::requests::tags_body;
use crate::api::response::ApiResponse;

impl TableauClient {
    /// Fetches one view (API 3.0+).
    pub async fn get_view(&self, view_id: &str) -> Result<ApiResponse> {
        self.fetch("get_view", since(3, 0), ViewEndpoint::Item(view_id), &QueryParams::new())
            .await
    }

    /// Renders a view as PDF. Page type, orientation and `vf_` filters go in `params`.
    pub async fn query_view_pdf(&self, view_id: &str, params: &QueryParams) -> Result<ApiResponse> {
        self.fetch("query_view_pdf", since(2, 8), ViewEndpoint::Pdf(view_id), params)
            .await
    }

    /// Renders a view as PNG. `resolution` and `vf_` filters go in `params`.
    pub async fn query_view_image(
        &self,
        view_id: &str,
        params: &QueryParams,
    ) -> Result<ApiResponse> {
        self.fetch("query_view_image", since(2, 5), ViewEndpoint::Image(view_id), params)
            .await
    }

    /// The view's underlying data as CSV.
    pub async fn query_view_data(&self, view_id: &str, params: &QueryParams) -> Result<ApiResponse> {
        self.fetch("query_view_data", since(2, 8), ViewEndpoint::Data(view_id), params)
            .await
    }

    /// Exports a view's crosstab as an Excel workbook (API 3.14+).
    pub async fn download_view_crosstab(
        &self,
        view_id: &str,
        params: &QueryParams,
    ) -> Result<ApiResponse> {
        self.fetch(
            "download_view_crosstab",
            since(3, 14),
            ViewEndpoint::Crosstab(view_id),
            params,
        )
        .await
    }

    /// Adds tags to a view; existing tags are kept.
    pub async fn add_tags_to_view<S: AsRef<str>>(
        &self,
        view_id: &str,
        tags: &[S],
    ) -> Result<ApiResponse> {
        self.amend("add_tags_to_view", since(2, 0), ViewEndpoint::Tags(view_id), || {
            tags_body(tags)
        })
        .await
    }

    pub async fn delete_tag_from_view(&self, view_id: &str, tag: &str) -> Result<ApiResponse> {
        self.remove(
            "delete_tag_from_view",
            since(2, 0),
            ViewEndpoint::Tag { view: view_id, tag },
        )
        .await
    }
}
