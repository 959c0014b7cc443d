//
//  tableau-rest
//  api/methods/subscriptions.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Subscription and favorite operations.

use super::since;
use crate::api::client::TableauClient;
use crate::api::common::{QueryParams, Result};
use crate::api::endpoints::{FavoriteEndpoint, SubscriptionEndpoint};
use crate::api::requests::{
    CreateSubscriptionRequest, FavoriteKind, FavoriteRequest, UpdateSubscriptionRequest,
};
use crate::api::response::ApiResponse;

impl TableauClient {
    /// Subscribes a user to a view or workbook on a schedule.
    ///
    /// Content type, page orientation and page size are matched
    /// case-insensitively against their closed sets.
    ///
    /// # Errors
    ///
    /// [`ApiError::InvalidParameter`](crate::api::common::ApiError::InvalidParameter)
    /// for a value outside a closed set or a missing subject, content, schedule or
    /// user.
    pub async fn create_subscription(
        &self,
        request: &CreateSubscriptionRequest,
    ) -> Result<ApiResponse> {
        self.submit(
            "create_subscription",
            since(2, 3),
            SubscriptionEndpoint::Collection,
            &QueryParams::new(),
            || request.build(),
        )
        .await
    }

    /// Lists the subscriptions on the site.
    pub async fn query_subscriptions(&self, params: &QueryParams) -> Result<ApiResponse> {
        self.fetch(
            "query_subscriptions",
            since(2, 3),
            SubscriptionEndpoint::Collection,
            params,
        )
        .await
    }

    /// Fetches one subscription.
    pub async fn get_subscription(&self, subscription_id: &str) -> Result<ApiResponse> {
        self.fetch(
            "get_subscription",
            since(2, 3),
            SubscriptionEndpoint::Item(subscription_id),
            &QueryParams::new(),
        )
        .await
    }

    /// Changes subject, schedule, attachments or suspension of a subscription.
    pub async fn update_subscription(
        &self,
        subscription_id: &str,
        request: &UpdateSubscriptionRequest,
    ) -> Result<ApiResponse> {
        self.amend(
            "update_subscription",
            since(2, 3),
            SubscriptionEndpoint::Item(subscription_id),
            || request.build(),
        )
        .await
    }

    pub async fn delete_subscription(&self, subscription_id: &str) -> Result<ApiResponse> {
        self.remove(
            "delete_subscription",
            since(2, 3),
            SubscriptionEndpoint::Item(subscription_id),
        )
        .await
    }

    /// Adds a workbook, view, data source, project or flow to a user's favorites.
    pub async fn add_favorite(&self, user_id: &str, request: &FavoriteRequest) -> Result<ApiResponse> {
        self.amend(
            "add_favorite",
            since(2, 0),
            FavoriteEndpoint::ForUser(user_id),
            || request.build(),
        )
        .await
    }

    /// Lists a user's favorites.
    pub async fn query_favorites(&self, user_id: &str, params: &QueryParams) -> Result<ApiResponse> {
        self.fetch(
            "query_favorites",
            since(2, 5),
            FavoriteEndpoint::ForUser(user_id),
            params,
        )
        .await
    }

    /// Removes one item from a user's favorites.
    pub async fn delete_favorite(
        &self,
        user_id: &str,
        kind: FavoriteKind,
        content_id: &str,
    ) -> Result<ApiResponse> {
        self.remove(
            "delete_favorite",
            since(2, 0),
            FavoriteEndpoint::Item {
                user: user_id,
                kind,
                id: content_id,
            },
        )
        .await
    }
}
