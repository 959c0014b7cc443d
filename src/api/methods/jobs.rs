//
//  tableau-rest
//  api/methods/jobs.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Job and webhook operations.

use super::since;
use crate::api::client::TableauClient;
use crate::api::common::{QueryParams, Result};
use crate::api::endpoints::{Endpoint, JobEndpoint, WebhookEndpoint};
use crate::api::requests::CreateWebhookRequest;
use crate::api::response::ApiResponse;

impl TableauClient {
    /// Lists background jobs. Filter on `status`, `jobType` or `createdAt`.
    pub async fn query_jobs(&self, params: &QueryParams) -> Result<ApiResponse> {
        self.fetch("query_jobs", since(3, 1), JobEndpoint::Collection, params)
            .await
    }

    /// Fetches one job, including its progress and finish code.
    pub async fn get_job(&self, job_id: &str) -> Result<ApiResponse> {
        self.fetch("get_job", since(2, 3), JobEndpoint::Item(job_id), &QueryParams::new())
            .await
    }

    /// Asks the Server to cancel a queued or running job.
    pub async fn cancel_job(&self, job_id: &str) -> Result<ApiResponse> {
        let scope = self.authorize("cancel_job", since(3, 1))?;
        let url = JobEndpoint::Item(job_id).url(&scope.base, &QueryParams::new())?;
        self.put_empty(&scope, url).await
    }

    /// Registers a webhook for one event.
    ///
    /// # Errors
    ///
    /// [`ApiError::InvalidParameter`](crate::api::common::ApiError::InvalidParameter)
    /// for an event outside the supported set or a destination that is not an
    /// `https` URL.
    pub async fn create_webhook(&self, request: &CreateWebhookRequest) -> Result<ApiResponse> {
        self.submit(
            "create_webhook",
            since(3, 6),
            WebhookEndpoint::Collection,
            &QueryParams::new(),
            || request.build(),
        )
        .await
    }

    /// Lists the webhooks of the site.
    pub async fn query_webhooks(&self, params: &QueryParams) -> Result<ApiResponse> {
        self.fetch("query_webhooks", since(3, 6), WebhookEndpoint::Collection, params)
            .await
    }

    /// Fetches one webhook.
    pub async fn get_webhook(&self, webhook_id: &str) -> Result<ApiResponse> {
        self.fetch(
            "get_webhook",
            since(3, 6),
            WebhookEndpoint::Item(webhook_id),
            &QueryParams::new(),
        )
        .await
    }

    /// Sends a test event to the webhook's destination.
    pub async fn test_webhook(&self, webhook_id: &str) -> Result<ApiResponse> {
        self.fetch(
            "test_webhook",
            since(3, 6),
            WebhookEndpoint::Test(webhook_id),
            &QueryParams::new(),
        )
        .await
    }

    pub async fn delete_webhook(&self, webhook_id: &str) -> Result<ApiResponse> {
        self.remove("delete_webhook", since(3, 6), WebhookEndpoint::Item(webhook_id))
            .await
    }
}
