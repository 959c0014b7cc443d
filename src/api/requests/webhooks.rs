//
//  tableau-rest
//  api/requests/webhooks.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Webhook bodies.
//!
//! ```json
//! {"webhook": {
//!     "name": "refresh-failed",
//!     "webhook-source": {"webhook-source-event-datasource-refresh-failed": {}},
//!     "webhook-destination": {"webhook-destination-http": {"method": "POST", "url": "https://hooks.example.com"}}
//! }}
//! ```

use serde_json::{json, Value};
use url::Url;

use super::{required, Fields};
use crate::api::common::{ApiError, Result};

const EVENT_PREFIX: &str = "webhook-source-event-";

closed_set! {
    /// Server events a webhook can subscribe to.
    pub enum WebhookEvent ("webhook event") {
        DatasourceRefreshStarted => "datasource-refresh-started",
        DatasourceRefreshSucceeded => "datasource-refresh-succeeded",
        DatasourceRefreshFailed => "datasource-refresh-failed",
        DatasourceCreated => "datasource-created",
        DatasourceUpdated => "datasource-updated",
        DatasourceDeleted => "datasource-deleted",
        WorkbookRefreshStarted => "workbook-refresh-started",
        WorkbookRefreshSucceeded => "workbook-refresh-succeeded",
        WorkbookRefreshFailed => "workbook-refresh-failed",
        WorkbookCreated => "workbook-created",
        WorkbookUpdated => "workbook-updated",
        WorkbookDeleted => "workbook-deleted",
    }
}

impl WebhookEvent {
    /// Parses a short (`workbook-created`) or full
    /// (`webhook-source-event-workbook-created`) event name.
    pub fn from_name(name: &str) -> Result<Self> {
        let trimmed = name.trim();
        let short = match trimmed.get(..EVENT_PREFIX.len()) {
            Some(head) if head.eq_ignore_ascii_case(EVENT_PREFIX) => &trimmed[EVENT_PREFIX.len()..],
            _ => trimmed,
        };
        short.parse()
    }

    /// The key used in `webhook-source`.
    pub fn source_key(&self) -> String {
        format!("{}{}", EVENT_PREFIX, self.as_str())
    }
}

/// Options for creating a webhook.
#[derive(Debug, Clone, Default)]
pub struct CreateWebhookRequest {
    pub name: String,
    /// Event name, short or full form.
    pub event: String,
    /// Destination; must be an absolute `https` URL.
    pub url: String,
}

impl CreateWebhookRequest {
    pub fn build(&self) -> Result<Value> {
        let name = required(&self.name, "webhook name")?;
        let event = WebhookEvent::from_name(&self.event)?;
        let destination = required(&self.url, "webhook URL")?;

        let parsed = Url::parse(destination)
            .map_err(|e| ApiError::invalid(format!("invalid webhook URL '{}': {}", destination, e)))?;
        if parsed.scheme() != "https" {
            return Err(ApiError::invalid(format!(
                "webhook URL must use https, got '{}'",
                parsed.scheme()
            )));
        }

        Ok(Fields::new()
            .put("name", name)
            .put("webhook-source", Fields::new().put(&event.source_key(), json!({})).into_value())
            .put(
                "webhook-destination",
                Fields::new()
                    .put(
                        "webhook-destination-http",
                        Fields::new().put("method", "POST").put("url", destination).into_value(),
                    )
                    .into_value(),
            )
            .wrap("webhook"))
    }
}
