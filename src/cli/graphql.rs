//
//  tableau-rest
//  cli/graphql.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Metadata API queries

use anyhow::{Context, Result};
use clap::Args;
use serde_json::Value;

use crate::api::requests::GraphQlRequest;

use super::{connect, disconnect, GlobalOptions};

/// Run a metadata GraphQL query
#[derive(Args, Debug)]
pub struct GraphqlCommand {
    /// Query text, or @path to read it from a file
    pub query: String,

    /// Query variables as a JSON object
    #[arg(long, short = 'v')]
    pub variables: Option<String>,
}

impl GraphqlCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let request = self.request()?;

        let client = connect(global).await?;
        let answered = client.graphql(&request).await;
        disconnect(&client).await;

        // Always JSON; the shape follows the query.
        let body = answered?.json_value()?;
        if let Some(errors) = body.get("errors").and_then(Value::as_array) {
            for error in errors {
                let message = error["message"].as_str().unwrap_or("unknown error");
                global.writer().write_warning(message);
            }
        }
        crate::output::write_json(&body)
    }

    fn request(&self) -> Result<GraphQlRequest> {
        let query = match self.query.strip_prefix('@') {
            Some(path) => std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read query from {}", path))?,
            None => self.query.clone(),
        };

        let variables = self
            .variables
            .as_deref()
            .map(serde_json::from_str::<Value>)
            .transpose()
            .context("--variables is not valid JSON")?;

        Ok(GraphQlRequest { query, variables })
    }
}
