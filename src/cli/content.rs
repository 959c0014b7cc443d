//
//  tableau-rest
//  cli/content.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Publish and download commands
//!
//! Files over the upload threshold are sent through a chunked upload session;
//! that choice happens inside the library, so both paths look the same here.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::api::requests::{
    PublishDatasourceRequest, PublishFlowRequest, PublishWorkbookRequest,
};
use crate::api::upload::ContentKind;
use crate::api::{ApiResponse, TableauClient};
use crate::util::{file_stem, format_size};

use super::{connect, disconnect, GlobalOptions};

/// Publishable and downloadable content
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentArg {
    Workbook,
    Datasource,
    Flow,
}

impl From<ContentArg> for ContentKind {
    fn from(arg: ContentArg) -> Self {
        match arg {
            ContentArg::Workbook => ContentKind::Workbook,
            ContentArg::Datasource => ContentKind::Datasource,
            ContentArg::Flow => ContentKind::Flow,
        }
    }
}

/// Publish a workbook, datasource or flow
#[derive(Args, Debug)]
pub struct PublishCommand {
    /// What to publish
    #[arg(value_enum)]
    pub kind: ContentArg,

    /// File to publish
    pub file: PathBuf,

    /// Target project ID
    #[arg(long, short = 'p')]
    pub project: String,

    /// Content name (defaults to the file name)
    #[arg(long, short = 'n')]
    pub name: Option<String>,

    /// Description
    #[arg(long, short = 'd')]
    pub description: Option<String>,

    /// Replace existing content with the same name
    #[arg(long)]
    pub overwrite: bool,

    /// Append to an existing datasource extract
    #[arg(long, conflicts_with = "overwrite")]
    pub append: bool,

    /// Publish asynchronously and return a job
    #[arg(long)]
    pub as_job: bool,

    /// Skip the connection check (workbooks only)
    #[arg(long)]
    pub skip_connection_check: bool,
}

impl PublishCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let kind = ContentKind::from(self.kind);
        let name = match &self.name {
            Some(name) => name.clone(),
            None => file_stem(&self.file)
                .with_context(|| format!("Cannot derive a name from {}", self.file.display()))?,
        };
        let size = tokio::fs::metadata(&self.file)
            .await
            .with_context(|| format!("Cannot read {}", self.file.display()))?
            .len();

        let client = connect(global).await?;
        let spinner = spinner(global, format!("Publishing {} ({})", name, format_size(size)));
        let published = self.publish(&client, name.clone()).await;
        spinner.finish_and_clear();
        disconnect(&client).await;

        let body = published?.json_value()?;
        if global.json {
            return crate::output::write_json(&body);
        }

        let element = if self.as_job { "job" } else { kind.element() };
        let id = body[element]["id"].as_str().unwrap_or("-");
        let writer = global.writer();
        if self.as_job {
            writer.write_success(&format!("Publish job {} queued for {}", style(id).bold(), name));
        } else {
            writer.write_success(&format!("Published {} {} ({})", element, style(&name).bold(), id));
        }
        Ok(())
    }

    async fn publish(&self, client: &TableauClient, name: String) -> Result<ApiResponse> {
        let response = match self.kind {
            ContentArg::Workbook => {
                client
                    .publish_workbook(&PublishWorkbookRequest {
                        name,
                        project_id: self.project.clone(),
                        file: self.file.clone(),
                        description: self.description.clone(),
                        overwrite: self.overwrite,
                        as_job: self.as_job,
                        skip_connection_check: self.skip_connection_check,
                        ..Default::default()
                    })
                    .await?
            }
            ContentArg::Datasource => {
                client
                    .publish_datasource(&PublishDatasourceRequest {
                        name,
                        project_id: self.project.clone(),
                        file: self.file.clone(),
                        description: self.description.clone(),
                        overwrite: self.overwrite,
                        append: self.append,
                        as_job: self.as_job,
                        ..Default::default()
                    })
                    .await?
            }
            ContentArg::Flow => {
                client
                    .publish_flow(&PublishFlowRequest {
                        name,
                        project_id: self.project.clone(),
                        file: self.file.clone(),
                        description: self.description.clone(),
                        overwrite: self.overwrite,
                        ..Default::default()
                    })
                    .await?
            }
        };
        Ok(response)
    }
}

/// Download a workbook, datasource or flow
#[derive(Args, Debug)]
pub struct DownloadCommand {
    /// What to download
    #[arg(value_enum)]
    pub kind: ContentArg,

    /// Content ID
    pub id: String,

    /// Output file or directory
    #[arg(long, short = 'o', default_value = ".")]
    pub output: PathBuf,

    /// Leave extracts out of the download
    #[arg(long)]
    pub no_extract: bool,
}

impl DownloadCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let include_extract = self.no_extract.then_some(false);

        let client = connect(global).await?;
        let downloaded = match self.kind {
            ContentArg::Workbook => client.download_workbook(&self.id, include_extract).await,
            ContentArg::Datasource => client.download_datasource(&self.id, include_extract).await,
            ContentArg::Flow => client.download_flow(&self.id).await,
        };
        disconnect(&client).await;

        let response = downloaded?;
        let path = response.save_to(&self.output).await?;

        if global.json {
            return crate::output::write_json(&serde_json::json!({
                "id": self.id,
                "path": path.display().to_string(),
                "size": response.body().len(),
            }));
        }
        global.writer().write_success(&format!(
            "Downloaded to {} ({})",
            path.display(),
            format_size(response.body().len() as u64)
        ));
        Ok(())
    }
}

/// A spinner on stderr; hidden for `--json` so output stays parseable.
fn spinner(global: &GlobalOptions, message: String) -> ProgressBar {
    if global.json {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg} [{elapsed}]") {
        pb.set_style(style);
    }
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_arg_maps_to_kind() {
        assert_eq!(ContentKind::from(ContentArg::Workbook), ContentKind::Workbook);
        assert_eq!(ContentKind::from(ContentArg::Flow), ContentKind::Flow);
    }
}
