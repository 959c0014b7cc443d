//
//  tableau-rest
//  cli/list.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Listing commands
//!
//! `tsc list <kind>` walks every page of the matching query operation and
//! prints the concatenated items. Filters use the Server's own syntax:
//!
//! ```text
//! tsc list workbooks --filter "projectName:eq:Finance" --sort "updatedAt:desc"
//! ```

use anyhow::Result;
use clap::{Args, ValueEnum};
use serde_json::Value;

use crate::api::common::{extract_pages, PageOptions, QueryParams};
use crate::api::TableauClient;
use crate::output::Column;

use super::{connect, disconnect, GlobalOptions};

/// What to list
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Projects,
    Workbooks,
    Datasources,
    Flows,
    Views,
    Users,
    Groups,
    Schedules,
    Jobs,
}

const PROJECTS_COLUMNS: &[Column] = &[
    Column::new("ID", "id"),
    Column::new("NAME", "name"),
    Column::new("PARENT", "parentProjectId"),
    Column::new("PERMISSIONS", "contentPermissions"),
];

const WORKBOOKS_COLUMNS: &[Column] = &[
    Column::new("ID", "id"),
    Column::new("NAME", "name"),
    Column::new("PROJECT", "project.name"),
    Column::new("OWNER", "owner.id"),
    Column::new("UPDATED", "updatedAt"),
];

const DATASOURCES_COLUMNS: &[Column] = &[
    Column::new("ID", "id"),
    Column::new("NAME", "name"),
    Column::new("TYPE", "type"),
    Column::new("PROJECT", "project.name"),
    Column::new("UPDATED", "updatedAt"),
];

const FLOWS_COLUMNS: &[Column] = &[
    Column::new("ID", "id"),
    Column::new("NAME", "name"),
    Column::new("PROJECT", "project.name"),
    Column::new("UPDATED", "updatedAt"),
];

const VIEWS_COLUMNS: &[Column] = &[
    Column::new("ID", "id"),
    Column::new("NAME", "name"),
    Column::new("WORKBOOK", "workbook.id"),
    Column::new("CONTENT URL", "contentUrl"),
];

const USERS_COLUMNS: &[Column] = &[
    Column::new("ID", "id"),
    Column::new("NAME", "name"),
    Column::new("SITE ROLE", "siteRole"),
    Column::new("LAST LOGIN", "lastLogin"),
];

const GROUPS_COLUMNS: &[Column] = &[
    Column::new("ID", "id"),
    Column::new("NAME", "name"),
    Column::new("DOMAIN", "domain.name"),
];

const SCHEDULES_COLUMNS: &[Column] = &[
    Column::new("ID", "id"),
    Column::new("NAME", "name"),
    Column::new("TYPE", "type"),
    Column::new("FREQUENCY", "frequency"),
    Column::new("STATE", "state"),
    Column::new("NEXT RUN", "nextRunAt"),
];

const JOBS_COLUMNS: &[Column] = &[
    Column::new("ID", "id"),
    Column::new("TYPE", "jobType"),
    Column::new("STATUS", "status"),
    Column::new("CREATED", "createdAt"),
];

impl ListKind {
    fn columns(self) -> &'static [Column] {
        match self {
            Self::Projects => PROJECTS_COLUMNS,
            Self::Workbooks => WORKBOOKS_COLUMNS,
            Self::Datasources => DATASOURCES_COLUMNS,
            Self::Flows => FLOWS_COLUMNS,
            Self::Views => VIEWS_COLUMNS,
            Self::Users => USERS_COLUMNS,
            Self::Groups => GROUPS_COLUMNS,
            Self::Schedules => SCHEDULES_COLUMNS,
            Self::Jobs => JOBS_COLUMNS,
        }
    }
}

/// List content on the signed-in site
#[derive(Args, Debug)]
pub struct ListCommand {
    /// What to list
    #[arg(value_enum)]
    pub kind: ListKind,

    /// Maximum number of items to list
    #[arg(long, short = 'l')]
    pub limit: Option<usize>,

    /// Items requested per page
    #[arg(long, default_value = "100")]
    pub page_size: u32,

    /// Filter expression, e.g. name:eq:Sales
    #[arg(long, short = 'f')]
    pub filter: Option<String>,

    /// Sort expression, e.g. name:asc
    #[arg(long, short = 's')]
    pub sort: Option<String>,

    /// Include usage statistics (views only)
    #[arg(long)]
    pub usage: bool,
}

impl ListCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = connect(global).await?;
        let items = self.fetch_all(&client).await;
        disconnect(&client).await;

        let mut items = items?;
        if let Some(limit) = self.limit {
            items.truncate(limit);
        }
        global.writer().write_records(self.kind.columns(), &items)
    }

    fn options(&self) -> PageOptions {
        let mut params = QueryParams::new();
        if let Some(filter) = &self.filter {
            params.filter(filter);
        }
        if let Some(sort) = &self.sort {
            params.set("sort", sort);
        }

        let mut options = PageOptions::new()
            .with_page_size(self.page_size)
            .with_params(params);
        if let Some(limit) = self.limit {
            options = options.with_limit(limit);
        }
        options
    }

    async fn fetch_all(&self, client: &TableauClient) -> crate::api::common::Result<Vec<Value>> {
        let options = self.options();
        let usage = self.usage;
        match self.kind {
            ListKind::Projects => {
                extract_pages(|p| async move { client.query_projects(&p).await }, options).await
            }
            ListKind::Workbooks => {
                extract_pages(|p| async move { client.query_workbooks(&p).await }, options).await
            }
            ListKind::Datasources => {
                extract_pages(|p| async move { client.query_datasources(&p).await }, options).await
            }
            ListKind::Flows => {
                extract_pages(|p| async move { client.query_flows(&p).await }, options).await
            }
            ListKind::Views => {
                extract_pages(
                    |p| async move { client.query_views_for_site(usage, &p).await },
                    options,
                )
                .await
            }
            ListKind::Users => {
                extract_pages(|p| async move { client.query_users(&p).await }, options).await
            }
            ListKind::Groups => {
                extract_pages(|p| async move { client.query_groups(&p).await }, options).await
            }
            ListKind::Schedules => {
                extract_pages(|p| async move { client.query_schedules(&p).await }, options).await
            }
            ListKind::Jobs => {
                extract_pages(|p| async move { client.query_jobs(&p).await }, options).await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(filter: Option<&str>) -> ListCommand {
        ListCommand {
            kind: ListKind::Workbooks,
            limit: Some(250),
            page_size: 100,
            filter: filter.map(str::to_string),
            sort: Some("name:asc".into()),
            usage: false,
        }
    }

    #[test]
    fn test_options_carry_filter_and_sort() {
        let options = command(Some("projectName:eq:Finance")).options();
        assert_eq!(options.page_size, 100);
        assert_eq!(options.limit, Some(250));
        assert!(options.params.get("filter").is_some());
        assert_eq!(options.params.get("sort"), Some("sort=name:asc"));
    }

    #[test]
    fn test_every_kind_has_an_id_column() {
        for kind in ListKind::value_variants() {
            assert_eq!(kind.columns()[0].header, "ID");
        }
    }
}
