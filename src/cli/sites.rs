//
//  tableau-rest
//  cli/sites.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Site commands
//!
//! Listing needs a server administrator; switching works for any user who
//! belongs to the target site.

use anyhow::Result;
use clap::{Args, Subcommand};
use console::style;

use crate::api::common::{extract_pages, PageOptions};
use crate::config::ConfigFile;
use crate::output::Column;

use super::{connect, disconnect, GlobalOptions};

const SITE_COLUMNS: &[Column] = &[
    Column::new("ID", "id"),
    Column::new("NAME", "name"),
    Column::new("CONTENT URL", "contentUrl"),
    Column::new("STATE", "state"),
];

/// List or switch sites
#[derive(Args, Debug)]
pub struct SitesCommand {
    #[command(subcommand)]
    pub command: SitesSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum SitesSubcommand {
    /// List sites on the Server
    #[command(visible_alias = "ls")]
    List(ListArgs),

    /// Switch to another site
    Switch(SwitchArgs),
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Maximum number of sites to list
    #[arg(long, short = 'l')]
    pub limit: Option<usize>,
}

#[derive(Args, Debug)]
pub struct SwitchArgs {
    /// Content URL of the target site (empty for the default site)
    pub content_url: String,

    /// Store the site in the active profile
    #[arg(long)]
    pub save: bool,
}

impl SitesCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            SitesSubcommand::List(args) => self.list(args, global).await,
            SitesSubcommand::Switch(args) => self.switch(args, global).await,
        }
    }

    async fn list(&self, args: &ListArgs, global: &GlobalOptions) -> Result<()> {
        let client = connect(global).await?;

        let mut options = PageOptions::new();
        if let Some(limit) = args.limit {
            options = options.with_limit(limit);
        }
        let client_ref = &client;
        let sites = extract_pages(
            |params| async move { client_ref.query_sites(&params).await },
            options,
        )
        .await;
        disconnect(&client).await;

        global.writer().write_records(SITE_COLUMNS, &sites?)
    }

    async fn switch(&self, args: &SwitchArgs, global: &GlobalOptions) -> Result<()> {
        let client = connect(global).await?;
        let switched = client.switch_site(&args.content_url).await;
        let session = client.session();
        disconnect(&client).await;
        let response = switched?;

        if args.save {
            self.save_site(global, session.site_name(), session.site_url())?;
        }

        if global.json {
            return crate::output::write_json(&response.json_value()?);
        }

        let writer = global.writer();
        writer.write_success(&format!(
            "Switched to site {} ({})",
            style(session.site_name()).bold(),
            display_url(session.site_url())
        ));
        if !args.save {
            writer.write_info("Use --save to keep this site in the profile.");
        }
        Ok(())
    }

    fn save_site(&self, global: &GlobalOptions, site_name: &str, site_url: &str) -> Result<()> {
        let mut file = ConfigFile::load()?;
        let name = global
            .profile
            .clone()
            .or_else(|| file.default_profile.clone())
            .ok_or_else(|| anyhow::anyhow!("No profile to save to. Pass --profile."))?;

        let mut profile = file
            .profiles
            .get(&name)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("No profile named '{}'", name))?;
        profile.site_name = Some(site_name.to_string());
        profile.site_url = Some(site_url.to_string());
        file.upsert(&name, profile);
        file.save()
    }
}

/// The default site has an empty content URL.
fn display_url(site_url: &str) -> &str {
    if site_url.is_empty() {
        "default"
    } else {
        site_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_url() {
        assert_eq!(display_url(""), "default");
        assert_eq!(display_url("finance"), "finance");
    }
}
