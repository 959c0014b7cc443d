//
//  tableau-rest
//  cli/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI command definitions using clap derive macros

mod completion;
mod config;
mod content;
mod graphql;
mod list;
mod sites;

pub use completion::CompletionCommand;
pub use config::ConfigCommand;
pub use content::{DownloadCommand, PublishCommand};
pub use graphql::GraphqlCommand;
pub use list::ListCommand;
pub use sites::SitesCommand;

use anyhow::{Context, Result};
use clap::builder::FalseyValueParser;
use clap::{ArgAction, Parser, Subcommand};

use crate::api::TableauClient;
use crate::config::{ConfigFile, ServerConfig};
use crate::output::{print_field, print_header, OutputFormat, OutputWriter};

/// tsc - Work with Tableau Server from the command line
#[derive(Parser, Debug)]
#[command(
    name = "tsc",
    version,
    about = "Work with Tableau Server from the command line",
    long_about = "tsc drives the Tableau Server REST API.\n\n\
                  Connection settings come from a profile in config.toml, \
                  overridden by TABLEAU_* environment variables.",
    propagate_version = true,
    after_help = "Use 'tsc <command> --help' for more information about a command."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOptions,
}

/// Global options available to all commands
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Connection profile from config.toml
    #[arg(long, short = 'P', global = true, env = "TSC_PROFILE")]
    pub profile: Option<String>,

    /// Output format as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable interactive prompts
    #[arg(
        long,
        global = true,
        env = "TSC_NO_PROMPT",
        action = ArgAction::SetTrue,
        value_parser = FalseyValueParser::new()
    )]
    pub no_prompt: bool,
}

impl GlobalOptions {
    pub(crate) fn writer(&self) -> OutputWriter {
        OutputWriter::new(OutputFormat::from_json_flag(self.json))
    }
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the Server's product and REST API version
    #[command(name = "server-info")]
    ServerInfo,

    /// List or switch sites
    Sites(SitesCommand),

    /// List content on the signed-in site
    #[command(visible_alias = "ls")]
    List(ListCommand),

    /// Publish a workbook, datasource or flow
    Publish(PublishCommand),

    /// Download a workbook, datasource or flow
    Download(DownloadCommand),

    /// Run a metadata GraphQL query
    Graphql(GraphqlCommand),

    /// Manage connection profiles
    Config(ConfigCommand),

    /// Generate shell completion scripts
    Completion(CompletionCommand),

    /// Print version information
    Version,
}

/// Resolves the connection settings: the selected profile (or the default
/// one), then `TABLEAU_*` overrides, then a password prompt when a password
/// profile has none.
pub(crate) fn resolve_config(global: &GlobalOptions) -> Result<ServerConfig> {
    let file = ConfigFile::load()?;

    let mut config = match (&global.profile, file.profile(global.profile.as_deref())) {
        (_, Some(profile)) => profile.clone(),
        (Some(name), None) => anyhow::bail!(
            "No profile named '{}'. Create one with 'tsc config set-profile {}'.",
            name,
            name
        ),
        (None, None) => ServerConfig::default(),
    };
    config.apply_env();

    if needs_password(&config) && !global.no_prompt {
        use dialoguer::Password;
        let user = config.username.clone().unwrap_or_default();
        let password = Password::new()
            .with_prompt(format!("Password for {}", user))
            .interact()
            .context("Failed to read password")?;
        config.password = Some(password);
    }

    Ok(config)
}

fn needs_password(config: &ServerConfig) -> bool {
    let set = |field: &Option<String>| field.as_deref().is_some_and(|v| !v.trim().is_empty());
    set(&config.username)
        && !set(&config.password)
        && !set(&config.personal_access_token_name)
        && !set(&config.personal_access_token_secret)
}

/// Builds a client from the resolved settings and signs in.
pub(crate) async fn connect(global: &GlobalOptions) -> Result<TableauClient> {
    let client = TableauClient::new(resolve_config(global)?)?;
    client.sign_in().await?;
    Ok(client)
}

/// Best-effort sign-out at the end of a command.
pub(crate) async fn disconnect(client: &TableauClient) {
    if let Err(e) = client.sign_out().await {
        tracing::warn!("Sign-out failed: {}", e);
    }
}

/// `tsc server-info`. Needs a server and version but no sign-in.
pub async fn server_info(global: &GlobalOptions) -> Result<()> {
    let client = TableauClient::new(resolve_config(global)?)?;
    let response = client.server_info().await?;

    if global.json {
        return crate::output::write_json(&response.json_value()?);
    }

    let info = response.json::<crate::api::models::ServerInfoResponse>()?.server_info;
    let color = global.writer().color_enabled();
    print_header("Tableau Server", color);
    print_field("Product version", &info.product_version.value, color);
    print_field(
        "Build",
        info.product_version.build.as_deref().unwrap_or("-"),
        color,
    );
    print_field("REST API version", &info.rest_api_version, color);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_prompt_flag() {
        let cli = Cli::try_parse_from(["tsc", "--no-prompt", "version"]).unwrap();
        assert!(cli.global.no_prompt);
    }

    #[test]
    fn test_needs_password() {
        let mut config = ServerConfig::with_password("https://t", "3.19", "S", "s", "admin", "");
        assert!(needs_password(&config));

        config.password = Some("secret".into());
        assert!(!needs_password(&config));

        let token = ServerConfig::with_token("https://t", "3.19", "S", "s", "bot", "secret");
        assert!(!needs_password(&token));
    }
}
