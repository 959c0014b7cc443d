//
//  tableau-rest
//  cli/config.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Connection profile commands
//!
//! Profiles are stored in `config.toml`. Secrets are written as given, so
//! prefer leaving the password out and answering the prompt, or setting
//! `TABLEAU_PASSWORD` / `TABLEAU_TOKEN_SECRET` at run time.

use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use console::style;

use crate::config::{ConfigFile, ServerConfig};

use super::GlobalOptions;

const MASK: &str = "********";

/// Manage connection profiles
#[derive(Args, Debug)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub command: ConfigSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigSubcommand {
    /// Show all profiles (secrets masked)
    #[command(visible_alias = "ls")]
    Show,

    /// Create or update a profile
    #[command(name = "set-profile")]
    SetProfile(SetProfileArgs),

    /// Remove a profile
    #[command(name = "remove-profile", visible_alias = "rm")]
    RemoveProfile(RemoveProfileArgs),

    /// Show configuration file path
    Path,
}

#[derive(Args, Debug)]
pub struct SetProfileArgs {
    /// Profile name
    pub name: String,

    /// Server URL, e.g. https://tableau.example.com
    #[arg(long)]
    pub server: Option<String>,

    /// REST API version, e.g. 3.19
    #[arg(long)]
    pub api_version: Option<String>,

    /// Site display name
    #[arg(long)]
    pub site_name: Option<String>,

    /// Site content URL (empty for the default site)
    #[arg(long)]
    pub site_url: Option<String>,

    /// Username for password sign-in
    #[arg(long, conflicts_with_all = ["token_name", "token_secret"])]
    pub username: Option<String>,

    /// Password (omit to be prompted when signing in)
    #[arg(long, requires = "username")]
    pub password: Option<String>,

    /// Personal access token name
    #[arg(long, requires = "token_secret")]
    pub token_name: Option<String>,

    /// Personal access token secret
    #[arg(long, requires = "token_name")]
    pub token_secret: Option<String>,

    /// Skip TLS certificate verification
    #[arg(long)]
    pub insecure: bool,

    /// Make this the default profile
    #[arg(long)]
    pub default: bool,
}

#[derive(Args, Debug)]
pub struct RemoveProfileArgs {
    /// Profile name
    pub name: String,
}

impl ConfigCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            ConfigSubcommand::Show => self.show(global).await,
            ConfigSubcommand::SetProfile(args) => self.set_profile(args, global).await,
            ConfigSubcommand::RemoveProfile(args) => self.remove_profile(args, global).await,
            ConfigSubcommand::Path => self.path(global).await,
        }
    }

    /// Show all profiles
    async fn show(&self, global: &GlobalOptions) -> Result<()> {
        let mut file = ConfigFile::load()?;
        for profile in file.profiles.values_mut() {
            mask_secrets(profile);
        }

        if global.json {
            return crate::output::write_json(&file);
        }

        if file.profiles.is_empty() {
            println!("No profiles. Create one with 'tsc config set-profile <name>'.");
            return Ok(());
        }

        for (name, profile) in &file.profiles {
            let marker = if file.default_profile.as_deref() == Some(name.as_str()) {
                style(" (default)").green().to_string()
            } else {
                String::new()
            };
            println!();
            println!("{}{}", style(name).bold(), marker);
            println!("{}", "-".repeat(50));
            self.print_kv("server", &profile.server);
            self.print_kv("api_version", &profile.api_version);
            self.print_kv("site_name", &profile.site_name);
            self.print_kv("site_url", &profile.site_url);
            self.print_kv("username", &profile.username);
            self.print_kv("password", &profile.password);
            self.print_kv("token_name", &profile.personal_access_token_name);
            self.print_kv("token_secret", &profile.personal_access_token_secret);
            if !profile.verify_tls {
                println!("  {:<16} {}", "verify_tls", style("false").yellow());
            }
        }
        println!();
        Ok(())
    }

    /// Create or update a profile
    async fn set_profile(&self, args: &SetProfileArgs, global: &GlobalOptions) -> Result<()> {
        let mut file = ConfigFile::load()?;
        let existing = file.profiles.get(&args.name).cloned().unwrap_or_default();
        let profile = merge_profile(existing, args);

        // A password left out on purpose is prompted for at sign-in.
        let incomplete = if super::needs_password(&profile) {
            None
        } else {
            profile.validate().err()
        };
        file.upsert(&args.name, profile);
        if args.default {
            file.set_default(&args.name)?;
        }
        file.save()?;

        if global.json {
            return crate::output::write_json(&serde_json::json!({
                "profile": args.name,
                "default": file.default_profile.as_deref() == Some(args.name.as_str()),
                "path": ConfigFile::config_path()?.display().to_string(),
            }));
        }

        let writer = global.writer();
        writer.write_success(&format!("Saved profile {}", style(&args.name).bold()));
        if let Some(e) = incomplete {
            writer.write_warning(&format!("Profile is incomplete: {}", e));
        }
        Ok(())
    }

    /// Remove a profile
    async fn remove_profile(&self, args: &RemoveProfileArgs, global: &GlobalOptions) -> Result<()> {
        let mut file = ConfigFile::load()?;
        if !file.remove(&args.name) {
            bail!("No profile named '{}'", args.name);
        }
        file.save()?;

        if global.json {
            return crate::output::write_json(&serde_json::json!({
                "removed": args.name,
            }));
        }
        global
            .writer()
            .write_success(&format!("Removed profile {}", style(&args.name).bold()));
        Ok(())
    }

    /// Show configuration file path
    async fn path(&self, global: &GlobalOptions) -> Result<()> {
        let path = ConfigFile::config_path()?;
        if global.json {
            return crate::output::write_json(&serde_json::json!({
                "path": path.display().to_string(),
                "exists": path.exists(),
            }));
        }
        println!("{}", path.display());
        Ok(())
    }

    fn print_kv(&self, key: &str, value: &Option<String>) {
        let display = match value {
            Some(v) => v.clone(),
            None => style("(not set)").dim().to_string(),
        };
        println!("  {:<16} {}", key, display);
    }
}

/// Applies the given flags over an existing profile. Choosing one sign-in
/// mode clears the other.
fn merge_profile(mut profile: ServerConfig, args: &SetProfileArgs) -> ServerConfig {
    let overlay = |field: &mut Option<String>, value: &Option<String>| {
        if value.is_some() {
            field.clone_from(value);
        }
    };
    overlay(&mut profile.server, &args.server);
    overlay(&mut profile.api_version, &args.api_version);
    overlay(&mut profile.site_name, &args.site_name);
    overlay(&mut profile.site_url, &args.site_url);

    if args.username.is_some() {
        profile.username.clone_from(&args.username);
        profile.password.clone_from(&args.password);
        profile.personal_access_token_name = None;
        profile.personal_access_token_secret = None;
    }
    if args.token_name.is_some() {
        profile.personal_access_token_name.clone_from(&args.token_name);
        profile.personal_access_token_secret.clone_from(&args.token_secret);
        profile.username = None;
        profile.password = None;
    }
    if args.insecure {
        profile.verify_tls = false;
    }
    profile
}

fn mask_secrets(profile: &mut ServerConfig) {
    for secret in [&mut profile.password, &mut profile.personal_access_token_secret] {
        if secret.is_some() {
            *secret = Some(MASK.to_string());
        }
    }
}
