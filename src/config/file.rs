//
//  tableau-rest
//  config/file.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Profile File Module
//!
//! Named connection profiles persisted as TOML.
//!
//! ## Overview
//!
//! The `tsc` binary keeps one [`ServerConfig`] per profile in
//! `config.toml` under the platform config directory (see
//! [`ConfigFile::config_path`]). One profile may be marked as the default and
//! is used when `--profile` is not given.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tableau_rest::config::{ConfigFile, ServerConfig};
//!
//! let mut file = ConfigFile::load()?;
//! file.upsert(
//!     "prod",
//!     ServerConfig::with_token("https://tableau.example.com", "3.19", "Finance", "finance", "bot", "secret"),
//! );
//! file.save()?;
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## Notes
//!
//! - Missing files load as an empty [`ConfigFile`]
//! - Write operations create parent directories
//! - Secrets are stored as given; prefer personal access tokens over passwords

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use super::ServerConfig;

/// The contents of `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Profile used when none is named explicitly.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_profile: Option<String>,

    /// Profiles keyed by name.
    #[serde(default)]
    pub profiles: BTreeMap<String, ServerConfig>,
}

impl ConfigFile {
    /// Loads the configuration from the default location.
    ///
    /// # Returns
    ///
    /// The parsed file, or an empty [`ConfigFile`] when none exists yet.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Loads the configuration from `path`.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Saves the configuration to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Saves the configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }

    /// Path of `config.toml`: `TSC_CONFIG` when set, otherwise the platform
    /// config directory.
    ///
    /// | Platform | Location |
    /// |----------|----------|
    /// | Linux | `~/.config/tsc/config.toml` |
    /// | macOS | `~/Library/Application Support/tsc/config.toml` |
    /// | Windows | `%APPDATA%\tsc\config\config.toml` |
    pub fn config_path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os("TSC_CONFIG").filter(|p| !p.is_empty()) {
            return Ok(PathBuf::from(path));
        }
        let dirs = ProjectDirs::from("", "", "tsc")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Looks up a profile, falling back to the default profile when `name` is `None`.
    pub fn profile(&self, name: Option<&str>) -> Option<&ServerConfig> {
        let name = name.or(self.default_profile.as_deref())?;
        self.profiles.get(name)
    }

    /// Inserts or replaces a profile. The first profile saved becomes the default.
    pub fn upsert(&mut self, name: &str, config: ServerConfig) {
        self.profiles.insert(name.to_string(), config);
        if self.default_profile.is_none() {
            self.default_profile = Some(name.to_string());
        }
    }

    /// Removes a profile, clearing the default when it pointed at it.
    ///
    /// # Returns
    ///
    /// `true` when the profile existed.
    pub fn remove(&mut self, name: &str) -> bool {
        let removed = self.profiles.remove(name).is_some();
        if self.default_profile.as_deref() == Some(name) {
            self.default_profile = None;
        }
        removed
    }

    /// Marks an existing profile as the default.
    pub fn set_default(&mut self, name: &str) -> Result<()> {
        if !self.profiles.contains_key(name) {
            anyhow::bail!("No profile named '{}'", name);
        }
        self.default_profile = Some(name.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ServerConfig {
        ServerConfig::with_token("https://tableau.example.com", "3.19", "Finance", "finance", "bot", "secret")
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let file = ConfigFile::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(file, ConfigFile::default());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut file = ConfigFile::default();
        file.upsert("prod", sample());
        file.save_to(&path).unwrap();

        let loaded = ConfigFile::load_from(&path).unwrap();
        assert_eq!(loaded.default_profile.as_deref(), Some("prod"));
        assert_eq!(loaded.profile(None), Some(&sample()));
    }

    #[test]
    fn test_verify_tls_defaults_to_true() {
        let file: ConfigFile = toml::from_str(
            r#"
            [profiles.dev]
            server = "http://localhost"
            "#,
        )
        .unwrap();
        assert!(file.profiles["dev"].verify_tls);
    }

    #[test]
    fn test_remove_clears_default() {
        let mut file = ConfigFile::default();
        file.upsert("prod", sample());
        file.upsert("dev", sample());
        assert!(file.remove("prod"));
        assert!(file.default_profile.is_none());
        assert!(!file.remove("prod"));
        assert!(file.set_default("missing").is_err());
        file.set_default("dev").unwrap();
        assert_eq!(file.default_profile.as_deref(), Some("dev"));
    }
}
