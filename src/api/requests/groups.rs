//
//  tableau-rest
//  api/requests/groups.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Group bodies.
//!
//! A group is either local to the Server or imported from Active Directory:
//!
//! ```json
//! {"group": {"name": "Analysts", "minimumSiteRole": "Explorer", "grantLicenseMode": "onLogin"}}
//! {"group": {"name": "Analysts", "import": {"source": "ActiveDirectory", "domainName": "corp"}}}
//! ```

use serde_json::Value;

use super::{parse_opt, required, Fields, SiteRole};
use crate::api::common::{ApiError, Result};

closed_set! {
    /// When group members receive their license.
    pub enum LicenseMode ("grant license mode") {
        OnLogin => "onLogin",
        OnSync => "onSync",
    }
}

/// Where a group's membership comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum GroupSource {
    #[default]
    Local,
    ActiveDirectory {
        domain_name: String,
    },
}

/// Options for creating or updating a group.
#[derive(Debug, Clone, Default)]
pub struct GroupRequest {
    pub name: String,
    pub source: GroupSource,
    /// Site role granted to members; required when `license_mode` is set.
    pub minimum_site_role: Option<String>,
    /// `onLogin` or `onSync`.
    pub license_mode: Option<String>,
}

impl GroupRequest {
    /// A local group with just a name.
    pub fn local(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    /// A group imported from an Active Directory domain.
    pub fn active_directory(name: &str, domain_name: &str) -> Self {
        Self {
            name: name.to_string(),
            source: GroupSource::ActiveDirectory {
                domain_name: domain_name.to_string(),
            },
            ..Self::default()
        }
    }

    pub fn build(&self) -> Result<Value> {
        let name = required(&self.name, "group name")?;
        let site_role: Option<SiteRole> = parse_opt(self.minimum_site_role.as_deref())?;
        let license_mode: Option<LicenseMode> = parse_opt(self.license_mode.as_deref())?;

        if license_mode.is_some() && site_role.is_none() {
            return Err(ApiError::invalid(
                "a minimum site role is required when a grant license mode is set",
            ));
        }

        let group = Fields::new().put("name", name);
        let group = match &self.source {
            GroupSource::Local => group
                .put_opt("minimumSiteRole", site_role.map(|r| r.as_str()))
                .put_opt("grantLicenseMode", license_mode.map(|m| m.as_str())),
            GroupSource::ActiveDirectory { domain_name } => {
                let domain = required(domain_name, "domain name")?;
                let import = Fields::new()
                    .put("source", "ActiveDirectory")
                    .put("domainName", domain)
                    .put_opt("siteRole", site_role.map(|r| r.as_str()))
                    .put_opt("grantLicenseMode", license_mode.map(|m| m.as_str()));
                group.put_fields("import", import)
            }
        };
        Ok(group.wrap("group"))
    }
}
