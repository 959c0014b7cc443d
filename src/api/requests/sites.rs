//
//  tableau-rest
//  api/requests/sites.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Site bodies.

use serde_json::Value;

use super::{parse_opt, required, Fields};
use crate::api::common::{ApiError, Result};

closed_set! {
    /// Whether site administrators manage users as well as content.
    pub enum AdminMode ("site admin mode") {
        ContentAndUsers => "ContentAndUsers",
        ContentOnly => "ContentOnly",
    }
}

closed_set! {
    pub enum ExtractEncryptionMode ("extract encryption mode") {
        Enforced => "enforced",
        Enabled => "enabled",
        Disabled => "disabled",
    }
}

closed_set! {
    pub enum SiteState ("site state") {
        Active => "Active",
        Suspended => "Suspended",
    }
}

/// Settings common to create and update.
#[derive(Debug, Clone, Default)]
pub struct SiteSettings {
    /// `ContentAndUsers` or `ContentOnly`.
    pub admin_mode: Option<String>,
    /// Not allowed together with `ContentOnly`.
    pub user_quota: Option<u32>,
    /// Megabytes.
    pub storage_quota: Option<u64>,
    pub disable_subscriptions: Option<bool>,
    pub flows_enabled: Option<bool>,
    pub revision_history_enabled: Option<bool>,
    pub revision_limit: Option<u32>,
    /// `enforced`, `enabled` or `disabled`.
    pub extract_encryption_mode: Option<String>,
}

impl SiteSettings {
    fn apply(&self, fields: Fields) -> Result<Fields> {
        let admin_mode: Option<AdminMode> = parse_opt(self.admin_mode.as_deref())?;
        let encryption: Option<ExtractEncryptionMode> =
            parse_opt(self.extract_encryption_mode.as_deref())?;

        if admin_mode == Some(AdminMode::ContentOnly) && self.user_quota.is_some() {
            return Err(ApiError::invalid(
                "user quota cannot be set when admin mode is ContentOnly",
            ));
        }

        Ok(fields
            .put_opt("adminMode", admin_mode.map(|m| m.as_str()))
            .put_opt("userQuota", self.user_quota)
            .put_opt("storageQuota", self.storage_quota)
            .put_opt("disableSubscriptions", self.disable_subscriptions)
            .put_opt("flowsEnabled", self.flows_enabled)
            .put_opt("revisionHistoryEnabled", self.revision_history_enabled)
            .put_opt("revisionLimit", self.revision_limit)
            .put_opt("extractEncryptionMode", encryption.map(|m| m.as_str())))
    }
}

/// Options for creating a site.
#[derive(Debug, Clone, Default)]
pub struct CreateSiteRequest {
    pub name: String,
    /// URL slug; must be unique on the Server.
    pub content_url: String,
    pub settings: SiteSettings,
}

impl CreateSiteRequest {
    pub fn build(&self) -> Result<Value> {
        let name = required(&self.name, "site name")?;
        let content_url = required(&self.content_url, "site content URL")?;
        let fields = Fields::new().put("name", name).put("contentUrl", content_url);
        Ok(self.settings.apply(fields)?.wrap("site"))
    }
}

/// Options for updating a site.
///
/// `state` is only sent when set, so updating other settings never
/// reactivates a suspended site.
#[derive(Debug, Clone, Default)]
pub struct UpdateSiteRequest {
    pub name: Option<String>,
    pub content_url: Option<String>,
    /// `Active` or `Suspended`, any case.
    pub state: Option<String>,
    pub settings: SiteSettings,
}

impl UpdateSiteRequest {
    pub fn build(&self) -> Result<Value> {
        let state: Option<SiteState> = parse_opt(self.state.as_deref())?;
        let fields = Fields::new()
            .put_opt("name", self.name.as_deref())
            .put_opt("contentUrl", self.content_url.as_deref())
            .put_opt("state", state.map(|s| s.as_str()));
        Ok(self.settings.apply(fields)?.wrap("site"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_site_body() {
        let body = CreateSiteRequest {
            name: "Finance".into(),
            content_url: "finance".into(),
            settings: SiteSettings {
                admin_mode: Some("contentandusers".into()),
                user_quota: Some(50),
                extract_encryption_mode: Some("Enabled".into()),
                ..Default::default()
            },
        }
        .build()
        .unwrap();
        assert_eq!(
            body,
            json!({"site": {
                "name": "Finance",
                "contentUrl": "finance",
                "adminMode": "ContentAndUsers",
                "userQuota": 50,
                "extractEncryptionMode": "enabled"
            }})
        );
    }

    #[test]
    fn test_user_quota_with_content_only_rejected() {
        let request = CreateSiteRequest {
            name: "Finance".into(),
            content_url: "finance".into(),
            settings: SiteSettings {
                admin_mode: Some("ContentOnly".into()),
                user_quota: Some(10),
                ..Default::default()
            },
        };
        assert!(matches!(request.build(), Err(ApiError::InvalidParameter(_))));
    }

    #[test]
    fn test_update_never_defaults_state() {
        let body = UpdateSiteRequest {
            name: Some("Finance EU".into()),
            ..Default::default()
        }
        .build()
        .unwrap();
        assert_eq!(body, json!({"site": {"name": "Finance EU"}}));
    }

    #[test]
    fn test_update_rejects_bad_enums() {
        let request = UpdateSiteRequest {
            state: Some("Deleted".into()),
            ..Default::default()
        };
        assert!(request.build().is_err());

        let request = UpdateSiteRequest {
            settings: SiteSettings {
                extract_encryption_mode: Some("maybe".into()),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(request.build().is_err());
    }
}
