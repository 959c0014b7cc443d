//
//  tableau-rest
//  api/requests/users.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! User bodies.

use serde_json::Value;

use super::{id_ref, parse_opt, required, Fields};
use crate::api::common::Result;

closed_set! {
    /// License level of a user on a site.
    pub enum SiteRole ("site role") {
        Creator => "Creator",
        Explorer => "Explorer",
        ExplorerCanPublish => "ExplorerCanPublish",
        ServerAdministrator => "ServerAdministrator",
        SiteAdministratorExplorer => "SiteAdministratorExplorer",
        SiteAdministratorCreator => "SiteAdministratorCreator",
        Unlicensed => "Unlicensed",
        Viewer => "Viewer",
    }
}

closed_set! {
    pub enum AuthSetting ("authentication setting") {
        ServerDefault => "ServerDefault",
        Saml => "SAML",
        OpenId => "OpenID",
        TableauIdWithMfa => "TableauIDWithMFA",
    }
}

/// Options for adding a user to the site.
#[derive(Debug, Clone, Default)]
pub struct AddUserRequest {
    pub name: String,
    pub site_role: String,
    pub auth_setting: Option<String>,
}

impl AddUserRequest {
    pub fn build(&self) -> Result<Value> {
        let name = required(&self.name, "user name")?;
        let site_role: SiteRole = self.site_role.parse()?;
        let auth: Option<AuthSetting> = parse_opt(self.auth_setting.as_deref())?;
        Ok(Fields::new()
            .put("name", name)
            .put("siteRole", site_role.as_str())
            .put_opt("authSetting", auth.map(|a| a.as_str()))
            .wrap("user"))
    }
}

/// Options for updating a user; every field is optional.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserRequest {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub site_role: Option<String>,
    pub auth_setting: Option<String>,
}

impl UpdateUserRequest {
    pub fn build(&self) -> Result<Value> {
        let site_role: Option<SiteRole> = parse_opt(self.site_role.as_deref())?;
        let auth: Option<AuthSetting> = parse_opt(self.auth_setting.as_deref())?;
        Ok(Fields::new()
            .put_opt("fullName", self.full_name.as_deref())
            .put_opt("email", self.email.as_deref())
            .put_opt("password", self.password.as_deref())
            .put_opt("siteRole", site_role.map(|r| r.as_str()))
            .put_opt("authSetting", auth.map(|a| a.as_str()))
            .wrap("user"))
    }
}

/// `{"user": {"id": ...}}`, used to add a user to a group.
pub fn user_ref_body(user_id: &str) -> Result<Value> {
    Ok(Fields::new()
        .put("user", id_ref(required(user_id, "user id")?))
        .into_value())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::common::ApiError;
    use serde_json::json;

    #[test]
    fn test_add_user_body() {
        let body = AddUserRequest {
            name: "ann@example.com".into(),
            site_role: "explorercanpublish".into(),
            auth_setting: Some("saml".into()),
        }
        .build()
        .unwrap();
        assert_eq!(
            body,
            json!({"user": {"name": "ann@example.com", "siteRole": "ExplorerCanPublish", "authSetting": "SAML"}})
        );
    }

    #[test]
    fn test_add_user_rejects_unknown_role() {
        let request = AddUserRequest {
            name: "ann".into(),
            site_role: "Owner".into(),
            auth_setting: None,
        };
        assert!(matches!(request.build(), Err(ApiError::InvalidParameter(_))));
    }

    #[test]
    fn test_update_user_omits_absent() {
        let body = UpdateUserRequest {
            email: Some("ann@example.com".into()),
            ..Default::default()
        }
        .build()
        .unwrap();
        assert_eq!(body, json!({"user": {"email": "ann@example.com"}}));
    }

    #[test]
    fn test_user_ref_body() {
        assert_eq!(user_ref_body("u-1").unwrap(), json!({"user": {"id": "u-1"}}));
        assert!(user_ref_body("").is_err());
    }
}
