//
//  tableau-rest
//  api/requests/projects.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Project bodies.

use serde_json::Value;

use super::{id_ref, parse_opt, required, Fields};
use crate::api::common::Result;

closed_set! {
    /// Who controls permissions on a project's content.
    pub enum ContentPermissions ("content permissions") {
        LockedToProject => "LockedToProject",
        ManagedByOwner => "ManagedByOwner",
        LockedToProjectWithoutNested => "LockedToProjectWithoutNested",
    }
}

/// Options for creating or updating a project.
///
/// `name` is required on create and optional on update.
#[derive(Debug, Clone, Default)]
pub struct ProjectRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    /// Nest the project under this parent.
    pub parent_project_id: Option<String>,
    pub content_permissions: Option<String>,
    pub owner_id: Option<String>,
}

impl ProjectRequest {
    /// A create request with just a name.
    pub fn named(name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            ..Self::default()
        }
    }

    /// The create body; fails when `name` is missing.
    pub fn build_create(&self) -> Result<Value> {
        required(self.name.as_deref().unwrap_or_default(), "project name")?;
        self.build_update()
    }

    /// The update body.
    pub fn build_update(&self) -> Result<Value> {
        let permissions: Option<ContentPermissions> =
            parse_opt(self.content_permissions.as_deref())?;
        let owner = self
            .owner_id
            .as_deref()
            .map(|id| required(id, "owner id").map(id_ref))
            .transpose()?;

        Ok(Fields::new()
            .put_opt("name", self.name.as_deref())
            .put_opt("description", self.description.as_deref())
            .put_opt("parentProjectId", self.parent_project_id.as_deref())
            .put_opt("contentPermissions", permissions.map(|p| p.as_str()))
            .put_opt("owner", owner)
            .wrap("project"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_nested_project() {
        let body = ProjectRequest {
            name: Some("Finance".into()),
            parent_project_id: Some("p-root".into()),
            content_permissions: Some("lockedtoproject".into()),
            ..Default::default()
        }
        .build_create()
        .unwrap();
        assert_eq!(
            body,
            json!({"project": {
                "name": "Finance",
                "parentProjectId": "p-root",
                "contentPermissions": "LockedToProject"
            }})
        );
    }

    #[test]
    fn test_create_requires_name() {
        assert!(ProjectRequest::default().build_create().is_err());
        assert_eq!(
            ProjectRequest::default().build_update().unwrap(),
            json!({"project": {}})
        );
    }

    #[test]
    fn test_rejects_unknown_permissions() {
        let mut request = ProjectRequest::named("Finance");
        request.content_permissions = Some("Open".into());
        assert!(request.build_create().is_err());
    }
}
