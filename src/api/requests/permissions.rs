//
//  tableau-rest
//  api/requests/permissions.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Permissions
//!
//! Object types, grantees and capability sets, plus the add-permissions body.
//!
//! ## Capability Sets
//!
//! | Object | Capabilities |
//! |--------|--------------|
//! | workbook | AddComment, ChangeHierarchy, ChangePermissions, CreateRefreshMetrics, Delete, ExportData, ExportImage, ExportXml, Filter, Read, RunExplainData, ShareView, ViewComments, ViewUnderlyingData, WebAuthoring, Write |
//! | view | AddComment, ChangePermissions, Delete, ExportData, ExportImage, ExportXml, Filter, Read, ShareView, ViewComments, ViewUnderlyingData, WebAuthoring, Write |
//! | datasource | ChangePermissions, Connect, Delete, ExportXml, Read, SaveAs, Write |
//! | flow | ChangeHierarchy, ChangePermissions, Delete, ExportXml, Execute, Read, WebAuthoringForFlows, Write |
//! | project | ProjectLeader, Read, Write |
//!
//! ## Body Shape
//!
//! ```json
//! {"permissions": {
//!     "workbook": {"id": "wb-1"},
//!     "granteeCapabilities": [{
//!         "group": {"id": "g-1"},
//!         "capabilities": {"capability": [{"name": "Read", "mode": "Allow"}]}
//!     }]
//! }}
//! ```

use serde_json::Value;

use super::{id_ref, required, Fields};
use crate::api::common::{ApiError, Result};
use crate::api::version::ApiVersion;

const WORKBOOK_CAPABILITIES: &[&str] = &[
    "AddComment",
    "ChangeHierarchy",
    "ChangePermissions",
    "CreateRefreshMetrics",
    "Delete",
    "ExportData",
    "ExportImage",
    "ExportXml",
    "Filter",
    "Read",
    "RunExplainData",
    "ShareView",
    "ViewComments",
    "ViewUnderlyingData",
    "WebAuthoring",
    "Write",
];

const VIEW_CAPABILITIES: &[&str] = &[
    "AddComment",
    "ChangePermissions",
    "Delete",
    "ExportData",
    "ExportImage",
    "ExportXml",
    "Filter",
    "Read",
    "ShareView",
    "ViewComments",
    "ViewUnderlyingData",
    "WebAuthoring",
    "Write",
];

const DATASOURCE_CAPABILITIES: &[&str] = &[
    "ChangePermissions",
    "Connect",
    "Delete",
    "ExportXml",
    "Read",
    "SaveAs",
    "Write",
];

const FLOW_CAPABILITIES: &[&str] = &[
    "ChangeHierarchy",
    "ChangePermissions",
    "Delete",
    "ExportXml",
    "Execute",
    "Read",
    "WebAuthoringForFlows",
    "Write",
];

const PROJECT_CAPABILITIES: &[&str] = &["ProjectLeader", "Read", "Write"];

closed_set! {
    /// Content whose permissions can be read and changed.
    pub enum PermissionObject ("permissions object type") {
        Workbooks => "workbooks",
        Views => "views",
        Datasources => "datasources",
        Flows => "flows",
        Projects => "projects",
    }
}

closed_set! {
    /// Content types a project holds default permissions for.
    pub enum DefaultPermissionKind ("default permissions type") {
        Workbooks => "workbooks",
        Datasources => "datasources",
        Flows => "flows",
    }
}

closed_set! {
    pub enum CapabilityMode ("capability mode") {
        Allow => "Allow",
        Deny => "Deny",
    }
}

/// Accepts singular or plural spellings, returning the plural form.
fn plural(token: &str) -> String {
    let lower = token.trim().to_ascii_lowercase();
    if lower.ends_with('s') {
        lower
    } else {
        format!("{}s", lower)
    }
}

impl PermissionObject {
    /// Parses `workbook` or `workbooks` (any case) into the plural form.
    pub fn from_token(token: &str) -> Result<Self> {
        plural(token).parse()
    }

    /// Singular key used in request bodies.
    pub fn element(&self) -> &'static str {
        match self {
            Self::Workbooks => "workbook",
            Self::Views => "view",
            Self::Datasources => "datasource",
            Self::Flows => "flow",
            Self::Projects => "project",
        }
    }

    pub fn capabilities(&self) -> &'static [&'static str] {
        match self {
            Self::Workbooks => WORKBOOK_CAPABILITIES,
            Self::Views => VIEW_CAPABILITIES,
            Self::Datasources => DATASOURCE_CAPABILITIES,
            Self::Flows => FLOW_CAPABILITIES,
            Self::Projects => PROJECT_CAPABILITIES,
        }
    }

    /// Oldest REST API version exposing this object's permissions.
    pub fn min_version(&self) -> ApiVersion {
        match self {
            Self::Flows => ApiVersion::new(3, 3),
            _ => ApiVersion::new(2, 0),
        }
    }

    /// Canonical spelling of `name` if this object admits it.
    pub fn capability(&self, name: &str) -> Result<&'static str> {
        let wanted = name.trim();
        self.capabilities()
            .iter()
            .copied()
            .find(|c| c.eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                ApiError::invalid(format!(
                    "capability '{}' is not valid for {}; expected one of: {}",
                    name,
                    self.as_str(),
                    self.capabilities().join(", ")
                ))
            })
    }
}

impl DefaultPermissionKind {
    /// Parses `workbook` or `workbooks` (any case) into the plural form.
    pub fn from_token(token: &str) -> Result<Self> {
        plural(token).parse()
    }

    /// The object type whose capability set applies.
    pub fn object(&self) -> PermissionObject {
        match self {
            Self::Workbooks => PermissionObject::Workbooks,
            Self::Datasources => PermissionObject::Datasources,
            Self::Flows => PermissionObject::Flows,
        }
    }

    pub fn min_version(&self) -> ApiVersion {
        match self {
            Self::Flows => ApiVersion::new(3, 4),
            _ => ApiVersion::new(2, 1),
        }
    }
}

/// Who a capability is granted to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Grantee {
    User(String),
    Group(String),
}

impl Grantee {
    /// Body key: `user` or `group`.
    pub fn element(&self) -> &'static str {
        match self {
            Self::User(_) => "user",
            Self::Group(_) => "group",
        }
    }

    /// URL segment: `users` or `groups`.
    pub fn collection(&self) -> &'static str {
        match self {
            Self::User(_) => "users",
            Self::Group(_) => "groups",
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Self::User(id) | Self::Group(id) => id,
        }
    }
}

/// A capability name and mode, validated at build time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capability {
    pub name: String,
    /// `Allow` or `Deny`.
    pub mode: String,
}

impl Capability {
    pub fn new(name: &str, mode: &str) -> Self {
        Self {
            name: name.to_string(),
            mode: mode.to_string(),
        }
    }

    pub fn allow(name: &str) -> Self {
        Self::new(name, "Allow")
    }

    pub fn deny(name: &str) -> Self {
        Self::new(name, "Deny")
    }
}

/// Capabilities granted to one user or group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GranteeCapabilities {
    pub grantee: Grantee,
    pub capabilities: Vec<Capability>,
}

/// Options for adding permissions to an object or to a project's defaults.
#[derive(Debug, Clone, Default)]
pub struct PermissionsRequest {
    pub grantees: Vec<GranteeCapabilities>,
}

impl PermissionsRequest {
    /// Adds a grantee with its capabilities.
    pub fn grant(mut self, grantee: Grantee, capabilities: Vec<Capability>) -> Self {
        self.grantees.push(GranteeCapabilities {
            grantee,
            capabilities,
        });
        self
    }

    /// The body for permissions on one object.
    pub fn build_for(&self, object: PermissionObject, object_id: &str) -> Result<Value> {
        let id = required(object_id, &format!("{} id", object.element()))?;
        let fields = Fields::new().put(object.element(), id_ref(id));
        Ok(fields
            .put("granteeCapabilities", self.grantee_capabilities(object)?)
            .wrap("permissions"))
    }

    /// The body for a project's default permissions.
    pub fn build_default(&self, kind: DefaultPermissionKind) -> Result<Value> {
        Ok(Fields::new()
            .put("granteeCapabilities", self.grantee_capabilities(kind.object())?)
            .wrap("permissions"))
    }

    fn grantee_capabilities(&self, object: PermissionObject) -> Result<Vec<Value>> {
        if self.grantees.is_empty() {
            return Err(ApiError::invalid("at least one grantee is required"));
        }
        self.grantees
            .iter()
            .map(|entry| {
                let grantee_id = required(entry.grantee.id(), &format!("{} id", entry.grantee.element()))?;
                if entry.capabilities.is_empty() {
                    return Err(ApiError::invalid(format!(
                        "{} {} has no capabilities",
                        entry.grantee.element(),
                        grantee_id
                    )));
                }
                let capabilities = entry
                    .capabilities
                    .iter()
                    .map(|capability| {
                        let name = object.capability(&capability.name)?;
                        let mode: CapabilityMode = capability.mode.parse()?;
                        Ok(Fields::new()
                            .put("name", name)
                            .put("mode", mode.as_str())
                            .into_value())
                    })
                    .collect::<Result<Vec<_>>>()?;
                Ok(Fields::new()
                    .put(entry.grantee.element(), id_ref(grantee_id))
                    .put(
                        "capabilities",
                        Fields::new().put("capability", capabilities).into_value(),
                    )
                    .into_value())
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_object_tokens_normalize_to_plural() {
        assert_eq!(PermissionObject::from_token("workbook").unwrap(), PermissionObject::Workbooks);
        assert_eq!(PermissionObject::from_token("Workbooks").unwrap(), PermissionObject::Workbooks);
        assert_eq!(PermissionObject::from_token("datasource").unwrap(), PermissionObject::Datasources);
        assert!(matches!(
            PermissionObject::from_token("metric"),
            Err(ApiError::InvalidParameter(_))
        ));
        assert_eq!(DefaultPermissionKind::from_token("flow").unwrap(), DefaultPermissionKind::Flows);
        assert!(DefaultPermissionKind::from_token("views").is_err());
    }

    #[test]
    fn test_workbook_permissions_body() {
        let body = PermissionsRequest::default()
            .grant(
                Grantee::Group("g-1".into()),
                vec![Capability::allow("read"), Capability::deny("ExportData")],
            )
            .build_for(PermissionObject::Workbooks, "wb-1")
            .unwrap();
        assert_eq!(
            body,
            json!({"permissions": {
                "workbook": {"id": "wb-1"},
                "granteeCapabilities": [{
                    "group": {"id": "g-1"},
                    "capabilities": {"capability": [
                        {"name": "Read", "mode": "Allow"},
                        {"name": "ExportData", "mode": "Deny"}
                    ]}
                }]
            }})
        );
    }

    #[test]
    fn test_capability_must_fit_object() {
        let request = PermissionsRequest::default()
            .grant(Grantee::User("u-1".into()), vec![Capability::allow("Connect")]);
        assert!(request.build_for(PermissionObject::Workbooks, "wb-1").is_err());
        assert!(request.build_for(PermissionObject::Datasources, "ds-1").is_ok());
    }

    #[test]
    fn test_mode_and_grantee_validation() {
        let bad_mode = PermissionsRequest::default()
            .grant(Grantee::User("u-1".into()), vec![Capability::new("Read", "Maybe")]);
        assert!(bad_mode.build_for(PermissionObject::Projects, "p-1").is_err());

        let empty = PermissionsRequest::default().grant(Grantee::User("u-1".into()), vec![]);
        assert!(empty.build_for(PermissionObject::Projects, "p-1").is_err());

        assert!(PermissionsRequest::default()
            .build_for(PermissionObject::Projects, "p-1")
            .is_err());
    }

    #[test]
    fn test_default_permissions_body() {
        let body = PermissionsRequest::default()
            .grant(Grantee::User("u-1".into()), vec![Capability::allow("Execute")])
            .build_default(DefaultPermissionKind::Flows)
            .unwrap();
        assert_eq!(
            body,
            json!({"permissions": {"granteeCapabilities": [{
                "user": {"id": "u-1"},
                "capabilities": {"capability": [{"name": "Execute", "mode": "Allow"}]}
            }]}})
        );
    }
}
