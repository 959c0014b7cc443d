//
//  tableau-rest
//  api/endpoints/permissions.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Permission Endpoints
//!
//! | Variant | Path |
//! |---------|------|
//! | `Object` | `/{objects}/{id}/permissions` |
//! | `Capability` | `/{objects}/{id}/permissions/{users\|groups}/{grantee}/{capability}/{mode}` |
//! | `Default` | `/projects/{id}/default-permissions/{kind}` |
//! | `DefaultCapability` | `/projects/{id}/default-permissions/{kind}/{users\|groups}/{grantee}/{capability}/{mode}` |
//!
//! Capability names are checked against the object's closed set and
//! written in their canonical spelling.

use super::{id, Endpoint, UrlBase};
use crate::api::common::Result;
use crate::api::requests::{CapabilityMode, DefaultPermissionKind, Grantee, PermissionObject};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionEndpoint<'a> {
    Object {
        object: PermissionObject,
        id: &'a str,
    },
    Capability {
        object: PermissionObject,
        id: &'a str,
        grantee: &'a Grantee,
        capability: &'a str,
        mode: CapabilityMode,
    },
    Default {
        project: &'a str,
        kind: DefaultPermissionKind,
    },
    DefaultCapability {
        project: &'a str,
        kind: DefaultPermissionKind,
        grantee: &'a Grantee,
        capability: &'a str,
        mode: CapabilityMode,
    },
}

fn grantee_leaf(
    object: PermissionObject,
    grantee: &Grantee,
    capability: &str,
    mode: CapabilityMode,
) -> Result<String> {
    Ok(format!(
        "{}/{}/{}/{}",
        grantee.collection(),
        id(grantee.id(), "grantee id")?,
        object.capability(capability)?,
        mode.as_str()
    ))
}

impl Endpoint for PermissionEndpoint<'_> {
    fn path(&self, base: &UrlBase) -> Result<String> {
        let site = base.site()?;
        let object_root = |object: PermissionObject, object_id: &str| -> Result<String> {
            Ok(format!(
                "{}/{}/{}/permissions",
                site,
                object.as_str(),
                id(object_id, "content id")?
            ))
        };
        let default_root = |project: &str, kind: DefaultPermissionKind| -> Result<String> {
            Ok(format!(
                "{}/projects/{}/default-permissions/{}",
                site,
                id(project, "project id")?,
                kind.as_str()
            ))
        };
        Ok(match *self {
            Self::Object { object, id } => object_root(object, id)?,
            Self::Capability { object, id, grantee, capability, mode } => format!(
                "{}/{}",
                object_root(object, id)?,
                grantee_leaf(object, grantee, capability, mode)?
            ),
            Self::Default { project, kind } => default_root(project, kind)?,
            Self::DefaultCapability { project, kind, grantee, capability, mode } => format!(
                "{}/{}",
                default_root(project, kind)?,
                grantee_leaf(kind.object(), grantee, capability, mode)?
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::common::{ApiError, QueryParams};
    use crate::api::version::ApiVersion;

    fn base() -> UrlBase {
        UrlBase::new("https://t", ApiVersion::new(3, 19), Some("s1"))
    }

    #[test]
    fn test_object_permissions() {
        let object = PermissionObject::from_token("workbook").unwrap();
        assert_eq!(
            PermissionEndpoint::Object { object, id: "wb-1" }
                .url(&base(), &QueryParams::new())
                .unwrap(),
            "https://t/api/3.19/sites/s1/workbooks/wb-1/permissions"
        );
    }

    #[test]
    fn test_capability_deletion_leaf() {
        let grantee = Grantee::Group("g-1".into());
        let endpoint = PermissionEndpoint::Capability {
            object: PermissionObject::Views,
            id: "v-1",
            grantee: &grantee,
            capability: "exportimage",
            mode: CapabilityMode::Deny,
        };
        assert_eq!(
            endpoint.url(&base(), &QueryParams::new()).unwrap(),
            "https://t/api/3.19/sites/s1/views/v-1/permissions/groups/g-1/ExportImage/Deny"
        );
    }

    #[test]
    fn test_unknown_capability_rejected() {
        let grantee = Grantee::User("u-1".into());
        let endpoint = PermissionEndpoint::Capability {
            object: PermissionObject::Projects,
            id: "p-1",
            grantee: &grantee,
            capability: "Execute",
            mode: CapabilityMode::Allow,
        };
        assert!(matches!(
            endpoint.url(&base(), &QueryParams::new()),
            Err(ApiError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_default_permissions() {
        let grantee = Grantee::User("u-1".into());
        let endpoint = PermissionEndpoint::DefaultCapability {
            project: "p-1",
            kind: DefaultPermissionKind::Datasources,
            grantee: &grantee,
            capability: "Connect",
            mode: CapabilityMode::Allow,
        };
        assert_eq!(
            endpoint.url(&base(), &QueryParams::new()).unwrap(),
            "https://t/api/3.19/sites/s1/projects/p-1/default-permissions/datasources/users/u-1/Connect/Allow"
        );
    }
}
