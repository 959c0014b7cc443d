//
//  tableau-rest
//  api/methods/permissions.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Permission operations on content objects and on project defaults.
//!
//! The minimum API version depends on the object: flow permissions need
//! 3.3, default flow permissions 3.4.

use crate::api::client::TableauClient;
use crate::api::common::{QueryParams, Result};
use crate::api::endpoints::PermissionEndpoint;
use crate::api::requests::{
    CapabilityMode, DefaultPermissionKind, Grantee, PermissionObject, PermissionsRequest,
};
use crate::api::response::ApiResponse;

impl TableauClient {
    /// Lists the explicit grants on a workbook, view, data source, flow or project.
    pub async fn query_permissions(
        &self,
        object: PermissionObject,
        object_id: &str,
    ) -> Result<ApiResponse> {
        self.fetch(
            "query_permissions",
            object.min_version(),
            PermissionEndpoint::Object { object, id: object_id },
            &QueryParams::new(),
        )
        .await
    }

    /// Grants capabilities on one content object.
    ///
    /// The capability names are checked against the object's set before
    /// anything is sent; flow permissions need API 3.3.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use tableau_rest::api::requests::{Capability, Grantee, PermissionObject, PermissionsRequest};
    /// use tableau_rest::api::TableauClient;
    ///
    /// # async fn example(client: &TableauClient) -> tableau_rest::api::common::Result<()> {
    /// let request = PermissionsRequest::default()
    ///     .grant(Grantee::Group("grp-1".into()), vec![Capability::allow("Read")]);
    /// client
    ///     .add_permissions(PermissionObject::Workbooks, "wb-1", &request)
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn add_permissions(
        &self,
        object: PermissionObject,
        object_id: &str,
        request: &PermissionsRequest,
    ) -> Result<ApiResponse> {
        self.amend(
            "add_permissions",
            object.min_version(),
            PermissionEndpoint::Object { object, id: object_id },
            || request.build_for(object, object_id),
        )
        .await
    }

    /// Removes one capability from one grantee.
    pub async fn delete_permission(
        &self,
        object: PermissionObject,
        object_id: &str,
        grantee: &Grantee,
        capability: &str,
        mode: CapabilityMode,
    ) -> Result<ApiResponse> {
        self.remove(
            "delete_permission",
            object.min_version(),
            PermissionEndpoint::Capability {
                object,
                id: object_id,
                grantee,
                capability,
                mode,
            },
        )
        .await
    }

    /// Lists the default grants a project applies to new content of `kind`.
    pub async fn query_default_permissions(
        &self,
        project_id: &str,
        kind: DefaultPermissionKind,
    ) -> Result<ApiResponse> {
        self.fetch(
            "query_default_permissions",
            kind.min_version(),
            PermissionEndpoint::Default {
                project: project_id,
                kind,
            },
            &QueryParams::new(),
        )
        .await
    }

    /// Adds default grants for new workbooks, data sources or flows in a project.
    pub async fn add_default_permissions(
        &self,
        project_id: &str,
        kind: DefaultPermissionKind,
        request: &PermissionsRequest,
    ) -> Result<ApiResponse> {
        self.amend(
            "add_default_permissions",
            kind.min_version(),
            PermissionEndpoint::Default {
                project: project_id,
                kind,
            },
            || request.build_default(kind),
        )
        .await
    }

    /// Removes one default capability from one grantee.
    pub async fn delete_default_permission(
        &self,
        project_id: &str,
        kind: DefaultPermissionKind,
        grantee: &Grantee,
        capability: &str,
        mode: CapabilityMode,
    ) -> Result<ApiResponse> {
        self.remove(
            "delete_default_permission",
            kind.min_version(),
            PermissionEndpoint::DefaultCapability {
                project: project_id,
                kind,
                grantee,
                capability,
                mode,
            },
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use crate::api::client::TableauClient;
    use crate::api::common::ApiError;
    use crate::api::requests::{Capability, Grantee, PermissionObject, PermissionsRequest};
    use crate::auth::SessionGrant;
    use crate::config::ServerConfig;

    #[tokio::test]
    async fn test_flow_permissions_gated_by_version() {
        let client = TableauClient::new(ServerConfig::with_password(
            "https://t", "3.2", "F", "f", "ann", "pw",
        ))
        .unwrap();
        client
            .set_token(SessionGrant::new("t", "site-1", "f", "user-1"))
            .unwrap();
        let request = PermissionsRequest::default()
            .grant(Grantee::User("u-1".into()), vec![Capability::allow("Execute")]);
        assert!(matches!(
            client.add_permissions(PermissionObject::Flows, "f-1", &request).await,
            Err(ApiError::UnsupportedApiVersion { .. })
        ));
    }
}
