//
//  tableau-rest
//  api/requests/content.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Update bodies for published content and its data connections.

use serde_json::Value;

use super::{id_ref, required, Fields};
use crate::api::common::Result;

/// Moves content to another project and/or owner.
fn placement(fields: Fields, project_id: Option<&str>, owner_id: Option<&str>) -> Result<Fields> {
    let project = project_id
        .map(|id| required(id, "project id").map(id_ref))
        .transpose()?;
    let owner = owner_id
        .map(|id| required(id, "owner id").map(id_ref))
        .transpose()?;
    Ok(fields.put_opt("project", project).put_opt("owner", owner))
}

/// Options for updating a workbook.
#[derive(Debug, Clone, Default)]
pub struct UpdateWorkbookRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub show_tabs: Option<bool>,
    pub project_id: Option<String>,
    pub owner_id: Option<String>,
    pub encrypt_extracts: Option<bool>,
}

impl UpdateWorkbookRequest {
    pub fn build(&self) -> Result<Value> {
        let fields = Fields::new()
            .put_opt("name", self.name.as_deref())
            .put_opt("description", self.description.as_deref())
            .put_opt("showTabs", self.show_tabs)
            .put_opt("encryptExtracts", self.encrypt_extracts);
        Ok(placement(fields, self.project_id.as_deref(), self.owner_id.as_deref())?.wrap("workbook"))
    }
}

/// Options for updating a datasource.
#[derive(Debug, Clone, Default)]
pub struct UpdateDatasourceRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub project_id: Option<String>,
    pub owner_id: Option<String>,
    pub is_certified: Option<bool>,
    pub certification_note: Option<String>,
    pub encrypt_extracts: Option<bool>,
}

impl UpdateDatasourceRequest {
    pub fn build(&self) -> Result<Value> {
        let fields = Fields::new()
            .put_opt("name", self.name.as_deref())
            .put_opt("description", self.description.as_deref())
            .put_opt("isCertified", self.is_certified)
            .put_opt("certificationNote", self.certification_note.as_deref())
            .put_opt("encryptExtracts", self.encrypt_extracts);
        Ok(placement(fields, self.project_id.as_deref(), self.owner_id.as_deref())?.wrap("datasource"))
    }
}

/// Options for updating a flow.
#[derive(Debug, Clone, Default)]
pub struct UpdateFlowRequest {
    pub description: Option<String>,
    pub project_id: Option<String>,
    pub owner_id: Option<String>,
}

impl UpdateFlowRequest {
    pub fn build(&self) -> Result<Value> {
        let fields = Fields::new().put_opt("description", self.description.as_deref());
        Ok(placement(fields, self.project_id.as_deref(), self.owner_id.as_deref())?.wrap("flow"))
    }
}

/// Options for updating one data connection of a workbook, datasource or flow.
#[derive(Debug, Clone, Default)]
pub struct UpdateConnectionRequest {
    pub server_address: Option<String>,
    pub server_port: Option<u16>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub embed_password: Option<bool>,
    pub query_tagging_enabled: Option<bool>,
}

impl UpdateConnectionRequest {
    pub fn build(&self) -> Result<Value> {
        Ok(Fields::new()
            .put_opt("serverAddress", self.server_address.as_deref())
            .put_opt("serverPort", self.server_port.map(|p| p.to_string()))
            .put_opt("userName", self.username.as_deref())
            .put_opt("password", self.password.as_deref())
            .put_opt("embedPassword", self.embed_password)
            .put_opt("queryTaggingEnabled", self.query_tagging_enabled)
            .wrap("connection"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_move_workbook() {
        let body = UpdateWorkbookRequest {
            project_id: Some("p-2".into()),
            show_tabs: Some(false),
            ..Default::default()
        }
        .build()
        .unwrap();
        assert_eq!(
            body,
            json!({"workbook": {"showTabs": false, "project": {"id": "p-2"}}})
        );
    }

    #[test]
    fn test_blank_owner_rejected() {
        let request = UpdateDatasourceRequest {
            owner_id: Some(" ".into()),
            ..Default::default()
        };
        assert!(request.build().is_err());
    }

    #[test]
    fn test_certify_datasource() {
        let body = UpdateDatasourceRequest {
            is_certified: Some(true),
            certification_note: Some("Reviewed".into()),
            ..Default::default()
        }
        .build()
        .unwrap();
        assert_eq!(
            body,
            json!({"datasource": {"isCertified": true, "certificationNote": "Reviewed"}})
        );
    }

    #[test]
    fn test_connection_body() {
        let body = UpdateConnectionRequest {
            server_address: Some("db.example.com".into()),
            server_port: Some(1433),
            username: Some("etl".into()),
            embed_password: Some(true),
            ..Default::default()
        }
        .build()
        .unwrap();
        assert_eq!(
            body,
            json!({"connection": {
                "serverAddress": "db.example.com",
                "serverPort": "1433",
                "userName": "etl",
                "embedPassword": true
            }})
        );
    }

    #[test]
    fn test_flow_update() {
        let body = UpdateFlowRequest {
            owner_id: Some("u-9".into()),
            ..Default::default()
        }
        .build()
        .unwrap();
        assert_eq!(body, json!({"flow": {"owner": {"id": "u-9"}}}));
    }
}
