//
//  tableau-rest
//  api/requests/publish.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Publish Requests
//!
//! Options for publishing workbooks, datasources and flows. Each record
//! implements [`Publishable`], which the client uses to validate the file,
//! build the `request_payload` part and add the publish query flags.
//!
//! ## Payload Shape
//!
//! ```json
//! {"workbook": {
//!     "name": "Sales",
//!     "showTabs": true,
//!     "project": {"id": "p-1"},
//!     "connections": {"connection": [{
//!         "serverAddress": "db.example.com",
//!         "serverPort": "5432",
//!         "connectionCredentials": {"name": "etl", "password": "...", "embed": true}
//!     }]},
//!     "views": {"view": [{"name": "Scratch", "hidden": true}]}
//! }}
//! ```

use std::path::{Path, PathBuf};

use serde_json::Value;

use super::{id_ref, required, Fields};
use crate::api::common::{ApiError, QueryParams, Result};
use crate::api::upload::ContentKind;

/// Credentials for one data connection of the published content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionCredentials {
    pub server_address: Option<String>,
    pub server_port: Option<u16>,
    pub username: Option<String>,
    pub password: Option<String>,
    /// Store the credentials with the content.
    pub embed: bool,
    /// The credentials are an OAuth grant rather than a password.
    pub oauth: bool,
}

impl ConnectionCredentials {
    /// Builds one `connection` entry.
    ///
    /// # Errors
    ///
    /// [`ApiError::InvalidParameter`] when `embed` is set without either a
    /// server address and username, or the OAuth flag and a username.
    pub fn to_value(&self) -> Result<Value> {
        let has = |value: &Option<String>| value.as_deref().is_some_and(|v| !v.trim().is_empty());
        let username = has(&self.username);

        if self.embed && !((has(&self.server_address) && username) || (self.oauth && username)) {
            return Err(ApiError::invalid(
                "embedded credentials need a server address and username, or OAuth and a username",
            ));
        }

        let mut credentials = Fields::new()
            .put_opt("name", self.username.as_deref())
            .put_opt("password", self.password.as_deref());
        if self.embed {
            credentials = credentials.put("embed", true);
        }
        if self.oauth {
            credentials = credentials.put("oAuth", true);
        }

        Ok(Fields::new()
            .put_opt("serverAddress", self.server_address.as_deref())
            .put_opt("serverPort", self.server_port.map(|p| p.to_string()))
            .put_fields("connectionCredentials", credentials)
            .into_value())
    }
}

fn connections(list: &[ConnectionCredentials]) -> Result<Option<Value>> {
    if list.is_empty() {
        return Ok(None);
    }
    let entries = list
        .iter()
        .map(ConnectionCredentials::to_value)
        .collect::<Result<Vec<_>>>()?;
    Ok(Some(Fields::new().put("connection", entries).into_value()))
}

/// Content that can be published from a local file.
pub trait Publishable {
    /// The content family.
    fn kind(&self) -> ContentKind;

    /// The local file to publish.
    fn file(&self) -> &Path;

    /// The `request_payload` document.
    fn payload(&self) -> Result<Value>;

    /// Publish flags such as `overwrite=true`.
    fn query(&self) -> QueryParams;

    /// Checks the file extension and returns it lowercased.
    fn file_type(&self) -> Result<String> {
        self.kind().validate_file(self.file())
    }
}

/// Options for publishing a workbook (`.twb`, `.twbx`).
#[derive(Debug, Clone, Default)]
pub struct PublishWorkbookRequest {
    pub name: String,
    pub project_id: String,
    pub file: PathBuf,
    pub description: Option<String>,
    pub show_tabs: Option<bool>,
    /// User whose permissions are used to render thumbnails.
    pub thumbnails_user_id: Option<String>,
    /// Views to publish hidden.
    pub hidden_views: Vec<String>,
    pub connections: Vec<ConnectionCredentials>,
    pub overwrite: bool,
    pub as_job: bool,
    pub skip_connection_check: bool,
}

impl Publishable for PublishWorkbookRequest {
    fn kind(&self) -> ContentKind {
        ContentKind::Workbook
    }

    fn file(&self) -> &Path {
        &self.file
    }

    fn payload(&self) -> Result<Value> {
        let name = required(&self.name, "workbook name")?;
        let project_id = required(&self.project_id, "project id")?;

        let views = if self.hidden_views.is_empty() {
            None
        } else {
            let hidden = self
                .hidden_views
                .iter()
                .map(|view| {
                    required(view, "hidden view name")
                        .map(|name| Fields::new().put("name", name).put("hidden", true).into_value())
                })
                .collect::<Result<Vec<_>>>()?;
            Some(Fields::new().put("view", hidden).into_value())
        };

        Ok(Fields::new()
            .put("name", name)
            .put_opt("description", self.description.as_deref())
            .put_opt("showTabs", self.show_tabs)
            .put_opt("thumbnailsUserId", self.thumbnails_user_id.as_deref())
            .put("project", id_ref(project_id))
            .put_opt("connections", connections(&self.connections)?)
            .put_opt("views", views)
            .wrap("workbook"))
    }

    fn query(&self) -> QueryParams {
        let mut params = QueryParams::new();
        if self.overwrite {
            params.flag("overwrite", true);
        }
        if self.as_job {
            params.flag("asJob", true);
        }
        if self.skip_connection_check {
            params.flag("skipConnectionCheck", true);
        }
        params
    }
}

/// Options for publishing a datasource (`.hyper`, `.tds`, `.tdsx`, `.tde`).
#[derive(Debug, Clone, Default)]
pub struct PublishDatasourceRequest {
    pub name: String,
    pub project_id: String,
    pub file: PathBuf,
    pub description: Option<String>,
    pub use_remote_query_agent: Option<bool>,
    pub connections: Vec<ConnectionCredentials>,
    pub overwrite: bool,
    /// Append the extract to an existing datasource (`.hyper`/`.tde` only).
    pub append: bool,
    pub as_job: bool,
}

impl Publishable for PublishDatasourceRequest {
    fn kind(&self) -> ContentKind {
        ContentKind::Datasource
    }

    fn file(&self) -> &Path {
        &self.file
    }

    fn payload(&self) -> Result<Value> {
        let name = required(&self.name, "datasource name")?;
        let project_id = required(&self.project_id, "project id")?;
        if self.overwrite && self.append {
            return Err(ApiError::invalid("overwrite and append cannot both be set"));
        }

        Ok(Fields::new()
            .put("name", name)
            .put_opt("description", self.description.as_deref())
            .put_opt("useRemoteQueryAgent", self.use_remote_query_agent)
            .put("project", id_ref(project_id))
            .put_opt("connections", connections(&self.connections)?)
            .wrap("datasource"))
    }

    fn query(&self) -> QueryParams {
        let mut params = QueryParams::new();
        if self.overwrite {
            params.flag("overwrite", true);
        }
        if self.append {
            params.flag("append", true);
        }
        if self.as_job {
            params.flag("asJob", true);
        }
        params
    }
}

/// Options for publishing a flow (`.tfl`, `.tflx`).
#[derive(Debug, Clone, Default)]
pub struct PublishFlowRequest {
    pub name: String,
    pub project_id: String,
    pub file: PathBuf,
    pub description: Option<String>,
    pub connections: Vec<ConnectionCredentials>,
    pub overwrite: bool,
}

impl Publishable for PublishFlowRequest {
    fn kind(&self) -> ContentKind {
        ContentKind::Flow
    }

    fn file(&self) -> &Path {
        &self.file
    }

    fn payload(&self) -> Result<Value> {
        let name = required(&self.name, "flow name")?;
        let project_id = required(&self.project_id, "project id")?;

        Ok(Fields::new()
            .put("name", name)
            .put_opt("description", self.description.as_deref())
            .put("project", id_ref(project_id))
            .put_opt("connections", connections(&self.connections)?)
            .wrap("flow"))
    }

    fn query(&self) -> QueryParams {
        let mut params = QueryParams::new();
        if self.overwrite {
            params.flag("overwrite", true);
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn workbook() -> PublishWorkbookRequest {
        PublishWorkbookRequest {
            name: "Sales".into(),
            project_id: "p-1".into(),
            file: PathBuf::from("Sales.twbx"),
            ..Default::default()
        }
    }

    #[test]
    fn test_minimal_workbook_payload() {
        assert_eq!(
            workbook().payload().unwrap(),
            json!({"workbook": {"name": "Sales", "project": {"id": "p-1"}}})
        );
        assert!(workbook().query().is_empty());
    }

    #[test]
    fn test_hidden_views_and_tabs() {
        let mut request = workbook();
        request.show_tabs = Some(true);
        request.hidden_views = vec!["Scratch".into(), "Draft".into()];
        request.overwrite = true;
        request.skip_connection_check = true;

        let payload = request.payload().unwrap();
        assert_eq!(payload["workbook"]["showTabs"], json!(true));
        assert_eq!(
            payload["workbook"]["views"],
            json!({"view": [{"name": "Scratch", "hidden": true}, {"name": "Draft", "hidden": true}]})
        );
        assert_eq!(
            request.query().to_query_string(),
            "?overwrite=true&skipConnectionCheck=true"
        );
    }

    #[test]
    fn test_embedded_connection() {
        let credentials = ConnectionCredentials {
            server_address: Some("db.example.com".into()),
            server_port: Some(5432),
            username: Some("etl".into()),
            password: Some("pw".into()),
            embed: true,
            oauth: false,
        };
        assert_eq!(
            credentials.to_value().unwrap(),
            json!({
                "serverAddress": "db.example.com",
                "serverPort": "5432",
                "connectionCredentials": {"name": "etl", "password": "pw", "embed": true}
            })
        );
    }

    #[test]
    fn test_embed_rules() {
        let oauth = ConnectionCredentials {
            username: Some("ann".into()),
            embed: true,
            oauth: true,
            ..Default::default()
        };
        assert!(oauth.to_value().is_ok());

        let missing_user = ConnectionCredentials {
            server_address: Some("db".into()),
            embed: true,
            ..Default::default()
        };
        assert!(matches!(missing_user.to_value(), Err(ApiError::InvalidParameter(_))));

        let mut request = workbook();
        request.connections = vec![missing_user];
        assert!(request.payload().is_err());
    }

    #[test]
    fn test_file_type_validation() {
        assert_eq!(workbook().file_type().unwrap(), "twbx");

        let flow = PublishFlowRequest {
            name: "Prep".into(),
            project_id: "p-1".into(),
            file: PathBuf::from("prep.hyper"),
            ..Default::default()
        };
        assert!(matches!(flow.file_type(), Err(ApiError::InvalidFileType { .. })));
    }

    #[test]
    fn test_datasource_flags() {
        let request = PublishDatasourceRequest {
            name: "Orders".into(),
            project_id: "p-1".into(),
            file: PathBuf::from("orders.hyper"),
            append: true,
            as_job: true,
            ..Default::default()
        };
        assert_eq!(request.query().to_query_string(), "?append=true&asJob=true");

        let conflicting = PublishDatasourceRequest {
            overwrite: true,
            ..request
        };
        assert!(conflicting.payload().is_err());
    }
}
