//
//  tableau-rest
//  api/methods/projects.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use super::since;
use crate::api::client::TableauClient;
use crate::api::common::{QueryParams, Result};
use crate::api::endpoints::ProjectEndpoint;
use crate::api::requests::ProjectRequest;
use crate::api::response::ApiResponse;

impl TableauClient {
    /// Creates a project; `publish_samples` asks the Server to seed it with
    /// sample workbooks.
    pub async fn create_project(
        &self,
        request: &ProjectRequest,
        publish_samples: bool,
    ) -> Result<ApiResponse> {
        let mut params = QueryParams::new();
        if publish_samples {
            params.flag("publishSamples", true);
        }
        self.submit("create_project", since(2, 0), ProjectEndpoint::Collection, &params, || {
            request.build_create()
        })
        .await
    }

    /// Lists one page of the projects on the site.
    pub async fn query_projects(&self, params: &QueryParams) -> Result<ApiResponse> {
        self.fetch("query_projects", since(2, 0), ProjectEndpoint::Collection, params)
            .await
    }

    /// Renames, moves or re-describes a project, or changes its content permissions.
    pub async fn update_project(
        &self,
        project_id: &str,
        request: &ProjectRequest,
    ) -> Result<ApiResponse> {
        self.amend("update_project", since(2, 0), ProjectEndpoint::Item(project_id), || {
            request.build_update()
        })
        .await
    }

    /// Deletes a project and everything published in it.
    pub async fn delete_project(&self, project_id: &str) -> Result<ApiResponse> {
        self.remove("delete_project", since(2, 0), ProjectEndpoint::Item(project_id))
            .await
    }
}
