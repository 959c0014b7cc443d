//
//  tableau-rest
//  api/methods/users.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! User and group operations.
//!
//! Directory-backed group creation and synchronisation may run as a
//! background job on the Server; pass `as_job` to get a job back instead of
//! waiting.

use super::since;
use crate::api::client::TableauClient;
use crate::api::common::{QueryParams, Result};
use crate::api::endpoints::{Endpoint, GroupEndpoint, UserEndpoint};
use crate::api::requests::{user_ref_body, AddUserRequest, GroupRequest, UpdateUserRequest};
use crate::api::response::ApiResponse;

fn job_params(as_job: bool) -> QueryParams {
    let mut params = QueryParams::new();
    if as_job {
        params.flag("asJob", true);
    }
    params
}

impl TableauClient {
    /// Adds a user to the site with a site role.
    ///
    /// # Arguments
    ///
    /// * `request` - User name, site role and optional auth setting
    ///
    /// # Errors
    ///
    /// [`ApiError::InvalidParameter`](crate::api::common::ApiError::InvalidParameter)
    /// for an unknown site role.
    pub async fn add_user_to_site(&self, request: &AddUserRequest) -> Result<ApiResponse> {
        self.submit(
            "add_user_to_site",
            since(2, 0),
            UserEndpoint::Collection,
            &QueryParams::new(),
            || request.build(),
        )
        .await
    }

    /// Lists one page of the site's users.
    pub async fn query_users(&self, params: &QueryParams) -> Result<ApiResponse> {
        self.fetch("query_users", since(2, 0), UserEndpoint::Collection, params)
            .await
    }

    /// Fetches one user on the site.
    pub async fn get_user(&self, user_id: &str) -> Result<ApiResponse> {
        self.fetch("get_user", since(2, 0), UserEndpoint::Item(user_id), &QueryParams::new())
            .await
    }

    /// Changes full name, email, password or site role of a user.
    pub async fn update_user(
        &self,
        user_id: &str,
        request: &UpdateUserRequest,
    ) -> Result<ApiResponse> {
        self.amend("update_user", since(2, 0), UserEndpoint::Item(user_id), || {
            request.build()
        })
        .await
    }

    /// Removes a user from the site.
    pub async fn remove_user_from_site(&self, user_id: &str) -> Result<ApiResponse> {
        self.remove("remove_user_from_site", since(2, 0), UserEndpoint::Item(user_id))
            .await
    }

    /// Lists the groups a user belongs to (API 3.7+).
    pub async fn query_groups_for_user(
        &self,
        user_id: &str,
        params: &QueryParams,
    ) -> Result<ApiResponse> {
        self.fetch(
            "query_groups_for_user",
            since(3, 7),
            UserEndpoint::Groups(user_id),
            params,
        )
        .await
    }

    /// Lists the workbooks visible to one user.
    pub async fn query_workbooks_for_user(
        &self,
        user_id: &str,
        params: &QueryParams,
    ) -> Result<ApiResponse> {
        self.fetch(
            "query_workbooks_for_user",
            since(2, 0),
            UserEndpoint::Workbooks(user_id),
            params,
        )
        .await
    }

    /// Creates a local group, or imports one from Active Directory.
    pub async fn create_group(&self, request: &GroupRequest, as_job: bool) -> Result<ApiResponse> {
        self.submit(
            "create_group",
            since(2, 0),
            GroupEndpoint::Collection,
            &job_params(as_job),
            || request.build(),
        )
        .await
    }

    /// Lists one page of the site's groups.
    pub async fn query_groups(&self, params: &QueryParams) -> Result<ApiResponse> {
        self.fetch("query_groups", since(2, 0), GroupEndpoint::Collection, params)
            .await
    }

    /// Renames a local group or synchronises a directory group.
    pub async fn update_group(
        &self,
        group_id: &str,
        request: &GroupRequest,
        as_job: bool,
    ) -> Result<ApiResponse> {
        let scope = self.authorize("update_group", since(2, 0))?;
        let body = request.build()?;
        let url = GroupEndpoint::Item(group_id).url(&scope.base, &job_params(as_job))?;
        self.put(&scope, url, body).await
    }

    pub async fn delete_group(&self, group_id: &str) -> Result<ApiResponse> {
        self.remove("delete_group", since(2, 0), GroupEndpoint::Item(group_id))
            .await
    }

    /// Lists the members of a group.
    pub async fn query_users_in_group(
        &self,
        group_id: &str,
        params: &QueryParams,
    ) -> Result<ApiResponse> {
        self.fetch(
            "query_users_in_group",
            since(2, 0),
            GroupEndpoint::Users(group_id),
            params,
        )
        .await
    }

    /// Adds a site user to a local group.
    pub async fn add_user_to_group(&self, group_id: &str, user_id: &str) -> Result<ApiResponse> {
        self.submit(
            "add_user_to_group",
            since(2, 0),
            GroupEndpoint::Users(group_id),
            &QueryParams::new(),
            || user_ref_body(user_id),
        )
        .await
    }

    /// Removes a user from a group; the user stays on the site.
    pub async fn remove_user_from_group(
        &self,
        group_id: &str,
        user_id: &str,
    ) -> Result<ApiResponse> {
        self.remove(
            "remove_user_from_group",
            since(2, 0),
            GroupEndpoint::User {
                group: group_id,
                user: user_id,
            },
        )
        .await
    }
}
