//
//  tableau-rest
//  api/methods/flows.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Flow operations. Every flow endpoint needs REST API 3.3.

use super::since;
use crate::api::client::TableauClient;
use crate::api::common::{QueryParams, Result};
use crate::api::endpoints::FlowEndpoint;
use crate::api::requests::{UpdateConnectionRequest, UpdateFlowRequest};
use crate::api::response::ApiResponse;
use crate::api::version::ApiVersion;

const FLOWS: ApiVersion = since(3, 3);

impl TableauClient {
    /// Lists one page of the Prep flows on the site.
    pub async fn query_flows(&self, params: &QueryParams) -> Result<ApiResponse> {
        self.fetch("query_flows", FLOWS, FlowEndpoint::Collection, params)
            .await
    }

    /// Lists the flows visible to one user.
    pub async fn query_flows_for_user(
        &self,
        user_id: &str,
        params: &QueryParams,
    ) -> Result<ApiResponse> {
        self.fetch("query_flows_for_user", FLOWS, FlowEndpoint::ForUser(user_id), params)
            .await
    }

    /// Fetches one flow with its owner and project.
    pub async fn get_flow(&self, flow_id: &str) -> Result<ApiResponse> {
        self.fetch("get_flow", FLOWS, FlowEndpoint::Item(flow_id), &QueryParams::new())
            .await
    }

    /// Lists the input and output connections of a flow.
    pub async fn query_flow_connections(&self, flow_id: &str) -> Result<ApiResponse> {
        self.fetch(
            "query_flow_connections",
            FLOWS,
            FlowEndpoint::Connections(flow_id),
            &QueryParams::new(),
        )
        .await
    }

    /// Same as [`update_workbook_connection`](Self::update_workbook_connection), for a flow.
    pub async fn update_flow_connection(
        &self,
        flow_id: &str,
        connection_id: &str,
        request: &UpdateConnectionRequest,
    ) -> Result<ApiResponse> {
        self.amend(
            "update_flow_connection",
            FLOWS,
            FlowEndpoint::Connection {
                flow: flow_id,
                connection: connection_id,
            },
            || request.build(),
        )
        .await
    }

    /// Downloads a flow as `.tfl`/`.tflx`.
    pub async fn download_flow(&self, flow_id: &str) -> Result<ApiResponse> {
        self.fetch(
            "download_flow",
            FLOWS,
            FlowEndpoint::Content(flow_id),
            &QueryParams::new(),
        )
        .await
    }

    /// Moves or re-owns a flow.
    pub async fn update_flow(&self, flow_id: &str, request: &UpdateFlowRequest) -> Result<ApiResponse> {
        self.amend("update_flow", FLOWS, FlowEndpoint::Item(flow_id), || request.build())
            .await
    }

    /// Deletes a flow.
    pub async fn delete_flow(&self, flow_id: &str) -> Result<ApiResponse> {
        self.remove("delete_flow", FLOWS, FlowEndpoint::Item(flow_id))
            .await
    }

    /// Runs the flow now. `params` may carry `runMode` or flow parameters.
    pub async fn run_flow_now(&self, flow_id: &str, params: &QueryParams) -> Result<ApiResponse> {
        self.trigger("run_flow_now", FLOWS, FlowEndpoint::Run(flow_id), params)
            .await
    }
}
