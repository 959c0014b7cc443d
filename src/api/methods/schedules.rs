//
//  tableau-rest
//  api/methods/schedules.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Schedule and task operations.

use super::since;
use crate::api::client::TableauClient;
use crate::api::common::{QueryParams, Result};
use crate::api::endpoints::{ScheduleEndpoint, TaskEndpoint};
use crate::api::requests::{CreateScheduleRequest, ScheduledContent, UpdateScheduleRequest};
use crate::api::response::ApiResponse;

impl TableauClient {
    /// Creates a server-wide schedule (`POST /api/{v}/schedules`).
    pub async fn create_schedule(&self, request: &CreateScheduleRequest) -> Result<ApiResponse> {
        self.submit(
            "create_schedule",
            since(2, 3),
            ScheduleEndpoint::Collection,
            &QueryParams::new(),
            || request.build(),
        )
        .await
    }

    /// Changes name, priority, frequency or state of a schedule.
    pub async fn update_schedule(
        &self,
        schedule_id: &str,
        request: &UpdateScheduleRequest,
    ) -> Result<ApiResponse> {
        self.amend(
            "update_schedule",
            since(2, 3),
            ScheduleEndpoint::Item(schedule_id),
            || request.build(),
        )
        .await
    }

    /// Deletes a server schedule.
    pub async fn delete_schedule(&self, schedule_id: &str) -> Result<ApiResponse> {
        self.remove("delete_schedule", since(2, 3), ScheduleEndpoint::Item(schedule_id))
            .await
    }

    /// Lists server schedules. These are server-wide, not per site.
    pub async fn query_schedules(&self, params: &QueryParams) -> Result<ApiResponse> {
        self.fetch("query_schedules", since(2, 3), ScheduleEndpoint::Collection, params)
            .await
    }

    /// Binds a workbook, datasource or flow to a schedule as a task.
    pub async fn add_to_schedule(
        &self,
        schedule_id: &str,
        content: &ScheduledContent<'_>,
    ) -> Result<ApiResponse> {
        let (operation, min, endpoint) = match content {
            ScheduledContent::Workbook(_) => (
                "add_workbook_to_schedule",
                since(2, 8),
                ScheduleEndpoint::Workbooks(schedule_id),
            ),
            ScheduledContent::Datasource(_) => (
                "add_datasource_to_schedule",
                since(2, 8),
                ScheduleEndpoint::Datasources(schedule_id),
            ),
            ScheduledContent::Flow(_) => (
                "add_flow_to_schedule",
                since(3, 3),
                ScheduleEndpoint::Flows(schedule_id),
            ),
        };
        self.amend(operation, min, endpoint, || content.task_body())
            .await
    }

    /// Lists the extract refresh tasks bound to one schedule.
    pub async fn query_extract_refresh_tasks_in_schedule(
        &self,
        schedule_id: &str,
        params: &QueryParams,
    ) -> Result<ApiResponse> {
        self.fetch(
            "query_extract_refresh_tasks_in_schedule",
            since(2, 2),
            ScheduleEndpoint::Extracts(schedule_id),
            params,
        )
        .await
    }

    /// Lists the extract refresh tasks of the site.
    pub async fn query_extract_refresh_tasks(&self, params: &QueryParams) -> Result<ApiResponse> {
        self.fetch(
            "query_extract_refresh_tasks",
            since(2, 2),
            TaskEndpoint::ExtractRefreshes,
            params,
        )
        .await
    }

    /// Fetches one extract refresh task.
    pub async fn get_extract_refresh_task(&self, task_id: &str) -> Result<ApiResponse> {
        self.fetch(
            "get_extract_refresh_task",
            since(2, 2),
            TaskEndpoint::ExtractRefresh(task_id),
            &QueryParams::new(),
        )
        .await
    }

    /// Queues an extract refresh task now. The response carries the job.
    pub async fn run_extract_refresh_task(&self, task_id: &str) -> Result<ApiResponse> {
        self.trigger(
            "run_extract_refresh_task",
            since(2, 6),
            TaskEndpoint::RunExtractRefresh(task_id),
            &QueryParams::new(),
        )
        .await
    }

    pub async fn delete_extract_refresh_task(&self, task_id: &str) -> Result<ApiResponse> {
        self.remove(
            "delete_extract_refresh_task",
            since(3, 2),
            TaskEndpoint::ExtractRefresh(task_id),
        )
        .await
    }

    /// Lists the flow run tasks of the site.
    pub async fn query_flow_run_tasks(&self, params: &QueryParams) -> Result<ApiResponse> {
        self.fetch("query_flow_run_tasks", since(3, 3), TaskEndpoint::FlowRuns, params)
            .await
    }

    /// Fetches one flow run task.
    pub async fn get_flow_run_task(&self, task_id: &str) -> Result<ApiResponse> {
        self.fetch(
            "get_flow_run_task",
            since(3, 3),
            TaskEndpoint::FlowRun(task_id),
            &QueryParams::new(),
        )
        .await
    }

    /// Queues a flow run task now. The response carries the job.
    pub async fn run_flow_task(&self, task_id: &str) -> Result<ApiResponse> {
        self.trigger(
            "run_flow_task",
            since(3, 3),
            TaskEndpoint::RunFlowTask(task_id),
            &QueryParams::new(),
        )
        .await
    }
}
