//
//  tableau-rest
//  api/endpoints/tasks.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Task endpoints: extract refreshes and flow runs.

use super::{id, Endpoint, UrlBase};
use crate::api::common::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskEndpoint<'a> {
    /// `/tasks/extractRefreshes`
    ExtractRefreshes,
    ExtractRefresh(&'a str),
    /// `/tasks/extractRefreshes/{id}/runNow`
    RunExtractRefresh(&'a str),
    /// `/tasks/runFlow`
    FlowRuns,
    FlowRun(&'a str),
    /// `/tasks/runFlow/{id}/runNow`
    RunFlowTask(&'a str),
}

impl Endpoint for TaskEndpoint<'_> {
    fn path(&self, base: &UrlBase) -> Result<String> {
        let extracts = format!("{}/tasks/extractRefreshes", base.site()?);
        let flows = format!("{}/tasks/runFlow", base.site()?);
        Ok(match *self {
            Self::ExtractRefreshes => extracts,
            Self::ExtractRefresh(task) => format!("{}/{}", extracts, id(task, "task id")?),
            Self::RunExtractRefresh(task) => {
                format!("{}/{}/runNow", extracts, id(task, "task id")?)
            }
            Self::FlowRuns => flows,
            Self::FlowRun(task) => format!("{}/{}", flows, id(task, "task id")?),
            Self::RunFlowTask(task) => format!("{}/{}/runNow", flows, id(task, "task id")?),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::common::QueryParams;
    use crate::api::version::ApiVersion;

    #[test]
    fn test_task_urls() {
        let base = UrlBase::new("https://t", ApiVersion::new(3, 19), Some("s1"));
        let params = QueryParams::new();
        assert_eq!(
            TaskEndpoint::RunExtractRefresh("t-1").url(&base, &params).unwrap(),
            "https://t/api/3.19/sites/s1/tasks/extractRefreshes/t-1/runNow"
        );
        assert_eq!(
            TaskEndpoint::FlowRuns.url(&base, &params).unwrap(),
            "https://t/api/3.19/sites/s1/tasks/runFlow"
        );
        assert!(TaskEndpoint::FlowRun("").url(&base, &params).is_err());
    }
}
