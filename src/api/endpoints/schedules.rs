//
//  tableau-rest
//  api/endpoints/schedules.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Schedule endpoints.
//!
//! Schedules themselves are server-wide; binding content to a schedule and
//! listing its extract tasks happen under the signed-in site.

use super::{id, Endpoint, UrlBase};
use crate::api::common::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleEndpoint<'a> {
    /// `/api/{v}/schedules`
    Collection,
    /// `/api/{v}/schedules/{id}`
    Item(&'a str),
    /// `/sites/{site}/schedules/{id}/workbooks`
    Workbooks(&'a str),
    /// `/sites/{site}/schedules/{id}/datasources`
    Datasources(&'a str),
    /// `/sites/{site}/schedules/{id}/flows`
    Flows(&'a str),
    /// `/sites/{site}/schedules/{id}/extracts`
    Extracts(&'a str),
}

impl Endpoint for ScheduleEndpoint<'_> {
    fn path(&self, base: &UrlBase) -> Result<String> {
        let nested = |schedule: &str, leaf: &str| -> Result<String> {
            Ok(format!(
                "{}/schedules/{}/{}",
                base.site()?,
                id(schedule, "schedule id")?,
                leaf
            ))
        };
        match *self {
            Self::Collection => Ok(format!("{}/schedules", base.api())),
            Self::Item(schedule) => Ok(format!(
                "{}/schedules/{}",
                base.api(),
                id(schedule, "schedule id")?
            )),
            Self::Workbooks(schedule) => nested(schedule, "workbooks"),
            Self::Datasources(schedule) => nested(schedule, "datasources"),
            Self::Flows(schedule) => nested(schedule, "flows"),
            Self::Extracts(schedule) => nested(schedule, "extracts"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::common::QueryParams;
    use crate::api::version::ApiVersion;

    #[test]
    fn test_server_level_collection() {
        let base = UrlBase::new("https://t", ApiVersion::new(3, 19), None);
        assert_eq!(
            ScheduleEndpoint::Collection.url(&base, &QueryParams::new()).unwrap(),
            "https://t/api/3.19/schedules"
        );
        assert!(ScheduleEndpoint::Workbooks("sc").url(&base, &QueryParams::new()).is_err());
    }

    #[test]
    fn test_site_level_bindings() {
        let base = UrlBase::new("https://t", ApiVersion::new(3, 19), Some("s1"));
        assert_eq!(
            ScheduleEndpoint::Datasources("sc").url(&base, &QueryParams::new()).unwrap(),
            "https://t/api/3.19/sites/s1/schedules/sc/datasources"
        );
        assert_eq!(
            ScheduleEndpoint::Item("sc").url(&base, &QueryParams::new()).unwrap(),
            "https://t/api/3.19/schedules/sc"
        );
    }
}
