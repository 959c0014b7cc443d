//
//  tableau-rest
//  api/endpoints/jobs.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use super::{id, Endpoint, UrlBase};
use crate::api::common::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobEndpoint<'a> {
    Collection,
    Item(&'a str),
}

impl Endpoint for JobEndpoint<'_> {
    fn path(&self, base: &UrlBase) -> Result<String> {
        let root = format!("{}/jobs", base.site()?);
        Ok(match self {
            Self::Collection => root,
            Self::Item(job) => format!("{}/{}", root, id(job, "job id")?),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::common::QueryParams;
    use crate::api::version::ApiVersion;

    #[test]
    fn test_job_urls() {
        let base = UrlBase::new("https://t", ApiVersion::new(3, 19), Some("s1"));
        let mut params = QueryParams::new();
        params.filter("status:eq:Failed");
        assert_eq!(
            JobEndpoint::Collection.url(&base, &params).unwrap(),
            "https://t/api/3.19/sites/s1/jobs?filter=status:eq:Failed"
        );
        assert_eq!(
            JobEndpoint::Item("j-1").url(&base, &QueryParams::new()).unwrap(),
            "https://t/api/3.19/sites/s1/jobs/j-1"
        );
    }
}
