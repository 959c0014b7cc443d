//
//  tableau-rest
//  api/endpoints/views.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! View endpoints. Site-wide and per-workbook listings live with
//! [`SiteEndpoint`](super::SiteEndpoint) and
//! [`WorkbookEndpoint`](super::WorkbookEndpoint).

use super::{id, Endpoint, UrlBase};
use crate::api::common::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewEndpoint<'a> {
    Item(&'a str),
    Pdf(&'a str),
    Image(&'a str),
    /// CSV data.
    Data(&'a str),
    /// `/views/{id}/crosstab/excel`
    Crosstab(&'a str),
    Tags(&'a str),
    Tag { view: &'a str, tag: &'a str },
}

impl Endpoint for ViewEndpoint<'_> {
    fn path(&self, base: &UrlBase) -> Result<String> {
        let site = base.site()?;
        let item = |view: &str| -> Result<String> {
            Ok(format!("{}/views/{}", site, id(view, "view id")?))
        };
        Ok(match *self {
            Self::Item(view) => item(view)?,
            Self::Pdf(view) => format!("{}/pdf", item(view)?),
            Self::Image(view) => format!("{}/image", item(view)?),
            Self::Data(view) => format!("{}/data", item(view)?),
            Self::Crosstab(view) => format!("{}/crosstab/excel", item(view)?),
            Self::Tags(view) => format!("{}/tags", item(view)?),
            Self::Tag { view, tag } => format!("{}/tags/{}", item(view)?, id(tag, "tag")?),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::common::QueryParams;
    use crate::api::version::ApiVersion;

    #[test]
    fn test_view_urls() {
        let base = UrlBase::new("https://t", ApiVersion::new(3, 19), Some("s1"));
        let params = QueryParams::new().with("resolution", "resolution=high");
        assert_eq!(
            ViewEndpoint::Image("v-1").url(&base, &params).unwrap(),
            "https://t/api/3.19/sites/s1/views/v-1/image?resolution=high"
        );
        assert_eq!(
            ViewEndpoint::Crosstab("v-1").url(&base, &QueryParams::new()).unwrap(),
            "https://t/api/3.19/sites/s1/views/v-1/crosstab/excel"
        );
    }
}
