//
//  tableau-rest
//  api/endpoints/auth.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Authentication and server-level endpoints.

use super::{Endpoint, UrlBase};
use crate::api::common::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthEndpoint {
    /// `POST /auth/signin`
    SignIn,
    /// `POST /auth/signout`
    SignOut,
    /// `POST /auth/switchSite`
    SwitchSite,
    /// `GET /serverinfo`
    ServerInfo,
}

impl Endpoint for AuthEndpoint {
    fn path(&self, base: &UrlBase) -> Result<String> {
        let leaf = match self {
            Self::SignIn => "auth/signin",
            Self::SignOut => "auth/signout",
            Self::SwitchSite => "auth/switchSite",
            Self::ServerInfo => "serverinfo",
        };
        Ok(format!("{}/{}", base.api(), leaf))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::common::QueryParams;
    use crate::api::version::ApiVersion;

    #[test]
    fn test_auth_urls_need_no_site() {
        let base = UrlBase::new("https://t", ApiVersion::new(3, 19), None);
        let params = QueryParams::new();
        assert_eq!(AuthEndpoint::SignIn.url(&base, &params).unwrap(), "https://t/api/3.19/auth/signin");
        assert_eq!(
            AuthEndpoint::SwitchSite.url(&base, &params).unwrap(),
            "https://t/api/3.19/auth/switchSite"
        );
        assert_eq!(AuthEndpoint::ServerInfo.url(&base, &params).unwrap(), "https://t/api/3.19/serverinfo");
    }
}
