//
//  tableau-rest
//  api/endpoints/encryption.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Extract encryption endpoints of the signed-in site.

use super::{Endpoint, UrlBase};
use crate::api::common::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncryptionEndpoint {
    /// `POST /encrypt-extracts`
    Encrypt,
    /// `POST /decrypt-extracts`
    Decrypt,
    /// `POST /reencrypt-extracts`
    Reencrypt,
}

impl Endpoint for EncryptionEndpoint {
    fn path(&self, base: &UrlBase) -> Result<String> {
        let leaf = match self {
            Self::Encrypt => "encrypt-extracts",
            Self::Decrypt => "decrypt-extracts",
            Self::Reencrypt => "reencrypt-extracts",
        };
        Ok(format!("{}/{}", base.site()?, leaf))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::common::QueryParams;
    use crate::api::version::ApiVersion;

    #[test]
    fn test_encryption_urls() {
        let base = UrlBase::new("https://t", ApiVersion::new(3, 19), Some("s1"));
        assert_eq!(
            EncryptionEndpoint::Reencrypt.url(&base, &QueryParams::new()).unwrap(),
            "https://t/api/3.19/sites/s1/reencrypt-extracts"
        );
    }
}
