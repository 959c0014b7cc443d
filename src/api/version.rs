//
//  tableau-rest
//  api/version.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! REST API versions and the per-operation capability gate.
//!
//! Every operation on [`TableauClient`](super::TableauClient) declares the
//! oldest REST API version that offers it. Before anything is sent, that
//! minimum is compared against the version the client was configured with;
//! an older configuration refuses the call with
//! [`ApiError::UnsupportedApiVersion`].
//!
//! ```rust
//! use tableau_rest::api::version::{ApiVersion, ensure_supported};
//!
//! let configured: ApiVersion = "3.4".parse().unwrap();
//! assert!(ensure_supported("query_jobs", ApiVersion::new(2, 3), configured).is_ok());
//! assert!(ensure_supported("create_webhook", ApiVersion::new(3, 6), configured).is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use crate::api::common::{ApiError, Result};

/// A `major.minor` REST API version such as `3.19`.
///
/// Ordering compares the minor part numerically, so `3.10 > 3.9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ApiVersion {
    major: u32,
    minor: u32,
}

impl ApiVersion {
    /// Creates a version from its parts.
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }

    pub fn major(&self) -> u32 {
        self.major
    }

    pub fn minor(&self) -> u32 {
        self.minor
    }
}

impl FromStr for ApiVersion {
    type Err = ApiError;

    /// Parses `"3.19"` or `"3"` (minor defaults to 0).
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || ApiError::InvalidConfiguration(format!("invalid REST API version '{}'", s));

        let trimmed = s.trim();
        let (major, minor) = match trimmed.split_once('.') {
            Some((major, minor)) => (major, minor),
            None => (trimmed, "0"),
        };

        let major = major.parse().map_err(|_| invalid())?;
        let minor = minor.parse().map_err(|_| invalid())?;
        Ok(Self { major, minor })
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Refuses `operation` when `configured` is older than `required`.
pub fn ensure_supported(
    operation: &'static str,
    required: ApiVersion,
    configured: ApiVersion,
) -> Result<()> {
    if configured < required {
        tracing::debug!(
            "Refusing {}: requires API {}, configured {}",
            operation,
            required,
            configured
        );
        return Err(ApiError::UnsupportedApiVersion {
            operation,
            required: required.to_string(),
            configured: configured.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let version: ApiVersion = "3.19".parse().unwrap();
        assert_eq!(version, ApiVersion::new(3, 19));
        assert_eq!(version.to_string(), "3.19");
        assert_eq!("3".parse::<ApiVersion>().unwrap(), ApiVersion::new(3, 0));
    }

    #[test]
    fn test_minor_compares_numerically() {
        assert!(ApiVersion::new(3, 10) > ApiVersion::new(3, 9));
        assert!(ApiVersion::new(2, 8) < ApiVersion::new(3, 0));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            "three.one".parse::<ApiVersion>(),
            Err(ApiError::InvalidConfiguration(_))
        ));
        assert!("3.x".parse::<ApiVersion>().is_err());
    }

    #[test]
    fn test_gate_reports_versions() {
        let err = ensure_supported("publish_flow", ApiVersion::new(3, 3), ApiVersion::new(3, 2))
            .unwrap_err();
        match err {
            ApiError::UnsupportedApiVersion {
                operation,
                required,
                configured,
            } => {
                assert_eq!(operation, "publish_flow");
                assert_eq!(required, "3.3");
                assert_eq!(configured, "3.2");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_gate_accepts_equal_version() {
        assert!(ensure_supported("x", ApiVersion::new(3, 6), ApiVersion::new(3, 6)).is_ok());
    }
}
