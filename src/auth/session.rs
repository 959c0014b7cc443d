//
//  tableau-rest
//  auth/session.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Session state of one client.
//!
//! A [`Session`] is either unauthenticated (no token) or authenticated, in
//! which case token, site ID and user ID are all present. The site ID always
//! belongs to the site the token was issued for; it only changes through a
//! sign-in or a site switch.

use crate::api::common::{ApiError, Result};

/// Token, site and user of the current session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
    site_id: Option<String>,
    user_id: Option<String>,
    site_name: String,
    site_url: String,
}

/// The identifiers returned by a successful sign-in or site switch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionGrant {
    pub token: String,
    pub site_id: String,
    pub site_url: String,
    pub user_id: String,
    pub site_name: Option<String>,
}

impl SessionGrant {
    /// A grant that keeps the configured site name.
    pub fn new(
        token: impl Into<String>,
        site_id: impl Into<String>,
        site_url: impl Into<String>,
        user_id: impl Into<String>,
    ) -> Self {
        Self {
            token: token.into(),
            site_id: site_id.into(),
            site_url: site_url.into(),
            user_id: user_id.into(),
            site_name: None,
        }
    }
}

impl Session {
    /// An unauthenticated session targeting the given site.
    pub fn new(site_name: &str, site_url: &str) -> Self {
        Self {
            site_name: site_name.to_string(),
            site_url: site_url.to_string(),
            ..Self::default()
        }
    }

    pub fn is_signed_in(&self) -> bool {
        self.token.is_some()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn site_id(&self) -> Option<&str> {
        self.site_id.as_deref()
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    pub fn site_name(&self) -> &str {
        &self.site_name
    }

    pub fn site_url(&self) -> &str {
        &self.site_url
    }

    /// Adopts a token obtained elsewhere, together with the site and user
    /// it was issued for.
    ///
    /// # Errors
    ///
    /// [`ApiError::AlreadySignedIn`] when a token is already held; sign out
    /// or [`clear`](Self::clear) first.
    pub fn set_token(&mut self, grant: SessionGrant) -> Result<()> {
        if self.token.is_some() {
            return Err(ApiError::AlreadySignedIn);
        }
        self.establish(grant);
        Ok(())
    }

    /// Records a sign-in or site switch.
    pub fn establish(&mut self, grant: SessionGrant) {
        self.token = Some(grant.token);
        self.site_id = Some(grant.site_id);
        self.user_id = Some(grant.user_id);
        self.site_url = grant.site_url;
        if let Some(name) = grant.site_name {
            self.site_name = name;
        }
    }

    /// Drops token, site ID and user ID. Site name and slug are kept so the
    /// next sign-in targets the same site.
    pub fn clear(&mut self) {
        self.token = None;
        self.site_id = None;
        self.user_id = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grant() -> SessionGrant {
        SessionGrant::new("tok", "site-1", "finance", "user-1")
    }

    #[test]
    fn test_establish_and_clear() {
        let mut session = Session::new("Finance", "finance");
        assert!(!session.is_signed_in());

        session.establish(grant());
        assert_eq!(session.token(), Some("tok"));
        assert_eq!(session.site_id(), Some("site-1"));
        assert_eq!(session.user_id(), Some("user-1"));
        assert_eq!(session.site_name(), "Finance");

        session.clear();
        assert!(session.token().is_none());
        assert!(session.site_id().is_none());
        assert!(session.user_id().is_none());
        assert_eq!(session.site_url(), "finance");
    }

    #[test]
    fn test_set_token_refuses_overwrite() {
        let mut session = Session::new("Finance", "finance");
        session
            .set_token(SessionGrant::new("first", "site-1", "finance", "user-1"))
            .unwrap();
        assert!(matches!(
            session.set_token(SessionGrant::new("second", "site-2", "other", "user-2")),
            Err(ApiError::AlreadySignedIn)
        ));
        assert_eq!(session.token(), Some("first"));
        assert_eq!(session.site_id(), Some("site-1"));
    }

    #[test]
    fn test_set_token_fills_site_and_user() {
        let mut session = Session::new("Finance", "finance");
        session
            .set_token(SessionGrant::new("tok", "site-1", "finance", "user-1"))
            .unwrap();
        assert!(session.is_signed_in());
        assert_eq!(session.site_id(), Some("site-1"));
        assert_eq!(session.user_id(), Some("user-1"));
    }

    #[test]
    fn test_switch_replaces_site() {
        let mut session = Session::new("Finance", "finance");
        session.establish(grant());
        session.establish(SessionGrant {
            token: "tok-2".into(),
            site_id: "site-2".into(),
            site_url: "other".into(),
            user_id: "user-2".into(),
            site_name: Some("Other".into()),
        });
        assert_eq!(session.site_url(), "other");
        assert_eq!(session.site_name(), "Other");
        assert_eq!(session.user_id(), Some("user-2"));
    }
}
