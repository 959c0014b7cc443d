//
//  tableau-rest
//  api/requests/favorites.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Favorite bodies.

use serde_json::Value;

use super::{id_ref, required, Fields};
use crate::api::common::Result;

closed_set! {
    /// Content that can be marked as a favorite.
    pub enum FavoriteKind ("favorite content type") {
        Workbook => "workbook",
        View => "view",
        Datasource => "datasource",
        Project => "project",
        Flow => "flow",
    }
}

impl FavoriteKind {
    /// Plural URL segment used when deleting a favorite.
    pub fn collection(&self) -> &'static str {
        match self {
            Self::Workbook => "workbooks",
            Self::View => "views",
            Self::Datasource => "datasources",
            Self::Project => "projects",
            Self::Flow => "flows",
        }
    }
}

/// Options for adding a favorite.
#[derive(Debug, Clone, Default)]
pub struct FavoriteRequest {
    /// Display label of the favorite.
    pub label: String,
    /// `workbook`, `view`, `datasource`, `project` or `flow`.
    pub kind: String,
    pub content_id: String,
}

impl FavoriteRequest {
    pub fn build(&self) -> Result<Value> {
        let label = required(&self.label, "favorite label")?;
        let kind: FavoriteKind = self.kind.parse()?;
        let id = required(&self.content_id, "content id")?;
        Ok(Fields::new()
            .put("label", label)
            .put(kind.as_str(), id_ref(id))
            .wrap("favorite"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_favorite_body() {
        let body = FavoriteRequest {
            label: "Weekly sales".into(),
            kind: "View".into(),
            content_id: "v-1".into(),
        }
        .build()
        .unwrap();
        assert_eq!(
            body,
            json!({"favorite": {"label": "Weekly sales", "view": {"id": "v-1"}}})
        );
    }

    #[test]
    fn test_rejects_unknown_kind() {
        let request = FavoriteRequest {
            label: "x".into(),
            kind: "metric".into(),
            content_id: "m-1".into(),
        };
        assert!(request.build().is_err());
        assert_eq!(FavoriteKind::Flow.collection(), "flows");
    }
}
