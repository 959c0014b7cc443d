//
//  tableau-rest
//  api/requests/metadata.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Metadata bodies: GraphQL queries, database/table/column updates and
//! data-quality warnings.

use serde_json::Value;

use super::{id_ref, parse_opt, required, Fields};
use crate::api::common::{ApiError, Result};

closed_set! {
    pub enum QualityWarningType ("data quality warning type") {
        Deprecated => "Deprecated",
        Warning => "Warning",
        StaleData => "Stale data",
        UnderMaintenance => "Under maintenance",
        SensitiveData => "Sensitive data",
    }
}

closed_set! {
    /// Assets a data-quality warning can be attached to.
    pub enum WarningContent ("data quality warning content type") {
        Database => "database",
        Table => "table",
        Datasource => "datasource",
        Flow => "flow",
    }
}

/// A query for the metadata GraphQL endpoint.
#[derive(Debug, Clone, Default)]
pub struct GraphQlRequest {
    pub query: String,
    /// Must be a JSON object when present.
    pub variables: Option<Value>,
}

impl GraphQlRequest {
    pub fn new(query: &str) -> Self {
        Self {
            query: query.to_string(),
            variables: None,
        }
    }

    pub fn build(&self) -> Result<Value> {
        let query = required(&self.query, "GraphQL query")?;
        if let Some(variables) = &self.variables {
            if !variables.is_object() {
                return Err(ApiError::invalid("GraphQL variables must be a JSON object"));
            }
        }
        Ok(Fields::new()
            .put("query", query)
            .put_opt("variables", self.variables.clone())
            .into_value())
    }
}

/// Options for updating a database or table asset.
#[derive(Debug, Clone, Default)]
pub struct UpdateAssetRequest {
    pub description: Option<String>,
    pub is_certified: Option<bool>,
    pub certification_note: Option<String>,
    pub contact_id: Option<String>,
}

impl UpdateAssetRequest {
    pub fn build_database(&self) -> Result<Value> {
        Ok(self.fields()?.wrap("database"))
    }

    pub fn build_table(&self) -> Result<Value> {
        Ok(self.fields()?.wrap("table"))
    }

    fn fields(&self) -> Result<Fields> {
        let contact = self
            .contact_id
            .as_deref()
            .map(|id| required(id, "contact id").map(id_ref))
            .transpose()?;
        Ok(Fields::new()
            .put_opt("description", self.description.as_deref())
            .put_opt("isCertified", self.is_certified)
            .put_opt("certificationNote", self.certification_note.as_deref())
            .put_opt("contact", contact))
    }
}

/// `{"column": {"description": ...}}`
pub fn column_description_body(description: &str) -> Value {
    Fields::new()
        .put("description", description)
        .wrap("column")
}

/// Options for creating or updating a data-quality warning.
#[derive(Debug, Clone, Default)]
pub struct QualityWarningRequest {
    /// Required on create.
    pub warning_type: Option<String>,
    pub message: Option<String>,
    pub is_active: Option<bool>,
    pub is_severe: Option<bool>,
}

impl QualityWarningRequest {
    pub fn build_create(&self) -> Result<Value> {
        if self.warning_type.is_none() {
            return Err(ApiError::invalid("data quality warning type is required"));
        }
        self.build_update()
    }

    pub fn build_update(&self) -> Result<Value> {
        let warning_type: Option<QualityWarningType> = parse_opt(self.warning_type.as_deref())?;
        Ok(Fields::new()
            .put_opt("type", warning_type.map(|t| t.as_str()))
            .put_opt("message", self.message.as_deref())
            .put_opt("isActive", self.is_active)
            .put_opt("isSevere", self.is_severe)
            .wrap("dataQualityWarning"))
    }
}
