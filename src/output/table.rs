//
//  tableau-rest
//  output/table.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Table Output Formatting
//!
//! Renders listings as Unicode tables with `comfy_table`. Listing items come
//! back from the Server as JSON objects, so a table is described by a list of
//! [`Column`]s, each naming a header and the dotted path of the field to show.
//!
//! ## Example
//!
//! ```rust
//! use serde_json::json;
//! use tableau_rest::output::{Column, TableBuilder};
//!
//! let columns = [Column::new("ID", "id"), Column::new("PROJECT", "project.name")];
//! let items = [json!({"id": "wb-1", "project": {"name": "Finance"}})];
//!
//! let table = TableBuilder::new()
//!     .color(false)
//!     .records(&columns, &items)
//!     .build();
//! assert!(table.to_string().contains("Finance"));
//! ```

use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};
use serde_json::Value;

use super::json::select;
use crate::util::{format_timestamp, truncate};

/// Longest cell rendered before truncation.
const MAX_CELL: usize = 60;

/// Creates an empty table with the standard preset.
pub fn create_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// A table column: its header and the field it shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub header: &'static str,
    /// Dotted path into the item, e.g. `owner.name`.
    pub path: &'static str,
}

impl Column {
    pub const fn new(header: &'static str, path: &'static str) -> Self {
        Self { header, path }
    }
}

/// Builder for tables with an optionally colored header row.
pub struct TableBuilder {
    table: Table,
    headers: Vec<String>,
    color: bool,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self {
            table: create_table(),
            headers: Vec::new(),
            color: console::colors_enabled(),
        }
    }

    pub fn color(mut self, enabled: bool) -> Self {
        self.color = enabled;
        self
    }

    pub fn headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.headers = headers.into_iter().map(|s| s.into()).collect();
        if self.color {
            let header_cells: Vec<Cell> = self
                .headers
                .iter()
                .map(|h| Cell::new(h).fg(Color::Cyan))
                .collect();
            self.table.set_header(header_cells);
        } else {
            self.table.set_header(&self.headers);
        }
        self
    }

    pub fn row<I, S>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let row: Vec<String> = cells.into_iter().map(|s| s.into()).collect();
        self.table.add_row(row);
        self
    }

    /// Sets the headers from `columns` and adds one row per item.
    pub fn records(self, columns: &[Column], items: &[Value]) -> Self {
        let mut builder = self.headers(columns.iter().map(|c| c.header));
        for item in items {
            builder = builder.row(columns.iter().map(|c| cell_text(item, c.path)));
        }
        builder
    }

    pub fn print(self) {
        println!("{}", self.table);
    }

    pub fn build(self) -> Table {
        self.table
    }
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Text shown for the field at `path`: `-` when absent, timestamps in local
/// time, long strings truncated.
pub fn cell_text(item: &Value, path: &str) -> String {
    match select(item, path) {
        None | Some(Value::Null) => "-".to_string(),
        Some(Value::String(s)) if path.ends_with("At") => format_timestamp(s),
        Some(Value::String(s)) => truncate(s, MAX_CELL),
        Some(Value::Bool(b)) => format_bool(*b, false),
        Some(other) => truncate(&other.to_string(), MAX_CELL),
    }
}

pub fn format_bool(value: bool, color: bool) -> String {
    if color {
        use console::style;
        if value {
            style("Yes").green().to_string()
        } else {
            style("No").dim().to_string()
        }
    } else if value {
        "Yes".to_string()
    } else {
        "No".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_cell_text() {
        let item = json!({
            "name": "Sales",
            "size": 12,
            "showTabs": true,
            "owner": {"id": "u-1"},
            "description": null
        });
        assert_eq!(cell_text(&item, "name"), "Sales");
        assert_eq!(cell_text(&item, "size"), "12");
        assert_eq!(cell_text(&item, "showTabs"), "Yes");
        assert_eq!(cell_text(&item, "owner.id"), "u-1");
        assert_eq!(cell_text(&item, "description"), "-");
        assert_eq!(cell_text(&item, "project.name"), "-");
    }

    #[test]
    fn test_records_render_every_row() {
        let columns = [Column::new("ID", "id"), Column::new("NAME", "name")];
        let items = [json!({"id": "p-1", "name": "Finance"}), json!({"id": "p-2"})];
        let rendered = TableBuilder::new()
            .color(false)
            .records(&columns, &items)
            .build()
            .to_string();
        assert!(rendered.contains("Finance"));
        assert!(rendered.contains("p-2"));
        assert!(rendered.contains("NAME"));
    }
}
