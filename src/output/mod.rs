//
//  tableau-rest
//  output/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Output Formatting
//!
//! How `tsc` prints results: tables for people, JSON for scripts, and colored
//! status lines on the side.
//!
//! ## Submodules
//!
//! - [`table`]: `comfy_table` rendering of listings
//! - [`json`]: JSON writers and dotted-path lookup
//!
//! Status lines (`write_success`, `write_warning`, ...) honor
//! [`console::colors_enabled`], so `NO_COLOR` and non-terminal output stay
//! plain.

mod json;
mod table;

pub use json::*;
pub use table::*;

use serde_json::Value;

/// The available output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable table with optional color.
    #[default]
    Table,
    /// Pretty-printed JSON.
    Json,
}

impl OutputFormat {
    /// Maps the global `--json` flag to a format.
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            Self::Json
        } else {
            Self::Table
        }
    }
}

/// Writes results in the selected format.
pub struct OutputWriter {
    format: OutputFormat,
    color: bool,
}

impl OutputWriter {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            color: console::colors_enabled(),
        }
    }

    pub fn color_enabled(&self) -> bool {
        self.color
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Writes a listing. Tables show `columns`; JSON shows the items whole.
    pub fn write_records(&self, columns: &[Column], items: &[Value]) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Json => write_json(&items),
            OutputFormat::Table => {
                if items.is_empty() {
                    self.write_info("No results.");
                    return Ok(());
                }
                TableBuilder::new()
                    .color(self.color)
                    .records(columns, items)
                    .print();
                Ok(())
            }
        }
    }

    /// Writes a single object. Tables show one `key: value` line per scalar
    /// field.
    pub fn write_object(&self, title: &str, value: &Value) -> anyhow::Result<()> {
        match (self.format, value.as_object()) {
            (OutputFormat::Table, Some(fields)) => {
                print_header(title, self.color);
                for (key, field) in fields {
                    if field.is_object() || field.is_array() {
                        continue;
                    }
                    print_field(key, &cell_text(value, key), self.color);
                }
                Ok(())
            }
            _ => write_json(value),
        }
    }

    pub fn write_warning(&self, msg: &str) {
        use console::style;
        if self.color {
            eprintln!("{} {}", style("warning:").yellow().bold(), msg);
        } else {
            eprintln!("warning: {}", msg);
        }
    }

    /// Status messages go to stderr so `--json` output stays parseable.
    pub fn write_info(&self, msg: &str) {
        eprintln!("{}", msg);
    }

    pub fn write_success(&self, msg: &str) {
        use console::style;
        if self.color {
            eprintln!("{} {}", style("✓").green().bold(), msg);
        } else {
            eprintln!("✓ {}", msg);
        }
    }
}

pub fn print_header(text: &str, color: bool) {
    use console::style;
    if color {
        println!("{}", style(text).bold());
    } else {
        println!("{}", text);
    }
    println!("{}", "-".repeat(text.chars().count()));
}

pub fn print_field(key: &str, value: &str, color: bool) {
    use console::style;
    if color {
        println!("{:<24} {}", style(format!("{}:", key)).dim(), value);
    } else {
        println!("{:<24} {}", format!("{}:", key), value);
    }
}
