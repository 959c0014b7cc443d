//
//  tableau-rest
//  output/json.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # JSON Output Formatting
//!
//! Machine-readable output for `--json`. Server answers are already JSON, so
//! these helpers mostly re-indent them and pick nested fields out by path.
//!
//! | Function | Description |
//! |----------|-------------|
//! | [`write_json`] | Pretty-printed, for terminals and `jq` |
//! | [`write_json_compact`] | One line, for piping |
//! | [`select`] | Dotted-path lookup (`owner.name`) |

use serde::Serialize;
use serde_json::Value;
use std::io::{self, Write};

/// Writes `value` to stdout as pretty-printed JSON.
pub fn write_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    write_json_to(&mut io::stdout().lock(), value)
}

/// Writes `value` as pretty-printed JSON followed by a newline.
pub fn write_json_to<W: Write, T: Serialize>(writer: &mut W, value: &T) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, value)?;
    writeln!(writer)?;
    Ok(())
}

/// Writes `value` to stdout as single-line JSON.
pub fn write_json_compact<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string(value)?;
    println!("{}", json);
    Ok(())
}

/// Follows a dotted path through nested objects.
///
/// ```rust
/// use serde_json::json;
/// use tableau_rest::output::select;
///
/// let workbook = json!({"name": "Sales", "project": {"name": "Finance"}});
/// assert_eq!(select(&workbook, "project.name"), Some(&json!("Finance")));
/// assert_eq!(select(&workbook, "owner.name"), None);
/// ```
pub fn select<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.')
        .filter(|key| !key.is_empty())
        .try_fold(value, |current, key| current.get(key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_write_json_to_appends_newline() {
        let mut buffer = Vec::new();
        write_json_to(&mut buffer, &json!({"id": "wb-1"})).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        assert!(text.ends_with("}\n"));
        assert!(text.contains("\"id\": \"wb-1\""));
    }

    #[test]
    fn test_select_empty_path_is_identity() {
        let value = json!({"name": "test"});
        assert_eq!(select(&value, ""), Some(&value));
        assert_eq!(select(&value, "name"), Some(&json!("test")));
    }
}
