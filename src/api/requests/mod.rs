//
//  tableau-rest
//  api/requests/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Request Body Builders
//!
//! One option record per operation that sends a body. Records are plain
//! data; `build()` validates every field and assembles the JSON document.
//!
//! ## Rules Shared by Every Builder
//!
//! - Optional fields left as `None` never appear as keys
//! - Enumerated fields are parsed case-insensitively against a closed set and
//!   emitted in the Server's spelling
//! - A missing required field, an unknown enumeration value or a
//!   contradictory combination returns [`ApiError::InvalidParameter`] and no
//!   document
//!
//! ## Example
//!
//! ```rust
//! use tableau_rest::api::requests::{CreateScheduleRequest, Interval};
//!
//! let body = CreateScheduleRequest {
//!     name: "nightly".into(),
//!     priority: 50,
//!     schedule_type: "Extract".into(),
//!     execution_order: "Parallel".into(),
//!     frequency: "Weekly".into(),
//!     start_time: "07:00:00".into(),
//!     end_time: None,
//!     intervals: vec![Interval::WeekDay("Monday".into())],
//! }
//! .build()
//! .unwrap();
//!
//! assert_eq!(body["schedule"]["frequencyDetails"]["intervals"]["interval"][0]["weekDay"], "Monday");
//! ```

use serde_json::{Map, Value};

use crate::api::common::{ApiError, Result};

/// Declares a closed set of Server spellings as an enum.
///
/// Generates `ALL`, `as_str`, a case-insensitive `FromStr` raising
/// [`ApiError::InvalidParameter`], `Display` and `Serialize`.
macro_rules! closed_set {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident ($label:literal) {
            $($variant:ident => $text:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $($variant),+
        }

        impl $name {
            /// Every member, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The Server's spelling.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::api::common::ApiError;

            fn from_str(s: &str) -> $crate::api::common::Result<Self> {
                let wanted = s.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|member| member.as_str().eq_ignore_ascii_case(wanted))
                    .ok_or_else(|| {
                        $crate::api::common::ApiError::invalid(format!(
                            "invalid {} '{}'; expected one of: {}",
                            $label,
                            s,
                            Self::ALL.iter().map(|m| m.as_str()).collect::<Vec<_>>().join(", ")
                        ))
                    })
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }
    };
}

mod content;
mod favorites;
mod groups;
mod metadata;
mod permissions;
mod projects;
mod publish;
mod schedules;
mod sites;
mod subscriptions;
mod users;
mod webhooks;

pub use content::*;
pub use favorites::*;
pub use groups::*;
pub use metadata::*;
pub use permissions::*;
pub use projects::*;
pub use publish::*;
pub use schedules::*;
pub use sites::*;
pub use subscriptions::*;
pub use users::*;
pub use webhooks::*;

/// A JSON object under construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct Fields(Map<String, Value>);

impl Fields {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Sets `key` unconditionally.
    pub(crate) fn put(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.0.insert(key.to_string(), value.into());
        self
    }

    /// Sets `key` only when `value` is present.
    pub(crate) fn put_opt<T: Into<Value>>(self, key: &str, value: Option<T>) -> Self {
        match value {
            Some(value) => self.put(key, value),
            None => self,
        }
    }

    /// Sets `key` to a nested object, skipping it when the object is empty.
    pub(crate) fn put_fields(self, key: &str, fields: Fields) -> Self {
        if fields.is_empty() {
            self
        } else {
            self.put(key, fields.into_value())
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub(crate) fn into_value(self) -> Value {
        Value::Object(self.0)
    }

    /// `{key: self}`
    pub(crate) fn wrap(self, key: &str) -> Value {
        Fields::new().put(key, self.into_value()).into_value()
    }
}

/// `{"id": id}`
pub(crate) fn id_ref(id: &str) -> Value {
    Fields::new().put("id", id).into_value()
}

/// Checks that a required text field is present and non-blank.
pub(crate) fn required<'a>(value: &'a str, name: &str) -> Result<&'a str> {
    if value.trim().is_empty() {
        return Err(ApiError::invalid(format!("{} is required", name)));
    }
    Ok(value)
}

/// Parses an optional enumerated field.
pub(crate) fn parse_opt<T>(value: Option<&str>) -> Result<Option<T>>
where
    T: std::str::FromStr<Err = ApiError>,
{
    value.map(str::parse).transpose()
}

/// Body of an add-tags request: `{"tags": {"tag": [{"label": ...}]}}`.
///
/// # Errors
///
/// [`ApiError::InvalidParameter`] when `tags` is empty or holds a blank label.
pub fn tags_body<S: AsRef<str>>(tags: &[S]) -> Result<Value> {
    if tags.is_empty() {
        return Err(ApiError::invalid("at least one tag is required"));
    }
    let labels = tags
        .iter()
        .map(|tag| {
            required(tag.as_ref(), "tag label").map(|label| Fields::new().put("label", label).into_value())
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(Fields::new()
        .put("tag", labels)
        .wrap("tags"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    closed_set! {
        enum Colour ("colour") {
            Red => "Red",
            DarkBlue => "darkBlue",
        }
    }

    #[test]
    fn test_closed_set_parse_is_case_insensitive() {
        assert_eq!("red".parse::<Colour>().unwrap(), Colour::Red);
        assert_eq!("DARKBLUE".parse::<Colour>().unwrap(), Colour::DarkBlue);
        assert_eq!(Colour::DarkBlue.to_string(), "darkBlue");
        assert_eq!(serde_json::to_value(Colour::Red).unwrap(), json!("Red"));
    }

    #[test]
    fn test_closed_set_rejects_unknown() {
        match "green".parse::<Colour>() {
            Err(ApiError::InvalidParameter(message)) => {
                assert!(message.contains("colour"));
                assert!(message.contains("Red, darkBlue"));
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_fields_skip_absent() {
        let value = Fields::new()
            .put("name", "x")
            .put_opt::<bool>("hidden", None)
            .put_fields("owner", Fields::new())
            .wrap("thing");
        assert_eq!(value, json!({"thing": {"name": "x"}}));
    }

    #[test]
    fn test_tags_body() {
        assert_eq!(
            tags_body(&["a", "b"]).unwrap(),
            json!({"tags": {"tag": [{"label": "a"}, {"label": "b"}]}})
        );
        assert!(tags_body::<&str>(&[]).is_err());
        assert!(tags_body(&[" "]).is_err());
    }
}
