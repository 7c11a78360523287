//! Named option values attached to schema descriptors

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named metadata value such as `COMMENT` or `COLLATE`
///
/// # Examples
///
/// ```
/// use schemaobject_reflect::SchemaOption;
///
/// let comment = SchemaOption::with_value("COMMENT", "nightly cleanup");
/// assert_eq!(comment.get(), "'nightly cleanup'");
/// assert_eq!(comment.create(), "COMMENT='nightly cleanup'");
///
/// let charset = SchemaOption::with_value("COLLATE", "utf8");
/// assert_eq!(charset.create(), "COLLATE=utf8");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaOption {
    /// SQL keyword for the option
    pub name: String,
    /// Raw value, `None` when the server reported NULL or nothing was derived
    pub value: Option<String>,
}

impl SchemaOption {
    pub fn new(name: impl Into<String>, value: Option<String>) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }

    pub fn with_value(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name, Some(value.into()))
    }

    /// Raw value, if any
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Value as SQL text.
    ///
    /// Empty when there is no value; values containing whitespace or a
    /// single quote are single-quoted with embedded quotes doubled.
    pub fn get(&self) -> String {
        match self.value.as_deref() {
            None | Some("") => String::new(),
            Some(v) if v.chars().any(|c| c.is_whitespace() || c == '\'') => {
                format!("'{}'", v.replace('\'', "''"))
            }
            Some(v) => v.to_string(),
        }
    }

    /// `NAME=value` fragment, empty when there is no value
    pub fn create(&self) -> String {
        let value = self.get();
        if value.is_empty() {
            String::new()
        } else if self.name.is_empty() {
            value
        } else {
            format!("{}={}", self.name, value)
        }
    }
}

impl fmt::Display for SchemaOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.create())
    }
}
