//! Core value types shared by every element variant.
//!
//! - [`Kind`] tags an element for dispatch and reporting.
//! - [`Scalar`] is the raw value handed out by the generic accessor.
//! - [`Source`] is anything an element can be `set` from.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::element::Element;

/// Kind tag of an [`Element`]. Fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    /// Boolean.
    Boolean,
    /// 64-bit signed integer.
    Int64,
    /// UTF-8 text.
    Text,
    /// UTC timestamp.
    Timestamp,
    /// Untyped fallback holding an arbitrary [`Scalar`].
    Generic,
}

impl Kind {
    /// All kinds, in declaration order.
    pub const ALL: [Kind; 5] = [
        Kind::Boolean,
        Kind::Int64,
        Kind::Text,
        Kind::Timestamp,
        Kind::Generic,
    ];

    /// Parse a kind from its name or a common alias (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "bool" | "boolean" => Some(Self::Boolean),
            "int" | "int64" | "integer" => Some(Self::Int64),
            "string" | "text" | "utf8" => Some(Self::Text),
            "time" | "timestamp" | "datetime" => Some(Self::Timestamp),
            "generic" | "interface" | "any" => Some(Self::Generic),
            _ => None,
        }
    }

    /// Canonical lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Int64 => "int64",
            Self::Text => "text",
            Self::Timestamp => "timestamp",
            Self::Generic => "generic",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A raw, kind-unchecked value.
///
/// Equality is structural: values of different variants are never equal, so `Int(1)` and
/// `Float(1.0)` compare unequal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum Scalar {
    /// Boolean.
    Bool(bool),
    /// 64-bit signed integer.
    Int(i64),
    /// 64-bit float.
    Float(f64),
    /// UTF-8 string.
    Text(String),
    /// UTC timestamp.
    Timestamp(DateTime<Utc>),
    /// Any other value, stored verbatim.
    Json(serde_json::Value),
}

impl Scalar {
    /// Name of the stored variant, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Text(_) => "text",
            Self::Timestamp(_) => "timestamp",
            Self::Json(_) => "json",
        }
    }
}

/// Input accepted by [`Element::set`].
#[derive(Debug, Clone, Copy)]
pub enum Source<'a> {
    /// Text, parsed per target kind; `"NaN"` is NA.
    Text(&'a str),
    /// 64-bit signed integer.
    Int(i64),
    /// 64-bit float.
    Float(f64),
    /// Boolean.
    Bool(bool),
    /// UTC timestamp.
    Timestamp(DateTime<Utc>),
    /// Another element; converted through its accessor for the target kind.
    Element(&'a Element),
    /// An arbitrary value with no dedicated channel.
    Other(&'a serde_json::Value),
}

impl Source<'_> {
    /// Returns `true` for the text NA literal `"NaN"`.
    pub fn is_na_literal(&self) -> bool {
        matches!(self, Source::Text(crate::NA_LITERAL))
    }
}

impl<'a> From<&'a str> for Source<'a> {
    fn from(v: &'a str) -> Self {
        Source::Text(v)
    }
}

impl<'a> From<&'a String> for Source<'a> {
    fn from(v: &'a String) -> Self {
        Source::Text(v.as_str())
    }
}

impl From<i64> for Source<'_> {
    fn from(v: i64) -> Self {
        Source::Int(v)
    }
}

impl From<i32> for Source<'_> {
    fn from(v: i32) -> Self {
        Source::Int(i64::from(v))
    }
}

impl From<f64> for Source<'_> {
    fn from(v: f64) -> Self {
        Source::Float(v)
    }
}

impl From<bool> for Source<'_> {
    fn from(v: bool) -> Self {
        Source::Bool(v)
    }
}

impl From<DateTime<Utc>> for Source<'_> {
    fn from(v: DateTime<Utc>) -> Self {
        Source::Timestamp(v)
    }
}

impl<'a> From<&'a Element> for Source<'a> {
    fn from(v: &'a Element) -> Self {
        Source::Element(v)
    }
}

impl<'a> From<&'a serde_json::Value> for Source<'a> {
    fn from(v: &'a serde_json::Value) -> Self {
        Source::Other(v)
    }
}
