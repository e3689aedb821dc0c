//! Boolean elements.

use chrono::{DateTime, Utc};

use super::{Cell, Element};
use crate::compare::CompareOp;
use crate::config::TimestampFormat;
use crate::error::{Conversion, ElementError, ElementResult};
use crate::types::{Kind, Scalar, Source};

/// Boolean cell. Ordered `false < true`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoolElement {
    value: Option<bool>,
}

impl BoolElement {
    /// Stored value, `None` for NA.
    pub fn get(&self) -> Option<bool> {
        self.value
    }
}

/// Parse the accepted boolean literals (case-insensitive).
pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "t" | "1" => Some(true),
        "false" | "f" | "0" => Some(false),
        _ => None,
    }
}

impl Cell for BoolElement {
    const KIND: Kind = Kind::Boolean;

    fn set(&mut self, src: Source<'_>, _format: &TimestampFormat) {
        self.value = match src {
            Source::Text(raw) => parse_bool(raw),
            Source::Int(1) => Some(true),
            Source::Int(0) => Some(false),
            Source::Int(_) => None,
            Source::Float(v) if v == 1.0 => Some(true),
            Source::Float(v) if v == 0.0 => Some(false),
            Source::Float(_) => None,
            Source::Bool(v) => Some(v),
            Source::Element(e) => e.to_bool().ok(),
            Source::Timestamp(_) | Source::Other(_) => None,
        };
    }

    fn is_na(&self) -> bool {
        self.value.is_none()
    }

    fn to_int64(&self) -> ElementResult<i64> {
        self.value
            .map(i64::from)
            .ok_or(ElementError::na(Self::KIND, Conversion::Int64))
    }

    fn to_float(&self) -> f64 {
        match self.value {
            Some(true) => 1.0,
            Some(false) => 0.0,
            None => f64::NAN,
        }
    }

    fn to_bool(&self) -> ElementResult<bool> {
        self.value.ok_or(ElementError::na(Self::KIND, Conversion::Bool))
    }

    fn to_timestamp(&self, _format: &TimestampFormat) -> ElementResult<DateTime<Utc>> {
        Err(ElementError::unsupported(Self::KIND, Conversion::Timestamp))
    }

    fn to_scalar(&self) -> ElementResult<Scalar> {
        self.value
            .map(Scalar::Bool)
            .ok_or(ElementError::na(Self::KIND, Conversion::Scalar))
    }

    fn render(&self, _format: &TimestampFormat) -> Option<String> {
        self.value.map(|v| v.to_string())
    }

    fn compare(&self, op: CompareOp, other: &Element, _format: &TimestampFormat) -> ElementResult<bool> {
        let (Some(lhs), Ok(rhs)) = (self.value, other.to_bool()) else {
            return Ok(false);
        };
        Ok(op.apply(&lhs, &rhs))
    }
}
