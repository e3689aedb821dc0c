//! 64-bit integer elements.

use chrono::{DateTime, Utc};

use super::{Cell, Element};
use crate::compare::CompareOp;
use crate::config::TimestampFormat;
use crate::error::{Conversion, ElementError, ElementResult};
use crate::types::{Kind, Scalar, Source};
use crate::NA_LITERAL;

/// 64-bit signed integer cell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Int64Element {
    value: Option<i64>,
}

impl Int64Element {
    /// Stored value, `None` for NA.
    pub fn get(&self) -> Option<i64> {
        self.value
    }
}

/// Truncate toward zero. Non-finite and out-of-range floats have no integer reading.
pub(crate) fn truncate_float(v: f64) -> Option<i64> {
    // i64::MAX as f64 rounds up to 2^63, hence the strict upper bound.
    if v.is_finite() && v >= i64::MIN as f64 && v < i64::MAX as f64 {
        Some(v.trunc() as i64)
    } else {
        None
    }
}

impl Cell for Int64Element {
    const KIND: Kind = Kind::Int64;

    fn set(&mut self, src: Source<'_>, _format: &TimestampFormat) {
        self.value = match src {
            Source::Text(NA_LITERAL) => None,
            Source::Text(raw) => raw.parse::<i64>().ok(),
            Source::Int(v) => Some(v),
            Source::Float(v) => truncate_float(v),
            Source::Bool(v) => Some(i64::from(v)),
            Source::Timestamp(ts) => Some(ts.timestamp()),
            Source::Element(e) => e.to_int64().ok(),
            Source::Other(_) => None,
        };
    }

    fn is_na(&self) -> bool {
        self.value.is_none()
    }

    fn to_int64(&self) -> ElementResult<i64> {
        self.value.ok_or(ElementError::na(Self::KIND, Conversion::Int64))
    }

    fn to_float(&self) -> f64 {
        self.value.map_or(f64::NAN, |v| v as f64)
    }

    fn to_bool(&self) -> ElementResult<bool> {
        match self.value {
            None => Err(ElementError::na(Self::KIND, Conversion::Bool)),
            Some(1) => Ok(true),
            Some(0) => Ok(false),
            Some(v) => Err(ElementError::unrepresentable(Self::KIND, Conversion::Bool, v)),
        }
    }

    fn to_timestamp(&self, _format: &TimestampFormat) -> ElementResult<DateTime<Utc>> {
        Err(ElementError::unsupported(Self::KIND, Conversion::Timestamp))
    }

    fn to_scalar(&self) -> ElementResult<Scalar> {
        self.value
            .map(Scalar::Int)
            .ok_or(ElementError::na(Self::KIND, Conversion::Scalar))
    }

    fn render(&self, _format: &TimestampFormat) -> Option<String> {
        self.value.map(|v| v.to_string())
    }

    fn compare(&self, op: CompareOp, other: &Element, _format: &TimestampFormat) -> ElementResult<bool> {
        let (Some(lhs), Ok(rhs)) = (self.value, other.to_int64()) else {
            return Ok(false);
        };
        Ok(op.apply(&lhs, &rhs))
    }
}
