//! Generic (untyped fallback) elements.
//!
//! A generic element stores whatever [`Scalar`] it was given. Unlike the typed kinds, it accepts
//! arbitrary values without falling back to NA; only the `"NaN"` literal and NA elements do.
//! Equality compares raw payloads structurally, so values of different underlying types are
//! never equal. Generic payloads have no ordering.

use chrono::{DateTime, Utc};

use super::{Cell, Element};
use crate::compare::CompareOp;
use crate::config::TimestampFormat;
use crate::error::{Conversion, ElementError, ElementResult};
use crate::types::{Kind, Scalar, Source};
use crate::NA_LITERAL;

/// Untyped cell holding an arbitrary [`Scalar`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenericElement {
    value: Option<Scalar>,
}

impl GenericElement {
    /// Stored value, `None` for NA.
    pub fn get(&self) -> Option<&Scalar> {
        self.value.as_ref()
    }

    fn payload(&self, target: Conversion) -> ElementResult<&Scalar> {
        self.value
            .as_ref()
            .ok_or(ElementError::na(Self::KIND, target))
    }
}

impl Cell for GenericElement {
    const KIND: Kind = Kind::Generic;

    fn set(&mut self, src: Source<'_>, _format: &TimestampFormat) {
        self.value = match src {
            Source::Text(NA_LITERAL) => None,
            Source::Text(raw) => Some(Scalar::Text(raw.to_string())),
            Source::Int(v) => Some(Scalar::Int(v)),
            Source::Float(v) => Some(Scalar::Float(v)),
            Source::Bool(v) => Some(Scalar::Bool(v)),
            Source::Timestamp(ts) => Some(Scalar::Timestamp(ts)),
            Source::Element(e) => e.to_scalar().ok(),
            Source::Other(v) => Some(Scalar::Json(v.clone())),
        };
    }

    fn is_na(&self) -> bool {
        self.value.is_none()
    }

    fn to_int64(&self) -> ElementResult<i64> {
        match self.payload(Conversion::Int64)? {
            Scalar::Int(v) => Ok(*v),
            other => Err(unrepresentable(other, Conversion::Int64)),
        }
    }

    fn to_float(&self) -> f64 {
        match self.value {
            Some(Scalar::Float(v)) => v,
            Some(Scalar::Int(v)) => v as f64,
            _ => f64::NAN,
        }
    }

    fn to_bool(&self) -> ElementResult<bool> {
        match self.payload(Conversion::Bool)? {
            Scalar::Bool(v) => Ok(*v),
            Scalar::Int(1) => Ok(true),
            Scalar::Int(0) => Ok(false),
            other => Err(unrepresentable(other, Conversion::Bool)),
        }
    }

    fn to_timestamp(&self, _format: &TimestampFormat) -> ElementResult<DateTime<Utc>> {
        match self.payload(Conversion::Timestamp)? {
            Scalar::Timestamp(ts) => Ok(*ts),
            other => Err(unrepresentable(other, Conversion::Timestamp)),
        }
    }

    fn to_scalar(&self) -> ElementResult<Scalar> {
        self.payload(Conversion::Scalar).cloned()
    }

    fn render(&self, format: &TimestampFormat) -> Option<String> {
        self.value.as_ref().map(|v| render_scalar(v, format))
    }

    fn compare(&self, op: CompareOp, other: &Element, _format: &TimestampFormat) -> ElementResult<bool> {
        if op.is_ordering() {
            return Err(ElementError::UnsupportedComparison { kind: Self::KIND, op });
        }
        let (Some(lhs), Ok(rhs)) = (self.value.as_ref(), other.to_scalar()) else {
            return Ok(false);
        };
        Ok(match op {
            CompareOp::Eq => *lhs == rhs,
            _ => *lhs != rhs,
        })
    }
}

fn unrepresentable(value: &Scalar, target: Conversion) -> ElementError {
    ElementError::unrepresentable(GenericElement::KIND, target, value.type_name())
}

fn render_scalar(value: &Scalar, format: &TimestampFormat) -> String {
    match value {
        Scalar::Bool(v) => v.to_string(),
        Scalar::Int(v) => v.to_string(),
        // Shortest round-trip form, unlike the fixed six digits text elements use.
        Scalar::Float(v) => v.to_string(),
        Scalar::Text(v) => v.clone(),
        Scalar::Timestamp(ts) => format.render(ts),
        Scalar::Json(v) => v.to_string(),
    }
}
