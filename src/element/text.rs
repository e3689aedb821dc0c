//! Text elements.

use chrono::{DateTime, Utc};

use super::boolean::parse_bool;
use super::{Cell, Element};
use crate::compare::CompareOp;
use crate::config::TimestampFormat;
use crate::error::{Conversion, ElementError, ElementResult};
use crate::types::{Kind, Scalar, Source};
use crate::NA_LITERAL;

/// UTF-8 text cell. Ordered by byte-wise lexicographic comparison.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextElement {
    value: Option<String>,
}

impl TextElement {
    /// Stored value, `None` for NA.
    pub fn get(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

/// Fixed six-digit rendering of floats; `NaN` has no text reading.
pub(crate) fn format_float(v: f64) -> Option<String> {
    if v.is_nan() {
        None
    } else if v.is_infinite() {
        Some(if v > 0.0 { "+Inf" } else { "-Inf" }.to_string())
    } else {
        Some(format!("{v:.6}"))
    }
}

impl Cell for TextElement {
    const KIND: Kind = Kind::Text;

    fn set(&mut self, src: Source<'_>, format: &TimestampFormat) {
        self.value = match src {
            Source::Text(NA_LITERAL) => None,
            Source::Text(raw) => Some(raw.to_string()),
            Source::Int(v) => Some(v.to_string()),
            Source::Float(v) => format_float(v),
            Source::Bool(v) => Some(v.to_string()),
            Source::Timestamp(ts) => Some(format.render(&ts)),
            Source::Element(e) if e.is_na() => None,
            Source::Element(e) => Some(e.to_text_with(format)),
            Source::Other(_) => None,
        };
    }

    fn is_na(&self) -> bool {
        self.value.is_none()
    }

    fn to_int64(&self) -> ElementResult<i64> {
        let raw = self.value.as_deref().ok_or(ElementError::na(Self::KIND, Conversion::Int64))?;
        raw.parse()
            .map_err(|_| ElementError::unrepresentable(Self::KIND, Conversion::Int64, raw))
    }

    fn to_float(&self) -> f64 {
        self.value
            .as_deref()
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(f64::NAN)
    }

    fn to_bool(&self) -> ElementResult<bool> {
        let raw = self.value.as_deref().ok_or(ElementError::na(Self::KIND, Conversion::Bool))?;
        parse_bool(raw).ok_or_else(|| ElementError::unrepresentable(Self::KIND, Conversion::Bool, raw))
    }

    fn to_timestamp(&self, format: &TimestampFormat) -> ElementResult<DateTime<Utc>> {
        let raw = self
            .value
            .as_deref()
            .ok_or(ElementError::na(Self::KIND, Conversion::Timestamp))?;
        format
            .parse(raw)
            .ok_or_else(|| ElementError::unrepresentable(Self::KIND, Conversion::Timestamp, raw))
    }

    fn to_scalar(&self) -> ElementResult<Scalar> {
        self.value
            .clone()
            .map(Scalar::Text)
            .ok_or(ElementError::na(Self::KIND, Conversion::Scalar))
    }

    fn render(&self, _format: &TimestampFormat) -> Option<String> {
        self.value.clone()
    }

    fn compare(&self, op: CompareOp, other: &Element, format: &TimestampFormat) -> ElementResult<bool> {
        let Some(lhs) = self.value.as_deref() else {
            return Ok(false);
        };
        if other.is_na() {
            return Ok(false);
        }
        let rhs = other.to_text_with(format);
        Ok(op.apply(lhs, rhs.as_str()))
    }
}
