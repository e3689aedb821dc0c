//! Timestamp elements.
//!
//! Timestamps are stored in UTC. The zero timestamp (`0001-01-01 00:00:00 UTC`, the start of the
//! proleptic Gregorian era) is indistinguishable from NA: setting an element to it, by any
//! route, leaves it NA. Existing callers depend on this, so it is kept as-is. The Unix epoch is
//! an ordinary value.

use chrono::{DateTime, Utc};

use super::{Cell, Element};
use crate::compare::CompareOp;
use crate::config::TimestampFormat;
use crate::error::{Conversion, ElementError, ElementResult};
use crate::types::{Kind, Scalar, Source};
use crate::NA_LITERAL;

/// UTC timestamp cell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimestampElement {
    value: Option<DateTime<Utc>>,
}

/// Unix seconds of `0001-01-01 00:00:00 UTC`.
const ZERO_UNIX_SECONDS: i64 = -62_135_596_800;

impl TimestampElement {
    /// The instant that doubles as the NA sentinel (`0001-01-01 00:00:00 UTC`).
    pub fn zero() -> DateTime<Utc> {
        DateTime::from_timestamp(ZERO_UNIX_SECONDS, 0).unwrap_or(DateTime::<Utc>::MIN_UTC)
    }

    /// Returns `true` for the zero timestamp.
    pub fn is_zero(ts: &DateTime<Utc>) -> bool {
        ts.timestamp() == ZERO_UNIX_SECONDS && ts.timestamp_subsec_nanos() == 0
    }

    /// Stored value, `None` for NA.
    pub fn get(&self) -> Option<DateTime<Utc>> {
        self.value
    }
}

impl Cell for TimestampElement {
    const KIND: Kind = Kind::Timestamp;

    fn set(&mut self, src: Source<'_>, format: &TimestampFormat) {
        let parsed = match src {
            Source::Text(NA_LITERAL) => None,
            Source::Text(raw) => format.parse(raw),
            Source::Int(secs) => DateTime::from_timestamp(secs, 0),
            Source::Timestamp(ts) => Some(ts),
            Source::Element(e) => e.to_timestamp_with(format).ok(),
            Source::Float(_) | Source::Bool(_) | Source::Other(_) => None,
        };
        self.value = parsed.filter(|ts| !Self::is_zero(ts));
    }

    fn is_na(&self) -> bool {
        self.value.is_none()
    }

    fn to_int64(&self) -> ElementResult<i64> {
        self.value
            .map(|ts| ts.timestamp())
            .ok_or(ElementError::na(Self::KIND, Conversion::Int64))
    }

    fn to_float(&self) -> f64 {
        self.value.map_or(f64::NAN, |ts| ts.timestamp() as f64)
    }

    fn to_bool(&self) -> ElementResult<bool> {
        if self.is_na() {
            return Err(ElementError::na(Self::KIND, Conversion::Bool));
        }
        Err(ElementError::unsupported(Self::KIND, Conversion::Bool))
    }

    fn to_timestamp(&self, _format: &TimestampFormat) -> ElementResult<DateTime<Utc>> {
        self.value.ok_or(ElementError::na(Self::KIND, Conversion::Timestamp))
    }

    fn to_scalar(&self) -> ElementResult<Scalar> {
        self.value
            .map(Scalar::Timestamp)
            .ok_or(ElementError::na(Self::KIND, Conversion::Scalar))
    }

    fn render(&self, format: &TimestampFormat) -> Option<String> {
        self.value.map(|ts| format.render(&ts))
    }

    fn compare(&self, op: CompareOp, other: &Element, format: &TimestampFormat) -> ElementResult<bool> {
        let (Some(lhs), Ok(rhs)) = (self.value, other.to_timestamp_with(format)) else {
            return Ok(false);
        };
        Ok(op.apply(&lhs, &rhs))
    }
}
