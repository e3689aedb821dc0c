//! The [`Element`] sum type: one cell's value, its NA state and its [`Kind`].
//!
//! Every variant implements the same operation set:
//!
//! - `set`: (re)initialise from any [`Source`]; malformed input becomes NA, never an error
//! - accessors: `to_int`, `to_int64`, `to_float`, `to_bool`, `to_timestamp`, `to_scalar`,
//!   plus the canonical text form via [`Element::to_text`] / `Display`
//! - comparisons: `equal`, `not_equal`, `less`, `less_eq`, `greater`, `greater_eq`
//!
//! ## NA semantics
//!
//! Any comparison where either side is NA returns `false`, including `equal` *and*
//! `not_equal`. An NA element is therefore neither equal nor unequal to anything, itself
//! included. The float accessor never fails and maps NA to `NaN`; every other accessor
//! returns [`ElementError::NotAvailable`] for NA.
//!
//! ## Example
//!
//! ```rust
//! use rust_data_series::{Element, Kind};
//!
//! let a = Element::from_source(Kind::Int64, "42");
//! assert_eq!(a.to_int64().unwrap(), 42);
//! assert_eq!(a.to_string(), "42");
//!
//! let b = Element::from_source(Kind::Text, "41");
//! assert!(a.greater(&b)); // `b` is read as int64
//!
//! let na = Element::from_source(Kind::Int64, "abc");
//! assert!(na.is_na());
//! assert!(!na.equal(&na) && !na.not_equal(&na));
//! ```

mod boolean;
mod generic;
mod int64;
mod text;
mod timestamp;

use std::fmt;

use chrono::{DateTime, Utc};

use crate::compare::CompareOp;
use crate::config::TimestampFormat;
use crate::error::{Conversion, ElementError, ElementResult};
use crate::types::{Kind, Scalar, Source};
use crate::NA_LITERAL;

pub use boolean::BoolElement;
pub use generic::GenericElement;
pub use int64::Int64Element;
pub use text::TextElement;
pub use timestamp::TimestampElement;

/// Operation set shared by every element variant.
pub(crate) trait Cell {
    const KIND: Kind;

    fn set(&mut self, src: Source<'_>, format: &TimestampFormat);

    fn is_na(&self) -> bool;

    fn to_int64(&self) -> ElementResult<i64>;

    fn to_int(&self) -> ElementResult<i32> {
        let v = self.to_int64().map_err(|e| e.with_target(Conversion::Int))?;
        i32::try_from(v).map_err(|_| ElementError::unrepresentable(Self::KIND, Conversion::Int, v))
    }

    fn to_float(&self) -> f64;

    fn to_bool(&self) -> ElementResult<bool>;

    fn to_timestamp(&self, format: &TimestampFormat) -> ElementResult<DateTime<Utc>>;

    fn to_scalar(&self) -> ElementResult<Scalar>;

    /// Canonical text, or `None` for NA.
    fn render(&self, format: &TimestampFormat) -> Option<String>;

    fn compare(&self, op: CompareOp, other: &Element, format: &TimestampFormat) -> ElementResult<bool>;
}

/// A single typed cell.
///
/// The derived `PartialEq` is structural (same kind, same payload, NA equals NA) and is meant
/// for containers and tests. Use [`Element::equal`] for NA-aware value comparison.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Boolean(BoolElement),
    Int64(Int64Element),
    Text(TextElement),
    Timestamp(TimestampElement),
    Generic(GenericElement),
}

macro_rules! dispatch {
    ($self:expr, $cell:ident => $body:expr) => {
        match $self {
            Element::Boolean($cell) => $body,
            Element::Int64($cell) => $body,
            Element::Text($cell) => $body,
            Element::Timestamp($cell) => $body,
            Element::Generic($cell) => $body,
        }
    };
}

impl Element {
    /// Create an NA element of `kind`.
    pub fn new(kind: Kind) -> Self {
        match kind {
            Kind::Boolean => Self::Boolean(BoolElement::default()),
            Kind::Int64 => Self::Int64(Int64Element::default()),
            Kind::Text => Self::Text(TextElement::default()),
            Kind::Timestamp => Self::Timestamp(TimestampElement::default()),
            Kind::Generic => Self::Generic(GenericElement::default()),
        }
    }

    /// Create an element of `kind` and `set` it from `src`.
    pub fn from_source<'a>(kind: Kind, src: impl Into<Source<'a>>) -> Self {
        let mut element = Self::new(kind);
        element.set(src);
        element
    }

    /// Re-initialise in place from `src` using the process-wide timestamp format.
    ///
    /// The kind never changes. Unparseable or unsupported sources leave the element NA.
    pub fn set<'a>(&mut self, src: impl Into<Source<'a>>) {
        self.set_with(src, TimestampFormat::global());
    }

    /// Like [`Element::set`], with an explicit timestamp format.
    pub fn set_with<'a>(&mut self, src: impl Into<Source<'a>>, format: &TimestampFormat) {
        let src = src.into();
        dispatch!(self, cell => cell.set(src, format));

        let source_was_na = match src {
            Source::Element(e) => e.is_na(),
            _ => src.is_na_literal(),
        };
        if self.is_na() && !source_was_na {
            tracing::trace!(kind = %self.kind(), source = ?src, "source coerced to NA");
        }
    }

    /// Kind tag.
    pub fn kind(&self) -> Kind {
        match self {
            Self::Boolean(_) => BoolElement::KIND,
            Self::Int64(_) => Int64Element::KIND,
            Self::Text(_) => TextElement::KIND,
            Self::Timestamp(_) => TimestampElement::KIND,
            Self::Generic(_) => GenericElement::KIND,
        }
    }

    /// Returns `true` if the element holds no value.
    pub fn is_na(&self) -> bool {
        dispatch!(self, cell => cell.is_na())
    }

    /// Independent copy with the same kind, payload and NA state.
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Narrow (32-bit) integer.
    pub fn to_int(&self) -> ElementResult<i32> {
        dispatch!(self, cell => cell.to_int())
    }

    /// 64-bit integer.
    pub fn to_int64(&self) -> ElementResult<i64> {
        dispatch!(self, cell => cell.to_int64())
    }

    /// IEEE-754 double. Never fails: NA and non-numeric payloads yield `NaN`.
    pub fn to_float(&self) -> f64 {
        dispatch!(self, cell => cell.to_float())
    }

    /// Boolean.
    pub fn to_bool(&self) -> ElementResult<bool> {
        dispatch!(self, cell => cell.to_bool())
    }

    /// UTC timestamp, parsing text with the process-wide format.
    pub fn to_timestamp(&self) -> ElementResult<DateTime<Utc>> {
        self.to_timestamp_with(TimestampFormat::global())
    }

    /// UTC timestamp, parsing text with `format`.
    pub fn to_timestamp_with(&self, format: &TimestampFormat) -> ElementResult<DateTime<Utc>> {
        dispatch!(self, cell => cell.to_timestamp(format))
    }

    /// Raw value.
    pub fn to_scalar(&self) -> ElementResult<Scalar> {
        dispatch!(self, cell => cell.to_scalar())
    }

    /// Raw value, or `None` for NA.
    pub fn value(&self) -> Option<Scalar> {
        self.to_scalar().ok()
    }

    /// Canonical text; `"NaN"` for NA.
    pub fn to_text(&self) -> String {
        self.to_text_with(TimestampFormat::global())
    }

    /// Canonical text rendering timestamps with `format`.
    pub fn to_text_with(&self, format: &TimestampFormat) -> String {
        let rendered = dispatch!(self, cell => cell.render(format));
        rendered.unwrap_or_else(|| NA_LITERAL.to_string())
    }

    /// Evaluate `self <op> other`, coercing `other` to this element's kind.
    ///
    /// Returns `Ok(false)` when either side is NA or `other` can't be coerced, and
    /// [`ElementError::UnsupportedComparison`] for ordering operators on generic elements.
    pub fn try_compare(&self, op: CompareOp, other: &Element) -> ElementResult<bool> {
        self.try_compare_with(op, other, TimestampFormat::global())
    }

    /// Like [`Element::try_compare`], with an explicit timestamp format.
    pub fn try_compare_with(
        &self,
        op: CompareOp,
        other: &Element,
        format: &TimestampFormat,
    ) -> ElementResult<bool> {
        dispatch!(self, cell => cell.compare(op, other, format))
    }

    /// Evaluate `self <op> other`.
    ///
    /// # Panics
    ///
    /// Panics if `op` is an ordering operator and `self` is a generic element. Generic payloads
    /// have no ordering; asking for one is a caller bug, not a data condition.
    pub fn compare(&self, op: CompareOp, other: &Element) -> bool {
        match self.try_compare(op, other) {
            Ok(result) => result,
            Err(err) => panic!("{err}"),
        }
    }

    /// NA-aware equality: `false` whenever either side is NA.
    pub fn equal(&self, other: &Element) -> bool {
        self.compare(CompareOp::Eq, other)
    }

    /// NA-aware inequality: also `false` whenever either side is NA.
    pub fn not_equal(&self, other: &Element) -> bool {
        self.compare(CompareOp::Neq, other)
    }

    /// # Panics
    ///
    /// Panics on generic elements.
    pub fn less(&self, other: &Element) -> bool {
        self.compare(CompareOp::Less, other)
    }

    /// # Panics
    ///
    /// Panics on generic elements.
    pub fn less_eq(&self, other: &Element) -> bool {
        self.compare(CompareOp::LessEq, other)
    }

    /// # Panics
    ///
    /// Panics on generic elements.
    pub fn greater(&self, other: &Element) -> bool {
        self.compare(CompareOp::Greater, other)
    }

    /// # Panics
    ///
    /// Panics on generic elements.
    pub fn greater_eq(&self, other: &Element) -> bool {
        self.compare(CompareOp::GreaterEq, other)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

#[cfg(test)]
mod tests {
    use super::Element;
    use crate::compare::CompareOp;
    use crate::error::{Conversion, ElementError};
    use crate::types::{Kind, Source};

    #[test]
    fn every_kind_accepts_the_na_literal() {
        for kind in Kind::ALL {
            let e = Element::from_source(kind, "NaN");
            assert!(e.is_na(), "{kind} should be NA");
            assert_eq!(e.to_string(), "NaN");
            assert_eq!(e.kind(), kind);
            assert!(e.to_float().is_nan());
            assert_eq!(e.value(), None);
        }
    }

    #[test]
    fn new_elements_start_as_na() {
        for kind in Kind::ALL {
            assert!(Element::new(kind).is_na());
        }
    }

    #[test]
    fn set_reinitialises_but_keeps_kind() {
        let mut e = Element::from_source(Kind::Int64, 5);
        e.set("nope");
        assert!(e.is_na());
        assert_eq!(e.kind(), Kind::Int64);
        e.set(true);
        assert_eq!(e.to_int64().unwrap(), 1);
    }

    #[test]
    fn copy_is_independent() {
        let original = Element::from_source(Kind::Text, "abc");
        let mut copy = original.copy();
        copy.set("xyz");
        assert_eq!(original.to_string(), "abc");
        assert_eq!(copy.to_string(), "xyz");

        let na = Element::new(Kind::Boolean).copy();
        assert!(na.is_na());
        assert_eq!(na.kind(), Kind::Boolean);
    }

    #[test]
    fn na_is_neither_equal_nor_unequal() {
        let values: Vec<Element> = Kind::ALL
            .iter()
            .flat_map(|&k| [Element::new(k), Element::from_source(k, "1")])
            .collect();
        for a in &values {
            for b in &values {
                if a.is_na() || b.is_na() {
                    assert!(!a.equal(b), "{a:?} == {b:?}");
                    assert!(!a.not_equal(b), "{a:?} != {b:?}");
                }
            }
        }
    }

    #[test]
    fn to_int_narrows_with_range_check() {
        let big = Element::from_source(Kind::Int64, i64::from(i32::MAX) + 1);
        assert_eq!(
            big.to_int(),
            Err(ElementError::Unrepresentable {
                kind: Kind::Int64,
                target: Conversion::Int,
                raw: "2147483648".to_string(),
            })
        );
        let na = Element::new(Kind::Int64);
        assert_eq!(
            na.to_int(),
            Err(ElementError::NotAvailable {
                kind: Kind::Int64,
                target: Conversion::Int,
            })
        );
    }

    #[test]
    fn cross_kind_set_goes_through_source_accessor() {
        let text = Element::from_source(Kind::Text, "t");
        let b = Element::from_source(Kind::Boolean, &text);
        assert_eq!(b.to_bool(), Ok(true));

        let i = Element::from_source(Kind::Int64, Source::Element(&b));
        assert_eq!(i.to_int64(), Ok(1));

        let unparseable = Element::from_source(Kind::Text, "x");
        assert!(Element::from_source(Kind::Int64, &unparseable).is_na());
    }

    #[test]
    fn try_compare_reports_generic_ordering() {
        let g = Element::from_source(Kind::Generic, 1);
        let err = g.try_compare(CompareOp::Less, &g).unwrap_err();
        assert_eq!(
            err,
            ElementError::UnsupportedComparison {
                kind: Kind::Generic,
                op: CompareOp::Less,
            }
        );
        assert_eq!(g.try_compare(CompareOp::Eq, &g), Ok(true));
    }

    #[test]
    #[should_panic(expected = "generic elements can't be compared with '<'")]
    fn generic_less_aborts() {
        let a = Element::from_source(Kind::Generic, 1);
        let b = Element::from_source(Kind::Generic, 2);
        let _ = a.less(&b);
    }
}
