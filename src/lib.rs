//! `rust-data-series` provides the typed cell ("element") underlying a tabular data-series
//! library: a single [`Element`] value that holds one of five [`Kind`]s, uniformly supports a
//! missing-value (NA) state, and converts and compares across kinds.
//!
//! ## Kinds
//!
//! - [`Kind::Boolean`]: `bool`, ordered `false < true`
//! - [`Kind::Int64`]: `i64`
//! - [`Kind::Text`]: `String`, ordered lexicographically
//! - [`Kind::Timestamp`]: UTC timestamp, parsed/rendered with the process-wide
//!   [`TimestampFormat`] (default `%Y-%m-%d %H:%M:%S`)
//! - [`Kind::Generic`]: an arbitrary [`Scalar`], equality only
//!
//! ## Failure channels
//!
//! - **Soft (NA)**: [`Element::set`] never fails. Unparseable text, non-finite floats into
//!   integers, and unsupported sources all leave the element NA.
//! - **Hard ([`ElementError`])**: accessors such as [`Element::to_int64`] return an error for NA
//!   elements or payloads with no reading in the target kind. [`Element::to_float`] is the
//!   exception and returns `NaN` instead.
//! - **Abort**: ordering predicates on generic elements panic. Use [`Element::try_compare`] to get
//!   an [`ElementError::UnsupportedComparison`] instead.
//!
//! The text literal [`NA_LITERAL`] (`"NaN"`) is recognised on input and produced on output for
//! every kind.
//!
//! ## Example
//!
//! ```rust
//! use rust_data_series::{Element, Kind};
//!
//! let flag = Element::from_source(Kind::Boolean, "T");
//! assert_eq!(flag.to_bool().unwrap(), true);
//!
//! let text = Element::from_source(Kind::Text, true);
//! assert_eq!(text.to_string(), "true");
//! assert!(flag.equal(&text));
//!
//! let n = Element::from_source(Kind::Int64, 3.9);
//! assert_eq!(n.to_int64().unwrap(), 3);
//!
//! let missing = Element::from_source(Kind::Int64, "abc");
//! assert!(missing.is_na());
//! assert!(missing.to_float().is_nan());
//! assert!(missing.to_int64().is_err());
//! ```
//!
//! ## Modules
//!
//! - [`element`]: the [`Element`] sum type and its per-kind variants
//! - [`types`]: [`Kind`], [`Scalar`] and [`Source`]
//! - [`compare`]: [`CompareOp`]
//! - [`config`]: timestamp format and [`ElementConfig`]
//! - [`processing`]: column helpers (masks, filtering, ordering, reductions)
//! - [`error`]: [`ElementError`]

pub mod compare;
pub mod config;
pub mod element;
pub mod error;
pub mod processing;
pub mod types;

/// Text token for a missing value, recognised on input and produced on output.
pub const NA_LITERAL: &str = "NaN";

pub use compare::CompareOp;
pub use config::{init_timestamp_format, ElementConfig, TimestampFormat};
pub use element::Element;
pub use error::{Conversion, ElementError, ElementResult};
pub use types::{Kind, Scalar, Source};
