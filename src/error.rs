use std::fmt;

use thiserror::Error;

use crate::compare::CompareOp;
use crate::types::Kind;

/// Convenience result type for element accessors and comparisons.
pub type ElementResult<T> = Result<T, ElementError>;

/// Representation requested from an element accessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Conversion {
    /// Narrow (32-bit) integer.
    Int,
    /// 64-bit integer.
    Int64,
    /// Boolean.
    Bool,
    /// UTC timestamp.
    Timestamp,
    /// Raw/generic value.
    Scalar,
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Int => "int",
            Self::Int64 => "int64",
            Self::Bool => "bool",
            Self::Timestamp => "timestamp",
            Self::Scalar => "scalar",
        })
    }
}

/// Error type returned by element accessors (the "hard failure" channel).
///
/// Construction never produces these: malformed input to `set` degrades into NA instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ElementError {
    /// The element is NA and has no value to convert.
    #[error("can't convert NaN {kind} element to {target}")]
    NotAvailable { kind: Kind, target: Conversion },

    /// The stored payload cannot be expressed in the requested representation.
    #[error("can't convert {kind} \"{raw}\" to {target}")]
    Unrepresentable {
        kind: Kind,
        target: Conversion,
        raw: String,
    },

    /// The element kind never converts to the requested representation.
    #[error("can't convert {kind} to {target}")]
    Unsupported { kind: Kind, target: Conversion },

    /// The element kind has no ordering for the requested comparison.
    #[error("{kind} elements can't be compared with '{op}'")]
    UnsupportedComparison { kind: Kind, op: CompareOp },

    /// A column operation needs a single kind but found several.
    #[error("column mixes {expected} and {found} elements")]
    MixedKinds { expected: Kind, found: Kind },

    /// A comparison operator string was not recognised.
    #[error("unknown comparator '{0}'")]
    UnknownComparator(String),

    /// Invalid or conflicting configuration.
    #[error("invalid configuration: {message}")]
    Config { message: String },
}

impl ElementError {
    pub(crate) fn na(kind: Kind, target: Conversion) -> Self {
        Self::NotAvailable { kind, target }
    }

    pub(crate) fn unrepresentable(kind: Kind, target: Conversion, raw: impl fmt::Display) -> Self {
        Self::Unrepresentable {
            kind,
            target,
            raw: raw.to_string(),
        }
    }

    pub(crate) fn unsupported(kind: Kind, target: Conversion) -> Self {
        Self::Unsupported { kind, target }
    }

    /// Re-label a conversion error with the representation the caller actually asked for.
    pub(crate) fn with_target(self, target: Conversion) -> Self {
        match self {
            Self::NotAvailable { kind, .. } => Self::NotAvailable { kind, target },
            Self::Unrepresentable { kind, raw, .. } => Self::Unrepresentable { kind, target, raw },
            Self::Unsupported { kind, .. } => Self::Unsupported { kind, target },
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Conversion, ElementError};
    use crate::compare::CompareOp;
    use crate::types::Kind;

    #[test]
    fn messages_name_source_kind_and_target() {
        let err = ElementError::na(Kind::Int64, Conversion::Bool);
        assert_eq!(err.to_string(), "can't convert NaN int64 element to bool");

        let err = ElementError::unrepresentable(Kind::Int64, Conversion::Bool, 7);
        assert_eq!(err.to_string(), "can't convert int64 \"7\" to bool");

        let err = ElementError::unsupported(Kind::Boolean, Conversion::Timestamp);
        assert_eq!(err.to_string(), "can't convert boolean to timestamp");
    }

    #[test]
    fn comparison_error_names_operator() {
        let err = ElementError::UnsupportedComparison {
            kind: Kind::Generic,
            op: CompareOp::Less,
        };
        assert_eq!(err.to_string(), "generic elements can't be compared with '<'");
    }

    #[test]
    fn mixed_kinds_names_both_kinds() {
        let err = ElementError::MixedKinds {
            expected: Kind::Int64,
            found: Kind::Text,
        };
        assert_eq!(err.to_string(), "column mixes int64 and text elements");
    }
}
