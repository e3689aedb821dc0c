//! Comparison operators as values.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ElementError;

/// One of the six element predicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompareOp {
    #[serde(rename = "==")]
    Eq,
    #[serde(rename = "!=")]
    Neq,
    #[serde(rename = "<")]
    Less,
    #[serde(rename = "<=")]
    LessEq,
    #[serde(rename = ">")]
    Greater,
    #[serde(rename = ">=")]
    GreaterEq,
}

impl CompareOp {
    /// Operator symbol.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Eq => "==",
            Self::Neq => "!=",
            Self::Less => "<",
            Self::LessEq => "<=",
            Self::Greater => ">",
            Self::GreaterEq => ">=",
        }
    }

    /// Returns `true` for the four ordering predicates.
    pub fn is_ordering(self) -> bool {
        !matches!(self, Self::Eq | Self::Neq)
    }

    /// Apply the operator to two already-coerced, ordered values.
    pub(crate) fn apply<T: PartialOrd + ?Sized>(self, lhs: &T, rhs: &T) -> bool {
        match self {
            Self::Eq => lhs == rhs,
            Self::Neq => lhs != rhs,
            Self::Less => lhs < rhs,
            Self::LessEq => lhs <= rhs,
            Self::Greater => lhs > rhs,
            Self::GreaterEq => lhs >= rhs,
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for CompareOp {
    type Err = ElementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "==" => Ok(Self::Eq),
            "!=" => Ok(Self::Neq),
            "<" => Ok(Self::Less),
            "<=" => Ok(Self::LessEq),
            ">" => Ok(Self::Greater),
            ">=" => Ok(Self::GreaterEq),
            other => Err(ElementError::UnknownComparator(other.to_string())),
        }
    }
}
