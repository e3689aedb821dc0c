//! Column-level helpers built purely on the element contract.
//!
//! These are the operations owning series/columns typically need; each one only calls
//! [`crate::Element`] accessors and predicates, so NA handling is inherited from there.
//!
//! - [`filter()`] / [`compare_mask()`]: comparison against a single value
//! - [`order()`]: stable sort order with NA last
//! - [`reduce()`]: count / NA count / sum / min / max
//!
//! ## Example: mask → filter → order → reduce
//!
//! ```rust
//! use rust_data_series::processing::{compare_mask, filter, order, reduce, ReduceOp};
//! use rust_data_series::{CompareOp, Element, Kind};
//!
//! let col: Vec<Element> = ["4", "NaN", "9", "2"]
//!     .iter()
//!     .map(|raw| Element::from_source(Kind::Int64, *raw))
//!     .collect();
//! let three = Element::from_source(Kind::Int64, 3);
//!
//! assert_eq!(
//!     compare_mask(&col, CompareOp::Greater, &three).unwrap(),
//!     vec![true, false, true, false]
//! );
//! let big = filter(&col, CompareOp::Greater, &three).unwrap();
//! assert_eq!(big.len(), 2);
//!
//! assert_eq!(order(&col, false).unwrap(), vec![3, 0, 2, 1]);
//! assert_eq!(reduce(&col, ReduceOp::Sum), 15.0);
//! ```

pub mod filter;
pub mod order;
pub mod reduce;

pub use filter::{compare_mask, filter};
pub use order::order;
pub use reduce::{reduce, ReduceOp};
