//! Reductions over a column of [`Element`]s.

use crate::element::Element;

/// Built-in reduction operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReduceOp {
    /// Count all elements (including NA).
    Count,
    /// Count NA elements.
    CountNa,
    /// Sum of the float readings, ignoring NA.
    Sum,
    /// Minimum float reading, ignoring NA.
    Min,
    /// Maximum float reading, ignoring NA.
    Max,
}

/// Reduce a column using a built-in [`ReduceOp`].
///
/// Values are read through the float accessor, so this works for every kind. Elements whose
/// float reading is `NaN` (NA, non-numeric text, generic non-numbers) are skipped. For
/// `Sum`/`Min`/`Max`, returns `NaN` if no element has a numeric reading.
pub fn reduce(elements: &[Element], op: ReduceOp) -> f64 {
    match op {
        ReduceOp::Count => elements.len() as f64,
        ReduceOp::CountNa => elements.iter().filter(|e| e.is_na()).count() as f64,
        ReduceOp::Sum | ReduceOp::Min | ReduceOp::Max => {
            let mut acc: Option<f64> = None;
            for v in elements.iter().map(Element::to_float).filter(|v| !v.is_nan()) {
                acc = Some(match (op, acc) {
                    (ReduceOp::Sum, Some(a)) => a + v,
                    (ReduceOp::Min, Some(a)) => a.min(v),
                    (ReduceOp::Max, Some(a)) => a.max(v),
                    (_, None) => v,
                    _ => unreachable!("non-numeric op handled earlier"),
                });
            }
            acc.unwrap_or(f64::NAN)
        }
    }
}
