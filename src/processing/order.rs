//! Sort order for a column of [`Element`]s.

use std::cmp::Ordering;

use crate::compare::CompareOp;
use crate::element::Element;
use crate::error::{ElementError, ElementResult};

/// Returns the indices that sort `elements`.
///
/// The sort is stable and built only on the element `less` predicate. NA elements always go
/// last, in their original order, whether `descending` or not.
///
/// Generic columns have no ordering and return [`ElementError::UnsupportedComparison`].
/// Cross-kind `less` is not a total order, so every non-NA element must share one kind;
/// otherwise this returns [`ElementError::MixedKinds`].
pub fn order(elements: &[Element], descending: bool) -> ElementResult<Vec<usize>> {
    if let Some(e) = elements.iter().find(|e| matches!(e, Element::Generic(_))) {
        return Err(ElementError::UnsupportedComparison {
            kind: e.kind(),
            op: CompareOp::Less,
        });
    }

    let mut kinds = elements.iter().filter(|e| !e.is_na()).map(Element::kind);
    if let Some(expected) = kinds.next() {
        if let Some(found) = kinds.find(|k| *k != expected) {
            return Err(ElementError::MixedKinds { expected, found });
        }
    }

    let (mut present, missing): (Vec<usize>, Vec<usize>) =
        (0..elements.len()).partition(|&i| !elements[i].is_na());

    present.sort_by(|&a, &b| {
        let (lhs, rhs) = if descending { (b, a) } else { (a, b) };
        if elements[lhs].less(&elements[rhs]) {
            Ordering::Less
        } else if elements[rhs].less(&elements[lhs]) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    });

    present.extend(missing);
    Ok(present)
}
