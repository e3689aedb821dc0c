//! Comparison masks and filtering over a column of [`Element`]s.

use crate::compare::CompareOp;
use crate::element::Element;
use crate::error::ElementResult;

/// Evaluate `element <op> rhs` for every element.
///
/// NA elements (and elements `rhs` can't be coerced against) yield `false`. Ordering operators
/// on a generic column return [`crate::ElementError::UnsupportedComparison`].
pub fn compare_mask(elements: &[Element], op: CompareOp, rhs: &Element) -> ElementResult<Vec<bool>> {
    elements.iter().map(|e| e.try_compare(op, rhs)).collect()
}

/// Returns copies of the elements for which `element <op> rhs` holds, in order.
pub fn filter(elements: &[Element], op: CompareOp, rhs: &Element) -> ElementResult<Vec<Element>> {
    let mask = compare_mask(elements, op, rhs)?;
    Ok(elements
        .iter()
        .zip(mask)
        .filter(|(_, keep)| *keep)
        .map(|(e, _)| e.copy())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::{compare_mask, filter};
    use crate::compare::CompareOp;
    use crate::element::Element;
    use crate::types::Kind;

    fn ints(raw: &[&str]) -> Vec<Element> {
        raw.iter().map(|r| Element::from_source(Kind::Int64, *r)).collect()
    }

    #[test]
    fn mask_treats_na_as_false() {
        let col = ints(&["1", "NaN", "3", "x"]);
        let rhs = Element::from_source(Kind::Int64, 2);
        assert_eq!(
            compare_mask(&col, CompareOp::Greater, &rhs).unwrap(),
            vec![false, false, true, false]
        );
        assert_eq!(
            compare_mask(&col, CompareOp::Neq, &rhs).unwrap(),
            vec![true, false, true, false]
        );
    }

    #[test]
    fn filter_keeps_matching_rows_in_order() {
        let col = ints(&["5", "1", "NaN", "7"]);
        let rhs = Element::from_source(Kind::Text, "5");
        let out = filter(&col, CompareOp::GreaterEq, &rhs).unwrap();
        assert_eq!(out, ints(&["5", "7"]));
        // Original unchanged
        assert_eq!(col.len(), 4);
    }

    #[test]
    fn filter_can_return_empty() {
        let col = ints(&["1", "2"]);
        let na = Element::new(Kind::Int64);
        assert!(filter(&col, CompareOp::Eq, &na).unwrap().is_empty());
    }

    #[test]
    fn generic_ordering_is_an_error() {
        let col = vec![Element::from_source(Kind::Generic, 1)];
        let rhs = Element::from_source(Kind::Generic, 0);
        assert!(compare_mask(&col, CompareOp::Less, &rhs).is_err());
        assert_eq!(compare_mask(&col, CompareOp::Eq, &rhs).unwrap(), vec![false]);
    }
}
