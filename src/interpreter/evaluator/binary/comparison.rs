use crate::ast::BinaryOperator;

/// Applies a relational or equality operator to two comparable operands.
///
/// Returns `None` if `op` is not one of `<`, `>`, `<=`, `>=`, `==`, `!=`.
/// Floats follow IEEE rules, so every comparison with NaN except `!=` is
/// `false`.
///
/// # Example
/// ```
/// use monkey::{ast::BinaryOperator, interpreter::evaluator::binary::comparison::compare};
///
/// assert_eq!(compare(BinaryOperator::LessEqual, &2, &2), Some(true));
/// assert_eq!(compare(BinaryOperator::Less, "abc", "abd"), Some(true));
/// assert_eq!(compare(BinaryOperator::Add, &1, &2), None);
/// ```
#[must_use]
pub fn compare<T>(op: BinaryOperator, a: &T, b: &T) -> Option<bool>
    where T: PartialOrd + ?Sized
{
    use BinaryOperator::{Equal, Greater, GreaterEqual, Less, LessEqual, NotEqual};

    Some(match op {
        Less => a < b,
        Greater => a > b,
        LessEqual => a <= b,
        GreaterEqual => a >= b,
        Equal => a == b,
        NotEqual => a != b,
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nan_is_unordered() {
        let nan = f32::NAN;

        assert_eq!(compare(BinaryOperator::Equal, &nan, &nan), Some(false));
        assert_eq!(compare(BinaryOperator::NotEqual, &nan, &nan), Some(true));
        assert_eq!(compare(BinaryOperator::Less, &nan, &1.0), Some(false));
        assert_eq!(compare(BinaryOperator::GreaterEqual, &nan, &1.0), Some(false));
    }

    #[test]
    fn logical_operators_are_not_comparisons() {
        assert_eq!(compare(BinaryOperator::And, &true, &true), None);
        assert_eq!(compare(BinaryOperator::Or, &false, &true), None);
    }
}
