use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::{
            binary::core::unknown_operator,
            core::{EvalResult, Evaluator},
        },
        value::core::Value,
    },
};

impl Evaluator {
    /// Evaluates an operator on two booleans.
    ///
    /// Supported operators are `&&`, `||`, `==` and `!=`. Booleans are not
    /// ordered.
    ///
    /// # Example
    /// ```
    /// use monkey::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Evaluator, value::core::Value},
    /// };
    ///
    /// let v = Evaluator::eval_boolean(BinaryOperator::Or, false, true).unwrap();
    /// assert_eq!(v, Value::Boolean(true));
    /// ```
    ///
    /// # Errors
    /// [`RuntimeError::UnknownOperator`](crate::error::RuntimeError::UnknownOperator)
    /// for arithmetic and relational operators.
    pub fn eval_boolean(op: BinaryOperator, a: bool, b: bool) -> EvalResult<Value> {
        use BinaryOperator::{And, Equal, NotEqual, Or};

        match op {
            And => Ok(Value::Boolean(a && b)),
            Or => Ok(Value::Boolean(a || b)),
            Equal => Ok(Value::Boolean(a == b)),
            NotEqual => Ok(Value::Boolean(a != b)),
            _ => Err(unknown_operator(op, "Boolean")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    #[test]
    fn truth_tables() {
        for a in [false, true] {
            for b in [false, true] {
                assert_eq!(Evaluator::eval_boolean(BinaryOperator::And, a, b).unwrap(),
                           Value::Boolean(a && b));
                assert_eq!(Evaluator::eval_boolean(BinaryOperator::Or, a, b).unwrap(),
                           Value::Boolean(a || b));
            }
        }
    }

    #[test]
    fn booleans_are_not_ordered() {
        assert_eq!(Evaluator::eval_boolean(BinaryOperator::Less, false, true).unwrap_err()
                                                                             .to_string(),
                   "Unknown operator < for Boolean");
        assert_eq!(Evaluator::eval_boolean(BinaryOperator::Add, false, true).unwrap_err()
                                                                            .to_string(),
                   "Unknown operator + for Boolean");
    }

    #[test]
    fn both_operands_are_always_evaluated() {
        let eval = |source: &str| {
            Evaluator::new().evaluate(&parse(source).unwrap())
                            .map_err(|e| e.to_string())
        };

        assert_eq!(eval("false && nope;"), Err("Unknown identifier nope".to_string()));
        assert_eq!(eval("true || nope;"), Err("Unknown identifier nope".to_string()));
        assert_eq!(eval("true || 1 / 0 == 0;"), Err("Division by zero".to_string()));
    }
}
