use crate::{
    ast::UnaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::core::Value,
    },
};

impl Evaluator {
    /// Evaluates a prefix operator applied to a value.
    ///
    /// Supported combinations:
    /// - `-` and `+` on integers and floats: negation and identity. Integer
    ///   negation wraps, so `-(-2147483647 - 1)` stays `-2147483648`.
    /// - `!` on booleans: logical not.
    /// - `!` on arrays: `true` if the array is empty.
    /// - `-` and `+` on booleans: [`Value::Null`].
    ///
    /// # Errors
    /// [`RuntimeError::UnknownOperator`] for every other combination.
    ///
    /// # Example
    /// ```
    /// use monkey::{
    ///     ast::UnaryOperator,
    ///     interpreter::{evaluator::core::Evaluator, value::core::Value},
    /// };
    ///
    /// let v = Evaluator::eval_unary(UnaryOperator::Negate, &Value::Integer(5)).unwrap();
    /// assert_eq!(v, Value::Integer(-5));
    ///
    /// let v = Evaluator::eval_unary(UnaryOperator::Not, &Value::from(Vec::<Value>::new())).unwrap();
    /// assert_eq!(v, Value::Boolean(true));
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: &Value) -> EvalResult<Value> {
        use UnaryOperator::{Negate, Not, Plus};

        match (op, value) {
            (Negate, Value::Integer(n)) => Ok(Value::Integer(n.wrapping_neg())),
            (Negate, Value::Float(x)) => Ok(Value::Float(-x)),
            (Plus, Value::Integer(_) | Value::Float(_)) => Ok(value.clone()),
            (Not, Value::Boolean(b)) => Ok(Value::Boolean(!b)),
            (Not, Value::Array(elements)) => Ok(Value::Boolean(elements.is_empty())),
            (Negate | Plus, Value::Boolean(_)) => Ok(Value::Null),
            _ => Err(RuntimeError::UnknownOperator { operator: op.symbol(),
                                                     kind:     value.kind_name(), }.into()),
        }
    }
}
