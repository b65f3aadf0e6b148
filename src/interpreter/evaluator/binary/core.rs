use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator, Signal},
        value::core::Value,
    },
};

/// The error for an operator the operand kind does not define.
pub(super) fn unknown_operator(op: BinaryOperator, kind: &'static str) -> Signal {
    RuntimeError::UnknownOperator { operator: op.symbol(),
                                    kind }.into()
}

impl Evaluator {
    /// Evaluates a binary operation between two values.
    ///
    /// The kind of the left operand picks the implementation. The right
    /// operand must have the same kind; no value is ever converted to
    /// another kind, so `1 + 1.0` is an error.
    ///
    /// # Errors
    /// - [`RuntimeError::OperandMismatch`] if the kinds differ.
    /// - [`RuntimeError::UnknownOperator`] if the kind does not define `op`.
    /// - [`RuntimeError::DivisionByZero`] for integer division by zero.
    ///
    /// # Example
    /// ```
    /// use monkey::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Evaluator, value::core::Value},
    /// };
    ///
    /// let sum = Evaluator::eval_binary(BinaryOperator::Add, &Value::Integer(3), &Value::Integer(4));
    /// assert_eq!(sum.unwrap(), Value::Integer(7));
    ///
    /// let mixed = Evaluator::eval_binary(BinaryOperator::Add, &Value::Integer(1), &Value::Float(1.0));
    /// assert_eq!(mixed.unwrap_err().to_string(), "Unknown operator + for Integer and Float");
    /// ```
    pub fn eval_binary(op: BinaryOperator, left: &Value, right: &Value) -> EvalResult<Value> {
        use Value::{Array, Boolean, Float, Function, Integer, Null, String};

        match (left, right) {
            (Integer(a), Integer(b)) => Self::eval_integer(op, *a, *b),
            (Float(a), Float(b)) => Self::eval_float(op, *a, *b),
            (String(a), String(b)) => Self::eval_string(op, a, b),
            (Boolean(a), Boolean(b)) => Self::eval_boolean(op, *a, *b),
            (Array(a), Array(b)) => Self::eval_array_equality(op, a, b),
            (Null | Function(_), _) => Err(unknown_operator(op, left.kind_name())),
            _ => Err(RuntimeError::OperandMismatch { operator: op.symbol(),
                                                     left:     left.kind_name(),
                                                     right:    right.kind_name(), }.into()),
        }
    }
}
