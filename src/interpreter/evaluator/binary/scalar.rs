use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            binary::{comparison::compare, core::unknown_operator},
            core::{EvalResult, Evaluator},
        },
        value::core::Value,
    },
};

impl Evaluator {
    /// Evaluates an operator on two integers.
    ///
    /// `+`, `-`, `*` and `/` wrap on overflow; division truncates toward
    /// zero.
    ///
    /// # Errors
    /// - [`RuntimeError::DivisionByZero`] if `b` is zero and `op` is `/`.
    /// - [`RuntimeError::UnknownOperator`] for `&&` and `||`.
    pub fn eval_integer(op: BinaryOperator, a: i32, b: i32) -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Mul, Sub};

        match op {
            Add => Ok(Value::Integer(a.wrapping_add(b))),
            Sub => Ok(Value::Integer(a.wrapping_sub(b))),
            Mul => Ok(Value::Integer(a.wrapping_mul(b))),
            Div if b == 0 => Err(RuntimeError::DivisionByZero.into()),
            Div => Ok(Value::Integer(a.wrapping_div(b))),
            _ => compare(op, &a, &b).map(Value::Boolean)
                                    .ok_or_else(|| unknown_operator(op, "Integer")),
        }
    }

    /// Evaluates an operator on two floats.
    ///
    /// Arithmetic follows IEEE 754: dividing by zero gives an infinity or
    /// NaN instead of an error.
    ///
    /// # Example
    /// ```
    /// use monkey::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Evaluator, value::core::Value},
    /// };
    ///
    /// let v = Evaluator::eval_float(BinaryOperator::Div, 1.0, 0.0).unwrap();
    /// assert_eq!(v, Value::Float(f32::INFINITY));
    /// ```
    ///
    /// # Errors
    /// [`RuntimeError::UnknownOperator`] for `&&` and `||`.
    pub fn eval_float(op: BinaryOperator, a: f32, b: f32) -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Mul, Sub};

        match op {
            Add => Ok(Value::Float(a + b)),
            Sub => Ok(Value::Float(a - b)),
            Mul => Ok(Value::Float(a * b)),
            Div => Ok(Value::Float(a / b)),
            _ => compare(op, &a, &b).map(Value::Boolean)
                                    .ok_or_else(|| unknown_operator(op, "Float")),
        }
    }
}
