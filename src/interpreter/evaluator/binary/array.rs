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
    /// Evaluates `==` or `!=` on two arrays.
    ///
    /// Arrays are equal if they have the same length and their elements are
    /// pairwise equal, recursively.
    ///
    /// # Errors
    /// [`RuntimeError::UnknownOperator`](crate::error::RuntimeError::UnknownOperator)
    /// for any other operator.
    pub fn eval_array_equality(op: BinaryOperator, a: &[Value], b: &[Value]) -> EvalResult<Value> {
        match op {
            BinaryOperator::Equal => Ok(Value::Boolean(a == b)),
            BinaryOperator::NotEqual => Ok(Value::Boolean(a != b)),
            _ => Err(unknown_operator(op, "Array")),
        }
    }
}
