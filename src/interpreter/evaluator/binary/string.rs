use crate::{
    ast::BinaryOperator,
    interpreter::{
        evaluator::{
            binary::{comparison::compare, core::unknown_operator},
            core::{EvalResult, Evaluator},
        },
        value::core::Value,
    },
};

impl Evaluator {
    /// Evaluates an operator on two strings.
    ///
    /// `+` concatenates. Relational operators compare lexicographically by
    /// code point.
    ///
    /// # Errors
    /// [`RuntimeError::UnknownOperator`](crate::error::RuntimeError::UnknownOperator)
    /// for `-`, `*`, `/`, `&&` and `||`.
    pub fn eval_string(op: BinaryOperator, a: &str, b: &str) -> EvalResult<Value> {
        match op {
            BinaryOperator::Add => Ok(Value::String(format!("{a}{b}"))),
            _ => compare(op, a, b).map(Value::Boolean)
                                  .ok_or_else(|| unknown_operator(op, "String")),
        }
    }
}
