use std::str::FromStr;

use crate::{
    error::RuntimeError,
    interpreter::{
        environment::FrameId,
        evaluator::{
            core::{EvalResult, Evaluator},
            utils::string_argument,
        },
        value::core::Value,
    },
};

/// Parses the whole text of a string argument as `T`.
fn parse_argument<T>(args: &[Value], target: &'static str) -> EvalResult<T>
    where T: FromStr
{
    let text = string_argument(args)?;
    text.parse()
        .map_err(|_| RuntimeError::ConversionFailed { text: text.to_string(),
                                                      target }.into())
}

/// Converts a string to an integer.
///
/// Surrounding whitespace is not accepted.
///
/// # Errors
/// - [`RuntimeError::InvalidArgument`] if the argument is not a string.
/// - [`RuntimeError::ConversionFailed`] if the text is not a 32-bit integer.
pub fn to_int(_: &mut Evaluator, args: &[Value], _: FrameId) -> EvalResult<Value> {
    parse_argument(args, "Integer").map(Value::Integer)
}

/// Converts a string to a float.
///
/// # Errors
/// - [`RuntimeError::InvalidArgument`] if the argument is not a string.
/// - [`RuntimeError::ConversionFailed`] if the text is not a number.
pub fn to_float(_: &mut Evaluator, args: &[Value], _: FrameId) -> EvalResult<Value> {
    parse_argument(args, "Float").map(Value::Float)
}
