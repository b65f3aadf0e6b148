use crate::{
    error::RuntimeError,
    interpreter::{
        environment::FrameId,
        evaluator::{
            core::{EvalResult, Evaluator},
            utils::array_argument,
        },
        value::core::Value,
    },
    util::num::len_to_i32,
};

/// Returns the number of characters in a string or elements in an array.
///
/// # Errors
/// [`RuntimeError::InvalidArgument`] for any other kind.
pub fn len(_: &mut Evaluator, args: &[Value], _: FrameId) -> EvalResult<Value> {
    match &args[0] {
        Value::String(text) => Ok(Value::Integer(len_to_i32(text.chars().count()))),
        Value::Array(elements) => Ok(Value::Integer(len_to_i32(elements.len()))),
        _ => Err(RuntimeError::InvalidArgument { details: "Argument must be a string or an array" }.into()),
    }
}

/// Returns a new array with the second argument appended.
///
/// The original array is left untouched.
///
/// # Errors
/// [`RuntimeError::InvalidArgument`] if the first argument is not an array.
pub fn push(_: &mut Evaluator, args: &[Value], _: FrameId) -> EvalResult<Value> {
    let mut elements = array_argument(args)?.to_vec();
    elements.push(args[1].clone());
    Ok(Value::from(elements))
}

/// Returns a new array without the last element.
///
/// # Errors
/// - [`RuntimeError::InvalidArgument`] if the argument is not an array.
/// - [`RuntimeError::ArrayIsEmpty`] if there is nothing to remove.
pub fn pop(_: &mut Evaluator, args: &[Value], _: FrameId) -> EvalResult<Value> {
    match array_argument(args)?.split_last() {
        Some((_, rest)) => Ok(Value::from(rest.to_vec())),
        None => Err(RuntimeError::ArrayIsEmpty.into()),
    }
}
