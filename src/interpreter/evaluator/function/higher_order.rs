use crate::interpreter::{
    environment::FrameId,
    evaluator::{
        core::{EvalResult, Evaluator},
        utils::{array_argument, function_argument},
    },
    value::core::Value,
};

/// Applies the callback to every element and collects the results.
///
/// # Errors
/// - [`RuntimeError::InvalidArgument`](crate::error::RuntimeError::InvalidArgument)
///   if the arguments are not an array and a function.
/// - The first error raised by the callback.
pub fn map(evaluator: &mut Evaluator, args: &[Value], frame: FrameId) -> EvalResult<Value> {
    let elements = array_argument(args)?;
    let callback = function_argument(args)?;

    elements.iter()
            .map(|element| evaluator.call_function(callback, vec![element.clone()], frame))
            .collect::<EvalResult<Vec<_>>>()
            .map(Value::from)
}

/// Keeps the elements for which the callback returns `true`.
///
/// Any other result, including non-boolean values, drops the element.
///
/// # Errors
/// Same as [`map`].
pub fn filter(evaluator: &mut Evaluator, args: &[Value], frame: FrameId) -> EvalResult<Value> {
    let elements = array_argument(args)?;
    let callback = function_argument(args)?;

    let mut kept = Vec::new();
    for element in elements.iter() {
        if evaluator.call_function(callback, vec![element.clone()], frame)? == Value::Boolean(true) {
            kept.push(element.clone());
        }
    }
    Ok(Value::from(kept))
}

/// Folds the array from the left, starting with the third argument.
///
/// The callback receives the accumulator first and the element second.
///
/// # Errors
/// Same as [`map`].
pub fn reduce(evaluator: &mut Evaluator, args: &[Value], frame: FrameId) -> EvalResult<Value> {
    let elements = array_argument(args)?;
    let callback = function_argument(args)?;

    elements.iter().try_fold(args[2].clone(), |accumulator, element| {
                        evaluator.call_function(callback, vec![accumulator, element.clone()], frame)
                    })
}
