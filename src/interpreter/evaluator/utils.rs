use std::rc::Rc;

use crate::{
    ast::{BlockStatement, Identifier},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalResult, Evaluator},
        value::{
            core::Value,
            function::{Function, UserFunction},
        },
    },
};

impl Evaluator {
    /// Builds a user function from a parameter list and body.
    ///
    /// Only the syntax is captured. Every parameter slot must have been
    /// parsed.
    pub(super) fn capture(parameters: &[Option<Identifier>],
                          body: &BlockStatement)
                          -> EvalResult<Function> {
        let parameters = parameters.iter()
                                   .map(|p| p.clone().ok_or(RuntimeError::Missing { slot: "Parameter name" }))
                                   .collect::<Result<Vec<_>, _>>()?;

        Ok(Function::User(Rc::new(UserFunction { parameters,
                                                 body: body.clone() })))
    }
}

/// Returns the elements of the first argument of an array builtin.
///
/// # Errors
/// [`RuntimeError::InvalidArgument`] if the argument is not an array.
pub fn array_argument(args: &[Value]) -> EvalResult<&Rc<Vec<Value>>> {
    let error = RuntimeError::InvalidArgument { details: "First argument must be an array" };
    match args.first() {
        Some(value) => value.as_array(error),
        None => Err(error.into()),
    }
}

/// Returns the callback passed as the second argument of a higher-order
/// builtin.
///
/// # Errors
/// [`RuntimeError::InvalidArgument`] if the argument is not a function.
pub fn function_argument(args: &[Value]) -> EvalResult<&Function> {
    let error = RuntimeError::InvalidArgument { details: "Second argument must be a function" };
    match args.get(1) {
        Some(value) => value.as_function(error),
        None => Err(error.into()),
    }
}

/// Returns the text of a string argument.
///
/// # Errors
/// [`RuntimeError::InvalidArgument`] if the argument is not a string.
pub fn string_argument(args: &[Value]) -> EvalResult<&str> {
    match args.first() {
        Some(Value::String(text)) => Ok(text),
        _ => Err(RuntimeError::InvalidArgument { details: "Argument must be a string" }.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::evaluator::core::Signal;

    #[test]
    fn argument_helpers_report_kind_errors() {
        let args = [Value::Integer(1), Value::Integer(2)];

        assert_eq!(array_argument(&args).unwrap_err(),
                   Signal::Error(RuntimeError::InvalidArgument { details: "First argument must be an array" }));
        assert_eq!(function_argument(&args).unwrap_err(),
                   Signal::Error(RuntimeError::InvalidArgument { details: "Second argument must be a function" }));
        assert_eq!(string_argument(&args).unwrap_err(),
                   Signal::Error(RuntimeError::InvalidArgument { details: "Argument must be a string" }));
    }

    #[test]
    fn string_argument_borrows_the_text() {
        let args = [Value::from("abc")];
        assert_eq!(string_argument(&args).unwrap(), "abc");
    }

    #[test]
    fn capture_rejects_missing_parameters() {
        let parameters = [Some(Identifier::new("a")), None];
        let result = Evaluator::capture(&parameters, &BlockStatement::default());

        assert!(matches!(result,
                         Err(Signal::Error(RuntimeError::Missing { slot: "Parameter name" }))));
    }
}
