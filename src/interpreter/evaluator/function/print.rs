use crate::{
    error::RuntimeError,
    interpreter::{
        environment::FrameId,
        evaluator::core::{EvalResult, Evaluator},
        value::core::Value,
    },
};

/// Writes every argument to the console, each followed by `terminator`.
///
/// Values use their `Display` form, so strings are written without quotes.
/// Backs both `print` (empty terminator) and `println` (newline).
///
/// # Returns
/// Always [`Value::Null`].
///
/// # Example
/// ```
/// use monkey::interpreter::{
///     evaluator::{console::BufferConsole, core::Evaluator, function::print::print},
///     value::core::Value,
/// };
///
/// let console = BufferConsole::default();
/// let output = console.output();
/// let mut evaluator = Evaluator::with_console(console);
///
/// let result = print(&mut evaluator, &[Value::from("a"), Value::Integer(1)], "\n").unwrap();
///
/// assert_eq!(result, Value::Null);
/// assert_eq!(output.borrow().as_str(), "a\n1\n");
/// ```
pub fn print(evaluator: &mut Evaluator, args: &[Value], terminator: &str) -> EvalResult<Value> {
    let console = evaluator.console();
    for arg in args {
        console.write(&format!("{arg}{terminator}"));
    }
    Ok(Value::Null)
}

/// Reads one line from the console.
///
/// # Errors
/// [`RuntimeError::InputExhausted`] at end of input.
pub fn input(evaluator: &mut Evaluator, _: &[Value], _: FrameId) -> EvalResult<Value> {
    evaluator.console()
             .read_line()
             .map(Value::String)
             .ok_or_else(|| RuntimeError::InputExhausted.into())
}
