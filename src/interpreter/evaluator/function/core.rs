use crate::{
    error::RuntimeError,
    interpreter::{
        environment::{Environment, FrameId},
        evaluator::{
            core::{EvalResult, Evaluator},
            function::{array, convert, higher_order, print},
        },
        value::{core::Value, function::Function},
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives the evaluator, the evaluated arguments (already checked
/// against its [`Arity`]) and the frame allocated for the call.
pub type BuiltinFn = fn(&mut Evaluator, &[Value], FrameId) -> EvalResult<Value>;

/// Specifies the allowed number of arguments for a builtin.
///
/// - `Exact(n)` means the builtin must receive exactly `n` arguments.
/// - `Variadic` accepts any number, including none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Exactly this many arguments.
    Exact(usize),
    /// Any number of arguments.
    Variadic,
}

impl Arity {
    /// Checks an argument count against this arity.
    ///
    /// # Errors
    /// [`RuntimeError::WrongArgumentCount`] if the count is not accepted.
    pub const fn check(self, got: usize) -> Result<(), RuntimeError> {
        match self {
            Self::Exact(want) if want != got => Err(RuntimeError::WrongArgumentCount { want, got }),
            _ => Ok(()),
        }
    }
}

/// A builtin function: its name in the root frame, how many arguments it
/// takes and its implementation.
#[derive(Debug)]
pub struct BuiltinDef {
    /// The name the builtin is bound to.
    pub name:  &'static str,
    /// The accepted argument count.
    pub arity: Arity,
    /// The implementation.
    pub func:  BuiltinFn,
}

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - an arity specification,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BUILTINS` (static table of [`BuiltinDef`]s),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        /// Every builtin, in installation order.
        pub static BUILTINS: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        /// Names of every builtin.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "print"   => { arity: Arity::Variadic, func: |evaluator, args, _| print::print(evaluator, args, "") },
    "println" => { arity: Arity::Variadic, func: |evaluator, args, _| print::print(evaluator, args, "\n") },
    "input"   => { arity: Arity::Exact(0), func: print::input },
    "len"     => { arity: Arity::Exact(1), func: array::len },
    "push"    => { arity: Arity::Exact(2), func: array::push },
    "pop"     => { arity: Arity::Exact(1), func: array::pop },
    "toInt"   => { arity: Arity::Exact(1), func: convert::to_int },
    "toFloat" => { arity: Arity::Exact(1), func: convert::to_float },
    "map"     => { arity: Arity::Exact(2), func: higher_order::map },
    "filter"  => { arity: Arity::Exact(2), func: higher_order::filter },
    "reduce"  => { arity: Arity::Exact(3), func: higher_order::reduce },
}

/// Binds every builtin in `frame`.
///
/// # Example
/// ```
/// use monkey::interpreter::{
///     environment::Environment,
///     evaluator::function::core::{BUILTIN_FUNCTIONS, install_builtins},
/// };
///
/// let mut env = Environment::new();
/// let root = env.root();
/// install_builtins(&mut env, root);
///
/// for name in BUILTIN_FUNCTIONS {
///     assert_eq!(env.get(root, name).unwrap().kind_name(), "Function");
/// }
/// ```
pub fn install_builtins(environment: &mut Environment, frame: FrameId) {
    for def in BUILTINS {
        environment.set(frame, def.name, Value::Function(Function::Builtin(def)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_arity() {
        assert_eq!(Arity::Exact(2).check(2), Ok(()));
        assert_eq!(Arity::Exact(0).check(1),
                   Err(RuntimeError::WrongArgumentCount { want: 0, got: 1 }));
    }

    #[test]
    fn variadic_accepts_anything() {
        assert_eq!(Arity::Variadic.check(0), Ok(()));
        assert_eq!(Arity::Variadic.check(100), Ok(()));
    }

    #[test]
    fn names_are_unique() {
        for (i, name) in BUILTIN_FUNCTIONS.iter().enumerate() {
            assert!(!BUILTIN_FUNCTIONS[i + 1..].contains(name), "{name} is defined twice");
        }
    }

    #[test]
    fn builtins_compare_by_name() {
        let len = BUILTINS.iter().find(|def| def.name == "len").unwrap();
        let pop = BUILTINS.iter().find(|def| def.name == "pop").unwrap();

        assert_eq!(Function::Builtin(len), Function::Builtin(len));
        assert_ne!(Function::Builtin(len), Function::Builtin(pop));
    }
}
