/// Core evaluation logic.
///
/// Contains the [`core::Evaluator`], the [`core::Signal`] that carries
/// `return` and errors up the tree, and function invocation.
pub mod core;

/// Where `print`, `println` and `input` talk to.
pub mod console;

/// Statement evaluation: programs, blocks, `let`, `return`, `if`, `while`
/// and function definitions.
pub mod statement;

/// Expression evaluation: identifiers, literals, calls, assignment and
/// indexing.
pub mod expression;

/// Binary operator evaluation logic.
///
/// Dispatches on the kind of the left operand and implements arithmetic,
/// comparison, string concatenation and the logical operators.
pub mod binary;

/// Prefix operator evaluation logic.
pub mod unary;

/// Helpers shared by the evaluator and the builtins.
pub mod utils;

/// Builtin functions installed into the root frame.
pub mod function;
