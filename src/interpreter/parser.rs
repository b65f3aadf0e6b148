/// Parser state, token cursor and diagnostics.
///
/// Holds the [`core::Parser`] struct, the single-token lookahead it parses
/// from and the list of diagnostics it accumulates.
pub mod core;

/// Statement parsing.
///
/// Dispatches on the first token of a statement: `let`, `return`, `if`,
/// `while`, blocks, named function definitions and expression statements.
pub mod statement;

/// Expression parsing entry point and prefix forms.
///
/// Implements the precedence-climbing loop together with literals,
/// identifiers, assignments, grouping, array literals and function literals.
pub mod expression;

/// Prefix operator parsing.
///
/// Handles `!`, `+` and `-` in front of an operand.
pub mod unary;

/// Infix operator parsing.
///
/// Defines the precedence ladder and folds binary operators, calls and index
/// expressions onto a left operand.
pub mod binary;

/// Shared delimited-list parsing.
///
/// Blocks, parameter lists and comma-separated expression lists.
pub mod block;
