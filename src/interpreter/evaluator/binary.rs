/// Dispatch on operand kinds.
///
/// Both operands must have the same kind, except that nothing at all is
/// defined for `null` and function values on the left.
pub mod core;

/// Integer and float arithmetic.
pub mod scalar;

/// Relational and equality operators shared by every ordered kind.
pub mod comparison;

/// String concatenation and comparison.
pub mod string;

/// Boolean operators.
///
/// `&&` and `||` receive both operands already evaluated; there is no
/// short-circuiting.
pub mod logic;

/// Structural array equality.
pub mod array;
