/// The builtin table and arity checking.
///
/// Builtins are declared once with the `builtin_functions!` macro, which
/// produces the static table that [`core::install_builtins`] copies into a
/// root frame.
pub mod core;

/// `print`, `println` and `input`.
///
/// These go through the evaluator's
/// [`Console`](crate::interpreter::evaluator::console::Console) rather than
/// the standard streams directly.
pub mod print;

/// `len`, `push` and `pop`.
pub mod array;

/// `map`, `filter` and `reduce`.
///
/// Callbacks can be user functions or builtins. Each callback invocation
/// gets its own frame.
pub mod higher_order;

/// `toInt` and `toFloat`.
pub mod convert;
