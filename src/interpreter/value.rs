/// The runtime value type.
///
/// Defines [`core::Value`], its kind names as they appear in error messages,
/// conversions from Rust types and the display format used by `print` and the
/// REPL.
pub mod core;

/// Function values.
///
/// User-defined functions capture their parameter list and body when the
/// definition is evaluated; builtins are references into the static builtin
/// table.
pub mod function;
