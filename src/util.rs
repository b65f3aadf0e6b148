/// Integer conversion helpers.
///
/// The language only has 32-bit signed integers, while Rust collections are
/// sized with `usize`. These helpers cross that boundary without `as` casts
/// that silently truncate.
pub mod num;
