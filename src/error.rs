/// Syntax diagnostics.
///
/// Defines the diagnostics the parser records while it keeps going, and the
/// aggregate failure they are escalated into once parsing is done.
pub mod parse_error;
/// Runtime errors.
///
/// Contains every error that evaluation can raise: unbound names, operator
/// and operand mismatches, failed calls, bad indices and builtin argument
/// checks.
pub mod runtime_error;

pub use parse_error::{FoundToken, ParseError, ParseErrors};
pub use runtime_error::RuntimeError;
