#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
///
/// An error stops the statement list it occurs in and travels unchanged up to
/// the top of the program. Nothing in the language can catch one.
pub enum RuntimeError {
    /// A name is not bound in the current frame or any ancestor.
    UnknownIdentifier {
        /// The name that was looked up.
        name: String,
    },
    /// A binary operator applied to operands of different kinds.
    OperandMismatch {
        /// The operator symbol.
        operator: &'static str,
        /// Kind of the left operand.
        left:     &'static str,
        /// Kind of the right operand.
        right:    &'static str,
    },
    /// An operator the operand kind does not support.
    UnknownOperator {
        /// The operator symbol.
        operator: &'static str,
        /// Kind of the (left) operand.
        kind:     &'static str,
    },
    /// Integer division with a zero divisor.
    DivisionByZero,
    /// An `if` condition that is not a boolean.
    ConditionNotBoolean,
    /// Called something that is not a function.
    NotAFunction,
    /// Indexed something that is not an array.
    NotAnArray,
    /// An array index that is not an integer.
    IndexNotInteger,
    /// An array index outside `[0, len)`.
    IndexOutOfBounds,
    /// An element of an array literal failed to evaluate.
    InvalidArrayElements,
    /// A function received the wrong number of arguments.
    WrongArgumentCount {
        /// Number of parameters the function takes.
        want: usize,
        /// Number of arguments supplied.
        got:  usize,
    },
    /// A builtin received an argument of the wrong kind.
    InvalidArgument {
        /// What the argument should have been.
        details: &'static str,
    },
    /// `pop` on an empty array.
    ArrayIsEmpty,
    /// `toInt` or `toFloat` got text that is not a number.
    ConversionFailed {
        /// The text that failed to parse.
        text:   String,
        /// The kind that was requested.
        target: &'static str,
    },
    /// `input` found no more lines to read.
    InputExhausted,
    /// A syntax slot the parser could not fill was reached.
    Missing {
        /// Which slot was empty.
        slot: &'static str,
    },
    /// `while` is part of the grammar but cannot be run.
    WhileUnsupported,
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownIdentifier { name } => write!(f, "Unknown identifier {name}"),
            Self::OperandMismatch { operator,
                                    left,
                                    right, } => {
                write!(f, "Unknown operator {operator} for {left} and {right}")
            },
            Self::UnknownOperator { operator, kind } => {
                write!(f, "Unknown operator {operator} for {kind}")
            },
            Self::DivisionByZero => write!(f, "Division by zero"),
            Self::ConditionNotBoolean => write!(f, "Condition must be a boolean"),
            Self::NotAFunction => write!(f, "Not a function"),
            Self::NotAnArray => write!(f, "Not an array"),
            Self::IndexNotInteger => write!(f, "Index must be an integer"),
            Self::IndexOutOfBounds => write!(f, "Index out of bounds"),
            Self::InvalidArrayElements => write!(f, "Array elements must be valid"),
            Self::WrongArgumentCount { want, got } => {
                write!(f, "Wrong number of arguments: want={want}, got={got}")
            },
            Self::InvalidArgument { details } => write!(f, "{details}"),
            Self::ArrayIsEmpty => write!(f, "Array is empty"),
            Self::ConversionFailed { text, target } => {
                write!(f, "Cannot convert '{text}' to {target}")
            },
            Self::InputExhausted => write!(f, "No more input to read"),
            Self::Missing { slot } => write!(f, "{slot} is missing"),
            Self::WhileUnsupported => write!(f, "while statements are not supported"),
        }
    }
}

impl std::error::Error for RuntimeError {}
