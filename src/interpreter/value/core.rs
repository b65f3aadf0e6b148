use std::rc::Rc;

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::function::Function},
};

/// Represents a runtime value in the interpreter.
///
/// Values are immutable. Arrays share their storage through an [`Rc`], so
/// cloning a value is cheap and builtins that "modify" an array build a new
/// one instead.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// The absence of a value. Produced by empty blocks, `print`, a false
    /// `if` without `else`, and `+`/`-` on booleans.
    Null,
    /// A 32-bit signed integer. Arithmetic wraps on overflow.
    Integer(i32),
    /// A 32-bit float.
    Float(f32),
    /// A string.
    String(String),
    /// A boolean value (`true` or `false`).
    Boolean(bool),
    /// An array of `Value` elements.
    Array(Rc<Vec<Self>>),
    /// A user-defined or builtin function.
    Function(Function),
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Integer(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Self::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::Array(Rc::new(v))
    }
}

impl From<Function> for Value {
    fn from(v: Function) -> Self {
        Self::Function(v)
    }
}

impl Value {
    /// The name of the value's kind, as used in error messages.
    ///
    /// # Example
    /// ```
    /// use monkey::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Integer(1).kind_name(), "Integer");
    /// assert_eq!(Value::from(Vec::<Value>::new()).kind_name(), "Array");
    /// ```
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Null => "Null",
            Self::Integer(_) => "Integer",
            Self::Float(_) => "Float",
            Self::String(_) => "String",
            Self::Boolean(_) => "Boolean",
            Self::Array(_) => "Array",
            Self::Function(_) => "Function",
        }
    }

    /// Returns the elements if the value is an array.
    ///
    /// # Parameters
    /// - `error`: The error to return for any other kind.
    pub fn as_array(&self, error: RuntimeError) -> EvalResult<&Rc<Vec<Self>>> {
        match self {
            Self::Array(elements) => Ok(elements),
            _ => Err(error.into()),
        }
    }

    /// Returns the function if the value is one.
    ///
    /// # Parameters
    /// - `error`: The error to return for any other kind.
    pub fn as_function(&self, error: RuntimeError) -> EvalResult<&Function> {
        match self {
            Self::Function(function) => Ok(function),
            _ => Err(error.into()),
        }
    }

    /// Returns `true` for [`Value::Null`].
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Float(x) => write!(f, "{x:?}"),
            Self::String(s) => write!(f, "{s}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Array(a) => {
                write!(f, "[")?;

                for (index, value) in a.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{value}")?;
                }

                write!(f, "]")
            },
            Self::Function(function) => write!(f, "{function}"),
        }
    }
}
