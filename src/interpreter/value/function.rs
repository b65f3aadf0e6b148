use std::rc::Rc;

use crate::{
    ast::{BlockStatement, Identifier},
    interpreter::evaluator::function::core::BuiltinDef,
};

/// A callable value.
#[derive(Clone)]
pub enum Function {
    /// A function written in the language itself.
    User(Rc<UserFunction>),
    /// A function implemented in Rust.
    Builtin(&'static BuiltinDef),
}

/// The parameters and body captured from a function definition or literal.
///
/// Nothing from the defining scope is captured: the body runs in a frame
/// whose parent is the frame of the caller.
#[derive(Debug, PartialEq)]
pub struct UserFunction {
    /// Parameter names, in order.
    pub parameters: Vec<Identifier>,
    /// The function body.
    pub body:       BlockStatement,
}

impl Function {
    /// Name of a builtin, or `None` for user functions.
    #[must_use]
    pub const fn builtin_name(&self) -> Option<&'static str> {
        match self {
            Self::Builtin(def) => Some(def.name),
            Self::User(_) => None,
        }
    }
}

/// Two user functions are equal only if they are the same definition;
/// builtins are equal by name.
impl PartialEq for Function {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::User(a), Self::User(b)) => Rc::ptr_eq(a, b),
            (Self::Builtin(a), Self::Builtin(b)) => a.name == b.name,
            _ => false,
        }
    }
}

impl std::fmt::Debug for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::User(function) => f.debug_tuple("User").field(function).finish(),
            Self::Builtin(def) => f.debug_tuple("Builtin").field(&def.name).finish(),
        }
    }
}

impl std::fmt::Display for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::User(function) => {
                write!(f, "fn(")?;
                for (i, parameter) in function.parameters.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{parameter}")?;
                }
                write!(f, ") {}", function.body)
            },
            Self::Builtin(def) => write!(f, "builtin {}", def.name),
        }
    }
}
