//! # monkey
//!
//! monkey is a small dynamically-typed scripting language written in Rust.
//! It lexes, parses and evaluates programs with integers, floats, strings,
//! booleans, arrays and first-class functions.
//!
//! ```
//! use monkey::{interpreter::value::core::Value, run};
//!
//! let source = "fn square(x) { x * x; } reduce(map([1, 2, 3], square), fn(a, b) { a + b; }, 0);";
//! assert_eq!(run(source, false).unwrap(), Value::Integer(14));
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use log::debug;

use crate::{
    ast::Program,
    error::ParseErrors,
    interpreter::{evaluator::core::Evaluator, parser::core::Parser, value::core::Value},
};

/// Defines the structure of parsed code.
///
/// This module declares the statement and expression node types, their
/// source-like `Display` form and the [`visitor::Visitor`] trait used to walk
/// them.
///
/// # Responsibilities
/// - Defines one node type per language construct.
/// - Marks slots the parser could not fill as `None`.
/// - Provides double dispatch through [`visitor::Node::accept`].
pub mod ast;
/// Provides the error types for parsing and evaluation.
///
/// Parse errors are collected and reported together; a runtime error stops
/// evaluation immediately. The two are kept apart.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, the scope chain and
/// value representations.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides entry points for parsing and evaluating user code.
pub mod interpreter;
/// General utilities for safe numeric conversion.
pub mod util;

/// Parses a whole program.
///
/// # Errors
/// Returns every diagnostic the parser produced if there was at least one.
///
/// # Examples
/// ```
/// use monkey::parse;
///
/// let program = parse("let x = 1 + 2 * 3;").unwrap();
/// assert_eq!(program.to_string(), "let x = (1 + (2 * 3));");
///
/// let errors = parse("let = 1;").unwrap_err();
/// assert_eq!(errors.to_string(), "Expected Identifier, got Assign at start: 4 end: 5 literal: =");
/// ```
pub fn parse(source: &str) -> Result<Program, ParseErrors> {
    let mut parser = Parser::new(source);
    let program = parser.parse();
    parser.report_errors()?;
    Ok(program)
}

/// Parses and evaluates a program with a fresh evaluator and returns the
/// value of its last statement.
///
/// With `auto_print` set, a non-null result is also printed to standard
/// output.
///
/// # Errors
/// Returns an error if parsing fails or if any runtime error occurs.
///
/// # Examples
/// ```
/// use monkey::{interpreter::value::core::Value, run};
///
/// let res = run("let result = 2 + 2;", false);
/// assert_eq!(res.unwrap(), Value::Integer(4));
///
/// // 'x' is not defined
/// let res = run("let y = x + 1;", false);
/// assert_eq!(res.unwrap_err().to_string(), "Unknown identifier x");
/// ```
pub fn run(source: &str, auto_print: bool) -> Result<Value, Box<dyn std::error::Error>> {
    let program = parse(source)?;
    debug!("running {} statements", program.statements.len());

    let value = Evaluator::new().evaluate(&program)?;

    if auto_print && !value.is_null() {
        println!("{value}");
    }

    Ok(value)
}
