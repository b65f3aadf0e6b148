/// The token vocabulary and source spans.
///
/// [`token::TokenKind`] is the closed set of token kinds; its variant names
/// appear verbatim in parse diagnostics. Spans are byte offsets into the
/// source.
pub mod token;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and hands out one token at a time.
/// Characters that start no token become `Illegal` tokens instead of errors,
/// so the parser decides how to report them.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser pulls tokens from the lexer with a single token of lookahead
/// and builds the AST by precedence climbing. It never stops at the first
/// problem: diagnostics are collected and the offending slot in the tree is
/// left empty.
pub mod parser;
/// Scope frames and name lookup.
///
/// Frames live in an arena inside [`environment::Environment`] and are
/// addressed by [`environment::FrameId`].
pub mod environment;
/// The value module defines the runtime data types for evaluation.
///
/// # Responsibilities
/// - Defines the `Value` enum and all supported value variants.
/// - Defines function values, both user-defined and builtin.
/// - Formats values the way `print` and the REPL show them.
pub mod value;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator is a [`Visitor`](crate::ast::visitor::Visitor) over the AST
/// whose context is the frame to evaluate in.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Handles variables, function calls, `return` and `if`.
/// - Reports runtime errors such as division by zero or invalid operations.
pub mod evaluator;
