use log::debug;

use crate::{
    ast::{Identifier, Program},
    error::{FoundToken, ParseError, ParseErrors},
    interpreter::{
        lexer::Lexer,
        token::{Token, TokenKind},
    },
};

/// A recursive-descent, precedence-climbing parser.
///
/// The parser pulls tokens from its [`Lexer`] one at a time and always looks
/// at exactly one current token. It never aborts: every syntax problem is
/// recorded as a [`ParseError`] and parsing resumes, so a single call to
/// [`Parser::parse`] reports all the problems it can find. Slots it could not
/// fill are left empty in the returned tree.
///
/// # Example
/// ```
/// use monkey::interpreter::parser::core::Parser;
///
/// let mut parser = Parser::new("let x = 1 + 2 * 3;");
/// let program = parser.parse();
///
/// assert!(parser.report_errors().is_ok());
/// assert_eq!(program.to_string(), "let x = (1 + (2 * 3));");
/// ```
pub struct Parser<'src> {
    lexer:  Lexer<'src>,
    token:  Token<'src>,
    errors: Vec<ParseError>,
}

impl<'src> Parser<'src> {
    /// Creates a parser over `source`, positioned at its first token.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self::from_lexer(Lexer::new(source))
    }

    /// Creates a parser reading from an existing lexer.
    #[must_use]
    pub fn from_lexer(mut lexer: Lexer<'src>) -> Self {
        let token = lexer.next_token();
        Self { lexer,
               token,
               errors: Vec::new() }
    }

    /// Parses statements until the end of input.
    ///
    /// Always returns a program; check [`Parser::errors`] or
    /// [`Parser::report_errors`] before trusting it.
    pub fn parse(&mut self) -> Program {
        let mut statements = Vec::new();
        while self.token.kind != TokenKind::Eof {
            statements.push(self.parse_statement());
        }

        debug!("parsed {} statements with {} diagnostics",
               statements.len(),
               self.errors.len());

        Program { statements }
    }

    /// The diagnostics recorded so far, in order.
    #[must_use]
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    /// Returns `true` if any diagnostic has been recorded.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Escalates the recorded diagnostics into a single failure.
    ///
    /// # Errors
    /// Returns [`ParseErrors`] holding every diagnostic if there is at least
    /// one.
    pub fn report_errors(&self) -> Result<(), ParseErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ParseErrors::new(self.errors.clone()))
        }
    }

    /// The token under the cursor.
    pub(super) const fn current(&self) -> Token<'src> {
        self.token
    }

    /// Moves to the next token and returns the one that was current.
    pub(super) fn advance(&mut self) -> Token<'src> {
        let previous = self.token;
        self.token = self.lexer.next_token();
        previous
    }

    /// Kind of the token after the current one, without consuming anything.
    pub(super) fn peek_kind(&self) -> TokenKind {
        self.lexer.clone().next_token().kind
    }

    /// Returns `true` if the current token has the given kind.
    pub(super) fn at(&self, kind: TokenKind) -> bool {
        self.token.kind == kind
    }

    /// Consumes the current token if it has the expected kind.
    ///
    /// On a mismatch a diagnostic is recorded and the token is left in place.
    pub(super) fn expect(&mut self, expected: TokenKind) {
        if self.at(expected) {
            self.advance();
        } else {
            self.error(ParseError::ExpectedToken { expected,
                                                   found: self.token.into() });
        }
    }

    /// Parses an identifier slot.
    ///
    /// On failure the current token is left in place and `None` is returned.
    pub(super) fn parse_identifier(&mut self) -> Option<Identifier> {
        match self.token.kind {
            TokenKind::Identifier => Some(Identifier::new(self.advance().literal())),
            TokenKind::Eof => {
                self.error(ParseError::UnexpectedEndOfFile { found: self.token.into() });
                None
            },
            _ => {
                self.error(ParseError::ExpectedToken { expected: TokenKind::Identifier,
                                                       found:    self.token.into(), });
                None
            },
        }
    }

    /// Records a diagnostic.
    pub(super) fn error(&mut self, error: ParseError) {
        debug!("parse error: {error}");
        self.errors.push(error);
    }

    /// Snapshot of the current token for a diagnostic.
    pub(super) fn found(&self) -> FoundToken {
        self.token.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn messages(source: &str) -> String {
        let mut parser = Parser::new(source);
        parser.parse();
        parser.report_errors()
              .expect_err("source should not parse cleanly")
              .to_string()
    }

    #[test]
    fn let_without_name() {
        assert_eq!(messages("let = 1;"),
                   "Expected Identifier, got Assign at start: 4 end: 5 literal: =");
    }

    #[test]
    fn let_without_assign() {
        assert_eq!(messages("let a 1;"),
                   "Expected Assign, got Integer at start: 6 end: 7 literal: 1");
    }

    #[test]
    fn let_without_assign_or_value_reports_both() {
        assert_eq!(messages("let a;"),
                   "Expected Assign, got SemiColon at start: 5 end: 6 literal: ;\n\
                    Expected expression, got SemiColon at start: 5 end: 6 literal: ;");
    }

    #[test]
    fn let_without_value() {
        assert_eq!(messages("let a=;"),
                   "Expected expression, got SemiColon at start: 6 end: 7 literal: ;");
    }

    #[test]
    fn let_without_semicolon() {
        assert_eq!(messages("let a = 1"),
                   "Expected SemiColon, got Eof at start: 9 end: 9 literal: ");
    }

    #[test]
    fn illegal_token_in_prefix_position() {
        assert_eq!(messages("%;"),
                   "Unexpected token Illegal at start: 0 end: 1 literal: %");
    }

    #[test]
    fn end_of_file_where_an_expression_is_needed() {
        assert_eq!(messages("return"),
                   "Unexpected end of file\nExpected SemiColon, got Eof at start: 6 end: 6 literal: ");
    }

    #[test]
    fn integer_literal_out_of_range() {
        assert_eq!(messages("2147483648;"),
                   "Invalid Integer literal at start: 0 end: 10 literal: 2147483648");
    }

    #[test]
    fn diagnostics_expose_their_position() {
        let mut parser = Parser::new("let = 1;");
        parser.parse();

        let error = &parser.errors()[0];
        assert_eq!(error.start(), 4);
        assert_eq!(error.end(), 5);
        assert_eq!(error.literal(), "=");
        assert!(error.message().starts_with("Expected Identifier"));
    }

    #[test]
    fn clean_source_has_no_errors() {
        let mut parser = Parser::new("let a = 1; a;");
        parser.parse();

        assert!(!parser.has_errors());
        assert!(parser.report_errors().is_ok());
    }

    #[test]
    fn parsing_always_terminates_on_garbage() {
        let mut parser = Parser::new(") } ] else , = ** & | : -> fn ( { [");
        let program = parser.parse();

        assert!(parser.has_errors());
        assert!(!program.statements.is_empty());
    }
}
