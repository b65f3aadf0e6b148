use log::trace;

use crate::{
    ast::{
        ArrayLiteral, AssignmentExpr, BooleanLiteral, Expr, FloatLiteral, FunctionLiteral,
        Identifier, IntegerLiteral, StringLiteral,
    },
    error::ParseError,
    interpreter::{
        parser::{
            binary::{Precedence, token_to_binary_operator},
            core::Parser,
        },
        token::TokenKind,
    },
};

impl Parser<'_> {
    /// Parses an expression whose operators all bind tighter than
    /// `precedence`.
    ///
    /// This is the precedence-climbing loop: one prefix form is parsed, then
    /// infix operators, calls and index expressions are folded onto it for as
    /// long as the current token binds tighter than `precedence`. A `;` or the
    /// end of input always stops the loop.
    ///
    /// Returns `None` when no expression could be parsed at all. A `;` in
    /// prefix position does that silently; the end of input and stray tokens
    /// record a diagnostic, and stray tokens are skipped.
    ///
    /// # Parameters
    /// - `precedence`: Binding power of the operator to the left, or
    ///   [`Precedence::Lowest`] for a full expression.
    ///
    /// # Returns
    /// The parsed expression, or `None` for a missing expression.
    pub(super) fn parse_expression(&mut self, precedence: Precedence) -> Option<Expr> {
        let mut left = self.parse_prefix()?;

        loop {
            let token = self.current();
            if matches!(token.kind, TokenKind::Eof | TokenKind::SemiColon)
               || precedence >= Precedence::of(token.kind)
            {
                break;
            }

            left = if let Some(operator) = token_to_binary_operator(token.kind) {
                self.parse_binary(left, operator)
            } else {
                match token.kind {
                    TokenKind::OpenParen => self.parse_call(left),
                    TokenKind::OpenBracket => self.parse_index(left),
                    _ => break,
                }
            };
        }

        left
    }

    /// Parses the prefix form at the cursor.
    ///
    /// The outer `Option` is `None` when there is no expression at all; the
    /// inner one is `None` for a literal that was recognized but could not be
    /// converted, which still lets infix operators fold onto it.
    fn parse_prefix(&mut self) -> Option<Option<Expr>> {
        let token = self.current();
        trace!("prefix at {token}");

        let expr = match token.kind {
            TokenKind::Eof => {
                let found = self.found();
                self.error(ParseError::UnexpectedEndOfFile { found });
                return None;
            },
            TokenKind::SemiColon => return None,
            TokenKind::Integer => {
                self.advance();
                match token.literal().parse() {
                    Ok(value) => Some(Expr::Integer(IntegerLiteral { value })),
                    Err(_) => {
                        self.error(ParseError::InvalidLiteral { found: token.into() });
                        None
                    },
                }
            },
            TokenKind::Float => {
                self.advance();
                match token.literal().parse() {
                    Ok(value) => Some(Expr::Float(FloatLiteral { value })),
                    Err(_) => {
                        self.error(ParseError::InvalidLiteral { found: token.into() });
                        None
                    },
                }
            },
            TokenKind::True | TokenKind::False => {
                self.advance();
                Some(Expr::Boolean(BooleanLiteral { value: token.kind == TokenKind::True }))
            },
            TokenKind::String => {
                self.advance();
                Some(Expr::String(StringLiteral { literal: token.literal().to_string() }))
            },
            TokenKind::Identifier => Some(self.parse_identifier_or_assignment()),
            TokenKind::Bang | TokenKind::Plus | TokenKind::Minus => Some(self.parse_unary()),
            TokenKind::OpenParen => self.parse_grouped(),
            TokenKind::Function => Some(Expr::Function(self.parse_function_literal())),
            TokenKind::OpenBracket => Some(self.parse_array_literal()),
            _ => {
                self.error(ParseError::UnexpectedToken { found: token.into() });
                self.advance();
                return None;
            },
        };

        Some(expr)
    }

    /// Parses `name`, or `name = value` when an `=` follows.
    fn parse_identifier_or_assignment(&mut self) -> Expr {
        let name = Identifier::new(self.advance().literal());

        if self.at(TokenKind::Assign) {
            self.advance();
            let value = self.parse_expression(Precedence::Lowest);
            return Expr::Assignment(AssignmentExpr { name,
                                                     value: value.map(Box::new) });
        }

        Expr::Identifier(name)
    }

    /// Parses `( expr )`. The parentheses leave no trace in the tree.
    fn parse_grouped(&mut self) -> Option<Expr> {
        self.advance();
        let expression = self.parse_expression(Precedence::Lowest);
        self.expect(TokenKind::CloseParen);
        expression
    }

    /// Parses `fn(params) { ... }`.
    fn parse_function_literal(&mut self) -> FunctionLiteral {
        self.advance();
        self.expect(TokenKind::OpenParen);
        let parameters = self.parse_parameters();
        self.expect(TokenKind::OpenBrace);
        let body = self.parse_block_body();

        FunctionLiteral { parameters, body }
    }

    /// Parses `[a, b, ...]`.
    fn parse_array_literal(&mut self) -> Expr {
        self.advance();
        let elements = self.parse_expression_list(TokenKind::CloseBracket);
        Expr::Array(ArrayLiteral { elements })
    }
}
