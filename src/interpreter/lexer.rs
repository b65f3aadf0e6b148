use log::trace;
use logos::Logos;

use crate::interpreter::token::{Span, Token, TokenKind};

/// A pull-based lexer over a source string.
///
/// Each call to [`Lexer::next_token`] returns the next token. Once the source
/// is exhausted the lexer returns an `Eof` token spanning the empty range at
/// the end of the input, and keeps returning it. The cursor only moves
/// forward.
///
/// Invalid characters never fail the lexer: they come back as one-character
/// `Illegal` tokens for the parser to report.
///
/// # Example
/// ```
/// use monkey::interpreter::{lexer::Lexer, token::TokenKind};
///
/// let mut lexer = Lexer::new("let x = 1;");
///
/// assert_eq!(lexer.next_token().kind, TokenKind::Let);
/// assert_eq!(lexer.next_token().literal(), "x");
/// ```
#[derive(Clone)]
pub struct Lexer<'src> {
    inner: logos::Lexer<'src, TokenKind>,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer positioned at the start of `source`.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { inner: TokenKind::lexer(source) }
    }

    /// Scans and returns the next token.
    pub fn next_token(&mut self) -> Token<'src> {
        let Some(result) = self.inner.next() else {
            let end = self.inner.source().len();
            return Token::new(TokenKind::Eof, Span::new(end, end, ""));
        };

        let kind = result.unwrap_or(TokenKind::Illegal);

        // Logos may stop an error span inside a multi-byte character.
        while !self.inner.source().is_char_boundary(self.inner.span().end) {
            self.inner.bump(1);
        }

        let range = self.inner.span();
        let token = Token::new(kind, Span::new(range.start, range.end, self.inner.slice()));
        trace!("lexed {token}");
        token
    }
}

/// Scans a whole source string, including the final `Eof` token.
///
/// Mostly useful for tests and debugging; the parser pulls tokens one at a
/// time instead.
#[must_use]
pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token();
        tokens.push(token);
        if token.kind == TokenKind::Eof {
            return tokens;
        }
    }
}
