use crate::interpreter::token::{Token, TokenKind};

/// The token a diagnostic points at, detached from the source lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundToken {
    /// Kind of the offending token.
    pub kind:    TokenKind,
    /// Byte offset where the token starts.
    pub start:   usize,
    /// Byte offset one past the end of the token.
    pub end:     usize,
    /// The token text.
    pub literal: String,
}

impl From<Token<'_>> for FoundToken {
    fn from(token: Token<'_>) -> Self {
        Self { kind:    token.kind,
               start:   token.span.start,
               end:     token.span.end,
               literal: token.literal().to_string(), }
    }
}

impl std::fmt::Display for FoundToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f,
               "{} at start: {} end: {} literal: {}",
               self.kind, self.start, self.end, self.literal)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A single syntax diagnostic.
///
/// The parser never stops at the first diagnostic; it records one of these
/// and keeps going. Each diagnostic knows the token it was raised at.
pub enum ParseError {
    /// A specific token kind was required but another one was found.
    ExpectedToken {
        /// The required kind.
        expected: TokenKind,
        /// The token actually found.
        found:    FoundToken,
    },
    /// A `let` statement has no value expression.
    ExpectedExpression {
        /// The token found where the value should start.
        found: FoundToken,
    },
    /// A token that cannot start an expression.
    UnexpectedToken {
        /// The offending token.
        found: FoundToken,
    },
    /// The input ended where an expression or identifier was required.
    UnexpectedEndOfFile {
        /// The `Eof` token.
        found: FoundToken,
    },
    /// A numeric literal whose text does not fit its type, such as an
    /// integer beyond 32 bits.
    InvalidLiteral {
        /// The literal token.
        found: FoundToken,
    },
}

impl ParseError {
    /// The token this diagnostic was raised at.
    #[must_use]
    pub const fn found(&self) -> &FoundToken {
        match self {
            Self::ExpectedToken { found, .. }
            | Self::ExpectedExpression { found }
            | Self::UnexpectedToken { found }
            | Self::UnexpectedEndOfFile { found }
            | Self::InvalidLiteral { found } => found,
        }
    }

    /// The full diagnostic message.
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Start offset of the offending token.
    #[must_use]
    pub const fn start(&self) -> usize {
        self.found().start
    }

    /// End offset of the offending token.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.found().end
    }

    /// Text of the offending token.
    #[must_use]
    pub fn literal(&self) -> &str {
        &self.found().literal
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ExpectedToken { expected, found } => write!(f, "Expected {expected}, got {found}"),
            Self::ExpectedExpression { found } => write!(f, "Expected expression, got {found}"),
            Self::UnexpectedToken { found } => write!(f, "Unexpected token {found}"),
            Self::UnexpectedEndOfFile { .. } => write!(f, "Unexpected end of file"),
            Self::InvalidLiteral { found } => write!(f,
                                                     "Invalid {} literal at start: {} end: {} literal: {}",
                                                     found.kind, found.start, found.end, found.literal),
        }
    }
}

impl std::error::Error for ParseError {}

/// Every diagnostic of one parse, escalated into a single failure.
///
/// Displays as the individual messages joined by newlines, in the order they
/// were recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseErrors {
    errors: Vec<ParseError>,
}

impl ParseErrors {
    /// Wraps a list of diagnostics.
    #[must_use]
    pub const fn new(errors: Vec<ParseError>) -> Self {
        Self { errors }
    }

    /// The individual diagnostics.
    #[must_use]
    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }
}

impl std::fmt::Display for ParseErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{error}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseErrors {}
