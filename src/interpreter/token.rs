use logos::Logos;

/// The closed set of token kinds produced by the lexer.
///
/// The lexical grammar lives on the variants themselves. `Illegal` and `Eof`
/// carry no pattern: the lexer produces them for unrecognized input and for
/// the end of the source respectively.
///
/// The `Debug` rendering of a kind doubles as its name in parser diagnostics
/// (`Expected SemiColon, got Eof ...`), so variants must not be renamed
/// casually.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(skip r"\s+")]
pub enum TokenKind {
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+")]
    Integer,
    /// Float literal tokens, such as `3.14` or `2.`.
    ///
    /// A second `.` right after the literal turns the whole run into an
    /// `Illegal` token instead.
    #[regex(r"[0-9]+\.[0-9]*", single_dot)]
    Float,
    /// String literal tokens, kept verbatim with quotes and backslashes.
    #[regex(r#""([^"\\]|\\")*["\\]?"#, allow_greedy = true)]
    String,

    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Asterisk,
    /// `/`
    #[token("/")]
    Slash,
    /// `=`
    #[token("=")]
    Assign,
    /// `&`
    #[token("&")]
    Ampersand,
    /// `|`
    #[token("|")]
    Pipe,
    /// `**`
    #[token("**")]
    DoubleAsterisk,
    /// `>`
    #[token(">")]
    GreaterThan,
    /// `<`
    #[token("<")]
    LessThan,
    /// `!`
    #[token("!")]
    Bang,
    /// `>=`
    #[token(">=")]
    GreaterThanEquals,
    /// `<=`
    #[token("<=")]
    LessThanEquals,
    /// `==`
    #[token("==")]
    Equals,
    /// `!=`
    #[token("!=")]
    NotEquals,
    /// `&&`
    #[token("&&")]
    And,
    /// `||`
    #[token("||")]
    Or,

    /// `let`
    #[token("let")]
    Let,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `true`
    #[token("true")]
    True,
    /// `false`
    #[token("false")]
    False,
    /// `while`
    #[token("while")]
    While,
    /// `fn`
    #[token("fn")]
    Function,
    /// `return`
    #[token("return")]
    Return,

    /// `(`
    #[token("(")]
    OpenParen,
    /// `)`
    #[token(")")]
    CloseParen,
    /// `{`
    #[token("{")]
    OpenBrace,
    /// `}`
    #[token("}")]
    CloseBrace,
    /// `[`
    #[token("[")]
    OpenBracket,
    /// `]`
    #[token("]")]
    CloseBracket,
    /// `,`
    #[token(",")]
    Comma,
    /// `:`
    #[token(":")]
    Colon,
    /// `;`
    #[token(";")]
    SemiColon,
    /// `->`
    #[token("->")]
    Arrow,

    /// A character that starts no token, or a malformed number.
    Illegal,
    /// Identifier tokens; variable or function names such as `x` or `$tmp`.
    #[regex(r"[a-zA-Z_$][a-zA-Z0-9_$]*")]
    Identifier,
    /// End of input. Returned forever once the source is exhausted.
    Eof,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

/// Rejects a float literal that is immediately followed by another `.`.
///
/// Returning `false` makes logos report the matched slice as an error, which
/// the lexer turns into an `Illegal` token covering the digits and the first
/// dot only.
fn single_dot(lex: &logos::Lexer<TokenKind>) -> bool {
    !lex.remainder().starts_with('.')
}

/// A region of the source text, together with the text it covers.
///
/// `start` and `end` are byte offsets into the source, `end` exclusive.
/// `literal` is always exactly `&source[start..end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span<'src> {
    /// Offset of the first byte of the token.
    pub start:   usize,
    /// Offset one past the last byte of the token.
    pub end:     usize,
    /// The covered source text.
    pub literal: &'src str,
}

impl<'src> Span<'src> {
    /// Creates a new span.
    #[must_use]
    pub const fn new(start: usize, end: usize, literal: &'src str) -> Self {
        Self { start, end, literal }
    }

    /// Returns the length of the span in bytes.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns `true` if the span covers no text (only `Eof` does).
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// A lexical token: its kind and where it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token<'src> {
    /// What the token is.
    pub kind: TokenKind,
    /// Where the token is.
    pub span: Span<'src>,
}

impl<'src> Token<'src> {
    /// Creates a new token.
    #[must_use]
    pub const fn new(kind: TokenKind, span: Span<'src>) -> Self {
        Self { kind, span }
    }

    /// The source text of the token.
    #[must_use]
    pub const fn literal(&self) -> &'src str {
        self.span.literal
    }
}

impl std::fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f,
               "{} at start: {} end: {} literal: {}",
               self.kind, self.span.start, self.span.end, self.span.literal)
    }
}
