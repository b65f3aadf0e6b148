use crate::{
    ast::{BinaryExpr, BinaryOperator, CallExpr, Expr, IndexExpr},
    interpreter::{parser::core::Parser, token::TokenKind},
};

/// Binding power of infix positions, weakest first.
///
/// The derived ordering is the precedence ladder; an operator folds onto the
/// expression to its left only if it binds strictly tighter than the
/// operator that started that expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// Anything that is not an infix operator.
    Lowest,
    /// `=`
    Assign,
    /// `&&`, `||`
    Logical,
    /// `==`, `!=`
    Equals,
    /// `<`, `>`, `<=`, `>=`
    LessGreater,
    /// `+`, `-`
    Sum,
    /// `*`, `/`
    Product,
    /// Operand of a prefix operator.
    Prefix,
    /// `f(x)`
    Call,
    /// `a[i]`
    ArrayIndex,
}

impl Precedence {
    /// Returns the infix binding power of a token kind.
    ///
    /// # Example
    /// ```
    /// use monkey::interpreter::{parser::binary::Precedence, token::TokenKind};
    ///
    /// assert!(Precedence::of(TokenKind::Asterisk) > Precedence::of(TokenKind::Plus));
    /// assert_eq!(Precedence::of(TokenKind::DoubleAsterisk), Precedence::Lowest);
    /// ```
    #[must_use]
    pub const fn of(kind: TokenKind) -> Self {
        match kind {
            TokenKind::Assign => Self::Assign,
            TokenKind::And | TokenKind::Or => Self::Logical,
            TokenKind::Equals | TokenKind::NotEquals => Self::Equals,
            TokenKind::LessThan
            | TokenKind::LessThanEquals
            | TokenKind::GreaterThan
            | TokenKind::GreaterThanEquals => Self::LessGreater,
            TokenKind::Plus | TokenKind::Minus => Self::Sum,
            TokenKind::Asterisk | TokenKind::Slash => Self::Product,
            TokenKind::OpenParen => Self::Call,
            TokenKind::OpenBracket => Self::ArrayIndex,
            _ => Self::Lowest,
        }
    }
}

/// Maps a token to the binary operator it spells, if any.
#[must_use]
pub const fn token_to_binary_operator(kind: TokenKind) -> Option<BinaryOperator> {
    use BinaryOperator::{
        Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, NotEqual, Or, Sub,
    };
    Some(match kind {
        TokenKind::Plus => Add,
        TokenKind::Minus => Sub,
        TokenKind::Asterisk => Mul,
        TokenKind::Slash => Div,
        TokenKind::LessThan => Less,
        TokenKind::GreaterThan => Greater,
        TokenKind::LessThanEquals => LessEqual,
        TokenKind::GreaterThanEquals => GreaterEqual,
        TokenKind::Equals => Equal,
        TokenKind::NotEquals => NotEqual,
        TokenKind::And => And,
        TokenKind::Or => Or,
        _ => return None,
    })
}

impl Parser<'_> {
    /// Folds `left op right` with the operator at the cursor.
    ///
    /// The right operand is parsed at the operator's own precedence, which
    /// makes every binary operator left-associative.
    pub(super) fn parse_binary(&mut self,
                               left: Option<Expr>,
                               operator: BinaryOperator)
                               -> Option<Expr> {
        let precedence = Precedence::of(self.advance().kind);
        let right = self.parse_expression(precedence);

        Some(Expr::Binary(BinaryExpr { left: left.map(Box::new),
                                       operator,
                                       right: right.map(Box::new) }))
    }

    /// Folds `callee(arguments)` with the `(` at the cursor.
    pub(super) fn parse_call(&mut self, callee: Option<Expr>) -> Option<Expr> {
        self.advance();
        let arguments = self.parse_expression_list(TokenKind::CloseParen);

        Some(Expr::Call(CallExpr { callee: callee.map(Box::new),
                                   arguments }))
    }

    /// Folds `array[index]` with the `[` at the cursor.
    pub(super) fn parse_index(&mut self, array: Option<Expr>) -> Option<Expr> {
        self.advance();
        let index = self.parse_expression(Precedence::Lowest);
        self.expect(TokenKind::CloseBracket);

        Some(Expr::Index(IndexExpr { array: array.map(Box::new),
                                     index: index.map(Box::new) }))
    }
}
