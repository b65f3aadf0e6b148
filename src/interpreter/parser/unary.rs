use crate::{
    ast::{Expr, UnaryExpr, UnaryOperator},
    interpreter::{
        parser::{binary::Precedence, core::Parser},
        token::TokenKind,
    },
};

impl Parser<'_> {
    /// Parses a prefix operator and its operand.
    ///
    /// The operand is parsed at [`Precedence::Prefix`], so `-a * b` is
    /// `((-a) * b)` while `-f(x)` and `-a[0]` negate the call and the index.
    ///
    /// Grammar: `unary := ("!" | "+" | "-") unary`
    pub(super) fn parse_unary(&mut self) -> Expr {
        let operator = match self.advance().kind {
            TokenKind::Bang => UnaryOperator::Not,
            TokenKind::Plus => UnaryOperator::Plus,
            _ => UnaryOperator::Negate,
        };
        let operand = self.parse_expression(Precedence::Prefix);

        Expr::Unary(UnaryExpr { operator,
                                operand: operand.map(Box::new) })
    }
}
