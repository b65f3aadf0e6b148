use crate::{
    ast::{BlockStatement, Expr, Identifier},
    interpreter::{
        parser::{binary::Precedence, core::Parser},
        token::TokenKind,
    },
};

impl Parser<'_> {
    /// Parses statements up to the closing `}`.
    ///
    /// The cursor must already be past the opening `{`. Stops at `}` or at
    /// the end of input, then expects the `}`.
    ///
    /// Grammar: `block := "{" statement* "}"`
    pub(super) fn parse_block_body(&mut self) -> BlockStatement {
        let mut statements = Vec::new();

        while !self.at(TokenKind::Eof) && !self.at(TokenKind::CloseBrace) {
            statements.push(self.parse_statement());
        }
        self.expect(TokenKind::CloseBrace);

        BlockStatement { statements }
    }

    /// Parses a parameter list after the opening `(`, including the closing
    /// `)`.
    pub(super) fn parse_parameters(&mut self) -> Vec<Option<Identifier>> {
        if self.at(TokenKind::CloseParen) {
            self.advance();
            return Vec::new();
        }

        let mut parameters = vec![self.parse_identifier()];
        while self.at(TokenKind::Comma) {
            self.advance();
            parameters.push(self.parse_identifier());
        }
        self.expect(TokenKind::CloseParen);

        parameters
    }

    /// Parses a comma-separated expression list after its opening token,
    /// including the closing `end` token.
    pub(super) fn parse_expression_list(&mut self, end: TokenKind) -> Vec<Option<Expr>> {
        if self.at(end) {
            self.advance();
            return Vec::new();
        }

        let mut elements = vec![self.parse_expression(Precedence::Lowest)];
        while self.at(TokenKind::Comma) {
            self.advance();
            elements.push(self.parse_expression(Precedence::Lowest));
        }
        self.expect(end);

        elements
    }
}
