use crate::{
    ast::{
        ExpressionStatement, FunctionDefStatement, Identifier, IfStatement, LetStatement,
        ReturnStatement, Statement, WhileStatement,
    },
    error::ParseError,
    interpreter::{
        parser::{binary::Precedence, core::Parser},
        token::TokenKind,
    },
};

impl Parser<'_> {
    /// Parses a single statement starting at the current token.
    ///
    /// Dispatch is on the current token alone, except for `fn`: only `fn`
    /// followed by an identifier starts a function definition. Anything else
    /// beginning with `fn` is a function literal inside an expression
    /// statement, so `fn(a) { a; }(1);` calls the literal.
    ///
    /// Every statement consumes at least one token, which keeps the
    /// statement loops from spinning on bad input.
    pub(super) fn parse_statement(&mut self) -> Statement {
        match self.current().kind {
            TokenKind::Let => Statement::Let(self.parse_let()),
            TokenKind::Return => Statement::Return(self.parse_return()),
            TokenKind::If => Statement::If(self.parse_if()),
            TokenKind::While => Statement::While(self.parse_while()),
            TokenKind::OpenBrace => {
                self.advance();
                Statement::Block(self.parse_block_body())
            },
            TokenKind::Function if self.peek_kind() == TokenKind::Identifier => {
                Statement::FunctionDef(self.parse_function_def())
            },
            _ => Statement::Expression(self.parse_expression_statement()),
        }
    }

    /// Parses `let name = value;`.
    ///
    /// When the value is missing a diagnostic is recorded and the statement
    /// ends right there; the token that stopped it, usually the `;`, is left
    /// for the next statement.
    fn parse_let(&mut self) -> LetStatement {
        self.advance();
        let name = self.parse_identifier();
        self.expect(TokenKind::Assign);

        let Some(value) = self.parse_expression(Precedence::Lowest) else {
            let found = self.found();
            self.error(ParseError::ExpectedExpression { found });
            return LetStatement { name, value: None };
        };

        self.expect(TokenKind::SemiColon);
        LetStatement { name,
                       value: Some(value) }
    }

    fn parse_return(&mut self) -> ReturnStatement {
        self.advance();
        let value = self.parse_expression(Precedence::Lowest);
        self.expect(TokenKind::SemiColon);
        ReturnStatement { value }
    }

    /// Parses `if (condition) { ... }` with an optional `else { ... }`.
    fn parse_if(&mut self) -> IfStatement {
        self.advance();
        self.expect(TokenKind::OpenParen);
        let condition = self.parse_expression(Precedence::Lowest);
        self.expect(TokenKind::CloseParen);
        self.expect(TokenKind::OpenBrace);
        let consequence = self.parse_block_body();

        let alternative = if self.at(TokenKind::Else) {
            self.advance();
            self.expect(TokenKind::OpenBrace);
            Some(self.parse_block_body())
        } else {
            None
        };

        IfStatement { condition,
                      consequence,
                      alternative }
    }

    /// Parses `while (condition) { ... }`.
    fn parse_while(&mut self) -> WhileStatement {
        self.advance();
        self.expect(TokenKind::OpenParen);
        let condition = self.parse_expression(Precedence::Lowest);
        self.expect(TokenKind::CloseParen);
        self.expect(TokenKind::OpenBrace);
        let body = self.parse_block_body();

        WhileStatement { condition, body }
    }

    /// Parses `fn name(params) { ... }`. The caller has already checked that
    /// an identifier follows `fn`.
    fn parse_function_def(&mut self) -> FunctionDefStatement {
        self.advance();
        let name = Identifier::new(self.advance().literal());
        self.expect(TokenKind::OpenParen);
        let parameters = self.parse_parameters();
        self.expect(TokenKind::OpenBrace);
        let body = self.parse_block_body();

        FunctionDefStatement { name,
                               parameters,
                               body }
    }

    fn parse_expression_statement(&mut self) -> ExpressionStatement {
        let expression = self.parse_expression(Precedence::Lowest);
        self.expect(TokenKind::SemiColon);
        ExpressionStatement { expression }
    }
}

#[cfg(test)]
mod tests {
    use crate::{ast::Statement, interpreter::parser::core::Parser};

    fn parse(source: &str) -> Vec<Statement> {
        let mut parser = Parser::new(source);
        let program = parser.parse();
        assert!(parser.report_errors().is_ok(), "{:?}", parser.errors());
        program.statements
    }

    #[test]
    fn let_statements() {
        let statements = parse("let x = 5; let y = x;");

        assert_eq!(statements.len(), 2);
        assert_eq!(statements[0].to_string(), "let x = 5;");
        assert_eq!(statements[1].to_string(), "let y = x;");
    }

    #[test]
    fn return_statement() {
        assert_eq!(parse("return 1 + 2;")[0].to_string(), "return (1 + 2);");
    }

    #[test]
    fn if_with_and_without_else() {
        assert_eq!(parse("if (a < b) { a; } else { b; }")[0].to_string(),
                   "if ((a < b)) { a; } else { b; }");
        assert_eq!(parse("if (true) { 1; }")[0].to_string(), "if (true) { 1; }");
    }

    #[test]
    fn while_statement() {
        let statements = parse("while (x < 10) { x = x + 1; }");

        assert!(matches!(statements[0], Statement::While(_)));
        assert_eq!(statements[0].to_string(), "while ((x < 10)) { x = (x + 1); }");
    }

    #[test]
    fn block_statement() {
        assert_eq!(parse("{ 1; 2; }")[0].to_string(), "{ 1; 2; }");
    }

    #[test]
    fn function_definition_needs_a_name_after_fn() {
        let named = parse("fn add(a, b) { return a + b; }");
        assert!(matches!(named[0], Statement::FunctionDef(_)));
        assert_eq!(named[0].to_string(), "fn add(a, b) { return (a + b); }");

        let anonymous = parse("fn(a) { a; }(1);");
        assert!(matches!(anonymous[0], Statement::Expression(_)));
        assert_eq!(anonymous[0].to_string(), "fn(a) { a; }(1);");
    }

    #[test]
    fn empty_parameter_list() {
        assert_eq!(parse("fn f() { }")[0].to_string(), "fn f() {  }");
    }
}
