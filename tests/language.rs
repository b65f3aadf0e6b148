use std::fs;

use monkey::{
    ast::{
        ArrayLiteral, AssignmentExpr, BinaryExpr, BlockStatement, BooleanLiteral, CallExpr,
        Expr, ExpressionStatement, FloatLiteral, FunctionDefStatement, FunctionLiteral, Identifier,
        IfStatement, IndexExpr, IntegerLiteral, LetStatement, Program, ReturnStatement,
        Statement, StringLiteral, UnaryExpr, WhileStatement,
        visitor::{Node, Visitor},
    },
    interpreter::{
        evaluator::{console::BufferConsole, core::Evaluator},
        lexer::tokenize,
        parser::core::Parser,
        token::TokenKind,
        value::core::Value,
    },
    parse, run,
};
use walkdir::WalkDir;

#[test]
fn scripts_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "mk"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        count += 1;
        match run(&content, false) {
            Ok(Value::Boolean(true)) => {},
            Ok(other) => panic!("Script {path:?} finished with {other} instead of true"),
            Err(e) => panic!("Script {path:?} failed:\n{content}\nError: {e}"),
        }
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}

fn assert_success(src: &str) {
    if let Err(e) = run(src, false) {
        panic!("Script failed: {e}");
    }
}

fn assert_failure(src: &str) {
    if run(src, false).is_ok() {
        panic!("Script succeeded but was expected to fail")
    }
}

fn assert_value(src: &str, expected: &str) {
    match run(src, false) {
        Ok(value) => assert_eq!(value.to_string(), expected, "{src}"),
        Err(e) => panic!("Script failed: {src}\nError: {e}"),
    }
}

fn assert_error(src: &str, expected: &str) {
    match run(src, false) {
        Ok(value) => panic!("Script succeeded with {value} but was expected to fail: {src}"),
        Err(e) => assert_eq!(e.to_string(), expected, "{src}"),
    }
}

#[test]
fn pretty_printed_programs() {
    let cases = [("1 / 2 + 1 * 2;", "((1 / 2) + (1 * 2));"),
                 ("1 + !!!true;", "(1 + (!(!(!true))));"),
                 ("fn(a,b){a+b;}(1,2);", "fn(a, b) { (a + b); }(1, 2);"),
                 ("let x = -a * b;", "let x = ((-a) * b);"),
                 ("a + b(c)[0];", "(a + b(c)[0]);"),
                 ("x = y = 3;", "x = y = 3;"),
                 ("if (a) { 1; } else { 2; }", "if (a) { 1; } else { 2; }"),
                 ("while (i < 3) { i = i + 1; }", "while ((i < 3)) { i = (i + 1); }"),
                 ("fn add(a, b) { return a + b; }", "fn add(a, b) { return (a + b); }"),
                 ("a && b || c == d;", "((a && b) || (c == d));")];

    for (source, expected) in cases {
        assert_eq!(parse(source).unwrap().to_string(), expected, "{source}");
    }
}

#[test]
fn parse_diagnostics() {
    let cases: [(&str, &[&str]); 6] =
        [("let = 1;", &["Expected Identifier, got Assign at start: 4 end: 5 literal: ="]),
         ("let a 1;", &["Expected Assign, got Integer at start: 6 end: 7 literal: 1"]),
         ("let a;",
          &["Expected Assign, got SemiColon at start: 5 end: 6 literal: ;",
            "Expected expression, got SemiColon at start: 5 end: 6 literal: ;"]),
         ("let a=;", &["Expected expression, got SemiColon at start: 6 end: 7 literal: ;"]),
         ("let a = 1", &["Expected SemiColon, got Eof at start: 9 end: 9 literal: "]),
         ("%;", &["Unexpected token Illegal at start: 0 end: 1 literal: %"])];

    for (source, expected) in cases {
        let mut parser = Parser::new(source);
        parser.parse();

        let messages = parser.errors().iter().map(|e| e.message()).collect::<Vec<_>>();
        assert_eq!(messages, expected, "{source}");
    }
}

#[test]
fn parse_errors_abort_run() {
    assert_error("let = 1;", "Expected Identifier, got Assign at start: 4 end: 5 literal: =");
}

#[test]
fn evaluation_results() {
    assert_value("1 / 2;", "0");
    assert_value("1.5 + 2.5;", "4.0");
    assert_value("\"hello\" + \" world\";", "hello world");
    assert_value("1;return 2;3;", "2");
    assert_value("if(true) { if(true) { return 1; } return 2; } else { return 3; }", "1");
    assert_value("[1, 2.5, \"s\", true, [ ]];", "[1, 2.5, s, true, []]");
    assert_value("fn(x) { x; };", "fn(x) { x; }");
    assert_value("print;", "builtin print");
    assert_value("", "null");
}

#[test]
fn scope_discipline() {
    assert_success("let a = 1; fn f() { let a = 2; a; } f();");
    assert_value("let a = 1; fn f() { let a = 2; a; } f(); a;", "1");
    assert_value("let a = 1; fn f(a) { a; } f(9);", "9");
    assert_value("let a = 1; fn f(a) { a; } f(9); a;", "1");
    assert_error("fn f() { let hidden = 1; } f(); hidden;", "Unknown identifier hidden");
}

#[test]
fn caller_scope_is_visible_to_callees() {
    assert_value("fn show() { x; } fn wrap() { let x = \"from wrap\"; show(); } wrap();",
                 "from wrap");
    assert_error("fn make() { let n = 1; fn() { n; }; } make()();", "Unknown identifier n");
}

#[test]
fn runtime_failures() {
    assert_failure("1 + \"a\";");
    assert_failure("undefined;");
    assert_failure("let f = 3; f();");
    assert_error("true + true;", "Unknown operator + for Boolean");
    assert_error("[1] + [2];", "Unknown operator + for Array");
    assert_error("-\"x\";", "Unknown operator - for String");
    assert_error("reduce([1], fn(a) { a; }, 0);", "Wrong number of arguments: want=1, got=2");
    assert_error("while (false) { }", "while statements are not supported");
}

#[test]
fn errors_inside_calls_propagate_unchanged() {
    assert_error("fn f() { 1 / 0; 5; } f() + 1;", "Division by zero");
    assert_error("fn f() { return nope; } [f()];", "Array elements must be valid");
}

#[test]
fn integer_overflow_wraps() {
    assert_value("2147483647 + 1;", "-2147483648");
    assert_value("-2147483647 - 2;", "2147483647");
    assert_value("65536 * 65536;", "0");
}

#[test]
fn evaluator_keeps_bindings_between_programs() {
    let mut evaluator = Evaluator::new();

    evaluator.evaluate(&parse("let total = 1;").unwrap()).unwrap();
    evaluator.evaluate(&parse("fn add(n) { n + total; }").unwrap()).unwrap();

    assert_eq!(evaluator.evaluate(&parse("add(41);").unwrap()).unwrap(),
               Value::Integer(42));
    assert!(evaluator.evaluate(&parse("add();").unwrap()).is_err());
    assert_eq!(evaluator.evaluate(&parse("total;").unwrap()).unwrap(), Value::Integer(1));
}

#[test]
fn console_builtins() {
    let console = BufferConsole::new(["3", "4"]);
    let output = console.output();
    let mut evaluator = Evaluator::with_console(console);

    let program = parse("let a = toInt(input()); let b = toInt(input()); \
                         print(\"sum: \", a + b); println(); println(\"!\"); a * b;")
                  .unwrap();

    assert_eq!(evaluator.evaluate(&program).unwrap(), Value::Integer(12));
    assert_eq!(output.borrow().as_str(), "sum: 7!\n");
}

#[test]
fn logical_operators_run_both_sides() {
    let console = BufferConsole::default();
    let output = console.output();
    let mut evaluator = Evaluator::with_console(console);

    let program = parse("fn f() { print(\"side\"); true; } true || f();").unwrap();

    assert_eq!(evaluator.evaluate(&program).unwrap(), Value::Boolean(true));
    assert_eq!(output.borrow().as_str(), "side");

    let program = parse("fn g() { print(\"!\"); false; } false && g();").unwrap();

    assert_eq!(evaluator.evaluate(&program).unwrap(), Value::Boolean(false));
    assert_eq!(output.borrow().as_str(), "side!");
    assert_error("false && nope;", "Unknown identifier nope");
}

#[test]
fn tokens_carry_byte_spans() {
    let tokens = tokenize("let é = \"ü\";");
    let kinds = tokens.iter().map(|t| t.kind).collect::<Vec<_>>();

    assert_eq!(kinds,
               [TokenKind::Let,
                TokenKind::Illegal,
                TokenKind::Assign,
                TokenKind::String,
                TokenKind::SemiColon,
                TokenKind::Eof]);
    assert_eq!((tokens[1].span.start, tokens[1].span.end), (4, 6));
    assert_eq!(tokens[3].literal(), "\"ü\"");
}

/// Collects every identifier the program mentions, in source order.
#[derive(Default)]
struct Names(Vec<String>);

impl Names {
    fn expr(&mut self, expr: Option<&Expr>) {
        if let Some(expr) = expr {
            expr.accept(self, ());
        }
    }

    fn statements(&mut self, statements: &[Statement]) {
        for statement in statements {
            statement.accept(self, ());
        }
    }
}

impl Visitor<()> for Names {
    type Output = ();

    fn visit_program(&mut self, program: &Program, (): ()) {
        self.statements(&program.statements);
    }

    fn visit_let(&mut self, node: &LetStatement, (): ()) {
        if let Some(name) = &node.name {
            self.0.push(name.name.clone());
        }
        self.expr(node.value.as_ref());
    }

    fn visit_return(&mut self, node: &ReturnStatement, (): ()) {
        self.expr(node.value.as_ref());
    }

    fn visit_if(&mut self, node: &IfStatement, (): ()) {
        self.expr(node.condition.as_ref());
        self.visit_block(&node.consequence, ());
        if let Some(alternative) = &node.alternative {
            self.visit_block(alternative, ());
        }
    }

    fn visit_while(&mut self, node: &WhileStatement, (): ()) {
        self.expr(node.condition.as_ref());
        self.visit_block(&node.body, ());
    }

    fn visit_block(&mut self, node: &BlockStatement, (): ()) {
        self.statements(&node.statements);
    }

    fn visit_function_def(&mut self, node: &FunctionDefStatement, (): ()) {
        self.0.push(node.name.name.clone());
        self.0.extend(node.parameters.iter().flatten().map(|p| p.name.clone()));
        self.visit_block(&node.body, ());
    }

    fn visit_expression_statement(&mut self, node: &ExpressionStatement, (): ()) {
        self.expr(node.expression.as_ref());
    }

    fn visit_identifier(&mut self, node: &Identifier, (): ()) {
        self.0.push(node.name.clone());
    }

    fn visit_integer(&mut self, _: &IntegerLiteral, (): ()) {}

    fn visit_float(&mut self, _: &FloatLiteral, (): ()) {}

    fn visit_string(&mut self, _: &StringLiteral, (): ()) {}

    fn visit_boolean(&mut self, _: &BooleanLiteral, (): ()) {}

    fn visit_array(&mut self, node: &ArrayLiteral, (): ()) {
        for element in &node.elements {
            self.expr(element.as_ref());
        }
    }

    fn visit_binary(&mut self, node: &BinaryExpr, (): ()) {
        self.expr(node.left.as_deref());
        self.expr(node.right.as_deref());
    }

    fn visit_unary(&mut self, node: &UnaryExpr, (): ()) {
        self.expr(node.operand.as_deref());
    }

    fn visit_call(&mut self, node: &CallExpr, (): ()) {
        self.expr(node.callee.as_deref());
        for argument in &node.arguments {
            self.expr(argument.as_ref());
        }
    }

    fn visit_assignment(&mut self, node: &AssignmentExpr, (): ()) {
        self.0.push(node.name.name.clone());
        self.expr(node.value.as_deref());
    }

    fn visit_index(&mut self, node: &IndexExpr, (): ()) {
        self.expr(node.array.as_deref());
        self.expr(node.index.as_deref());
    }

    fn visit_function(&mut self, node: &FunctionLiteral, (): ()) {
        self.0.extend(node.parameters.iter().flatten().map(|p| p.name.clone()));
        self.visit_block(&node.body, ());
    }
}

#[test]
fn custom_visitors_walk_the_whole_tree() {
    let program = parse("let a = b[c] + f(d, -e); fn g(h) { if (h) { i = [j]; } } \
                         while (k) { fn(l) { m; }; }")
                  .unwrap();

    let mut names = Names::default();
    program.accept(&mut names, ());

    assert_eq!(names.0,
               ["a", "b", "c", "f", "d", "e", "g", "h", "h", "i", "j", "k", "l", "m"]);
}
