use log::{debug, trace};

use crate::{
    ast::{
        ArrayLiteral, AssignmentExpr, BinaryExpr, BlockStatement, BooleanLiteral, CallExpr,
        ExpressionStatement, FloatLiteral, FunctionDefStatement, FunctionLiteral, Identifier,
        IfStatement, IndexExpr, IntegerLiteral, LetStatement, Program, ReturnStatement,
        StringLiteral, UnaryExpr, WhileStatement,
        visitor::{Node, Visitor},
    },
    error::RuntimeError,
    interpreter::{
        environment::{Environment, FrameId},
        evaluator::{
            console::{Console, StdConsole},
            function::core::install_builtins,
        },
        value::{core::Value, function::Function},
    },
};

/// Why evaluation of a node stopped early.
///
/// Both variants travel up through every enclosing statement list unchanged.
/// A `Return` is caught by the nearest enclosing function call (or by the
/// program), an `Error` only by [`Evaluator::evaluate`].
#[derive(Debug, Clone, PartialEq)]
pub enum Signal {
    /// A `return` statement was executed.
    Return(Value),
    /// Evaluation failed.
    Error(RuntimeError),
}

impl std::fmt::Display for Signal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Return(value) => write!(f, "return {value}"),
            Self::Error(error) => write!(f, "{error}"),
        }
    }
}

impl From<RuntimeError> for Signal {
    fn from(error: RuntimeError) -> Self {
        Self::Error(error)
    }
}

/// Result type used by the evaluator.
///
/// `Ok` is the value of a node that ran to completion; `Err` is a
/// [`Signal`] that has to be propagated.
pub type EvalResult<T> = Result<T, Signal>;

/// Walks an AST and produces runtime values.
///
/// An evaluator owns the scope chain, so bindings made by one call to
/// [`evaluate`](Self::evaluate) are visible to the next. This is what the
/// REPL relies on.
///
/// ## Usage
///
/// ```
/// use monkey::{interpreter::{evaluator::core::Evaluator, value::core::Value}, parse};
///
/// let mut evaluator = Evaluator::new();
///
/// evaluator.evaluate(&parse("let double = fn(x) { x * 2; };").unwrap()).unwrap();
/// let value = evaluator.evaluate(&parse("double(21);").unwrap()).unwrap();
///
/// assert_eq!(value, Value::Integer(42));
/// ```
pub struct Evaluator {
    environment: Environment,
    console:     Box<dyn Console>,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator {
    /// Creates an evaluator whose root frame holds the builtins, reading and
    /// writing through the standard streams.
    #[must_use]
    pub fn new() -> Self {
        Self::with_console(StdConsole)
    }

    /// Creates an evaluator with an empty root frame.
    #[must_use]
    pub fn bare() -> Self {
        Self { environment: Environment::new(),
               console:     Box::new(StdConsole), }
    }

    /// Creates an evaluator with the builtins, using `console` for their
    /// input and output.
    #[must_use]
    pub fn with_console(console: impl Console + 'static) -> Self {
        let mut environment = Environment::new();
        let root = environment.root();
        install_builtins(&mut environment, root);

        Self { environment,
               console: Box::new(console) }
    }

    /// Evaluates a whole program in the root frame.
    ///
    /// A top-level `return` ends the program and its value becomes the
    /// result.
    ///
    /// # Errors
    /// Returns the first [`RuntimeError`] raised while evaluating.
    ///
    /// # Example
    /// ```
    /// use monkey::{interpreter::{evaluator::core::Evaluator, value::core::Value}, parse};
    ///
    /// let program = parse("1; return 2; 3;").unwrap();
    /// assert_eq!(Evaluator::new().evaluate(&program).unwrap(), Value::Integer(2));
    ///
    /// let program = parse("1 + true;").unwrap();
    /// assert_eq!(Evaluator::new().evaluate(&program).unwrap_err().to_string(),
    ///            "Unknown operator + for Integer and Boolean");
    /// ```
    pub fn evaluate(&mut self, program: &Program) -> Result<Value, RuntimeError> {
        let root = self.environment.root();

        match self.visit_program(program, root) {
            Ok(value) | Err(Signal::Return(value)) => {
                debug!("evaluation finished with {value}");
                Ok(value)
            },
            Err(Signal::Error(error)) => {
                debug!("evaluation failed: {error}");
                Err(error)
            },
        }
    }

    /// The scope chain.
    #[must_use]
    pub const fn environment(&self) -> &Environment {
        &self.environment
    }

    /// The console used by the I/O builtins.
    pub(crate) fn console(&mut self) -> &mut dyn Console {
        self.console.as_mut()
    }

    /// Calls `function` with already evaluated `arguments`.
    ///
    /// The call runs in a fresh frame whose parent is `caller`. The frame is
    /// released before returning, whether the call succeeded or not.
    ///
    /// # Errors
    /// - [`RuntimeError::WrongArgumentCount`] if the arity does not match.
    /// - Any error raised by the function body.
    pub fn call_function(&mut self,
                         function: &Function,
                         arguments: Vec<Value>,
                         caller: FrameId)
                         -> EvalResult<Value> {
        trace!("calling {} with {} arguments",
               function.builtin_name().unwrap_or("fn"),
               arguments.len());

        let frame = self.environment.push(caller);
        let result = self.invoke(function, arguments, frame);
        self.environment.pop(frame);

        result
    }

    fn invoke(&mut self,
              function: &Function,
              arguments: Vec<Value>,
              frame: FrameId)
              -> EvalResult<Value> {
        match function {
            Function::User(function) => {
                if arguments.len() != function.parameters.len() {
                    return Err(RuntimeError::WrongArgumentCount { want: function.parameters.len(),
                                                                  got:  arguments.len(), }.into());
                }

                for (parameter, argument) in function.parameters.iter().zip(arguments) {
                    self.environment.set(frame, parameter.name.as_str(), argument);
                }

                match self.visit_block(&function.body, frame) {
                    Err(Signal::Return(value)) => Ok(value),
                    other => other,
                }
            },
            Function::Builtin(def) => {
                def.arity.check(arguments.len())?;
                (def.func)(self, &arguments, frame)
            },
        }
    }

    pub(super) fn set(&mut self, frame: FrameId, name: &str, value: Value) {
        self.environment.set(frame, name, value);
    }

    pub(super) fn lookup(&self, frame: FrameId, name: &str) -> EvalResult<Value> {
        Ok(self.environment.get(frame, name)?)
    }
}

impl Visitor<FrameId> for Evaluator {
    type Output = EvalResult<Value>;

    fn visit_program(&mut self, program: &Program, frame: FrameId) -> Self::Output {
        self.eval_statements(&program.statements, frame)
    }

    fn visit_let(&mut self, node: &LetStatement, frame: FrameId) -> Self::Output {
        self.eval_let(node, frame)
    }

    fn visit_return(&mut self, node: &ReturnStatement, frame: FrameId) -> Self::Output {
        self.eval_return(node, frame)
    }

    fn visit_if(&mut self, node: &IfStatement, frame: FrameId) -> Self::Output {
        self.eval_if(node, frame)
    }

    fn visit_while(&mut self, _: &WhileStatement, _: FrameId) -> Self::Output {
        Err(RuntimeError::WhileUnsupported.into())
    }

    fn visit_block(&mut self, node: &BlockStatement, frame: FrameId) -> Self::Output {
        self.eval_statements(&node.statements, frame)
    }

    fn visit_function_def(&mut self, node: &FunctionDefStatement, frame: FrameId) -> Self::Output {
        self.eval_function_def(node, frame)
    }

    fn visit_expression_statement(&mut self,
                                  node: &ExpressionStatement,
                                  frame: FrameId)
                                  -> Self::Output {
        self.eval_required(node.expression.as_ref(), "Expression", frame)
    }

    fn visit_identifier(&mut self, node: &Identifier, frame: FrameId) -> Self::Output {
        self.lookup(frame, &node.name)
    }

    fn visit_integer(&mut self, node: &IntegerLiteral, _: FrameId) -> Self::Output {
        Ok(Value::Integer(node.value))
    }

    fn visit_float(&mut self, node: &FloatLiteral, _: FrameId) -> Self::Output {
        Ok(Value::Float(node.value))
    }

    fn visit_string(&mut self, node: &StringLiteral, _: FrameId) -> Self::Output {
        Ok(Value::from(node.value()))
    }

    fn visit_boolean(&mut self, node: &BooleanLiteral, _: FrameId) -> Self::Output {
        Ok(Value::Boolean(node.value))
    }

    fn visit_array(&mut self, node: &ArrayLiteral, frame: FrameId) -> Self::Output {
        self.eval_array(node, frame)
    }

    fn visit_binary(&mut self, node: &BinaryExpr, frame: FrameId) -> Self::Output {
        let left = self.eval_required(node.left.as_deref(), "Left operand", frame)?;
        let right = self.eval_required(node.right.as_deref(), "Right operand", frame)?;

        Self::eval_binary(node.operator, &left, &right)
    }

    fn visit_unary(&mut self, node: &UnaryExpr, frame: FrameId) -> Self::Output {
        let operand = self.eval_required(node.operand.as_deref(), "Operand", frame)?;

        Self::eval_unary(node.operator, &operand)
    }

    fn visit_call(&mut self, node: &CallExpr, frame: FrameId) -> Self::Output {
        self.eval_call(node, frame)
    }

    fn visit_assignment(&mut self, node: &AssignmentExpr, frame: FrameId) -> Self::Output {
        let value = self.eval_required(node.value.as_deref(), "Assigned value", frame)?;
        self.set(frame, &node.name.name, value.clone());

        Ok(value)
    }

    fn visit_index(&mut self, node: &IndexExpr, frame: FrameId) -> Self::Output {
        self.eval_index(node, frame)
    }

    fn visit_function(&mut self, node: &FunctionLiteral, _: FrameId) -> Self::Output {
        Ok(Value::Function(Self::capture(&node.parameters, &node.body)?))
    }
}

impl Evaluator {
    /// Evaluates an optional child node, reporting `slot` as missing if the
    /// parser left it empty.
    pub(super) fn eval_required<N>(&mut self,
                                   node: Option<&N>,
                                   slot: &'static str,
                                   frame: FrameId)
                                   -> EvalResult<Value>
        where N: Node
    {
        match node {
            Some(node) => node.accept(self, frame),
            None => Err(RuntimeError::Missing { slot }.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    fn eval(source: &str) -> Result<Value, RuntimeError> {
        let program = parse(source).unwrap();
        Evaluator::new().evaluate(&program)
    }

    fn eval_ok(source: &str) -> Value {
        eval(source).unwrap_or_else(|e| panic!("{source}: {e}"))
    }

    fn eval_err(source: &str) -> String {
        match eval(source) {
            Ok(value) => panic!("{source}: expected an error, got {value}"),
            Err(e) => e.to_string(),
        }
    }

    #[test]
    fn literal_and_arithmetic_fixtures() {
        let cases: &[(&str, Value)] = &[("1;", Value::Integer(1)),
                                        ("1.1;", Value::Float(1.1)),
                                        ("true;", Value::Boolean(true)),
                                        ("false;", Value::Boolean(false)),
                                        ("\"hello\";", Value::from("hello")),
                                        ("1 + 2;", Value::Integer(3)),
                                        ("1.5 + 2.5;", Value::Float(4.0)),
                                        ("1 - 2;", Value::Integer(-1)),
                                        ("-1;", Value::Integer(-1)),
                                        ("+1;", Value::Integer(1)),
                                        ("-1.5;", Value::Float(-1.5)),
                                        ("+1.5;", Value::Float(1.5)),
                                        ("1.5 - 2.5;", Value::Float(-1.0)),
                                        ("\"hello\" + \" world\";", Value::from("hello world")),
                                        ("1 * 2;", Value::Integer(2)),
                                        ("1.5 * 2.5;", Value::Float(3.75)),
                                        ("1 / 2;", Value::Integer(0)),
                                        ("1.0 / 2.0;", Value::Float(0.5))];

        for (source, expected) in cases {
            assert_eq!(&eval_ok(source), expected, "{source}");
        }
    }

    #[test]
    fn comparison_fixtures() {
        let cases: &[(&str, bool)] = &[("1 > 2;", false),
                                       ("1 < 2;", true),
                                       ("1 == 2;", false),
                                       ("1 != 2;", true),
                                       ("1 >= 2;", false),
                                       ("1 <= 2;", true),
                                       ("1.0 > 2.0;", false),
                                       ("1.0 < 2.0;", true),
                                       ("1.0 == 2.0;", false),
                                       ("1.0 != 2.0;", true),
                                       ("1.0 >= 2.0;", false),
                                       ("1.0 <= 2.0;", true),
                                       ("true == true;", true),
                                       ("true == false;", false),
                                       ("true != true;", false),
                                       ("true != false;", true),
                                       ("false == false;", true),
                                       ("false == true;", false),
                                       ("false != false;", false),
                                       ("false != true;", true),
                                       ("1 + 1 > 2;", false),
                                       ("1 + 1 < 2;", false),
                                       ("1 + 1 == 2;", true),
                                       ("\"hello\" == \"hello\";", true),
                                       ("\"hello\" != \"hello\";", false),
                                       ("\"hello\" == \"world\";", false),
                                       ("\"hello\" != \"world\";", true),
                                       ("1 + 1 == 2 + 2;", false)];

        for (source, expected) in cases {
            assert_eq!(eval_ok(source), Value::Boolean(*expected), "{source}");
        }
    }

    #[test]
    fn control_flow_fixtures() {
        assert_eq!(eval_ok("if(true) {1;} else {2;}"), Value::Integer(1));
        assert_eq!(eval_ok("if(false) {1;} else {2;}"), Value::Integer(2));
        assert_eq!(eval_ok("1;return 2;3;"), Value::Integer(2));
        assert_eq!(eval_ok("if(true) { if(true) { return 1; } return 2; } else { return 3; }"),
                   Value::Integer(1));
        assert_eq!(eval_ok("if (false) { 1; }"), Value::Null);
    }

    #[test]
    fn empty_program_and_block_are_null() {
        assert_eq!(eval_ok(""), Value::Null);
        assert_eq!(eval_ok("{ }"), Value::Null);
        assert_eq!(eval_ok("fn f() { } f();"), Value::Null);
    }

    #[test]
    fn return_leaves_only_the_innermost_function() {
        let source = "fn inner() { return 1; 2; } fn outer() { let x = inner(); x + 10; } outer();";
        assert_eq!(eval_ok(source), Value::Integer(11));
    }

    #[test]
    fn calls_run_in_a_child_of_the_caller_frame() {
        assert_eq!(eval_ok("let a = 5; let f = fn(x) { let a = x; a; }; f(7); a;"),
                   Value::Integer(5));
        assert_eq!(eval_ok("let g = 2; fn f() { g; } f();"), Value::Integer(2));
        assert_eq!(eval_ok("fn f() { y; } fn h() { let y = 3; f(); } h();"),
                   Value::Integer(3));
    }

    #[test]
    fn assignment_writes_to_the_local_frame() {
        assert_eq!(eval_ok("let a = 1; fn f() { a = 2; a; } f();"), Value::Integer(2));
        assert_eq!(eval_ok("let a = 1; fn f() { a = 2; } f(); a;"), Value::Integer(1));
        assert_eq!(eval_ok("let a = 1; a = a + 1; a;"), Value::Integer(2));
    }

    #[test]
    fn frames_are_released_after_calls() {
        let mut evaluator = Evaluator::new();
        let program = parse("fn f(n) { if (n > 0) { return f(n - 1); } n; } f(10);").unwrap();

        assert_eq!(evaluator.evaluate(&program).unwrap(), Value::Integer(0));
        assert_eq!(evaluator.environment().depth(), 1);

        let failing = parse("fn g() { 1 + true; } g();").unwrap();
        assert!(evaluator.evaluate(&failing).is_err());
        assert_eq!(evaluator.environment().depth(), 1);
    }

    #[test]
    fn recursion() {
        let source = "fn fib(n) { if (n < 2) { return n; } return fib(n - 1) + fib(n - 2); } fib(15);";
        assert_eq!(eval_ok(source), Value::Integer(610));
    }

    #[test]
    fn function_definition_yields_the_function() {
        assert_eq!(eval_ok("fn add(a, b) { a + b; }").to_string(),
                   "fn(a, b) { (a + b); }");
        assert_eq!(eval_ok("fn(x) { x; };").to_string(), "fn(x) { x; }");
        assert_eq!(eval_ok("len;").to_string(), "builtin len");
    }

    #[test]
    fn arity_errors() {
        assert_eq!(eval_err("fn f(a, b) { a; } f(1);"),
                   "Wrong number of arguments: want=2, got=1");
        assert_eq!(eval_err("len(1, 2);"), "Wrong number of arguments: want=1, got=2");
    }

    #[test]
    fn runtime_error_messages() {
        assert_eq!(eval_err("x;"), "Unknown identifier x");
        assert_eq!(eval_err("if (1) { 2; }"), "Condition must be a boolean");
        assert_eq!(eval_err("1(2);"), "Not a function");
        assert_eq!(eval_err("1[0];"), "Not an array");
        assert_eq!(eval_err("[1][true];"), "Index must be an integer");
        assert_eq!(eval_err("[1][1];"), "Index out of bounds");
        assert_eq!(eval_err("[1][-1];"), "Index out of bounds");
        assert_eq!(eval_err("[1, x, 3];"), "Array elements must be valid");
        assert_eq!(eval_err("while (true) { 1; }"), "while statements are not supported");
        assert_eq!(eval_err("1 / 0;"), "Division by zero");
    }

    #[test]
    fn errors_stop_the_program() {
        let mut evaluator = Evaluator::new();
        let program = parse("let a = 1; y; let b = 2;").unwrap();

        assert!(evaluator.evaluate(&program).is_err());
        assert_eq!(evaluator.environment().get(evaluator.environment().root(), "a"),
                   Ok(Value::Integer(1)));
        assert!(evaluator.environment().get(evaluator.environment().root(), "b").is_err());
    }

    #[test]
    fn missing_slots_are_reported_at_runtime() {
        assert_eq!(eval_err("1 + ;"), "Right operand is missing");
        assert_eq!(eval_err("-;"), "Operand is missing");
    }

    #[test]
    fn bare_evaluator_has_no_builtins() {
        let program = parse("len(\"abc\");").unwrap();

        assert_eq!(Evaluator::bare().evaluate(&program).unwrap_err().to_string(),
                   "Unknown identifier len");
        assert_eq!(Evaluator::new().evaluate(&program).unwrap(), Value::Integer(3));
    }
}
