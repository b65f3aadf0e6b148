/// Traversal contract for syntax trees.
///
/// Declares the [`visitor::Visitor`] trait with one method per node kind and
/// the `accept` entry points that route a node to the matching method.
pub mod visitor;

mod display;

/// A parsed source file: the ordered list of top-level statements.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    /// Statements in source order.
    pub statements: Vec<Statement>,
}

/// An abstract syntax tree node representing a statement.
///
/// Every statement owns its children. Slots the parser could not fill are
/// `None` and are printed as `null`.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `let name = value;`
    Let(LetStatement),
    /// `return value;`
    Return(ReturnStatement),
    /// `if (condition) { ... } else { ... }`
    If(IfStatement),
    /// `{ ... }`
    Block(BlockStatement),
    /// `fn name(params) { ... }`
    FunctionDef(FunctionDefStatement),
    /// A bare expression followed by `;`.
    Expression(ExpressionStatement),
    /// `while (condition) { ... }`
    While(WhileStatement),
}

/// An abstract syntax tree node representing an expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Reference to a binding by name.
    Identifier(Identifier),
    /// A 32-bit integer literal.
    Integer(IntegerLiteral),
    /// A 32-bit float literal.
    Float(FloatLiteral),
    /// A string literal.
    String(StringLiteral),
    /// `true` or `false`.
    Boolean(BooleanLiteral),
    /// `[a, b, c]`
    Array(ArrayLiteral),
    /// `left op right`
    Binary(BinaryExpr),
    /// `op operand`
    Unary(UnaryExpr),
    /// `callee(arguments)`
    Call(CallExpr),
    /// `name = value`
    Assignment(AssignmentExpr),
    /// `array[index]`
    Index(IndexExpr),
    /// `fn(params) { ... }`
    Function(FunctionLiteral),
}

/// A name, as written in the source.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier {
    /// The identifier text.
    pub name: String,
}

impl Identifier {
    /// Creates an identifier node.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Integer literal node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntegerLiteral {
    /// The literal value.
    pub value: i32,
}

/// Float literal node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FloatLiteral {
    /// The literal value.
    pub value: f32,
}

/// String literal node.
///
/// The raw token text is kept, quotes and backslashes included. The runtime
/// value strips one pair of surrounding quotes and nothing else; escapes are
/// not interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringLiteral {
    /// The literal exactly as it appeared in the source.
    pub literal: String,
}

impl StringLiteral {
    /// Returns the string value of the literal.
    ///
    /// The surrounding quotes are removed only when both are present, so an
    /// unterminated literal keeps its opening quote.
    ///
    /// # Example
    /// ```
    /// use monkey::ast::StringLiteral;
    ///
    /// let closed = StringLiteral { literal: r#""hi""#.to_string() };
    /// let open = StringLiteral { literal: r#""hi"#.to_string() };
    ///
    /// assert_eq!(closed.value(), "hi");
    /// assert_eq!(open.value(), r#""hi"#);
    /// ```
    #[must_use]
    pub fn value(&self) -> &str {
        let text = self.literal.as_str();
        text.strip_prefix('"')
            .and_then(|t| t.strip_suffix('"'))
            .unwrap_or(text)
    }
}

/// Boolean literal node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BooleanLiteral {
    /// The literal value.
    pub value: bool,
}

/// Array literal node. Elements that failed to parse are `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrayLiteral {
    /// The element expressions in order.
    pub elements: Vec<Option<Expr>>,
}

/// Binary operation node.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    /// Left operand.
    pub left:     Option<Box<Expr>>,
    /// The operator.
    pub operator: BinaryOperator,
    /// Right operand.
    pub right:    Option<Box<Expr>>,
}

/// Unary (prefix) operation node.
#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpr {
    /// The operator.
    pub operator: UnaryOperator,
    /// The operand.
    pub operand:  Option<Box<Expr>>,
}

/// Function call node.
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    /// The expression producing the function.
    pub callee:    Option<Box<Expr>>,
    /// Argument expressions in order.
    pub arguments: Vec<Option<Expr>>,
}

/// Assignment node. Writes into the current scope frame only.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentExpr {
    /// Target name.
    pub name:  Identifier,
    /// Assigned value.
    pub value: Option<Box<Expr>>,
}

/// Array indexing node (`array[index]`).
#[derive(Debug, Clone, PartialEq)]
pub struct IndexExpr {
    /// The array being indexed.
    pub array: Option<Box<Expr>>,
    /// The index.
    pub index: Option<Box<Expr>>,
}

/// Anonymous function literal node.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionLiteral {
    /// Parameter names; `None` where a parameter failed to parse.
    pub parameters: Vec<Option<Identifier>>,
    /// The function body.
    pub body:       BlockStatement,
}

/// `let` statement node.
#[derive(Debug, Clone, PartialEq)]
pub struct LetStatement {
    /// The bound name.
    pub name:  Option<Identifier>,
    /// The bound value.
    pub value: Option<Expr>,
}

/// `return` statement node.
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStatement {
    /// The returned value.
    pub value: Option<Expr>,
}

/// `if` statement node.
///
/// Branches run in the enclosing scope frame; an `if` opens no scope of its
/// own.
#[derive(Debug, Clone, PartialEq)]
pub struct IfStatement {
    /// The condition; must evaluate to a boolean.
    pub condition:   Option<Expr>,
    /// Block run when the condition is `true`.
    pub consequence: BlockStatement,
    /// Block run when the condition is `false`, if any.
    pub alternative: Option<BlockStatement>,
}

/// `while` statement node.
#[derive(Debug, Clone, PartialEq)]
pub struct WhileStatement {
    /// The loop condition.
    pub condition: Option<Expr>,
    /// The loop body.
    pub body:      BlockStatement,
}

/// A brace-delimited list of statements.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BlockStatement {
    /// Statements in source order.
    pub statements: Vec<Statement>,
}

/// Named function definition node.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDefStatement {
    /// The function name.
    pub name:       Identifier,
    /// Parameter names; `None` where a parameter failed to parse.
    pub parameters: Vec<Option<Identifier>>,
    /// The function body.
    pub body:       BlockStatement,
}

/// Expression statement node (`expr;`).
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStatement {
    /// The expression.
    pub expression: Option<Expr>,
}

/// Represents a binary operator.
///
/// The `Display` form is the operator as written in source.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Logical and (`&&`)
    And,
    /// Logical or (`||`)
    Or,
}

/// Represents a prefix operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Logical NOT (`!x`).
    Not,
    /// Identity (`+x`).
    Plus,
    /// Arithmetic negation (`-x`).
    Negate,
}

impl BinaryOperator {
    /// The operator as written in source.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Less => "<",
            Self::Greater => ">",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::And => "&&",
            Self::Or => "||",
        }
    }
}

impl UnaryOperator {
    /// The operator as written in source.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Not => "!",
            Self::Plus => "+",
            Self::Negate => "-",
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}
