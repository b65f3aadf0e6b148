use crate::ast::{
    ArrayLiteral, AssignmentExpr, BinaryExpr, BlockStatement, BooleanLiteral, CallExpr, Expr,
    ExpressionStatement, FloatLiteral, FunctionDefStatement, FunctionLiteral, Identifier,
    IfStatement, IndexExpr, IntegerLiteral, LetStatement, Program, ReturnStatement, Statement,
    StringLiteral, UnaryExpr, WhileStatement,
};

/// A traversal over the syntax tree.
///
/// There is one method per concrete node kind. `C` is a context value handed
/// down by the caller (the evaluator passes its current scope frame) and
/// `Output` is whatever the traversal produces. Implementors decide whether
/// and in which order to descend into children; [`Node::accept`] only routes
/// a node to its method.
///
/// # Example
/// ```
/// use monkey::{
///     ast::{
///         visitor::{Node, Visitor},
///         *,
///     },
///     parse,
/// };
///
/// /// Counts integer literals reachable through expression statements.
/// struct Counter;
///
/// impl Visitor<()> for Counter {
///     type Output = usize;
///
///     fn visit_program(&mut self, program: &Program, (): ()) -> usize {
///         program.statements.iter().map(|s| s.accept(self, ())).sum()
///     }
///     fn visit_expression_statement(&mut self, node: &ExpressionStatement, (): ()) -> usize {
///         node.expression.as_ref().map_or(0, |e| e.accept(self, ()))
///     }
///     fn visit_binary(&mut self, node: &BinaryExpr, (): ()) -> usize {
///         [&node.left, &node.right].into_iter()
///                                  .flatten()
///                                  .map(|e| e.accept(self, ()))
///                                  .sum()
///     }
///     fn visit_integer(&mut self, _: &IntegerLiteral, (): ()) -> usize { 1 }
///
///     fn visit_let(&mut self, _: &LetStatement, (): ()) -> usize { 0 }
///     fn visit_return(&mut self, _: &ReturnStatement, (): ()) -> usize { 0 }
///     fn visit_if(&mut self, _: &IfStatement, (): ()) -> usize { 0 }
///     fn visit_while(&mut self, _: &WhileStatement, (): ()) -> usize { 0 }
///     fn visit_block(&mut self, _: &BlockStatement, (): ()) -> usize { 0 }
///     fn visit_function_def(&mut self, _: &FunctionDefStatement, (): ()) -> usize { 0 }
///     fn visit_identifier(&mut self, _: &Identifier, (): ()) -> usize { 0 }
///     fn visit_float(&mut self, _: &FloatLiteral, (): ()) -> usize { 0 }
///     fn visit_string(&mut self, _: &StringLiteral, (): ()) -> usize { 0 }
///     fn visit_boolean(&mut self, _: &BooleanLiteral, (): ()) -> usize { 0 }
///     fn visit_array(&mut self, _: &ArrayLiteral, (): ()) -> usize { 0 }
///     fn visit_unary(&mut self, _: &UnaryExpr, (): ()) -> usize { 0 }
///     fn visit_call(&mut self, _: &CallExpr, (): ()) -> usize { 0 }
///     fn visit_assignment(&mut self, _: &AssignmentExpr, (): ()) -> usize { 0 }
///     fn visit_index(&mut self, _: &IndexExpr, (): ()) -> usize { 0 }
///     fn visit_function(&mut self, _: &FunctionLiteral, (): ()) -> usize { 0 }
/// }
///
/// let program = parse("1 + 2 * 3; x;").unwrap();
/// assert_eq!(program.accept(&mut Counter, ()), 3);
/// ```
pub trait Visitor<C> {
    /// The value produced for each visited node.
    type Output;

    fn visit_program(&mut self, program: &Program, context: C) -> Self::Output;

    fn visit_let(&mut self, node: &LetStatement, context: C) -> Self::Output;
    fn visit_return(&mut self, node: &ReturnStatement, context: C) -> Self::Output;
    fn visit_if(&mut self, node: &IfStatement, context: C) -> Self::Output;
    fn visit_while(&mut self, node: &WhileStatement, context: C) -> Self::Output;
    fn visit_block(&mut self, node: &BlockStatement, context: C) -> Self::Output;
    fn visit_function_def(&mut self, node: &FunctionDefStatement, context: C) -> Self::Output;
    fn visit_expression_statement(&mut self,
                                  node: &ExpressionStatement,
                                  context: C)
                                  -> Self::Output;

    fn visit_identifier(&mut self, node: &Identifier, context: C) -> Self::Output;
    fn visit_integer(&mut self, node: &IntegerLiteral, context: C) -> Self::Output;
    fn visit_float(&mut self, node: &FloatLiteral, context: C) -> Self::Output;
    fn visit_string(&mut self, node: &StringLiteral, context: C) -> Self::Output;
    fn visit_boolean(&mut self, node: &BooleanLiteral, context: C) -> Self::Output;
    fn visit_array(&mut self, node: &ArrayLiteral, context: C) -> Self::Output;
    fn visit_binary(&mut self, node: &BinaryExpr, context: C) -> Self::Output;
    fn visit_unary(&mut self, node: &UnaryExpr, context: C) -> Self::Output;
    fn visit_call(&mut self, node: &CallExpr, context: C) -> Self::Output;
    fn visit_assignment(&mut self, node: &AssignmentExpr, context: C) -> Self::Output;
    fn visit_index(&mut self, node: &IndexExpr, context: C) -> Self::Output;
    fn visit_function(&mut self, node: &FunctionLiteral, context: C) -> Self::Output;
}

/// Double dispatch into a [`Visitor`].
pub trait Node {
    /// Calls the visitor method matching the concrete kind of `self`.
    fn accept<C, V>(&self, visitor: &mut V, context: C) -> V::Output
        where V: Visitor<C> + ?Sized;
}

macro_rules! accept_impls {
    ($($node:ty => $method:ident),* $(,)?) => {
        $(
            impl Node for $node {
                fn accept<C, V>(&self, visitor: &mut V, context: C) -> V::Output
                    where V: Visitor<C> + ?Sized
                {
                    visitor.$method(self, context)
                }
            }
        )*
    };
}

accept_impls! {
    Program              => visit_program,
    LetStatement         => visit_let,
    ReturnStatement      => visit_return,
    IfStatement          => visit_if,
    WhileStatement       => visit_while,
    BlockStatement       => visit_block,
    FunctionDefStatement => visit_function_def,
    ExpressionStatement  => visit_expression_statement,
    Identifier           => visit_identifier,
    IntegerLiteral       => visit_integer,
    FloatLiteral         => visit_float,
    StringLiteral        => visit_string,
    BooleanLiteral       => visit_boolean,
    ArrayLiteral         => visit_array,
    BinaryExpr           => visit_binary,
    UnaryExpr            => visit_unary,
    CallExpr             => visit_call,
    AssignmentExpr       => visit_assignment,
    IndexExpr            => visit_index,
    FunctionLiteral      => visit_function,
}

impl Node for Statement {
    fn accept<C, V>(&self, visitor: &mut V, context: C) -> V::Output
        where V: Visitor<C> + ?Sized
    {
        match self {
            Self::Let(node) => visitor.visit_let(node, context),
            Self::Return(node) => visitor.visit_return(node, context),
            Self::If(node) => visitor.visit_if(node, context),
            Self::Block(node) => visitor.visit_block(node, context),
            Self::FunctionDef(node) => visitor.visit_function_def(node, context),
            Self::Expression(node) => visitor.visit_expression_statement(node, context),
            Self::While(node) => visitor.visit_while(node, context),
        }
    }
}

impl Node for Expr {
    fn accept<C, V>(&self, visitor: &mut V, context: C) -> V::Output
        where V: Visitor<C> + ?Sized
    {
        match self {
            Self::Identifier(node) => visitor.visit_identifier(node, context),
            Self::Integer(node) => visitor.visit_integer(node, context),
            Self::Float(node) => visitor.visit_float(node, context),
            Self::String(node) => visitor.visit_string(node, context),
            Self::Boolean(node) => visitor.visit_boolean(node, context),
            Self::Array(node) => visitor.visit_array(node, context),
            Self::Binary(node) => visitor.visit_binary(node, context),
            Self::Unary(node) => visitor.visit_unary(node, context),
            Self::Call(node) => visitor.visit_call(node, context),
            Self::Assignment(node) => visitor.visit_assignment(node, context),
            Self::Index(node) => visitor.visit_index(node, context),
            Self::Function(node) => visitor.visit_function(node, context),
        }
    }
}
