use std::fmt::{self, Display, Formatter};

use crate::ast::{
    ArrayLiteral, AssignmentExpr, BinaryExpr, BlockStatement, BooleanLiteral, CallExpr, Expr,
    ExpressionStatement, FloatLiteral, FunctionDefStatement, FunctionLiteral, Identifier,
    IfStatement, IndexExpr, IntegerLiteral, LetStatement, Program, ReturnStatement, Statement,
    StringLiteral, UnaryExpr, WhileStatement,
};

/// Renders a possibly missing slot, `null` when absent.
struct Slot<'a, T>(Option<&'a T>);

impl<T: Display> Display for Slot<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(node) => node.fmt(f),
            None => f.write_str("null"),
        }
    }
}

fn write_joined<T: Display>(f: &mut Formatter<'_>,
                            items: &[Option<T>],
                            separator: &str)
                            -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(separator)?;
        }
        write!(f, "{}", Slot(item.as_ref()))?;
    }
    Ok(())
}

impl Display for Program {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, statement) in self.statements.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Let(node) => node.fmt(f),
            Self::Return(node) => node.fmt(f),
            Self::If(node) => node.fmt(f),
            Self::Block(node) => node.fmt(f),
            Self::FunctionDef(node) => node.fmt(f),
            Self::Expression(node) => node.fmt(f),
            Self::While(node) => node.fmt(f),
        }
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier(node) => node.fmt(f),
            Self::Integer(node) => node.fmt(f),
            Self::Float(node) => node.fmt(f),
            Self::String(node) => node.fmt(f),
            Self::Boolean(node) => node.fmt(f),
            Self::Array(node) => node.fmt(f),
            Self::Binary(node) => node.fmt(f),
            Self::Unary(node) => node.fmt(f),
            Self::Call(node) => node.fmt(f),
            Self::Assignment(node) => node.fmt(f),
            Self::Index(node) => node.fmt(f),
            Self::Function(node) => node.fmt(f),
        }
    }
}

impl Display for LetStatement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "let {} = {};", Slot(self.name.as_ref()), Slot(self.value.as_ref()))
    }
}

impl Display for ReturnStatement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "return {};", Slot(self.value.as_ref()))
    }
}

impl Display for IfStatement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "if ({}) {}", Slot(self.condition.as_ref()), self.consequence)?;
        if let Some(alternative) = &self.alternative {
            write!(f, " else {alternative}")?;
        }
        Ok(())
    }
}

impl Display for WhileStatement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "while ({}) {}", Slot(self.condition.as_ref()), self.body)
    }
}

impl Display for BlockStatement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("{ ")?;
        for (i, statement) in self.statements.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{statement}")?;
        }
        f.write_str(" }")
    }
}

impl Display for FunctionDefStatement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "fn {}(", self.name)?;
        write_joined(f, &self.parameters, ", ")?;
        write!(f, ") {}", self.body)
    }
}

impl Display for ExpressionStatement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{};", Slot(self.expression.as_ref()))
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl Display for IntegerLiteral {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl Display for FloatLiteral {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.value)
    }
}

impl Display for StringLiteral {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.literal)
    }
}

impl Display for BooleanLiteral {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl Display for ArrayLiteral {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        write_joined(f, &self.elements, ", ")?;
        f.write_str("]")
    }
}

impl Display for BinaryExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f,
               "({} {} {})",
               Slot(self.left.as_deref()),
               self.operator,
               Slot(self.right.as_deref()))
    }
}

impl Display for UnaryExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}{})", self.operator, Slot(self.operand.as_deref()))
    }
}

impl Display for CallExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", Slot(self.callee.as_deref()))?;
        write_joined(f, &self.arguments, ", ")?;
        f.write_str(")")
    }
}

impl Display for AssignmentExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.name, Slot(self.value.as_deref()))
    }
}

impl Display for IndexExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]", Slot(self.array.as_deref()), Slot(self.index.as_deref()))
    }
}

impl Display for FunctionLiteral {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("fn(")?;
        write_joined(f, &self.parameters, ", ")?;
        write!(f, ") {}", self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{BinaryOperator, UnaryOperator};

    fn int(value: i32) -> Option<Box<Expr>> {
        Some(Box::new(Expr::Integer(IntegerLiteral { value })))
    }

    #[test]
    fn missing_slots_print_as_null() {
        let binary = BinaryExpr { left:     int(1),
                                  operator: BinaryOperator::Add,
                                  right:    None, };
        let statement = LetStatement { name:  None,
                                       value: Some(Expr::Binary(binary)), };

        assert_eq!(statement.to_string(), "let null = (1 + null);");
    }

    #[test]
    fn unary_has_no_space_after_operator() {
        let unary = UnaryExpr { operator: UnaryOperator::Negate,
                                operand:  int(5), };

        assert_eq!(unary.to_string(), "(-5)");
    }

    #[test]
    fn if_without_else_omits_the_alternative() {
        let node = IfStatement { condition:   Some(Expr::Boolean(BooleanLiteral { value: true })),
                                 consequence: BlockStatement::default(),
                                 alternative: None, };

        assert_eq!(node.to_string(), "if (true) {  }");
    }

    #[test]
    fn floats_always_show_a_fraction() {
        assert_eq!(FloatLiteral { value: 4.0 }.to_string(), "4.0");
        assert_eq!(FloatLiteral { value: 1.5 }.to_string(), "1.5");
    }
}
