use std::fmt::Display;
use std::rc::Rc;

#[derive(Debug, PartialEq, Clone)]
pub enum Statement {
    Expression(Expression),
}

#[derive(Debug, PartialEq, Clone)]
pub enum Expression {
    Identifier(Identifier),
    NumericLiteral(f64),
    NullLiteral,
    BinaryExpr {
        operator: BinaryOperator,
        left: Box<Expression>,
        right: Box<Expression>,
    },
    /// Reserved node kind; the parser never produces it.
    UnaryExpr {
        operator: UnaryOperator,
        operand: Box<Expression>,
    },
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum UnaryOperator {
    Negate,
}

#[derive(Debug, PartialEq, Clone)]
pub struct Identifier {
    pub symbol: Rc<str>,
}

#[derive(Debug, PartialEq, Clone, Default)]
pub struct Program {
    pub body: Vec<Statement>,
}

impl Expression {
    pub fn binary(operator: BinaryOperator, left: Expression, right: Expression) -> Self {
        Expression::BinaryExpr {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Height of the tree rooted at this node; a leaf has depth 1.
    pub fn depth(&self) -> usize {
        match self {
            Expression::BinaryExpr { left, right, .. } => 1 + left.depth().max(right.depth()),
            Expression::UnaryExpr { operand, .. } => 1 + operand.depth(),
            Expression::Identifier(_) | Expression::NumericLiteral(_) | Expression::NullLiteral => 1,
        }
    }
}

impl BinaryOperator {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        use BinaryOperator::*;
        match symbol {
            "+" => Some(Add),
            "-" => Some(Subtract),
            "*" => Some(Multiply),
            "/" => Some(Divide),
            "%" => Some(Modulo),
            _ => None,
        }
    }

    pub fn to_str(self) -> &'static str {
        use BinaryOperator::*;
        match self {
            Add => "+",
            Subtract => "-",
            Multiply => "*",
            Divide => "/",
            Modulo => "%",
        }
    }
}

impl UnaryOperator {
    pub fn to_str(self) -> &'static str {
        match self {
            UnaryOperator::Negate => "-",
        }
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use Expression::*;
        match self {
            Identifier(ident) => write!(f, "{}", ident.symbol),
            NumericLiteral(val) => write!(f, "{}", val),
            NullLiteral => write!(f, "null"),
            BinaryExpr {
                operator,
                left,
                right,
            } => write!(f, "({} {} {})", left, operator.to_str(), right),
            UnaryExpr { operator, operand } => write!(f, "({}{})", operator.to_str(), operand),
        }
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Statement::Expression(expression) => write!(f, "{};", expression),
        }
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for statement in &self.body {
            writeln!(f, "{}", statement)?;
        }
        Ok(())
    }
}
