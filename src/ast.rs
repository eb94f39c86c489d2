use std::fmt;

use crate::interpret::Value;
use crate::token::LexItem;

#[derive(Debug, Clone, PartialEq)]
pub struct UnaryOpNode {
    pub op: LexItem,
    pub operand: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryOpNode {
    pub lhs: Box<Expression>,
    pub op: LexItem,
    pub rhs: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Literal(Value),
    Group(Box<Expression>),
    UnaryOp(UnaryOpNode),
    BinaryOp(BinaryOpNode),
}

/// Prints the tree in prefix form, e.g. `(* (group (+ 1 2)) 3)`.
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Literal(value) => write!(f, "{}", value),
            Expression::Group(expr) => write!(f, "(group {})", expr),
            Expression::UnaryOp(UnaryOpNode { op, operand }) => {
                write!(f, "({} {})", op.lexeme, operand)
            }
            Expression::BinaryOp(BinaryOpNode { lhs, op, rhs }) => {
                write!(f, "({} {} {})", op.lexeme, lhs, rhs)
            }
        }
    }
}
