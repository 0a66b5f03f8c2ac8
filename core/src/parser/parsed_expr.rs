use core::fmt;

use num_bigint::{BigInt, Sign};

use crate::parser::{BinaryOp, UnaryOp, syntax::AnnotatedSource};
use crate::values::Number;

#[derive(Debug)]
pub struct ParsedExpr<'a> {
    pub expr: &'a Expr<'a>,
    pub ann: &'a AnnotatedSource<'a, Expr<'a>>,
}

impl<'a> ParsedExpr<'a> {
    pub fn source(&self) -> &'a str {
        self.ann.source
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr<'a> {
    Binary {
        op: BinaryOp,
        left: &'a Expr<'a>,
        right: &'a Expr<'a>,
    },
    Unary {
        op: UnaryOp,
        expr: &'a Expr<'a>,
    },
    Call {
        callable: &'a Expr<'a>,
        args: &'a [&'a Expr<'a>],
    },
    Attribute {
        value: &'a Expr<'a>,
        attr: &'a str,
    },
    Literal(Literal<'a>),
    Ident(&'a str),
}

/// Node kinds as seen by the safety classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Literal,
    BinaryOp,
    UnaryOp,
    Name,
    Call,
    AttributeAccess,
}

impl<'a> Expr<'a> {
    pub fn kind(&self) -> NodeKind {
        match self {
            Expr::Binary { .. } => NodeKind::BinaryOp,
            Expr::Unary { .. } => NodeKind::UnaryOp,
            Expr::Call { .. } => NodeKind::Call,
            Expr::Attribute { .. } => NodeKind::AttributeAccess,
            Expr::Literal(_) => NodeKind::Literal,
            Expr::Ident(_) => NodeKind::Name,
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NodeKind::Literal => "literal",
            NodeKind::BinaryOp => "binary operation",
            NodeKind::UnaryOp => "unary operation",
            NodeKind::Name => "name",
            NodeKind::Call => "function call",
            NodeKind::AttributeAccess => "attribute access",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Copy, PartialEq)]
pub enum Literal<'a> {
    Int(i64),
    /// An integer literal beyond `i64`, as little-endian base 2^32 digits of
    /// its magnitude. Literals are never negative.
    BigInt(&'a [u32]),
    Float(f64),
}

impl Literal<'_> {
    pub fn to_number(&self) -> Number {
        match *self {
            Literal::Int(i) => Number::Int(i),
            Literal::BigInt(digits) => Number::from(BigInt::from_slice(Sign::Plus, digits)),
            Literal::Float(f) => Number::Float(f),
        }
    }
}

impl fmt::Debug for Literal<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Int(value) => write!(f, "Int({value})"),
            Literal::BigInt(digits) => write!(f, "BigInt({})", BigInt::from_slice(Sign::Plus, digits)),
            Literal::Float(value) => write!(f, "Float({value})"),
        }
    }
}
