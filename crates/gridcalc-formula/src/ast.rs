//! Formula Abstract Syntax Tree types

use std::fmt;

/// A compiled formula: exactly one root expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub body: Expr,
}

/// Formula expression AST
///
/// Identifiers are a parser-internal state, not a variant: by the time
/// a tree is finished every identifier has been resolved into either a
/// [`Expr::Cell`] or the name of a [`Expr::Call`]. Range endpoints are
/// stored as validated address strings, so a range's ends are cells by
/// construction.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    // === Literals ===
    /// Numeric literal
    Number(f64),
    /// String literal
    Text(String),

    // === References ===
    /// Single cell reference, e.g. "B3"
    Cell(String),
    /// Inclusive rectangular range between two cell addresses
    Range { start: String, end: String },

    // === Operators ===
    /// Unary operation
    Unary { op: UnaryOp, operand: Box<Expr> },
    /// Binary operation
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },

    // === Function call ===
    Call { name: String, args: Vec<Expr> },

    // === Explicit grouping ===
    /// Parenthesized expression; transparent to evaluation but kept so
    /// the printer can reproduce the original grouping.
    Group(Box<Expr>),
}

impl Expr {
    /// Human-readable name of the variant, for error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Expr::Number(_) => "number literal",
            Expr::Text(_) => "string literal",
            Expr::Cell(_) => "cell reference",
            Expr::Range { .. } => "cell range",
            Expr::Unary { .. } => "unary expression",
            Expr::Binary { .. } => "binary expression",
            Expr::Call { .. } => "function call",
            Expr::Group(_) => "group",
        }
    }
}

/// Binary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            BinaryOp::Add => '+',
            BinaryOp::Subtract => '-',
            BinaryOp::Multiply => '*',
            BinaryOp::Divide => '/',
        };
        write!(f, "{symbol}")
    }
}

/// Unary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Plus,
    Negate,
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            UnaryOp::Plus => '+',
            UnaryOp::Negate => '-',
        };
        write!(f, "{symbol}")
    }
}
