//! Formula language for spreadsheet cells.
//!
//! Cell text is compiled in two stages: [`lexer::lex`] turns raw text
//! into tokens (text without a leading `=` becomes a single string
//! literal) and [`parser::parse`] builds the [`ast::Program`].
//! [`evaluator::evaluate`] reduces a program to a [`gridcalc_core::Value`],
//! resolving cell references through the [`evaluator::CellResolver`]
//! trait, and [`printer::print`] renders a program back to text.
//!
//! ```rust
//! use gridcalc_formula::{compile, print};
//!
//! let program = compile("=SUM(A1:A3, 4)").unwrap();
//! assert_eq!(print(&program), "SUM((A1:A3), 4)");
//! ```

pub mod ast;
pub mod error;
pub mod evaluator;
pub mod functions;
pub mod lexer;
pub mod parser;
pub mod printer;

pub use ast::{BinaryOp, Expr, Program, UnaryOp};
pub use error::{FormulaError, FormulaResult};
pub use evaluator::{evaluate, CellResolver};
pub use lexer::{lex, Token, TokenKind};
pub use parser::{compile, parse};
pub use printer::print;
