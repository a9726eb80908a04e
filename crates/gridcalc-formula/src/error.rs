//! Formula error types
//!
//! Every failure is fatal to the single compile or evaluation in
//! progress: there is no partial or recovered result for a malformed
//! or type-mismatched expression.

use crate::lexer::TokenKind;
use thiserror::Error;

/// Result type for formula operations
pub type FormulaResult<T> = std::result::Result<T, FormulaError>;

/// Errors that can occur while lexing, parsing, or evaluating a formula
#[derive(Debug, Error)]
pub enum FormulaError {
    // === Lex errors ===
    /// String literal with no closing quote
    #[error("Unterminated string literal")]
    UnterminatedString,

    /// Numeric literal that cannot be read as a number
    #[error("Badly formatted number: \"{0}\"")]
    MalformedNumber(String),

    /// Character with no meaning in the formula grammar
    #[error("Unexpected character: \"{0}\"")]
    UnexpectedChar(char),

    // === Parse errors ===
    /// Wrong token kind where a specific one was required
    #[error("Expected token {expected} but got {actual}")]
    UnexpectedToken {
        expected: TokenKind,
        actual: TokenKind,
    },

    /// Token that cannot begin a primary expression
    #[error("Unexpected token {0} in primary position")]
    UnexpectedPrimary(TokenKind),

    /// `:` applied to something other than two cell references
    #[error("Expected a cell reference after \":\", got {0}")]
    RangeEndpoint(&'static str),

    /// Identifier that is neither a function call nor a cell address
    #[error("\"{0}\" is not a valid cell reference")]
    InvalidCellReference(String),

    // === Evaluation errors ===
    /// Reference to an address with no cell behind it
    #[error("Cell \"{0}\" does not exist")]
    UnknownCell(String),

    /// Reference to a cell that has never been evaluated
    #[error("Cell \"{0}\" is null")]
    UninitializedCell(String),

    /// Operand or argument of the wrong scalar kind
    #[error("Expected a {expected}, got \"{actual}\"")]
    TypeMismatch {
        expected: &'static str,
        actual: String,
    },

    /// Call to a name with no registered function
    #[error("Unknown function: {0}")]
    UnknownFunction(String),

    /// Call whose arguments expanded to no scalars at all
    #[error("Function {0} called with no arguments")]
    MissingArgument(String),

    /// Cell range in a position where only scalars are allowed
    #[error("A cell range is only valid as a function argument")]
    RangeOutsideCall,

    /// Cell resolution re-entered an address already being resolved
    #[error("Circular reference detected at cell \"{0}\"")]
    CircularReference(String),

    /// Malformed address inside a range expansion
    #[error(transparent)]
    Address(#[from] gridcalc_core::Error),
}
