//! Engine error types.

use gridcalc_formula::FormulaError;
use thiserror::Error;

/// Result type for engine operations
pub type EngineResult<T> = std::result::Result<T, EngineError>;

/// Errors from the spreadsheet engine.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Operation addressed to a cell the sheet does not hold
    #[error("Cell \"{0}\" does not exist")]
    UnknownCell(String),

    /// Compilation or evaluation of a formula failed
    #[error(transparent)]
    Formula(#[from] FormulaError),
}
