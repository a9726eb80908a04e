//! Convenience re-exports for typical engine use.
//!
//! ```rust
//! use gridcalc::prelude::*;
//!
//! let mut sheet = Spreadsheet::new();
//! sheet.add(Cell::new("A1", "=2"));
//! sheet.add(Cell::new("A2", "=A1*3"));
//! sheet.recompute_all().unwrap();
//! assert_eq!(sheet.value("A2").unwrap(), Value::Number(6.0));
//! ```

pub use crate::cell::Cell;
pub use crate::error::{EngineError, EngineResult};
pub use crate::queue::RecomputeQueue;
pub use crate::spreadsheet::{referenced_addresses, Spreadsheet};
pub use gridcalc_core::{CellKind, Value};
pub use gridcalc_formula::{compile, evaluate, print, FormulaError, Program};
