//! A small spreadsheet engine.
//!
//! Cells hold raw text. Text starting with `=` is a formula in a
//! grammar of numbers, strings, cell references, ranges, arithmetic,
//! and built-in functions; anything else is a plain text literal. The
//! [`Spreadsheet`] store compiles and evaluates cells on demand,
//! tracks which cells mention which, and recomputes dependents through
//! a FIFO queue whenever an input is re-evaluated.
//!
//! ```rust
//! use gridcalc::prelude::*;
//!
//! let mut sheet = Spreadsheet::new();
//! sheet.add(Cell::new("A1", "=1"));
//! sheet.add(Cell::new("A2", "=2"));
//! sheet.add(Cell::new("A3", "=SUM(A1:A2)"));
//! sheet.recompute_all().unwrap();
//! assert_eq!(sheet.value("A3").unwrap(), Value::Number(3.0));
//!
//! sheet.update("A1", "=10").unwrap();
//! sheet.evaluate("A1").unwrap();
//! assert_eq!(sheet.value("A3").unwrap(), Value::Number(12.0));
//! ```

pub mod cell;
pub mod error;
pub mod prelude;
pub mod queue;
pub mod spreadsheet;

pub use cell::Cell;
pub use error::{EngineError, EngineResult};
pub use queue::RecomputeQueue;
pub use spreadsheet::{referenced_addresses, Spreadsheet};
