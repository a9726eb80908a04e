//! # gridcalc-core
//!
//! Core data structures for the gridcalc formula engine.
//!
//! This crate provides the fundamental types used throughout gridcalc:
//! - [`Value`] - Scalars produced by formula evaluation (numbers, text)
//! - [`CellKind`] - Coarse cell classification for presentation
//! - [`address`] - A1-style address helpers (shape test, letters/row split)
//! - [`range::expand_range`] - Inclusive rectangular range expansion
//!
//! ## Example
//!
//! ```rust
//! use gridcalc_core::range::expand_range;
//!
//! let cells = expand_range("A1", "A3").unwrap();
//! assert_eq!(cells, vec!["A1", "A2", "A3"]);
//! ```

pub mod address;
pub mod error;
pub mod range;
pub mod value;

// Re-exports for convenience
pub use error::{Error, Result};
pub use value::{CellKind, Value};
