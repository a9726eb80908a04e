//! Rectangular range expansion

use crate::address::{column_ordinal, ordinal_to_letter, split_address};
use crate::error::Result;

/// Expand an inclusive rectangular range into its member addresses.
///
/// Iteration is row-outer, column-inner: for each row from the start
/// row to the end row, every column from the start column to the end
/// column is emitted. An inverted range (start row or column past the
/// end) expands to nothing.
///
/// # Examples
/// ```
/// use gridcalc_core::range::expand_range;
///
/// let cells = expand_range("A1", "B2").unwrap();
/// assert_eq!(cells, vec!["A1", "B1", "A2", "B2"]);
///
/// assert!(expand_range("B2", "A1").unwrap().is_empty());
/// ```
pub fn expand_range(start: &str, end: &str) -> Result<Vec<String>> {
    let (start_letters, start_row) = split_address(start)?;
    let (end_letters, end_row) = split_address(end)?;

    let start_col = column_ordinal(start_letters)?;
    let end_col = column_ordinal(end_letters)?;

    let mut addresses = Vec::new();
    for row in start_row..=end_row {
        for col in start_col..=end_col {
            addresses.push(format!("{}{}", ordinal_to_letter(col), row));
        }
    }
    Ok(addresses)
}
