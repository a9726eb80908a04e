//! Cell address helpers
//!
//! Addresses are plain strings in A1 notation: one or more uppercase
//! column letters followed by one or more digits. Cells are keyed by
//! these strings throughout the engine; this module provides the shape
//! test and the letters/row split that range expansion and dependency
//! scanning build on.

use crate::error::{Error, Result};
use lazy_regex::regex_is_match;

/// Whether `s` has the shape of a cell address (`^[A-Z]+[0-9]+$`).
pub fn is_cell_address(s: &str) -> bool {
    regex_is_match!(r"^[A-Z]+[0-9]+$", s)
}

/// Split an address into its column letters and numeric row.
///
/// # Examples
/// ```
/// use gridcalc_core::address::split_address;
///
/// let (col, row) = split_address("B3").unwrap();
/// assert_eq!(col, "B");
/// assert_eq!(row, 3);
/// ```
pub fn split_address(s: &str) -> Result<(&str, u32)> {
    let letters_end = s
        .find(|c: char| !c.is_ascii_uppercase())
        .unwrap_or(s.len());
    if letters_end == 0 || letters_end == s.len() {
        return Err(Error::InvalidAddress(s.to_string()));
    }

    let letters = &s[..letters_end];
    let row: u32 = s[letters_end..]
        .parse()
        .map_err(|_| Error::InvalidAddress(s.to_string()))?;

    Ok((letters, row))
}

/// Map column letters to a zero-based ordinal (`A` = 0, ..., `Z` = 25).
///
/// Only the first letter is considered, so the mapping round-trips
/// correctly for single-letter columns only. Multi-letter columns
/// (`AA`, `AB`, ...) are accepted by the address shape but collapse to
/// their first letter here; ranges beyond column `Z` are unsupported.
pub fn column_ordinal(letters: &str) -> Result<u8> {
    match letters.as_bytes().first() {
        Some(b @ b'A'..=b'Z') => Ok(b - b'A'),
        _ => Err(Error::InvalidAddress(letters.to_string())),
    }
}

/// Map a zero-based column ordinal back to its letter (`0` = `A`).
pub fn ordinal_to_letter(ordinal: u8) -> char {
    (b'A' + ordinal.min(25)) as char
}
