//! Spreadsheet column naming
//!
//! Columns are named in bijective base-26: `A`..`Z`, then `AA`..`ZZ`,
//! then `AAA` and so on. There is no zero digit, so `Z` is followed by `AA`
//! rather than `BA`.

use crate::error::{Error, Result};

/// Convert a 0-based column index to letters (0 = A, 25 = Z, 26 = AA, etc.)
///
/// # Examples
/// ```
/// use sheetpack_core::column_to_letters;
///
/// assert_eq!(column_to_letters(0), "A");
/// assert_eq!(column_to_letters(26), "AA");
/// assert_eq!(column_to_letters(702), "AAA");
/// ```
pub fn column_to_letters(col: usize) -> String {
    let mut letters = Vec::new();
    let mut n = col as u64 + 1; // 1-based for calculation

    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push(b'A' + rem as u8);
        n = (n - 1) / 26;
    }

    letters.iter().rev().map(|&b| b as char).collect()
}

/// Convert column letters to a 0-based index (A = 0, Z = 25, AA = 26, etc.)
///
/// Lowercase letters are accepted.
pub fn letters_to_column(letters: &str) -> Result<usize> {
    if letters.is_empty() {
        return Err(Error::InvalidColumn("empty column letters".into()));
    }

    let mut col: usize = 0;
    for c in letters.chars() {
        if !c.is_ascii_alphabetic() {
            return Err(Error::InvalidColumn(format!(
                "invalid column letter '{}'",
                c
            )));
        }
        let digit = (c.to_ascii_uppercase() as u8 - b'A') as usize + 1;
        col = col
            .checked_mul(26)
            .and_then(|v| v.checked_add(digit))
            .ok_or_else(|| Error::InvalidColumn(format!("column '{}' overflows", letters)))?;
    }

    Ok(col - 1)
}

/// Build an A1-style reference from 0-based row and column indices
///
/// ```
/// use sheetpack_core::cell_reference;
///
/// assert_eq!(cell_reference(0, 0), "A1");
/// assert_eq!(cell_reference(2, 1), "B3");
/// ```
pub fn cell_reference(row: usize, col: usize) -> String {
    format!("{}{}", column_to_letters(col), row + 1)
}
