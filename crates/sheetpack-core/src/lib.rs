//! # sheetpack-core
//!
//! Core data structures for the sheetpack spreadsheet encoder.
//!
//! This crate provides the types shared by the encoder crates:
//! - [`Sheet`] - A named grid of string cells (rows may be jagged)
//! - [`Workbook`] - An ordered, validated collection of sheets
//! - [`column_to_letters`] / [`letters_to_column`] - Spreadsheet column naming
//!
//! ## Example
//!
//! ```rust
//! use sheetpack_core::{Sheet, Workbook};
//!
//! let mut workbook = Workbook::new();
//! let mut sheet = Sheet::new("Reservations");
//! sheet.push_row(["Name", "Tickets"]);
//! sheet.push_row(["Jane", "2"]);
//! workbook.add_sheet(sheet).unwrap();
//!
//! assert_eq!(workbook.sheet_count(), 1);
//! ```

pub mod column;
pub mod error;
pub mod sheet;
pub mod workbook;

pub use column::{cell_reference, column_to_letters, letters_to_column};
pub use error::{Error, Result};
pub use sheet::Sheet;
pub use workbook::Workbook;

/// Maximum length of a sheet name
pub const MAX_SHEET_NAME_LEN: usize = 31;

/// Name given to the placeholder sheet of an otherwise empty workbook
pub const PLACEHOLDER_SHEET_NAME: &str = "Sheet1";
