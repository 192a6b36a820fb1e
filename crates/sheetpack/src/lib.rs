//! # sheetpack
//!
//! Encode named sheets of string cells as an XLSX spreadsheet.
//!
//! The package is assembled from scratch: a handful of fixed XML parts plus
//! one worksheet per sheet, packed into an uncompressed ZIP archive. No
//! archive or spreadsheet library is involved, and the output is
//! byte-for-byte reproducible.
//!
//! ## Example
//!
//! ```rust
//! use sheetpack::prelude::*;
//!
//! let mut sheet = Sheet::new("Reservations");
//! sheet.push_row(["Name", "Tickets"]);
//! sheet.push_row(["Jane", "2"]);
//!
//! let workbook = Workbook::from_sheets([sheet]).unwrap();
//! let bytes = workbook.to_xlsx().unwrap();
//!
//! assert_eq!(&bytes[..2], b"PK");
//! // Serve with XLSX_CONTENT_TYPE and attachment_filename("reservations")
//! ```

pub mod prelude;

pub use sheetpack_core::{
    cell_reference, column_to_letters, letters_to_column, Error, Result, Sheet, Workbook,
    MAX_SHEET_NAME_LEN,
};
pub use sheetpack_xlsx::{
    attachment_filename, escape_xml, XlsxError, XlsxResult, XlsxWriter, XLSX_CONTENT_TYPE,
};
pub use sheetpack_zip::{crc32, pack, FileEntry, ZipError, ZipResult};

use std::path::Path;

/// Extension trait to encode a [`Workbook`] directly
pub trait WorkbookXlsxExt {
    /// Encode as an in-memory XLSX package
    fn to_xlsx(&self) -> XlsxResult<Vec<u8>>;

    /// Encode and write to a file
    fn save_xlsx<P: AsRef<Path>>(&self, path: P) -> XlsxResult<()>;
}

impl WorkbookXlsxExt for Workbook {
    fn to_xlsx(&self) -> XlsxResult<Vec<u8>> {
        XlsxWriter::to_bytes(self)
    }

    fn save_xlsx<P: AsRef<Path>>(&self, path: P) -> XlsxResult<()> {
        XlsxWriter::write_file(self, path)
    }
}

/// Encode sheets as an XLSX package
///
/// At least one sheet is required.
pub fn build_xlsx(sheets: &[Sheet]) -> XlsxResult<Vec<u8>> {
    XlsxWriter::assemble(sheets)
}
