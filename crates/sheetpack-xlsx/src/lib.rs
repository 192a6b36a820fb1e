//! # sheetpack-xlsx
//!
//! XLSX (Office Open XML) writer for sheetpack.
//!
//! Produces a minimal spreadsheet package: the four package-level parts plus
//! one worksheet per sheet, every cell an inline string. The ZIP container is
//! written by `sheetpack-zip`.

pub mod attachment;
pub mod error;
pub mod escape;
pub mod package;
pub mod worksheet;
pub mod writer;

pub use attachment::{attachment_filename, XLSX_CONTENT_TYPE};
pub use error::{XlsxError, XlsxResult};
pub use escape::escape_xml;
pub use writer::XlsxWriter;
