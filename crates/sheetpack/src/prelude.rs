//! Prelude module - common imports for sheetpack users
//!
//! ```rust
//! use sheetpack::prelude::*;
//! ```

pub use crate::{
    attachment_filename, build_xlsx, Sheet, Workbook, WorkbookXlsxExt, XlsxError, XlsxResult,
    XlsxWriter, XLSX_CONTENT_TYPE,
};
