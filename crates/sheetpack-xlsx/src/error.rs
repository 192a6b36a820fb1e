//! XLSX error types

use thiserror::Error;

/// Result type for XLSX operations
pub type XlsxResult<T> = std::result::Result<T, XlsxError>;

/// Errors that can occur during XLSX writing
#[derive(Debug, Error)]
pub enum XlsxError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// ZIP error
    #[error("ZIP error: {0}")]
    Zip(#[from] sheetpack_zip::ZipError),

    /// A package needs at least one worksheet
    #[error("Workbook has no sheets")]
    NoSheets,

    /// Core error
    #[error("Core error: {0}")]
    Core(#[from] sheetpack_core::Error),
}
