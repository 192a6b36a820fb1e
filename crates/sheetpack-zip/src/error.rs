//! ZIP writer error types

use thiserror::Error;

/// Result type for ZIP operations
pub type ZipResult<T> = std::result::Result<T, ZipError>;

/// Errors that can occur while packing an archive
///
/// All of these describe input the store-only format cannot represent.
#[derive(Debug, Error)]
pub enum ZipError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Entry path longer than a 16-bit length field allows
    #[error("Entry name too long ({len} bytes): {name}")]
    NameTooLong { name: String, len: usize },

    /// More entries than the end-of-central-directory record can count
    #[error("Too many entries: {0}")]
    TooManyEntries(usize),

    /// A size or offset that does not fit in 32 bits
    #[error("Archive too large: {0}")]
    ArchiveTooLarge(String),

    /// Two entries share a path
    #[error("Duplicate entry path: {0}")]
    DuplicatePath(String),
}
