//! # sheetpack-zip
//!
//! A minimal ZIP writer that only knows the "store" method.
//!
//! Entries are written uncompressed with a zero modification timestamp, so
//! identical input always produces byte-identical archives.
//!
//! ```rust
//! use sheetpack_zip::{pack, FileEntry};
//!
//! let bytes = pack(&[FileEntry::new("hello.txt", "hi")]).unwrap();
//! assert_eq!(&bytes[..4], b"PK\x03\x04");
//! ```

pub mod archive;
pub mod crc;
pub mod error;
pub mod records;
pub mod writer;

pub use archive::{pack, FileEntry, ZipPacker};
pub use crc::{crc32, Crc32};
pub use error::{ZipError, ZipResult};
pub use writer::ByteWriter;
