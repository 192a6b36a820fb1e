//! Archive packer
//!
//! An archive is laid out as:
//!
//! ```text
//! [local header 1][content 1] ... [local header n][content n]
//! [central header 1] ... [central header n]
//! [end of central directory]
//! ```
//!
//! Local headers are written as entries arrive; central headers are buffered
//! and emitted in the same order by [`ZipPacker::finish`].

use std::collections::HashSet;

use crate::crc::crc32;
use crate::error::{ZipError, ZipResult};
use crate::records::{
    CentralDirectoryHeader, EndOfCentralDirectory, LocalFileHeader,
    CENTRAL_DIRECTORY_HEADER_LEN, END_OF_CENTRAL_DIRECTORY_LEN, LOCAL_FILE_HEADER_LEN,
};
use crate::writer::ByteWriter;

/// One file to place in the archive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Forward-slash separated path inside the archive
    pub path: String,
    /// Raw (stored) content
    pub content: Vec<u8>,
}

impl FileEntry {
    /// Create an entry from a path and content
    pub fn new<P: Into<String>, C: Into<Vec<u8>>>(path: P, content: C) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

/// Pack entries into a complete store-only ZIP archive.
///
/// Entry order is preserved. The result depends only on `entries`.
pub fn pack(entries: &[FileEntry]) -> ZipResult<Vec<u8>> {
    let capacity = entries
        .iter()
        .map(|e| {
            LOCAL_FILE_HEADER_LEN + CENTRAL_DIRECTORY_HEADER_LEN + 2 * e.path.len() + e.content.len()
        })
        .sum::<usize>()
        + END_OF_CENTRAL_DIRECTORY_LEN;

    let mut packer = ZipPacker::with_capacity(capacity);
    for entry in entries {
        packer.add_entry(&entry.path, &entry.content)?;
    }
    packer.finish()
}

/// Central directory data remembered for an entry already written
#[derive(Debug)]
struct PendingEntry {
    name: Vec<u8>,
    crc32: u32,
    size: u32,
    local_header_offset: u32,
}

/// Incremental archive builder
#[derive(Debug, Default)]
pub struct ZipPacker {
    out: ByteWriter,
    entries: Vec<PendingEntry>,
    paths: HashSet<String>,
}

impl ZipPacker {
    /// Create an empty packer
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty packer with an output size hint
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            out: ByteWriter::with_capacity(capacity),
            entries: Vec::new(),
            paths: HashSet::new(),
        }
    }

    /// Number of entries added so far
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Write the local header and content for one entry
    pub fn add_entry(&mut self, path: &str, content: &[u8]) -> ZipResult<()> {
        if path.len() > u16::MAX as usize {
            return Err(ZipError::NameTooLong {
                name: path.chars().take(64).collect(),
                len: path.len(),
            });
        }
        if self.entries.len() >= u16::MAX as usize {
            return Err(ZipError::TooManyEntries(self.entries.len() + 1));
        }
        if !self.paths.insert(path.to_string()) {
            return Err(ZipError::DuplicatePath(path.to_string()));
        }

        let size = to_u32(content.len(), || format!("entry '{}' is {} bytes", path, content.len()))?;
        let offset = to_u32(self.out.position(), || {
            format!("entry '{}' starts beyond 4 GiB", path)
        })?;

        let crc = crc32(content);
        let header = LocalFileHeader {
            name: path.as_bytes(),
            crc32: crc,
            size,
        };
        header.write_to(&mut self.out);
        self.out.write_bytes(content);

        log::trace!("zip entry '{}': {} bytes at offset {}, crc {:08x}", path, size, offset, crc);

        self.entries.push(PendingEntry {
            name: path.as_bytes().to_vec(),
            crc32: crc,
            size,
            local_header_offset: offset,
        });
        Ok(())
    }

    /// Write the central directory and end record, returning the archive
    pub fn finish(mut self) -> ZipResult<Vec<u8>> {
        let directory_start = self.out.position();

        for entry in &self.entries {
            CentralDirectoryHeader {
                name: &entry.name,
                crc32: entry.crc32,
                size: entry.size,
                local_header_offset: entry.local_header_offset,
            }
            .write_to(&mut self.out);
        }

        let directory_size = self.out.position() - directory_start;
        let eocd = EndOfCentralDirectory {
            // add_entry caps the count at u16::MAX
            entry_count: self.entries.len() as u16,
            directory_size: to_u32(directory_size, || {
                format!("central directory is {} bytes", directory_size)
            })?,
            directory_offset: to_u32(directory_start, || {
                "central directory starts beyond 4 GiB".to_string()
            })?,
        };
        eocd.write_to(&mut self.out);

        log::debug!(
            "packed zip archive: {} entries, {} bytes",
            self.entries.len(),
            self.out.position()
        );

        Ok(self.out.into_inner())
    }
}

fn to_u32<F: FnOnce() -> String>(value: usize, describe: F) -> ZipResult<u32> {
    u32::try_from(value).map_err(|_| ZipError::ArchiveTooLarge(describe()))
}
