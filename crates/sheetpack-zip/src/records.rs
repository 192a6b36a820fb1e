//! ZIP record layouts.
//!
//! Reference: PKWARE APPNOTE.TXT §4.3 (general format of a .ZIP file).
//! Only the fields a store-only, single-disk archive needs are variable;
//! everything else is written as zero.

use crate::writer::ByteWriter;

// ── Signatures ──────────────────────────────────────────────────────────
pub const LOCAL_FILE_HEADER_SIGNATURE: u32 = 0x0403_4b50; // "PK\x03\x04"
pub const CENTRAL_DIRECTORY_HEADER_SIGNATURE: u32 = 0x0201_4b50; // "PK\x01\x02"
pub const END_OF_CENTRAL_DIRECTORY_SIGNATURE: u32 = 0x0605_4b50; // "PK\x05\x06"

// ── Field values ────────────────────────────────────────────────────────
pub const VERSION_MADE_BY: u16 = 20; // 2.0, MS-DOS attribute mapping
pub const VERSION_NEEDED: u16 = 20; // 2.0
pub const GENERAL_PURPOSE_FLAGS: u16 = 0;
pub const METHOD_STORE: u16 = 0;
pub const DOS_TIME: u16 = 0; // output must not depend on the clock
pub const DOS_DATE: u16 = 0;

// ── Fixed record sizes (excluding variable-length name) ─────────────────
pub const LOCAL_FILE_HEADER_LEN: usize = 30;
pub const CENTRAL_DIRECTORY_HEADER_LEN: usize = 46;
pub const END_OF_CENTRAL_DIRECTORY_LEN: usize = 22;

/// Local file header, written immediately before an entry's content.
#[derive(Debug, Clone, Copy)]
pub struct LocalFileHeader<'a> {
    pub name: &'a [u8],
    pub crc32: u32,
    /// Stored size; compressed and uncompressed sizes are equal.
    pub size: u32,
}

impl LocalFileHeader<'_> {
    /// Encoded length including the name.
    pub fn encoded_len(&self) -> usize {
        LOCAL_FILE_HEADER_LEN + self.name.len()
    }

    /// Append this header to `w`.
    ///
    /// The caller guarantees `name.len()` fits in a `u16`.
    pub fn write_to(&self, w: &mut ByteWriter) {
        let start = w.position();
        w.write_u32(LOCAL_FILE_HEADER_SIGNATURE);
        w.write_u16(VERSION_NEEDED);
        w.write_u16(GENERAL_PURPOSE_FLAGS);
        w.write_u16(METHOD_STORE);
        w.write_u16(DOS_TIME);
        w.write_u16(DOS_DATE);
        w.write_u32(self.crc32);
        w.write_u32(self.size); // compressed
        w.write_u32(self.size); // uncompressed
        w.write_u16(self.name.len() as u16);
        w.write_u16(0); // extra field length
        debug_assert_eq!(w.position() - start, LOCAL_FILE_HEADER_LEN);
        w.write_bytes(self.name);
    }
}

/// Central directory header, one per entry.
#[derive(Debug, Clone, Copy)]
pub struct CentralDirectoryHeader<'a> {
    pub name: &'a [u8],
    pub crc32: u32,
    pub size: u32,
    /// Offset of the matching local header from the start of the archive.
    pub local_header_offset: u32,
}

impl CentralDirectoryHeader<'_> {
    /// Encoded length including the name.
    pub fn encoded_len(&self) -> usize {
        CENTRAL_DIRECTORY_HEADER_LEN + self.name.len()
    }

    /// Append this header to `w`.
    pub fn write_to(&self, w: &mut ByteWriter) {
        let start = w.position();
        w.write_u32(CENTRAL_DIRECTORY_HEADER_SIGNATURE);
        w.write_u16(VERSION_MADE_BY);
        w.write_u16(VERSION_NEEDED);
        w.write_u16(GENERAL_PURPOSE_FLAGS);
        w.write_u16(METHOD_STORE);
        w.write_u16(DOS_TIME);
        w.write_u16(DOS_DATE);
        w.write_u32(self.crc32);
        w.write_u32(self.size);
        w.write_u32(self.size);
        w.write_u16(self.name.len() as u16);
        w.write_u16(0); // extra field length
        w.write_u16(0); // file comment length
        w.write_u16(0); // disk number start
        w.write_u16(0); // internal attributes
        w.write_u32(0); // external attributes
        w.write_u32(self.local_header_offset);
        debug_assert_eq!(w.position() - start, CENTRAL_DIRECTORY_HEADER_LEN);
        w.write_bytes(self.name);
    }
}

/// Trailing record locating the central directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndOfCentralDirectory {
    pub entry_count: u16,
    pub directory_size: u32,
    pub directory_offset: u32,
}

impl EndOfCentralDirectory {
    /// Append this record to `w`.
    pub fn write_to(&self, w: &mut ByteWriter) {
        let start = w.position();
        w.write_u32(END_OF_CENTRAL_DIRECTORY_SIGNATURE);
        w.write_u16(0); // number of this disk
        w.write_u16(0); // disk where central directory starts
        w.write_u16(self.entry_count); // entries on this disk
        w.write_u16(self.entry_count); // total entries
        w.write_u32(self.directory_size);
        w.write_u32(self.directory_offset);
        w.write_u16(0); // comment length
        debug_assert_eq!(w.position() - start, END_OF_CENTRAL_DIRECTORY_LEN);
    }
}
