//! XLSX writer

use std::fs::File;
use std::io::Write;
use std::path::Path;

use sheetpack_core::{Sheet, Workbook};
use sheetpack_zip::{pack, FileEntry};

use crate::error::{XlsxError, XlsxResult};
use crate::package::{
    content_types_xml, root_rels_xml, workbook_rels_xml, workbook_xml, worksheet_path,
    CONTENT_TYPES_PATH, ROOT_RELS_PATH, WORKBOOK_PATH, WORKBOOK_RELS_PATH,
};
use crate::worksheet::build_sheet_xml;

/// XLSX package writer
pub struct XlsxWriter;

impl XlsxWriter {
    /// Write a workbook to a file path
    pub fn write_file<P: AsRef<Path>>(workbook: &Workbook, path: P) -> XlsxResult<()> {
        let file = File::create(path)?;
        Self::write(workbook, file)
    }

    /// Write a workbook to a writer
    ///
    /// An empty workbook is written with a single empty `Sheet1`.
    pub fn write<W: Write>(workbook: &Workbook, mut writer: W) -> XlsxResult<()> {
        let bytes = Self::to_bytes(workbook)?;
        writer.write_all(&bytes)?;
        writer.flush()?;
        Ok(())
    }

    /// Encode a workbook as an in-memory package
    ///
    /// An empty workbook is encoded with a single empty `Sheet1`.
    pub fn to_bytes(workbook: &Workbook) -> XlsxResult<Vec<u8>> {
        Self::assemble(&workbook.sheets_or_placeholder())
    }

    /// Encode sheets as an in-memory package
    ///
    /// Sheet names are not validated here; pass sheets through
    /// [`Workbook`] to get length, character and uniqueness checks.
    pub fn assemble(sheets: &[Sheet]) -> XlsxResult<Vec<u8>> {
        let entries = Self::package_entries(sheets)?;
        let bytes = pack(&entries)?;
        log::debug!(
            "assembled xlsx package: {} sheets, {} bytes",
            sheets.len(),
            bytes.len()
        );
        Ok(bytes)
    }

    /// The package parts for `sheets`, in archive order
    ///
    /// Four package-level parts come first, then one worksheet per sheet.
    pub fn package_entries(sheets: &[Sheet]) -> XlsxResult<Vec<FileEntry>> {
        if sheets.is_empty() {
            return Err(XlsxError::NoSheets);
        }

        let mut entries = Vec::with_capacity(sheets.len() + 4);
        entries.push(FileEntry::new(CONTENT_TYPES_PATH, content_types_xml(sheets.len())));
        entries.push(FileEntry::new(ROOT_RELS_PATH, root_rels_xml()));
        entries.push(FileEntry::new(
            WORKBOOK_PATH,
            workbook_xml(sheets.iter().map(Sheet::name)),
        ));
        entries.push(FileEntry::new(WORKBOOK_RELS_PATH, workbook_rels_xml(sheets.len())));

        for (i, sheet) in sheets.iter().enumerate() {
            entries.push(FileEntry::new(worksheet_path(i + 1), build_sheet_xml(sheet.rows())));
        }

        Ok(entries)
    }
}
