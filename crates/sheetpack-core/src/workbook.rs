//! Workbook type - the ordered list of sheets to encode

use std::borrow::Cow;

use crate::error::{Error, Result};
use crate::sheet::Sheet;
use crate::{MAX_SHEET_NAME_LEN, PLACEHOLDER_SHEET_NAME};

/// Characters a sheet name cannot contain
const INVALID_CHARS: &[char] = &[':', '\\', '/', '?', '*', '[', ']'];

/// A workbook (spreadsheet document)
///
/// Every sheet added through the workbook has a valid, unique name.
#[derive(Debug, Clone, Default)]
pub struct Workbook {
    sheets: Vec<Sheet>,
}

impl Workbook {
    /// Create an empty workbook with no sheets
    pub fn new() -> Self {
        Self { sheets: Vec::new() }
    }

    /// Build a workbook from sheets, validating each name in order
    pub fn from_sheets<I: IntoIterator<Item = Sheet>>(sheets: I) -> Result<Self> {
        let mut wb = Self::new();
        for sheet in sheets {
            wb.add_sheet(sheet)?;
        }
        Ok(wb)
    }

    /// Get the number of sheets
    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }

    /// Check if the workbook has no sheets
    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    /// Get a sheet by index
    pub fn sheet(&self, index: usize) -> Option<&Sheet> {
        self.sheets.get(index)
    }

    /// Get a mutable sheet by index
    ///
    /// Renaming through this reference bypasses validation; use
    /// [`Workbook::rename_sheet`] instead.
    pub fn sheet_mut(&mut self, index: usize) -> Option<&mut Sheet> {
        self.sheets.get_mut(index)
    }

    /// Get a sheet by name
    pub fn sheet_by_name(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name() == name)
    }

    /// All sheets, in order
    pub fn sheets(&self) -> &[Sheet] {
        &self.sheets
    }

    /// Sheets to encode: the real sheets, or one empty placeholder sheet
    /// when the workbook has none
    pub fn sheets_or_placeholder(&self) -> Cow<'_, [Sheet]> {
        if self.sheets.is_empty() {
            Cow::Owned(vec![Sheet::new(PLACEHOLDER_SHEET_NAME)])
        } else {
            Cow::Borrowed(&self.sheets)
        }
    }

    /// Add a sheet, returning its index
    pub fn add_sheet(&mut self, sheet: Sheet) -> Result<usize> {
        self.validate_sheet_name(sheet.name())?;
        let index = self.sheets.len();
        self.sheets.push(sheet);
        Ok(index)
    }

    /// Add an empty sheet with the given name
    pub fn add_sheet_with_name(&mut self, name: &str) -> Result<usize> {
        self.add_sheet(Sheet::new(name))
    }

    /// Add an empty sheet with a generated `SheetN` name
    pub fn add_default_sheet(&mut self) -> Result<usize> {
        let name = self.generate_sheet_name();
        self.add_sheet_with_name(&name)
    }

    /// Rename a sheet
    pub fn rename_sheet(&mut self, index: usize, new_name: &str) -> Result<()> {
        if index >= self.sheets.len() {
            return Err(Error::other(format!(
                "Sheet index {} out of bounds (count: {})",
                index,
                self.sheets.len()
            )));
        }

        self.validate_sheet_name_excluding(new_name, Some(index))?;

        self.sheets[index].set_name(new_name);
        Ok(())
    }

    /// Consume the workbook, returning its sheets
    pub fn into_sheets(self) -> Vec<Sheet> {
        self.sheets
    }

    fn validate_sheet_name(&self, name: &str) -> Result<()> {
        self.validate_sheet_name_excluding(name, None)
    }

    fn validate_sheet_name_excluding(&self, name: &str, exclude_index: Option<usize>) -> Result<()> {
        if name.is_empty() {
            return Err(Error::InvalidSheetName("Sheet name cannot be empty".into()));
        }
        if name.chars().count() > MAX_SHEET_NAME_LEN {
            return Err(Error::InvalidSheetName(format!(
                "Sheet name too long (max {} characters)",
                MAX_SHEET_NAME_LEN
            )));
        }

        if let Some(c) = name.chars().find(|c| INVALID_CHARS.contains(c)) {
            return Err(Error::InvalidSheetName(format!(
                "Sheet name cannot contain '{}'",
                c
            )));
        }

        // Case-insensitive, as spreadsheet applications compare them
        let name_lower = name.to_lowercase();
        for (i, sheet) in self.sheets.iter().enumerate() {
            if Some(i) != exclude_index && sheet.name().to_lowercase() == name_lower {
                return Err(Error::DuplicateSheetName(name.into()));
            }
        }

        Ok(())
    }

    fn generate_sheet_name(&self) -> String {
        let mut n = self.sheets.len() + 1;
        loop {
            let name = format!("Sheet{}", n);
            if self.validate_sheet_name(&name).is_ok() {
                return name;
            }
            n += 1;
        }
    }
}
