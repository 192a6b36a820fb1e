//! Sheet type - a named grid of string cells

/// A worksheet's contents
///
/// Rows are stored in order and each row is an ordered list of cell values.
/// Rows may have different lengths; nothing pads them to a common width.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sheet {
    name: String,
    rows: Vec<Vec<String>>,
}

impl Sheet {
    /// Create an empty sheet
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            rows: Vec::new(),
        }
    }

    /// Create a sheet from existing rows
    pub fn with_rows<S: Into<String>>(name: S, rows: Vec<Vec<String>>) -> Self {
        Self {
            name: name.into(),
            rows,
        }
    }

    /// Sheet name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the sheet name
    ///
    /// No validation happens here; [`Workbook`](crate::Workbook) validates
    /// names when sheets are added or renamed.
    pub fn set_name<S: Into<String>>(&mut self, name: S) {
        self.name = name.into();
    }

    /// All rows, in order
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Append a row of cells
    pub fn push_row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Width of the widest row
    pub fn max_width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Total number of cells across all rows
    pub fn cell_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    /// Check if the sheet has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get a cell by 0-based row and column
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row)?.get(col).map(String::as_str)
    }

    /// Consume the sheet, returning its name and rows
    pub fn into_parts(self) -> (String, Vec<Vec<String>>) {
        (self.name, self.rows)
    }
}
