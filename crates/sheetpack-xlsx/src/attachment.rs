//! Helpers for serving a generated package as a download

/// MIME type of an OOXML spreadsheet
pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Build an `.xlsx` file name that is safe inside a quoted
/// `Content-Disposition: attachment; filename="..."` header.
///
/// Anything other than ASCII letters, digits, `-`, `_` and `.` becomes `_`.
/// An empty stem becomes `export`.
///
/// ```
/// use sheetpack_xlsx::attachment_filename;
///
/// assert_eq!(attachment_filename("reservations 2024"), "reservations_2024.xlsx");
/// ```
pub fn attachment_filename(stem: &str) -> String {
    let stem = stem.trim();
    let stem = stem.strip_suffix(".xlsx").unwrap_or(stem);
    let cleaned: String = stem
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect();

    if cleaned.is_empty() {
        "export.xlsx".to_string()
    } else {
        format!("{}.xlsx", cleaned)
    }
}
