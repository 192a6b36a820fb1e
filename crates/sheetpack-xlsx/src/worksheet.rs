//! Worksheet part (`xl/worksheets/sheetN.xml`)

use sheetpack_core::column_to_letters;

use crate::escape::escape_xml;
use crate::package::NS_SPREADSHEETML;

/// Render rows as a worksheet document.
///
/// Each present cell becomes an inline string cell; rows keep their own
/// length, so a short row is never padded to the width of a longer one.
pub fn build_sheet_xml(rows: &[Vec<String>]) -> String {
    let mut content = String::with_capacity(256 + rows.iter().map(|r| r.len() * 48).sum::<usize>());
    content.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    content.push('\n');
    content.push_str(&format!(r#"<worksheet xmlns="{}"><sheetData>"#, NS_SPREADSHEETML));

    for (row_idx, cells) in rows.iter().enumerate() {
        let row_num = row_idx + 1;
        content.push_str(&format!(r#"<row r="{}">"#, row_num));

        for (col_idx, value) in cells.iter().enumerate() {
            content.push_str(&format!(
                r#"<c r="{}{}" t="inlineStr"><is><t>{}</t></is></c>"#,
                column_to_letters(col_idx),
                row_num,
                escape_xml(value)
            ));
        }

        content.push_str("</row>");
    }

    content.push_str("</sheetData></worksheet>");
    content
}
