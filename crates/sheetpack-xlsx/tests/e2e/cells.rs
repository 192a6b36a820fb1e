//! Worksheet contents read back through the package.

use pretty_assertions::assert_eq;
use sheetpack_xlsx::XlsxWriter;

use crate::*;

fn cells(rows: &ParsedRows, row: u32) -> Vec<(&str, &str)> {
    rows[&row]
        .iter()
        .map(|(r, v)| (r.as_str(), v.as_str()))
        .collect()
}

#[test]
fn test_single_sheet_end_to_end() {
    let bytes =
        XlsxWriter::assemble(&[sheet("Sheet1", &[&["Name", "Tickets"], &["Jane", "2"]])]).unwrap();
    let mut package = open_package(bytes);

    let sheets = workbook_sheets(&read_part(&mut package, "xl/workbook.xml"));
    assert_eq!(sheets.len(), 1);
    assert_eq!(sheets[0].0, "Sheet1");

    let rows = parse_worksheet(&read_part(&mut package, "xl/worksheets/sheet1.xml"));
    assert_eq!(rows.len(), 2);
    assert_eq!(cells(&rows, 1), vec![("A1", "Name"), ("B1", "Tickets")]);
    assert_eq!(cells(&rows, 2), vec![("A2", "Jane"), ("B2", "2")]);
}

#[test]
fn test_jagged_rows_read_back_unpadded() {
    let bytes = XlsxWriter::assemble(&[sheet("Data", &[&["A", "B"], &["1", "2", "3", "4"]])]).unwrap();
    let mut package = open_package(bytes);
    let rows = parse_worksheet(&read_part(&mut package, "xl/worksheets/sheet1.xml"));

    assert_eq!(cells(&rows, 1), vec![("A1", "A"), ("B1", "B")]);
    assert_eq!(
        cells(&rows, 2),
        vec![("A2", "1"), ("B2", "2"), ("C2", "3"), ("D2", "4")]
    );
}

#[test]
fn test_special_characters_survive() {
    let tricky = [r#"<b>&"x"</b>"#, "it's", "&amp;", "Grüße 🎭", "a\tb"];
    let bytes = XlsxWriter::assemble(&[sheet("Data", &[&tricky])]).unwrap();
    let mut package = open_package(bytes);

    let xml = read_part(&mut package, "xl/worksheets/sheet1.xml");
    assert_well_formed(&xml);
    assert!(xml.contains("<t>&lt;b&gt;&amp;&quot;x&quot;&lt;/b&gt;</t>"));

    let rows = parse_worksheet(&xml);
    let values: Vec<&str> = rows[&1].iter().map(|(_, v)| v.as_str()).collect();
    assert_eq!(values, tricky.to_vec());
}

#[test]
fn test_empty_string_cell_is_kept() {
    let bytes = XlsxWriter::assemble(&[sheet("Data", &[&["", "x"]])]).unwrap();
    let mut package = open_package(bytes);
    let rows = parse_worksheet(&read_part(&mut package, "xl/worksheets/sheet1.xml"));

    assert_eq!(cells(&rows, 1), vec![("A1", ""), ("B1", "x")]);
}

#[test]
fn test_sheets_keep_their_own_rows() {
    let bytes = XlsxWriter::assemble(&[
        sheet("One", &[&["first"]]),
        sheet("Two", &[&["second"], &["more"]]),
    ])
    .unwrap();
    let mut package = open_package(bytes);

    let one = parse_worksheet(&read_part(&mut package, "xl/worksheets/sheet1.xml"));
    let two = parse_worksheet(&read_part(&mut package, "xl/worksheets/sheet2.xml"));

    assert_eq!(cells(&one, 1), vec![("A1", "first")]);
    assert_eq!(two.len(), 2);
    assert_eq!(cells(&two, 2), vec![("A2", "more")]);
}

#[test]
fn test_wide_rows_use_multi_letter_references() {
    let values: Vec<String> = (0..30).map(|i| format!("v{}", i)).collect();
    let row: Vec<&str> = values.iter().map(String::as_str).collect();
    let bytes = XlsxWriter::assemble(&[sheet("Wide", &[&row])]).unwrap();
    let mut package = open_package(bytes);
    let rows = parse_worksheet(&read_part(&mut package, "xl/worksheets/sheet1.xml"));

    let refs: Vec<&str> = rows[&1].iter().map(|(r, _)| r.as_str()).collect();
    assert_eq!(refs[25], "Z1");
    assert_eq!(refs[26], "AA1");
    assert_eq!(refs[29], "AD1");
}
