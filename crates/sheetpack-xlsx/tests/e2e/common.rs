//! Common utilities for E2E tests.

use std::collections::BTreeMap;
use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::reader::Reader;
use sheetpack_core::Sheet;
use zip::ZipArchive;

pub type Package = ZipArchive<Cursor<Vec<u8>>>;

/// Build a sheet from string literals.
pub fn sheet(name: &str, rows: &[&[&str]]) -> Sheet {
    let mut sheet = Sheet::new(name);
    for row in rows {
        sheet.push_row(row.iter().copied());
    }
    sheet
}

/// Open generated bytes with the `zip` crate.
pub fn open_package(bytes: Vec<u8>) -> Package {
    ZipArchive::new(Cursor::new(bytes)).expect("package should be a readable zip")
}

/// Entry names in central directory order.
pub fn entry_names(package: &mut Package) -> Vec<String> {
    (0..package.len())
        .map(|i| package.by_index(i).unwrap().name().to_string())
        .collect()
}

/// Read one part as UTF-8 text.
pub fn read_part(package: &mut Package, path: &str) -> String {
    let mut file = package
        .by_name(path)
        .unwrap_or_else(|e| panic!("missing part {}: {}", path, e));
    let mut content = String::new();
    file.read_to_string(&mut content).unwrap();
    content
}

/// Entry count stored in the end-of-central-directory record.
pub fn eocd_entry_count(bytes: &[u8]) -> u16 {
    let eocd = &bytes[bytes.len() - 22..];
    assert_eq!(&eocd[..4], b"PK\x05\x06");
    assert_eq!(u16::from_le_bytes([eocd[8], eocd[9]]), u16::from_le_bytes([eocd[10], eocd[11]]));
    u16::from_le_bytes([eocd[10], eocd[11]])
}

/// Parse every element of a document, failing on malformed XML.
pub fn assert_well_formed(xml: &str) {
    let mut reader = Reader::from_str(xml);
    let mut depth = 0i32;
    loop {
        match reader.read_event() {
            Ok(Event::Start(_)) => depth += 1,
            Ok(Event::End(_)) => depth -= 1,
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => panic!("malformed XML at {}: {}", reader.buffer_position(), e),
        }
    }
    assert_eq!(depth, 0, "unbalanced elements");
}

/// `(name, sheetId, r:id)` for each `<sheet>` in workbook.xml.
pub fn workbook_sheets(xml: &str) -> Vec<(String, String, String)> {
    let mut reader = Reader::from_str(xml);
    let mut sheets = Vec::new();
    loop {
        match reader.read_event().unwrap() {
            Event::Empty(e) | Event::Start(e) if e.name().as_ref() == b"sheet" => {
                let attr = |key: &str| {
                    e.try_get_attribute(key)
                        .unwrap()
                        .unwrap_or_else(|| panic!("sheet without {}", key))
                        .unescape_value()
                        .unwrap()
                        .into_owned()
                };
                sheets.push((attr("name"), attr("sheetId"), attr("r:id")));
            }
            Event::Eof => break,
            _ => {}
        }
    }
    sheets
}

/// `(Id, Target)` for each `<Relationship>` in a relationships part.
pub fn relationships(xml: &str) -> Vec<(String, String)> {
    let mut reader = Reader::from_str(xml);
    let mut rels = Vec::new();
    loop {
        match reader.read_event().unwrap() {
            Event::Empty(e) | Event::Start(e) if e.name().as_ref() == b"Relationship" => {
                let attr = |key: &str| {
                    e.try_get_attribute(key)
                        .unwrap()
                        .unwrap()
                        .unescape_value()
                        .unwrap()
                        .into_owned()
                };
                rels.push((attr("Id"), attr("Target")));
            }
            Event::Eof => break,
            _ => {}
        }
    }
    rels
}

/// A parsed worksheet: row number to the ordered `(reference, value)` cells.
pub type ParsedRows = BTreeMap<u32, Vec<(String, String)>>;

/// Parse `<row>`/`<c>` elements of a worksheet, unescaping inline text.
pub fn parse_worksheet(xml: &str) -> ParsedRows {
    let mut reader = Reader::from_str(xml);
    let mut rows = ParsedRows::new();
    let mut current_row = 0u32;
    let mut current_ref = String::new();
    let mut in_text = false;

    loop {
        match reader.read_event().unwrap() {
            Event::Start(e) => match e.name().as_ref() {
                b"row" => {
                    let r = e.try_get_attribute("r").unwrap().unwrap();
                    current_row = r.unescape_value().unwrap().parse().unwrap();
                    rows.entry(current_row).or_default();
                }
                b"c" => {
                    let t = e.try_get_attribute("t").unwrap().unwrap();
                    assert_eq!(t.unescape_value().unwrap(), "inlineStr");
                    let r = e.try_get_attribute("r").unwrap().unwrap();
                    current_ref = r.unescape_value().unwrap().into_owned();
                    rows.get_mut(&current_row)
                        .unwrap()
                        .push((current_ref.clone(), String::new()));
                }
                b"t" => in_text = true,
                _ => {}
            },
            Event::Text(t) if in_text => {
                let cell = rows.get_mut(&current_row).unwrap().last_mut().unwrap();
                assert_eq!(cell.0, current_ref);
                cell.1.push_str(&t.unescape().unwrap());
            }
            Event::End(e) if e.name().as_ref() == b"t" => in_text = false,
            Event::Eof => break,
            _ => {}
        }
    }
    rows
}
