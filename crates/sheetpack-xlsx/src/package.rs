//! Package-level parts: content types, relationships and the workbook.
//!
//! Sheet `n` (1-based) always lives at `xl/worksheets/sheet{n}.xml`, has
//! `sheetId="n"` and is referenced from the workbook as `rId{n}`.

use crate::escape::escape_xml;

pub const NS_SPREADSHEETML: &str = "http://schemas.openxmlformats.org/spreadsheetml/2006/main";
pub const NS_RELATIONSHIPS: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
pub const NS_PACKAGE_RELATIONSHIPS: &str =
    "http://schemas.openxmlformats.org/package/2006/relationships";
pub const NS_CONTENT_TYPES: &str = "http://schemas.openxmlformats.org/package/2006/content-types";

pub const REL_OFFICE_DOCUMENT: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";
pub const REL_WORKSHEET: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet";

pub const CT_RELATIONSHIPS: &str = "application/vnd.openxmlformats-package.relationships+xml";
pub const CT_WORKBOOK: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml";
pub const CT_WORKSHEET: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml";

// Part paths
pub const CONTENT_TYPES_PATH: &str = "[Content_Types].xml";
pub const ROOT_RELS_PATH: &str = "_rels/.rels";
pub const WORKBOOK_PATH: &str = "xl/workbook.xml";
pub const WORKBOOK_RELS_PATH: &str = "xl/_rels/workbook.xml.rels";

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Archive path of worksheet `n` (1-based)
pub fn worksheet_path(n: usize) -> String {
    format!("xl/worksheets/sheet{}.xml", n)
}

/// `[Content_Types].xml`: defaults plus one override per worksheet and the workbook
pub fn content_types_xml(sheet_count: usize) -> String {
    let mut content = format!(
        r#"{}<Types xmlns="{}"><Default Extension="rels" ContentType="{}"/><Default Extension="xml" ContentType="application/xml"/>"#,
        XML_DECLARATION, NS_CONTENT_TYPES, CT_RELATIONSHIPS
    );

    for n in 1..=sheet_count {
        content.push_str(&format!(
            r#"<Override PartName="/{}" ContentType="{}"/>"#,
            worksheet_path(n),
            CT_WORKSHEET
        ));
    }

    content.push_str(&format!(
        r#"<Override PartName="/{}" ContentType="{}"/></Types>"#,
        WORKBOOK_PATH, CT_WORKBOOK
    ));
    content
}

/// `_rels/.rels`: points the package root at the workbook
pub fn root_rels_xml() -> String {
    format!(
        r#"{}<Relationships xmlns="{}"><Relationship Id="rId1" Type="{}" Target="{}"/></Relationships>"#,
        XML_DECLARATION, NS_PACKAGE_RELATIONSHIPS, REL_OFFICE_DOCUMENT, WORKBOOK_PATH
    )
}

/// `xl/workbook.xml`: lists the sheets in order
pub fn workbook_xml<'a, I>(sheet_names: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut content = format!(
        r#"{}<workbook xmlns="{}" xmlns:r="{}"><sheets>"#,
        XML_DECLARATION, NS_SPREADSHEETML, NS_RELATIONSHIPS
    );

    for (i, name) in sheet_names.into_iter().enumerate() {
        content.push_str(&format!(
            r#"<sheet name="{}" sheetId="{}" r:id="rId{}"/>"#,
            escape_xml(name),
            i + 1,
            i + 1
        ));
    }

    content.push_str("</sheets></workbook>");
    content
}

/// `xl/_rels/workbook.xml.rels`: one relationship per worksheet
pub fn workbook_rels_xml(sheet_count: usize) -> String {
    let mut content = format!(
        r#"{}<Relationships xmlns="{}">"#,
        XML_DECLARATION, NS_PACKAGE_RELATIONSHIPS
    );

    for n in 1..=sheet_count {
        // Targets are relative to xl/
        content.push_str(&format!(
            r#"<Relationship Id="rId{}" Type="{}" Target="worksheets/sheet{}.xml"/>"#,
            n, REL_WORKSHEET, n
        ));
    }

    content.push_str("</Relationships>");
    content
}
