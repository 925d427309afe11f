//! Minimal OOXML spreadsheet writer.
//!
//! An .xlsx file is a zip container of XML parts; this writes the five
//! parts a single-sheet workbook needs, with all cell values as inline
//! strings. No styles, no shared-string table, no formulas.

use std::io::{Seek, Write};

use quick_xml::escape::escape;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use qex_core::{BatchResult, FIELD_NAMES};

const CONTENT_TYPES: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/><Override PartName="/xl/worksheets/sheet1.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/></Types>"#;

const ROOT_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/></Relationships>"#;

const WORKBOOK_RELS: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/></Relationships>"#;

/// Write the batch result as a single-sheet workbook.
pub fn write_workbook<W: Write + Seek>(
    result: &BatchResult,
    sheet_name: &str,
    writer: W,
) -> anyhow::Result<()> {
    let mut zip = ZipWriter::new(writer);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    zip.start_file("[Content_Types].xml", options)?;
    zip.write_all(CONTENT_TYPES.as_bytes())?;

    zip.start_file("_rels/.rels", options)?;
    zip.write_all(ROOT_RELS.as_bytes())?;

    zip.start_file("xl/workbook.xml", options)?;
    zip.write_all(workbook_xml(sheet_name).as_bytes())?;

    zip.start_file("xl/_rels/workbook.xml.rels", options)?;
    zip.write_all(WORKBOOK_RELS.as_bytes())?;

    zip.start_file("xl/worksheets/sheet1.xml", options)?;
    zip.write_all(sheet_xml(result).as_bytes())?;

    zip.finish()?;
    Ok(())
}

fn workbook_xml(sheet_name: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"><sheets><sheet name="{}" sheetId="1" r:id="rId1"/></sheets></workbook>"#,
        escape(sheet_name)
    )
}

fn sheet_xml(result: &BatchResult) -> String {
    let mut xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"><sheetData>"#,
    );

    push_row(&mut xml, FIELD_NAMES.iter().copied());
    for record in result.records() {
        push_row(&mut xml, record.values().iter().map(String::as_str));
    }

    xml.push_str("</sheetData></worksheet>");
    xml
}

fn push_row<'a>(xml: &mut String, values: impl Iterator<Item = &'a str>) {
    xml.push_str("<row>");
    for value in values {
        xml.push_str("<c t=\"inlineStr\"><is><t>");
        xml.push_str(&escape(value));
        xml.push_str("</t></is></c>");
    }
    xml.push_str("</row>");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Read};
    use qex_core::QuoteMapper;

    fn sample_result() -> BatchResult {
        let mut result = BatchResult::default();
        result.push(
            QuoteMapper::new()
                .map("Quote #: QT987654\nCompany: Smith Tools\n", "a.pdf")
                .record,
        );
        result
    }

    fn read_entry(data: &[u8], name: &str) -> String {
        let mut archive = zip::ZipArchive::new(Cursor::new(data.to_vec())).unwrap();
        let mut entry = archive.by_name(name).unwrap();
        let mut content = String::new();
        entry.read_to_string(&mut content).unwrap();
        content
    }

    #[test]
    fn test_workbook_container_entries() {
        let mut buffer = Cursor::new(Vec::new());
        write_workbook(&sample_result(), "Quotes", &mut buffer).unwrap();

        let archive = zip::ZipArchive::new(Cursor::new(buffer.into_inner())).unwrap();
        let names: Vec<_> = archive.file_names().collect();
        for expected in [
            "[Content_Types].xml",
            "_rels/.rels",
            "xl/workbook.xml",
            "xl/_rels/workbook.xml.rels",
            "xl/worksheets/sheet1.xml",
        ] {
            assert!(names.contains(&expected), "missing {expected}");
        }
    }

    #[test]
    fn test_sheet_holds_header_and_values() {
        let mut buffer = Cursor::new(Vec::new());
        write_workbook(&sample_result(), "Quotes", &mut buffer).unwrap();
        let sheet = read_entry(buffer.get_ref(), "xl/worksheets/sheet1.xml");

        assert!(sheet.contains("<t>QuoteNumber</t>"));
        assert!(sheet.contains("<t>QT987654</t>"));
        assert!(sheet.contains("<t>Smith Tools</t>"));
        // Header row + one record row.
        assert_eq!(sheet.matches("<row>").count(), 2);
    }

    #[test]
    fn test_sheet_name_is_escaped() {
        let mut buffer = Cursor::new(Vec::new());
        write_workbook(&sample_result(), "Q&A <2024>", &mut buffer).unwrap();
        let workbook = read_entry(buffer.get_ref(), "xl/workbook.xml");

        assert!(workbook.contains("Q&amp;A &lt;2024&gt;"));
    }
}
