// tests/common/mod.rs
//
// Minimal xlsx writer for fixtures: inline strings only, no styles or shared strings.

#![allow(dead_code)]

use std::fs::File;
use std::io::Write;
use std::path::Path;

use plotters::prelude::*;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

#[derive(Debug, Clone, Copy)]
pub enum Cell {
    Number(f64),
    Text(&'static str),
    Bool(bool),
}

/// One worksheet: its name and `(row, column letters, value)` cells, rows 1-based.
pub struct SheetFixture {
    pub name: String,
    pub cells: Vec<(u32, &'static str, Cell)>,
}

impl SheetFixture {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            cells: Vec::new(),
        }
    }

    pub fn cell(mut self, row: u32, column: &'static str, value: Cell) -> Self {
        self.cells.push((row, column, value));
        self
    }

    /// Writes `values` into `column` starting at `first_row`; `None` leaves the cell out.
    pub fn column(mut self, column: &'static str, first_row: u32, values: &[Option<f64>]) -> Self {
        for (i, value) in values.iter().enumerate() {
            if let Some(v) = value {
                self.cells.push((first_row + i as u32, column, Cell::Number(*v)));
            }
        }
        self
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn sheet_xml(sheet: &SheetFixture) -> String {
    let mut cells = sheet.cells.clone();
    cells.sort_by_key(|(row, column, _)| (*row, column.len(), *column));

    let mut xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"><sheetData>"#,
    );
    let mut current_row = None;
    for (row, column, value) in cells {
        if current_row != Some(row) {
            if current_row.is_some() {
                xml.push_str("</row>");
            }
            xml.push_str(&format!(r#"<row r="{row}">"#));
            current_row = Some(row);
        }
        let reference = format!("{column}{row}");
        match value {
            Cell::Number(v) => xml.push_str(&format!(r#"<c r="{reference}"><v>{v}</v></c>"#)),
            Cell::Text(t) => xml.push_str(&format!(
                r#"<c r="{reference}" t="inlineStr"><is><t>{}</t></is></c>"#,
                escape(t)
            )),
            Cell::Bool(b) => xml.push_str(&format!(
                r#"<c r="{reference}" t="b"><v>{}</v></c>"#,
                u8::from(b)
            )),
        }
    }
    if current_row.is_some() {
        xml.push_str("</row>");
    }
    xml.push_str("</sheetData></worksheet>");
    xml
}

pub fn write_xlsx(path: &Path, sheets: &[SheetFixture]) {
    let file = File::create(path).expect("create fixture file");
    let mut zip = ZipWriter::new(file);
    let options = SimpleFileOptions::default();

    let mut content_types = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/>"#,
    );
    for i in 1..=sheets.len() {
        content_types.push_str(&format!(
            r#"<Override PartName="/xl/worksheets/sheet{i}.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/>"#
        ));
    }
    content_types.push_str("</Types>");

    let root_rels = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/></Relationships>"#;

    let mut workbook = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"><sheets>"#,
    );
    let mut workbook_rels = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
    );
    for (i, sheet) in sheets.iter().enumerate() {
        let id = i + 1;
        workbook.push_str(&format!(
            r#"<sheet name="{}" sheetId="{id}" r:id="rId{id}"/>"#,
            escape(&sheet.name)
        ));
        workbook_rels.push_str(&format!(
            r#"<Relationship Id="rId{id}" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet{id}.xml"/>"#
        ));
    }
    workbook.push_str("</sheets></workbook>");
    workbook_rels.push_str("</Relationships>");

    let mut parts = vec![
        ("[Content_Types].xml".to_string(), content_types),
        ("_rels/.rels".to_string(), root_rels.to_string()),
        ("xl/workbook.xml".to_string(), workbook),
        ("xl/_rels/workbook.xml.rels".to_string(), workbook_rels),
    ];
    for (i, sheet) in sheets.iter().enumerate() {
        parts.push((format!("xl/worksheets/sheet{}.xml", i + 1), sheet_xml(sheet)));
    }

    for (name, body) in parts {
        zip.start_file(name, options).expect("start zip entry");
        zip.write_all(body.as_bytes()).expect("write zip entry");
    }
    zip.finish().expect("finish xlsx");
}

/// Whether plotters can resolve the `sans-serif` family on this machine.
/// Chart rendering needs it for every caption and label.
pub fn system_font_available() -> bool {
    let mut buffer = vec![0u8; 32 * 32 * 3];
    let area = BitMapBackend::with_buffer(&mut buffer, (32, 32)).into_drawing_area();
    let style = ("sans-serif", 12.0).into_font().color(&BLACK);
    area.estimate_text_size("125 Hz", &style).is_ok()
}
