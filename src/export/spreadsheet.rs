// src/export/spreadsheet.rs

use crate::export::model::{AttendanceExport, HEADERS};
use std::fmt::Write;

const WORKBOOK_OPEN: &str = r#"<?xml version="1.0"?>
<Workbook xmlns="urn:schemas-microsoft-com:office:spreadsheet"
 xmlns:o="urn:schemas-microsoft-com:office:office"
 xmlns:x="urn:schemas-microsoft-com:office:excel"
 xmlns:ss="urn:schemas-microsoft-com:office:spreadsheet">
 <Worksheet ss:Name="Attendance">
  <Table>
"#;

const WORKBOOK_CLOSE: &str = "  </Table>\n </Worksheet>\n</Workbook>";

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            // not allowed anywhere in XML 1.0
            c if c < ' ' && !matches!(c, '\t' | '\n' | '\r') => {}
            _ => out.push(c),
        }
    }
    out
}

fn string_cell(out: &mut String, v: &str) {
    let _ = write!(out, "<Cell><Data ss:Type=\"String\">{}</Data></Cell>", escape(v));
}

fn number_cell(out: &mut String, v: i64) {
    let _ = write!(out, "<Cell><Data ss:Type=\"Number\">{v}</Data></Cell>");
}

/// SpreadsheetML 2003 document: one "Attendance" worksheet, a header row,
/// then one row per entry. `id` and `timestamp` are numeric cells.
pub(crate) fn build_spreadsheet_xml(rows: &[AttendanceExport]) -> String {
    let mut out = String::from(WORKBOOK_OPEN);

    out.push_str("   <Row>\n");
    for h in HEADERS {
        out.push_str("    ");
        string_cell(&mut out, h);
        out.push('\n');
    }
    out.push_str("   </Row>\n");

    for r in rows {
        out.push_str("   <Row>");
        number_cell(&mut out, r.id);
        string_cell(&mut out, &r.name);
        number_cell(&mut out, r.timestamp);
        string_cell(&mut out, &r.iso);
        string_cell(&mut out, &r.kind);
        string_cell(&mut out, &r.is_late.to_string());
        string_cell(&mut out, &r.open.to_string());
        string_cell(&mut out, &r.selfie_path);
        out.push_str("</Row>\n");
    }

    out.push_str(WORKBOOK_CLOSE);
    out
}
