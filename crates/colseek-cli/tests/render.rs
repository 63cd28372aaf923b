//! Rendering of scanned rows through the public API.

use std::io::Write;

use tempfile::NamedTempFile;

use colseek_cli::render::{json_line, rows_table};
use colseek_core::{ChunkedScanner, ScanConfig};

fn create_temp_csv(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{content}").unwrap();
    file
}

#[test]
fn scanned_rows_render_as_table() {
    let file = create_temp_csv("id,name;\n1,ann;\n2,ben;\n");
    let config = ScanConfig::default().with_terminator(";");
    let scanner = ChunkedScanner::new(file.path(), config);
    let rows = scanner.read_all(true).unwrap();
    let rendered = rows_table(rows.header.as_ref(), &rows.records).to_string();
    assert!(rendered.contains("name"));
    assert!(rendered.contains("ann"));
    assert!(rendered.contains("ben"));
    assert!(!rendered.contains(';'), "terminator must not leak into cells");
}

#[test]
fn scanned_rows_render_as_json_lines() {
    let file = create_temp_csv("1,a;\n2,b;\n");
    let config = ScanConfig::default().with_terminator(";");
    let scanner = ChunkedScanner::new(file.path(), config);
    let rows = scanner.read_all(false).unwrap();
    let lines: Vec<String> = rows
        .records
        .iter()
        .map(|record| json_line(record).unwrap())
        .collect();
    insta::assert_snapshot!(lines.join("\n"), @r#"
    ["1","a"]
    ["2","b"]
    "#);
}
