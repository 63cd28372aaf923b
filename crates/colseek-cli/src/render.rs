//! Terminal rendering of scan results.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use colseek_core::Record;

/// Encodes a record as one JSON line (a plain array of field strings).
pub fn json_line(record: &Record) -> serde_json::Result<String> {
    serde_json::to_string(record)
}

/// Builds a table of records, numbered by 1-based data-row position.
///
/// When no header is available the columns are labeled by index.
pub fn rows_table(header: Option<&Record>, records: &[Record]) -> Table {
    let mut table = Table::new();
    let width = header
        .map(Record::len)
        .or_else(|| records.first().map(Record::len))
        .unwrap_or(0);
    let mut cells = vec![header_cell("#")];
    match header {
        Some(columns) => cells.extend(columns.fields().iter().map(header_cell)),
        None => cells.extend((0..width).map(header_cell)),
    }
    table.set_header(cells);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (position, record) in records.iter().enumerate() {
        let mut row = vec![dim_cell(position + 1)];
        row.extend(record.fields().iter().map(Cell::new));
        table.add_row(row);
    }
    table
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell<T: ToString>(label: T) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(fields: &[&str]) -> Record {
        fields.iter().map(|f| (*f).to_string()).collect()
    }

    #[test]
    fn test_json_line_is_plain_array() {
        let line = json_line(&rec(&["2", "b"])).unwrap();
        insta::assert_snapshot!(line, @r#"["2","b"]"#);
    }

    #[test]
    fn test_json_line_escapes_fields() {
        let line = json_line(&rec(&["say \"hi\""])).unwrap();
        insta::assert_snapshot!(line, @r#"["say \"hi\""]"#);
    }

    #[test]
    fn test_rows_table_uses_header_labels() {
        let header = rec(&["id", "name"]);
        let rows = [rec(&["1", "ann"]), rec(&["2", "ben"])];
        let rendered = rows_table(Some(&header), &rows).to_string();
        assert!(rendered.contains("id"));
        assert!(rendered.contains("name"));
        assert!(rendered.contains("ann"));
        assert!(rendered.contains("ben"));
    }

    #[test]
    fn test_rows_table_falls_back_to_indices() {
        let rows = [rec(&["x", "y"])];
        let rendered = rows_table(None, &rows).to_string();
        assert!(rendered.contains('0'));
        assert!(rendered.contains('1'));
        assert!(rendered.contains('x'));
    }

    #[test]
    fn test_rows_table_empty() {
        let rendered = rows_table(None, &[]).to_string();
        assert!(rendered.contains('#'));
    }
}
